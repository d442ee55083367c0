mod init_tracing;
mod log_redaction;
mod request_id;

pub use init_tracing::{default_env_filter, init_tracing};
pub use log_redaction::redact_for_log;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware, resolve_request_id};
