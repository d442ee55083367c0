mod chat;
mod citation;
mod complement;
mod error;
mod health;
mod process;
mod suggestions;

pub use chat::chat_handler;
pub use complement::complement_handler;
pub use error::ErrorResponse;
pub use health::health_handler;
pub use process::process_handler;
pub use suggestions::suggestions_handler;
