mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LimitSettings, LlmProvider, LlmSettings, LoggingSettings, ServerSettings, Settings,
};
