use serde::Deserialize;

use crate::domain::PipelineConfig;

use super::environment::Environment;

const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    /// Canned responses, no network. For running the service without a key.
    Scaffold,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub max_upload_mb: usize,
    pub max_text_chars: usize,
}

impl Settings {
    /// Layers `appsettings.{environment}.toml` (optional) under `APP__*`
    /// environment variables, e.g. `APP__LLM__API_KEY`. `OPENAI_API_KEY` is
    /// honoured as the default key.
    pub fn load(environment: Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("llm.provider", "openai")?
            .set_default(
                "llm.api_key",
                std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            )?
            .set_default("llm.base_url", "https://api.openai.com/v1")?
            .set_default("llm.model", "gpt-3.5-turbo")?
            .set_default("llm.max_tokens", 1024)?
            .set_default("llm.temperature", 0.7)?
            .set_default("llm.timeout_secs", 60)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("limits.max_upload_mb", 10)?
            .set_default("limits.max_text_chars", 50_000)?
            .add_source(
                config::File::with_name(&format!("appsettings.{}", environment.file_suffix()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.limits.max_upload_mb.saturating_mul(BYTES_PER_MB)
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::with_limits(self.max_upload_bytes(), self.limits.max_text_chars)
    }
}
