use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::presentation::config::{Environment, LoggingSettings};

/// Installs the global subscriber. `RUST_LOG`, when set, takes precedence
/// over the configured level.
pub fn init_tracing(settings: &LoggingSettings, environment: Environment) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_env_filter(&settings.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if settings.enable_json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }

    tracing::info!(
        environment = %environment,
        json_format = settings.enable_json,
        level = %settings.level,
        "Tracing initialized"
    );
}

/// The configured level for every target, this crate and `tower_http` included.
pub fn default_env_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},scholia={level},tower_http={level}"))
}
