use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use scholia::application::ports::LlmClient;
use scholia::application::services::{AugmentationService, ExtractionService};
use scholia::infrastructure::llm::{MockLlmClient, OpenAiClient};
use scholia::infrastructure::observability::init_tracing;
use scholia::infrastructure::text_processing::CompositeFileLoader;
use scholia::presentation::{AppState, Environment, LlmProvider, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&settings.logging, environment);

    let pipeline_config = Arc::new(settings.pipeline_config());

    let llm_client: Arc<dyn LlmClient> = match settings.llm.provider {
        LlmProvider::OpenAi => {
            if settings.llm.api_key.is_empty() {
                tracing::warn!("No LLM API key configured; model-backed endpoints will fail");
            }
            Arc::new(OpenAiClient::new(&settings.llm)?)
        }
        LlmProvider::Scaffold => {
            tracing::warn!("Using scaffold LLM client with canned responses");
            Arc::new(MockLlmClient::scaffold())
        }
    };

    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());

    let state = AppState {
        extraction_service: Arc::new(ExtractionService::new(
            file_loader,
            Arc::clone(&pipeline_config),
        )),
        augmentation_service: Arc::new(AugmentationService::new(llm_client, pipeline_config)),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(
        address = %addr,
        model = %settings.llm.model,
        max_upload_bytes = settings.max_upload_bytes(),
        "Listening"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
