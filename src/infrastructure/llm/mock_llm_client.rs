use crate::application::ports::{LlmClient, LlmClientError};

const SCAFFOLD_RESPONSE: &str = "Respuesta de prueba generada sin modelo.\n\n\
Información adicional: contenido de ejemplo.\n\
Fuente: arXiv (https://arxiv.org)\n\n\
• arXiv (https://arxiv.org)\n\
• Nature (https://www.nature.com)";

/// Returns a fixed response, or a fixed failure.
pub struct MockLlmClient {
    response: Result<String, String>,
}

impl MockLlmClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
        }
    }

    /// Canned text that exercises every citation path.
    pub fn scaffold() -> Self {
        Self::new(SCAFFOLD_RESPONSE)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmClientError> {
        self.response
            .clone()
            .map_err(LlmClientError::ApiRequestFailed)
    }
}
