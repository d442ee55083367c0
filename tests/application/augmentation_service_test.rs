use std::sync::{Arc, Mutex};

use scholia::application::ports::{LlmClient, LlmClientError};
use scholia::application::services::{AugmentationError, AugmentationService};
use scholia::domain::{Citation, FALLBACK_QUESTIONS, PipelineConfig};
use scholia::infrastructure::llm::MockLlmClient;

struct RecordingLlmClient {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingLlmClient {
    fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

fn service_with(client: MockLlmClient) -> AugmentationService<MockLlmClient> {
    AugmentationService::new(Arc::new(client), Arc::new(PipelineConfig::default()))
}

#[tokio::test]
async fn given_generated_citations_when_complementing_then_returns_trusted_sources() {
    let service = service_with(MockLlmClient::new(
        "Los estomas regulan el intercambio de gases.\n\n\
         • Nature (https://www.nature.com/articles/123)\n\
         • Some Blog (http://someblog.example.com)",
    ));

    let result = service
        .complement("La fotosíntesis ocurre en los cloroplastos.")
        .await
        .unwrap();

    assert!(result.complement.starts_with("Los estomas"));
    assert_eq!(
        result.sources,
        vec![Citation::new("Nature", "https://www.nature.com/articles/123")]
    );
}

#[tokio::test]
async fn given_generated_text_without_citations_when_complementing_then_uses_fallback() {
    let service = service_with(MockLlmClient::new("Texto sin fuentes."));

    let result = service
        .complement("La fotosíntesis ocurre en los cloroplastos.")
        .await
        .unwrap();

    assert_eq!(result.sources, vec![Citation::fallback()]);
}

#[tokio::test]
async fn given_short_text_when_complementing_then_rejects_before_calling_model() {
    let client = Arc::new(RecordingLlmClient::new("unused"));
    let service = AugmentationService::new(Arc::clone(&client), Arc::new(PipelineConfig::default()));

    let result = service.complement("<b>corto</b>").await;

    assert!(matches!(result, Err(AugmentationError::EmptyInput(_))));
    assert!(client.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_markup_in_input_when_complementing_then_prompt_contains_sanitized_text() {
    let client = Arc::new(RecordingLlmClient::new("Complemento."));
    let service = AugmentationService::new(Arc::clone(&client), Arc::new(PipelineConfig::default()));

    service
        .complement("<script>steal()</script>Texto del documento original")
        .await
        .unwrap();

    let prompt = client.last_prompt();
    assert!(prompt.contains("Texto del documento original"));
    assert!(!prompt.contains("steal()"));
}

#[tokio::test]
async fn given_model_failure_when_complementing_then_returns_upstream_error() {
    let service = service_with(MockLlmClient::failing("connection refused"));

    let result = service
        .complement("La fotosíntesis ocurre en los cloroplastos.")
        .await;

    assert!(matches!(
        result,
        Err(AugmentationError::Upstream(LlmClientError::ApiRequestFailed(_)))
    ));
}

#[tokio::test]
async fn given_markup_only_model_output_when_complementing_then_returns_upstream_error() {
    let service = service_with(MockLlmClient::new("<div></div>"));

    let result = service
        .complement("La fotosíntesis ocurre en los cloroplastos.")
        .await;

    assert!(matches!(
        result,
        Err(AugmentationError::Upstream(LlmClientError::InvalidResponse(_)))
    ));
}

#[tokio::test]
async fn given_answer_with_trusted_supplement_when_chatting_then_sets_external_source() {
    let service = service_with(MockLlmClient::new(
        "Según el documento, \"la luz es esencial\".\n\n\
         Información adicional: la clorofila absorbe luz azul y roja.\n\
         Fuente: arXiv (https://arxiv.org/abs/2101.00001)",
    ));

    let result = service
        .chat("¿Qué es la luz?", "La luz es esencial para la fotosíntesis.")
        .await
        .unwrap();

    assert!(result.answer.contains("Información adicional:"));
    assert_eq!(
        result.external_source,
        Some(Citation::new("arXiv", "https://arxiv.org/abs/2101.00001"))
    );
}

#[tokio::test]
async fn given_answer_without_marker_when_chatting_then_external_source_is_none() {
    let service = service_with(MockLlmClient::new(
        "Según el documento, \"la luz es esencial\".",
    ));

    let result = service
        .chat("¿Qué es la luz?", "La luz es esencial para la fotosíntesis.")
        .await
        .unwrap();

    assert_eq!(result.external_source, None);
}

#[tokio::test]
async fn given_missing_document_when_chatting_then_returns_empty_input() {
    let service = service_with(MockLlmClient::scaffold());

    let result = service.chat("¿De qué trata?", "   ").await;

    assert!(matches!(result, Err(AugmentationError::EmptyInput(_))));
}

#[tokio::test]
async fn given_too_short_question_when_chatting_then_returns_empty_input() {
    let service = service_with(MockLlmClient::scaffold());

    let result = service.chat(" ¿? ", "Documento con contenido.").await;

    assert!(matches!(result, Err(AugmentationError::EmptyInput(_))));
}

#[tokio::test]
async fn given_question_and_document_when_chatting_then_prompt_includes_both() {
    let client = Arc::new(RecordingLlmClient::new("Respuesta."));
    let service = AugmentationService::new(Arc::clone(&client), Arc::new(PipelineConfig::default()));

    service
        .chat("¿Qué dice sobre el agua?", "El agua se transporta por el xilema.")
        .await
        .unwrap();

    let prompt = client.last_prompt();
    assert!(prompt.contains("¿Qué dice sobre el agua?"));
    assert!(prompt.contains("El agua se transporta por el xilema."));
}

#[tokio::test]
async fn given_list_output_when_suggesting_then_strips_markers_and_caps_count() {
    let service = service_with(MockLlmClient::new(
        "1. ¿Qué es la fotosíntesis?\n2) ¿Dónde ocurre?\n- ¿Qué produce?\n\n* ¿Quién la descubrió?\n• ¿Por qué importa?\n6. ¿Sobra esta?",
    ));

    let result = service
        .suggest_questions("La fotosíntesis ocurre en los cloroplastos.")
        .await
        .unwrap();

    assert_eq!(
        result.questions,
        vec![
            "¿Qué es la fotosíntesis?",
            "¿Dónde ocurre?",
            "¿Qué produce?",
            "¿Quién la descubrió?",
            "¿Por qué importa?",
        ]
    );
}

#[tokio::test]
async fn given_only_markers_in_output_when_suggesting_then_uses_fallback_questions() {
    let service = service_with(MockLlmClient::new("1.\n2.\n-"));

    let result = service
        .suggest_questions("La fotosíntesis ocurre en los cloroplastos.")
        .await
        .unwrap();

    assert_eq!(result.questions, FALLBACK_QUESTIONS.to_vec());
}

#[tokio::test]
async fn given_blank_document_when_suggesting_then_returns_empty_input() {
    let service = service_with(MockLlmClient::scaffold());

    let result = service.suggest_questions("").await;

    assert!(matches!(result, Err(AugmentationError::EmptyInput(_))));
}

#[tokio::test]
async fn given_untrusted_host_disguised_by_query_when_complementing_then_falls_back() {
    let service = service_with(MockLlmClient::new(
        "Texto generado.\n\n• Phish (https://attacker.example?.nature.com/login)",
    ));

    let result = service
        .complement("La fotosíntesis ocurre en los cloroplastos.")
        .await
        .unwrap();

    assert_eq!(result.sources, vec![Citation::fallback()]);
}
