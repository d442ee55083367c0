use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::redact_for_log;
use crate::presentation::state::AppState;

use super::citation::CitationResponse;
use super::error::augmentation_error_response;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub document_text: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub external_source: Option<CitationResponse>,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let question = request.question.unwrap_or_default();
    let document_text = request.document_text.unwrap_or_default();

    tracing::debug!(
        question = %redact_for_log(&question),
        document_chars = document_text.chars().count(),
        "Processing chat question"
    );

    match state
        .augmentation_service
        .chat(&question, &document_text)
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(ChatResponse {
                answer: result.answer,
                external_source: result.external_source.map(CitationResponse::from),
            }),
        )
            .into_response(),
        Err(e) => augmentation_error_response(&e),
    }
}
