use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

use super::error::augmentation_error_response;

#[derive(Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub document_text: Option<String>,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub questions: Vec<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn suggestions_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<SuggestionsRequest>,
) -> impl IntoResponse
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let document_text = request.document_text.unwrap_or_default();

    match state
        .augmentation_service
        .suggest_questions(&document_text)
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(SuggestionsResponse {
                questions: result.questions,
            }),
        )
            .into_response(),
        Err(e) => augmentation_error_response(&e),
    }
}
