use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

use super::citation::CitationResponse;
use super::error::augmentation_error_response;

#[derive(Deserialize)]
pub struct ComplementRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct ComplementResponse {
    pub complement: String,
    pub sources: Vec<CitationResponse>,
}

#[tracing::instrument(skip(state, request))]
pub async fn complement_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<ComplementRequest>,
) -> impl IntoResponse
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let text = request.text.unwrap_or_default();

    match state.augmentation_service.complement(&text).await {
        Ok(result) => (
            StatusCode::OK,
            Json(ComplementResponse {
                complement: result.complement,
                sources: result.sources.into_iter().map(CitationResponse::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => augmentation_error_response(&e),
    }
}
