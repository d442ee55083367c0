use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

use super::error::{error_response, extraction_error_response};

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct ParagraphResponse {
    pub text: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some(FILE_FIELD) => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Process request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    e.status(),
                    format!("Failed to read multipart: {}", e.body_text()),
                );
            }
        }
    };

    let filename = field.file_name().unwrap_or_default().to_string();
    tracing::debug!(filename = %filename, "Processing file upload");

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(e.status(), format!("Failed to read file: {}", e.body_text()));
        }
    };

    match state.extraction_service.extract(&filename, &data).await {
        Ok(paragraphs) => {
            let body: Vec<ParagraphResponse> = paragraphs
                .into_iter()
                .map(|p| ParagraphResponse { text: p.text })
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => extraction_error_response(&e),
    }
}
