use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{AugmentationError, ExtractionError};

const UPSTREAM_FAILURE_MESSAGE: &str = "The language model is unavailable, please try again later";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn extraction_error_response(error: &ExtractionError) -> Response {
    let status = match error {
        ExtractionError::EmptyFilename
        | ExtractionError::InvalidFileType(_)
        | ExtractionError::CorruptDocument(_) => StatusCode::BAD_REQUEST,
        ExtractionError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        ExtractionError::UnsupportedOperation(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ExtractionError::ExtractionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Document extraction failed");
        return error_response(status, "Failed to process the document");
    }

    tracing::warn!(error = %error, "Rejected document upload");
    error_response(status, error.to_string())
}

/// Upstream details are logged, never returned.
pub fn augmentation_error_response(error: &AugmentationError) -> Response {
    match error {
        AugmentationError::EmptyInput(message) => {
            tracing::warn!(%message, "Rejected empty input");
            error_response(StatusCode::BAD_REQUEST, message.clone())
        }
        AugmentationError::Upstream(e) => {
            tracing::error!(error = %e, "Language model call failed");
            error_response(StatusCode::BAD_GATEWAY, UPSTREAM_FAILURE_MESSAGE)
        }
    }
}
