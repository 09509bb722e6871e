use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::jd::FetchError;
use crate::llm_client::LlmError;

/// Generic message shown for every non-validation failure; specifics go in `details`.
pub const GENERIC_ERROR: &str = "Something went wrong";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Completion(LlmError),

    #[error("Invalid model output: {0}")]
    Parse(String),
}

impl From<LlmError> for AppError {
    /// Undecodable model output is a parse failure; everything else is the
    /// completion service failing.
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => AppError::Parse(e.to_string()),
            other => AppError::Completion(other),
        }
    }
}

impl AppError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Fetch(FetchError::InvalidUrl { .. }) => {
                (StatusCode::BAD_REQUEST, "fetch_error")
            }
            AppError::Fetch(_) => (StatusCode::BAD_GATEWAY, "fetch_error"),
            AppError::Completion(_) => (StatusCode::SERVICE_UNAVAILABLE, "completion_error"),
            AppError::Parse(_) => (StatusCode::BAD_GATEWAY, "parse_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();

        let body = match &self {
            AppError::Validation(msg) => json!({ "error": msg }),
            other => {
                tracing::error!("{kind}: {other}");
                json!({
                    "error": GENERIC_ERROR,
                    "details": other.to_string(),
                    "kind": kind,
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
