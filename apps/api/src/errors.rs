use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::quotes::export::ExportError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Llm(LlmError::Auth(msg)) => {
                tracing::error!("LLM auth error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_AUTH_ERROR",
                    "The quote generator rejected our credentials".to_string(),
                )
            }
            AppError::Llm(LlmError::Quota(msg)) => {
                tracing::warn!("LLM quota exceeded: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "LLM_QUOTA_EXCEEDED",
                    "The quote generator is over quota, try again later".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "Failed to save the quote".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
