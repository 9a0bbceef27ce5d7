use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The user-visible messages mirror the flash messages of the original form
/// flow; structured codes are added for API clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The uploaded resume was unreadable or yielded no text.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// The external model call itself failed (network, quota, auth),
    /// after the client's retries were exhausted.
    #[error("LLM error: {0}")]
    Llm(String),

    /// The resume-review response could not be parsed. Unlike the ATS and
    /// cover-letter tools this is surfaced to the user instead of masked
    /// with a canned payload.
    #[error("AI feedback unavailable")]
    FeedbackUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extraction(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_ERROR",
                msg.clone(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The AI service could not be reached. Please try again.".to_string(),
                )
            }
            AppError::FeedbackUnavailable => (
                StatusCode::BAD_GATEWAY,
                "AI_FEEDBACK_ERROR",
                "Error generating AI feedback. Please try again.".to_string(),
            ),
            AppError::Io(e) => {
                tracing::error!("IO error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "IO_ERROR",
                    "A file handling error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
