use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Only {answered} of the required {required} questions answered")]
    InsufficientResponses { answered: i64, required: i64 },

    #[error("Student {0} has no completed assessment result")]
    NoAssessmentResult(Uuid),

    #[error("Personality type '{0}' is not in the catalog and no fallback entry exists")]
    UnknownPersonalityType(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InsufficientResponses { .. } => (
                StatusCode::BAD_REQUEST,
                "INSUFFICIENT_RESPONSES",
                self.to_string(),
            ),
            AppError::NoAssessmentResult(_) => (
                StatusCode::CONFLICT,
                "NO_ASSESSMENT_RESULT",
                self.to_string(),
            ),
            AppError::UnknownPersonalityType(mbti_code) => {
                tracing::error!("Personality type catalog is empty (looked up {mbti_code})");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UNKNOWN_PERSONALITY_TYPE",
                    "Personality type reference data is missing".to_string(),
                )
            }
            AppError::InvalidResponse(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_RESPONSE", msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
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
