use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use mentara_core::error::CoreError;
use mentara_questionnaires::error::QuestionnaireError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<QuestionnaireError> for ApiError {
    fn from(e: QuestionnaireError) -> Self {
        match e {
            QuestionnaireError::UnknownQuestionnaire(_)
            | QuestionnaireError::ShapeMismatch { .. }
            | QuestionnaireError::DuplicateQuestionnaire(_)
            | QuestionnaireError::VectorLength { .. } => {
                tracing::warn!(error = %e, "rejected pre-assessment input");
                ApiError::BadRequest(e.to_string())
            }
            QuestionnaireError::InvalidLayout(_)
            | QuestionnaireError::MissingScoring(_)
            | QuestionnaireError::Config(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
