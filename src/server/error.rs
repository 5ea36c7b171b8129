// HTTP error mapping
//
// Every failure response has the same shape: {"success": false, "error": "..."}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::errors::BrainstormError;

/// Message returned when idea generation fails upstream
pub const GENERATION_FAILED: &str =
    "Failed to generate ideas. Please check your API key and try again.";

/// Message returned when mind-map expansion fails upstream
pub const MINDMAP_FAILED: &str = "Failed to expand mind map";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    /// Map a core error. `generation_message` is the fixed text shown for
    /// upstream generation failures; the cause is never exposed.
    pub fn from_core(err: BrainstormError, generation_message: &str) -> Self {
        match err {
            BrainstormError::InvalidInput(msg) => ApiError::BadRequest(msg),
            BrainstormError::UnknownPersona(_) => {
                ApiError::BadRequest("Invalid persona selected".to_string())
            }
            BrainstormError::IdeaNotFound(_) => ApiError::NotFound("Idea not found".to_string()),
            e @ BrainstormError::ScoreOutOfRange { .. } => ApiError::BadRequest(e.to_string()),
            BrainstormError::Generation(_) => ApiError::Internal(generation_message.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let cases = [
            (BrainstormError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (BrainstormError::UnknownPersona("w".into()), StatusCode::BAD_REQUEST),
            (BrainstormError::IdeaNotFound("i".into()), StatusCode::NOT_FOUND),
            (
                BrainstormError::ScoreOutOfRange {
                    criterion: "impact".into(),
                    score: 9,
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                BrainstormError::Generation(anyhow::anyhow!("quota")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from_core(err, GENERATION_FAILED).status(), status);
        }
    }

    #[test]
    fn test_generation_cause_is_not_exposed() {
        let err = ApiError::from_core(
            BrainstormError::Generation(anyhow::anyhow!("403 key=AIza-secret")),
            MINDMAP_FAILED,
        );
        assert_eq!(err.to_string(), MINDMAP_FAILED);
    }
}
