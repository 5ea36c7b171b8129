// Cross-cutting request handling: panics and unmatched routes

use axum::{
    body::Body,
    http::{Response, StatusCode, Uri},
    response::IntoResponse,
};
use std::any::Any;

use super::error::{ApiError, ErrorResponse};

/// `CatchPanicLayer` handler. A handler panic becomes a JSON 500 in the usual
/// error shape; the panic payload is logged but not returned.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Request handler panicked");

    let body = serde_json::to_string(&ErrorResponse {
        success: false,
        error: "Internal server error".to_string(),
    })
    .unwrap_or_default();

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Fallback for API paths that match no route
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
