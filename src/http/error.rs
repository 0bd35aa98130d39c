//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

use super::dto::ErrorBody;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or out-of-range path parameter
    BadRequest(String),
    /// Unknown route
    NotFound(String),
    /// Failure in the collaborator layer
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// Turns a handler panic into the generic 500 body.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(%detail, "handler panicked");

    AppError::Internal("Something went wrong!".to_string()).into_response()
}
