mod types;

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tintcalc_core::AppError;
use tracing::error;

pub use types::ErrorResponse;

const INVALID_REQUEST_MESSAGE: &str = "invalid request parameters";
const NOT_FOUND_MESSAGE: &str = "not found";
const UPSTREAM_FAILURE_MESSAGE: &str = "upstream collection request failed";

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, payload) = match self.0 {
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(INVALID_REQUEST_MESSAGE, message),
            ),
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::with_details(NOT_FOUND_MESSAGE, message),
            ),
            // No upstream was contacted, so there is nothing to add as detail.
            AppError::Configuration(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(message),
            ),
            AppError::Upstream(message) | AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_details(UPSTREAM_FAILURE_MESSAGE, message),
            ),
        };

        (status, Json(payload)).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Converts a panic caught at the outermost layer into an upstream-shaped 500.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(panic = %detail, "request handler panicked");

    ApiError(AppError::Internal(
        "unexpected failure while handling the request".to_owned(),
    ))
    .into_response()
}
