//! Hikaya API — error types.

use std::any::Any;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hikaya_core::error::DomainError;
use hikaya_story::domain::result::FAILURE_MESSAGE;
use serde::Serialize;
use thiserror::Error;

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The outbound HTTP client could not be built.
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
///
/// Upstream detail is never echoed; callers only ever see
/// [`FAILURE_MESSAGE`] for provider failures.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self.0 {
            DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            DomainError::Upstream(detail) => {
                tracing::error!(detail = %detail, "upstream failure reached the HTTP layer");
                (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE.to_owned())
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Message returned for any request body that is not a usable JSON object.
pub const MALFORMED_BODY_MESSAGE: &str =
    "request body must be a JSON object with string fields childName, favoriteAnimal and topic";

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(
            status = %rejection.status(),
            detail = %rejection.body_text(),
            "rejected request body"
        );
        Self(DomainError::Validation(MALFORMED_BODY_MESSAGE.to_owned()))
    }
}

/// Converts a handler panic into the generic failure response.
///
/// Installed through `tower_http::catch_panic::CatchPanicLayer::custom`.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(detail, "request handler panicked");

    let body = ErrorBody {
        error: FAILURE_MESSAGE.to_owned(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
