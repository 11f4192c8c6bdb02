//! Request extractors whose rejections use the `{ error }` JSON body.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` with body rejections reported through [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
