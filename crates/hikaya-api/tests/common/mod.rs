//! Router construction and request helpers shared by the API tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use hikaya_core::completion::TextCompletion;
use hikaya_story::application::command_handlers::GenerationSettings;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

use hikaya_api::error::panic_response;
use hikaya_api::routes;
use hikaya_api::state::AppState;

/// Router wired like the binary's, with default generation settings.
pub fn build_test_app(completion: Arc<dyn TextCompletion>) -> Router {
    build_test_app_with_settings(completion, GenerationSettings::default())
}

/// Router wired like the binary's, including the panic handler.
pub fn build_test_app_with_settings(
    completion: Arc<dyn TextCompletion>,
    settings: GenerationSettings,
) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::story::router())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(AppState::new(completion, settings))
}

/// Drives one request through `app`; the response body must be JSON.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("non-JSON body ({err}): {bytes:?}"));
    (status, body)
}

/// POSTs a raw body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}
