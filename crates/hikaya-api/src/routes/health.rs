//! Liveness endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Liveness response, including the active generation bound so a deploy
/// can be checked for the intended `STORY_MAX_TOKENS`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub max_tokens: u32,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        max_tokens: state.settings.max_tokens,
    })
}

/// Returns the liveness router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
