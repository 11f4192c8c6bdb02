//! Hikaya story server entry point.

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use hikaya_api::config::AppConfig;
use hikaya_api::error::{self, AppError};
use hikaya_api::routes;
use hikaya_api::state::AppState;
use hikaya_openai::OpenAiClient;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine; real deployments set the environment.
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Hikaya story server");

    let config = AppConfig::from_env()?;
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; story requests will fail until it is");
    }

    let http = reqwest::Client::builder().build().map_err(AppError::from)?;
    let completion = OpenAiClient::new(
        http,
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.openai_base_url.clone(),
    );
    tracing::info!(
        model = completion.model(),
        max_tokens = config.max_tokens,
        "text completion configured"
    );

    let app_state = AppState::new(Arc::new(completion), config.generation_settings());

    // TODO: Replace CorsLayer::permissive() with the site's origin once it is fixed.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::story::router())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
