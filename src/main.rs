use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod inference;
mod prompts;
mod studypack;

use api::AppState;
use config::AppConfig;
use inference::CompletionService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("🚀 Starting StellarLearn backend...");

    let config = AppConfig::from_env()?;

    // -----------------------------
    // Shared state / Dependencies
    // -----------------------------
    let infer = Arc::new(CompletionService::new(&config)?);

    let state = AppState { infer };

    // -----------------------------
    // Router
    // -----------------------------
    let app = api::router()
        // CORS for frontend
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        // Attach shared state
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);

    println!("🌐 HTTP listening on http://{addr}");
    println!("📍 API Health at http://{addr}/api/health");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
