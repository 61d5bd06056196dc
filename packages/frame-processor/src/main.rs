mod config;
mod handler;
mod transform;


use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// リクエスト間で共有する読み取り専用の状態
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit;

    Router::new()
        .route("/", get(handler::index))
        .route("/health", get(handler::health))
        .route("/api/image", post(handler::process_image))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ServerConfig::from_env()?;
    if !config.assets_dir.is_dir() {
        tracing::warn!(
            assets_dir = %config.assets_dir.display(),
            "assets directory not found; requests will fail until it exists"
        );
    }

    let bind_addr = config.bind_addr;
    let state = AppState {
        config: Arc::new(config),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!(addr = %bind_addr, "frame processor listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
