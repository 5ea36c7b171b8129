// Brainstorm Server Module
// HTTP API plus the real-time WebSocket channel

mod error;
mod handlers;
mod middleware;
mod state;
mod types;
mod ws;

pub use error::{ApiError, ApiResult, ErrorResponse, GENERATION_FAILED, MINDMAP_FAILED};
pub use handlers::{
    brainstorm, health, mindmap_expand, personas, score_idea, scoring_criteria, session_ideas,
};
pub use middleware::{api_not_found, handle_panic};
pub use state::AppState;
pub use types::*;
pub use ws::ws_upgrade;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::constants::MAX_BODY_BYTES;
use crate::config::ServerConfig;

/// Build the full application router
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/brainstorm", post(handlers::brainstorm))
        .route("/score-idea", post(handlers::score_idea))
        .route("/session/:session_id/ideas", get(handlers::session_ideas))
        .route("/personas", get(handlers::personas))
        .route("/scoring-criteria", get(handlers::scoring_criteria))
        .route("/mindmap-expand", post(handlers::mindmap_expand))
        .route("/health", get(handlers::health))
        .fallback(middleware::api_not_found);

    let mut app = Router::new()
        .nest("/api", api_routes)
        .route("/ws", get(ws::ws_upgrade));

    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "Serving static files");
        app = app.fallback_service(ServeDir::new(dir));
    }

    let mut app = app
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http());

    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    app.with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(state: Arc<AppState>, config: &ServerConfig) -> Result<()> {
    let addr: SocketAddr = config
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.bind_address))?;

    let app = create_router(state, config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Brainstorm server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
