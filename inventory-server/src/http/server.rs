//! Axum server setup
//!
//! Server skeleton with:
//! - Tracing middleware
//! - A startup connection attempt that never blocks serving
//! - Graceful shutdown on SIGTERM/Ctrl+C, then pool release

use std::net::SocketAddr;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::Database;
use crate::state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::debug::router())
        .merge(routes::rooms::router())
        .merge(routes::items::router())
        .merge(routes::export::router())
        .layer(middleware::from_fn_with_state(state.clone(), track_availability))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A 503 means the database dropped out; stop handing out the held pool.
async fn track_availability(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if response.status() == StatusCode::SERVICE_UNAVAILABLE {
        state.db().mark_unavailable();
    }
    response
}

/// Run the HTTP server.
///
/// A failed startup connection is logged, not fatal: requests retry the
/// connection themselves and answer 503 while the database is down. The
/// same holds for a handle with no database configured at all.
///
/// # Example
///
/// ```ignore
/// let db = Database::from_env()?;
/// run_server(db, ServerConfig::default()).await?;
/// ```
pub async fn run_server(db: Database, config: ServerConfig) -> Result<(), ServerError> {
    match db.config() {
        Some(db_config) => {
            tracing::info!(database = %db_config.redacted_url(), "Starting application...");
            if let Err(e) = db.connect().await {
                tracing::warn!(
                    error = %e,
                    "Database not ready at startup; will retry on first request"
                );
            }
        }
        None => tracing::warn!("No database configured; data routes will answer 503"),
    }

    let app = build_router(AppState::new(db.clone()));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.close().await;
    served?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
