//! Axum server setup
//!
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use invoicedash_core::DashboardConfig;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::SIMULATED_LATENCY;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Allow any origin. Off by default: only local dashboard origins.
    pub cors_permissive: bool,

    /// Artificial delay before the revenue query
    pub revenue_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            revenue_delay: SIMULATED_LATENCY,
        }
    }
}

impl From<&DashboardConfig> for ServerConfig {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            bind_addr: config.server.bind,
            cors_permissive: config.server.cors_permissive,
            revenue_delay: config.revenue_delay(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub revenue_delay: Duration,
}

/// Build the router with all API routes and middleware.
pub fn app(state: AppState, cors_permissive: bool) -> Router {
    let cors = if cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://localhost:3030"),
                HeaderValue::from_static("http://127.0.0.1:3000"),
                HeaderValue::from_static("http://127.0.0.1:3030"),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::dashboard::router())
        .merge(routes::invoices::router())
        .merge(routes::customers::router())
        .merge(routes::auth::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState {
        pool,
        revenue_delay: config.revenue_delay,
    };
    let app = app(state, config.cors_permissive);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
///
/// A handler that cannot be installed never fires; the other one still can.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
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
