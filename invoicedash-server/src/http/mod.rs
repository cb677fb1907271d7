//! HTTP layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses carrying only generic messages

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{app, run_server, AppState, ServerConfig, ServerError};
