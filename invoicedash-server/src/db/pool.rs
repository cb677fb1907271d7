//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is created
//! once by the caller and handed to each repository.

use std::time::Duration;

use invoicedash_core::DashboardConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/invoicedash").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, ?acquire_timeout, "Connecting to database");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Create a pool using the `[database]` section of the config.
pub async fn pool_from_config(
    database_url: &str,
    config: &DashboardConfig,
) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(
        database_url,
        config.database.max_connections,
        config.acquire_timeout(),
    )
    .await
}
