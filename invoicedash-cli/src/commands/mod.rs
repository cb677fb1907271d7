//! Command implementations for the invoicedash CLI

pub mod login;
pub mod query;
pub mod seed;
pub mod serve;

use anyhow::{Context, Result};
use invoicedash_core::DashboardConfig;
use invoicedash_server::db::pool_from_config;
use serde::Serialize;
use sqlx::PgPool;

pub use login::run_login;
pub use query::run_query;
pub use seed::run_seed;
pub use serve::run_serve;

/// Connect using the configured database URL.
pub(crate) async fn connect(config: &DashboardConfig) -> Result<PgPool> {
    let url = config.database.url.as_deref().context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env or invoicedash.toml",
    )?;

    pool_from_config(url, config)
        .await
        .context("Failed to create database pool")
}

/// Print `value` to stdout as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
