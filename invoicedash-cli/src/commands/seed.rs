//! Seed command

use anyhow::{Context, Result};
use invoicedash_core::DashboardConfig;
use invoicedash_server::seed;

use super::{connect, print_json};

/// Create the tables and load placeholder data. Any failure is a non-zero exit.
pub async fn run_seed(config: &DashboardConfig) -> Result<()> {
    let pool = connect(config).await?;
    let summary = seed::run(&pool).await.context("Seeding failed")?;
    print_json(&summary)
}
