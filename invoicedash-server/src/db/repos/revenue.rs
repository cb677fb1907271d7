//! Revenue repository

use std::time::{Duration, Instant};

use invoicedash_core::models::Revenue;
use sqlx::{PgPool, Row};

use crate::db::DataError;

/// Simulated latency so loading states are visible in the dashboard.
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(3);

/// Revenue repository
pub struct RevenueRepo<'a> {
    pool: &'a PgPool,
    delay: Duration,
}

impl<'a> RevenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            delay: SIMULATED_LATENCY,
        }
    }

    /// Override the simulated latency (zero disables it).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fetch all monthly revenue rows.
    pub async fn fetch(&self) -> Result<Vec<Revenue>, DataError> {
        tracing::info!("Fetching revenue data...");
        let started = Instant::now();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let rows = sqlx::query("SELECT month, revenue FROM revenue")
            .fetch_all(self.pool)
            .await
            .map_err(DataError::Revenue.masking())?;

        let revenue = rows
            .iter()
            .map(|r| {
                Ok(Revenue {
                    month: r.try_get("month")?,
                    revenue: r.try_get("revenue")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(DataError::Revenue.masking())?;

        tracing::info!(
            rows = revenue.len(),
            "Data fetch completed after {} ms.",
            started.elapsed().as_millis()
        );
        Ok(revenue)
    }
}
