//! Dashboard card figures
//!
//! Totals are computed client-side from the fetched rows rather than with a
//! backend aggregate.

use invoicedash_core::models::CardData;
use sqlx::PgPool;

use crate::db::rows;
use crate::db::DataError;

pub struct CardRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CardRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch(&self) -> Result<CardData, DataError> {
        let invoices = sqlx::query("SELECT amount, status FROM invoices").fetch_all(self.pool);
        let customers = sqlx::query("SELECT id FROM customers").fetch_all(self.pool);

        // Independent reads, issued together.
        let (invoices, customers) = tokio::try_join!(invoices, customers)
            .map_err(DataError::CardData.masking())?;

        let invoices = rows::decode_all(invoices, rows::invoice_amount)
            .map_err(DataError::CardData.masking())?;

        Ok(CardData::tally(&invoices, customers.len()))
    }
}
