//! Invoice repository
//!
//! Listing queries JOIN customers in the same statement and flatten the
//! nested customer through the presentation `From` impls.

use invoicedash_core::models::{InvoiceForm, InvoicesTableRow, LatestInvoice};
use invoicedash_core::search::like_pattern;
use invoicedash_core::{total_pages, PageWindow, ITEMS_PER_PAGE};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::db::rows;
use crate::db::DataError;

/// Entries on the "latest invoices" card
pub const LATEST_INVOICES_LIMIT: i64 = 5;

/// Search predicate shared by the table and its page count; `$1` is the
/// ILIKE pattern.
const SEARCH_FILTER: &str = r#"
    c.name ILIKE $1 OR
    c.email ILIKE $1 OR
    i.amount::text ILIKE $1 OR
    i.date::text ILIKE $1 OR
    i.status ILIKE $1
"#;

/// Newest first; `i.id` breaks date ties so LIMIT/OFFSET pages are stable.
const NEWEST_FIRST: &str = "ORDER BY i.date DESC, i.id";

/// Invoice repository
pub struct InvoiceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Five most recent invoices with their customer.
    pub async fn latest(&self) -> Result<Vec<LatestInvoice>, DataError> {
        let sql = format!(
            r#"
            SELECT i.id, i.amount, i.date, i.status, c.name, c.email, c.image_url
            FROM invoices i
            JOIN customers c ON c.id = i.customer_id
            {NEWEST_FIRST}
            LIMIT $1
            "#
        );

        let rows = sqlx::query(&sql)
            .bind(LATEST_INVOICES_LIMIT)
            .fetch_all(self.pool)
            .await
            .map_err(DataError::LatestInvoices.masking())?;

        let invoices = rows::decode_all(rows, rows::invoice_with_customer)
            .map_err(DataError::LatestInvoices.masking())?;

        tracing::debug!(count = invoices.len(), "fetched latest invoices");
        Ok(invoices.into_iter().map(LatestInvoice::from).collect())
    }

    /// One page of invoices matching `query`, newest first.
    pub async fn filtered(
        &self,
        query: &str,
        page: PageWindow,
    ) -> Result<Vec<InvoicesTableRow>, DataError> {
        let sql = format!(
            r#"
            SELECT i.id, i.amount, i.date, i.status, c.name, c.email, c.image_url
            FROM invoices i
            JOIN customers c ON c.id = i.customer_id
            WHERE {SEARCH_FILTER}
            {NEWEST_FIRST}
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query(&sql)
            .bind(like_pattern(query))
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool)
            .await
            .map_err(DataError::FilteredInvoices.masking())?;

        let invoices = rows::decode_all(rows, rows::invoice_with_customer)
            .map_err(DataError::FilteredInvoices.masking())?;

        Ok(invoices.into_iter().map(InvoicesTableRow::from).collect())
    }

    /// Number of table pages for `query`. Zero matches is zero pages.
    pub async fn pages(&self, query: &str) -> Result<u32, DataError> {
        let sql = format!(
            r#"
            SELECT COUNT(*) AS count
            FROM invoices i
            JOIN customers c ON c.id = i.customer_id
            WHERE {SEARCH_FILTER}
            "#
        );

        let count: i64 = sqlx::query(&sql)
            .bind(like_pattern(query))
            .fetch_one(self.pool)
            .await
            .and_then(|row| row.try_get::<i64, _>("count"))
            .map_err(DataError::InvoicePages.masking())?;

        Ok(total_pages(count, ITEMS_PER_PAGE))
    }

    /// Single invoice for the edit form, amount converted to dollars.
    pub async fn by_id(&self, id: Uuid) -> Result<InvoiceForm, DataError> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_id, amount, status
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(self.pool)
        .await
        .map_err(DataError::Invoice.masking())?;

        let decode = || -> Result<InvoiceForm, sqlx::Error> {
            Ok(InvoiceForm::from_cents(
                row.try_get("id")?,
                row.try_get("customer_id")?,
                rows::amount(&row)?,
                rows::status(&row)?,
            ))
        };

        decode().map_err(DataError::Invoice.masking())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::{seeded_database, unreachable_pool};
    use std::collections::HashSet;

    #[tokio::test]
    async fn latest_failure_is_generic() {
        let pool = unreachable_pool();
        let err = InvoiceRepo::new(&pool).latest().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch the latest invoices.");
    }

    #[tokio::test]
    async fn filtered_failure_is_generic() {
        let pool = unreachable_pool();
        let err = InvoiceRepo::new(&pool)
            .filtered("lee", PageWindow::new(2))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch filtered invoices.");
    }

    #[tokio::test]
    async fn pages_failure_is_generic() {
        let pool = unreachable_pool();
        let err = InvoiceRepo::new(&pool).pages("").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch total number of invoice pages."
        );
    }

    #[tokio::test]
    async fn by_id_failure_is_generic() {
        let pool = unreachable_pool();
        let err = InvoiceRepo::new(&pool)
            .by_id(Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err, DataError::Invoice);
        assert_eq!(err.to_string(), "Failed to fetch invoice.");
    }

    #[test]
    fn search_filter_covers_all_columns() {
        for column in ["c.name", "c.email", "i.amount::text", "i.date::text", "i.status"] {
            assert!(SEARCH_FILTER.contains(&format!("{column} ILIKE $1")));
        }
    }

    #[test]
    fn newest_first_has_unique_tie_breaker() {
        assert_eq!(NEWEST_FIRST, "ORDER BY i.date DESC, i.id");
    }

    async fn insert_customer(pool: &PgPool, id: Uuid) -> String {
        let email = format!("{}@tie.example", id.simple());
        sqlx::query(
            "INSERT INTO customers (id, name, email, image_url) VALUES ($1, 'Tie Customer', $2, '/customers/tie.png')",
        )
        .bind(id)
        .bind(&email)
        .execute(pool)
        .await
        .expect("insert customer");
        email
    }

    async fn remove_customer(pool: &PgPool, id: Uuid) {
        sqlx::query("DELETE FROM invoices WHERE customer_id = $1")
            .bind(id)
            .execute(pool)
            .await
            .expect("delete invoices");
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .expect("delete customer");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seeded_pages_and_rows_agree() {
        let (pool, _guard) = seeded_database().await;
        let repo = InvoiceRepo::new(&pool);

        let pages = repo.pages("").await.expect("pages");
        let first = repo.filtered("", PageWindow::new(1)).await.expect("first page");
        assert!(pages > 0);
        assert_eq!(first.len(), ITEMS_PER_PAGE as usize);

        let none = repo.pages("no customer is called this").await.expect("pages");
        assert_eq!(none, 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn paging_through_tied_dates_shows_each_invoice_once() {
        let (pool, _guard) = seeded_database().await;
        let customer = Uuid::new_v4();
        let email = insert_customer(&pool, customer).await;

        for amount in 1..=40 {
            sqlx::query(
                "INSERT INTO invoices (customer_id, amount, status, date) VALUES ($1, $2, 'paid', '2024-01-01')",
            )
            .bind(customer)
            .bind(amount)
            .execute(&pool)
            .await
            .expect("insert invoice");
        }

        let repo = InvoiceRepo::new(&pool);
        let pages = repo.pages(&email).await.expect("pages");
        assert_eq!(pages, 7);

        let mut seen = HashSet::new();
        let mut returned = 0;
        for page in 1..=pages {
            let rows = repo
                .filtered(&email, PageWindow::new(page))
                .await
                .expect("page");
            returned += rows.len();
            seen.extend(rows.into_iter().map(|row| row.id));
        }

        remove_customer(&pool, customer).await;
        assert_eq!(returned, 40);
        assert_eq!(seen.len(), 40);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_status_is_generic_error() {
        let (pool, _guard) = seeded_database().await;
        let customer = Uuid::new_v4();
        let email = insert_customer(&pool, customer).await;
        let invoice = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO invoices (id, customer_id, amount, status, date) VALUES ($1, $2, 500, 'overdue', '2024-01-01')",
        )
        .bind(invoice)
        .bind(customer)
        .execute(&pool)
        .await
        .expect("insert invoice");

        let repo = InvoiceRepo::new(&pool);
        let by_id = repo.by_id(invoice).await;
        let listed = repo.filtered(&email, PageWindow::new(1)).await;

        remove_customer(&pool, customer).await;
        assert_eq!(by_id.unwrap_err(), DataError::Invoice);
        assert_eq!(listed.unwrap_err(), DataError::FilteredInvoices);
    }
}
