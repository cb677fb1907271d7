//! One-shot database seeding from embedded placeholder data
//!
//! Phases run in order: users, customers, invoices, revenue. Each phase
//! inserts row by row and stops at the first failure. Re-running is safe:
//! users, customers and revenue skip rows that already exist, and invoices
//! are only inserted when no identical row is present.

use chrono::NaiveDate;
use invoicedash_core::models::{InvoiceStatus, Revenue};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::{hash_password, PasswordError};
use crate::db::schema;

const PLACEHOLDER_JSON: &str = include_str!("placeholder.json");

/// Seeding failure
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("invalid placeholder data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("failed to create tables: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("failed to hash password for {email}: {source}")]
    Hash {
        email: String,
        #[source]
        source: PasswordError,
    },

    #[error("failed to seed {table}: {source}")]
    Insert {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Plaintext; hashed before insert
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderCustomer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderInvoice {
    pub customer_id: Uuid,
    /// Cents
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// The full placeholder data set
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderData {
    pub users: Vec<PlaceholderUser>,
    pub customers: Vec<PlaceholderCustomer>,
    pub invoices: Vec<PlaceholderInvoice>,
    pub revenue: Vec<Revenue>,
}

impl PlaceholderData {
    /// Data compiled into the binary.
    pub fn embedded() -> Result<Self, SeedError> {
        Ok(serde_json::from_str(PLACEHOLDER_JSON)?)
    }
}

/// Rows inserted per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub users: u64,
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}

/// Create the tables if needed and load the embedded data set.
pub async fn run(pool: &PgPool) -> Result<SeedSummary, SeedError> {
    let data = PlaceholderData::embedded()?;
    seed(pool, &data).await
}

/// Create the tables if needed and load `data`.
pub async fn seed(pool: &PgPool, data: &PlaceholderData) -> Result<SeedSummary, SeedError> {
    schema::ensure(pool).await.map_err(|source| {
        tracing::error!(error = %source, "Error creating tables");
        SeedError::Schema(source)
    })?;

    let summary = SeedSummary {
        users: seed_users(pool, &data.users).await?,
        customers: seed_customers(pool, &data.customers).await?,
        invoices: seed_invoices(pool, &data.invoices).await?,
        revenue: seed_revenue(pool, &data.revenue).await?,
    };

    tracing::info!(?summary, "Database seeded successfully");
    Ok(summary)
}

/// Insert users with hashed passwords.
pub async fn seed_users(pool: &PgPool, users: &[PlaceholderUser]) -> Result<u64, SeedError> {
    let mut inserted = 0;

    for user in users {
        let hashed = hash_password(&user.password).map_err(|source| {
            tracing::error!(email = %user.email, error = %source, "Error seeding users");
            SeedError::Hash {
                email: user.email.clone(),
                source,
            }
        })?;

        inserted += sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(hashed)
        .execute(pool)
        .await
        .map_err(insert_failed("users"))?
        .rows_affected();
    }

    tracing::info!(inserted, "Seeded users");
    Ok(inserted)
}

pub async fn seed_customers(
    pool: &PgPool,
    customers: &[PlaceholderCustomer],
) -> Result<u64, SeedError> {
    let mut inserted = 0;

    for customer in customers {
        inserted += sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .execute(pool)
        .await
        .map_err(insert_failed("customers"))?
        .rows_affected();
    }

    tracing::info!(inserted, "Seeded customers");
    Ok(inserted)
}

/// Invoices carry no natural key, so an exact duplicate is skipped instead.
pub async fn seed_invoices(
    pool: &PgPool,
    invoices: &[PlaceholderInvoice],
) -> Result<u64, SeedError> {
    let mut inserted = 0;

    for invoice in invoices {
        inserted += sqlx::query(
            r#"
            INSERT INTO invoices (customer_id, amount, status, date)
            SELECT $1, $2, $3, $4
            WHERE NOT EXISTS (
                SELECT 1 FROM invoices
                WHERE customer_id = $1 AND amount = $2 AND status = $3 AND date = $4
            )
            "#,
        )
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(pool)
        .await
        .map_err(insert_failed("invoices"))?
        .rows_affected();
    }

    tracing::info!(inserted, "Seeded invoices");
    Ok(inserted)
}

pub async fn seed_revenue(pool: &PgPool, revenue: &[Revenue]) -> Result<u64, SeedError> {
    let mut inserted = 0;

    for month in revenue {
        inserted += sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO NOTHING
            "#,
        )
        .bind(&month.month)
        .bind(month.revenue)
        .execute(pool)
        .await
        .map_err(insert_failed("revenue"))?
        .rows_affected();
    }

    tracing::info!(inserted, "Seeded revenue");
    Ok(inserted)
}

fn insert_failed(table: &'static str) -> impl FnOnce(sqlx::Error) -> SeedError {
    move |source| {
        tracing::error!(table, error = %source, "Error seeding {}", table);
        SeedError::Insert { table, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::unreachable_pool;
    use std::collections::HashSet;

    #[test]
    fn embedded_data_parses() {
        let data = PlaceholderData::embedded().unwrap();
        assert_eq!(data.users.len(), 1);
        assert_eq!(data.users[0].email, "user@nextmail.com");
        assert_eq!(data.customers.len(), 10);
        assert!(!data.invoices.is_empty());
        assert_eq!(data.revenue.len(), 12);
    }

    #[test]
    fn invoices_reference_known_customers() {
        let data = PlaceholderData::embedded().unwrap();
        let ids: HashSet<Uuid> = data.customers.iter().map(|c| c.id).collect();

        for invoice in &data.invoices {
            assert!(
                ids.contains(&invoice.customer_id),
                "unknown customer {}",
                invoice.customer_id
            );
            assert!(invoice.amount > 0);
        }
    }

    #[test]
    fn revenue_months_are_unique_and_short() {
        let data = PlaceholderData::embedded().unwrap();
        let months: HashSet<&str> = data.revenue.iter().map(|r| r.month.as_str()).collect();

        assert_eq!(months.len(), data.revenue.len());
        assert!(months.iter().all(|m| m.len() <= 4));
        assert_eq!(data.revenue[0], Revenue { month: "Jan".into(), revenue: 2000 });
        assert_eq!(data.revenue[11].revenue, 4800);
    }

    #[test]
    fn customer_emails_are_unique() {
        let data = PlaceholderData::embedded().unwrap();
        let emails: HashSet<&str> = data.customers.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails.len(), data.customers.len());
    }

    #[tokio::test]
    async fn unreachable_database_fails_at_schema() {
        let pool = unreachable_pool();
        let err = run(&pool).await.unwrap_err();
        assert!(matches!(err, SeedError::Schema(_)));
    }

    #[tokio::test]
    async fn insert_failure_names_the_table() {
        let pool = unreachable_pool();
        let data = PlaceholderData::embedded().unwrap();

        let err = seed_revenue(&pool, &data.revenue).await.unwrap_err();
        assert!(matches!(err, SeedError::Insert { table: "revenue", .. }));
        assert!(err.to_string().starts_with("failed to seed revenue"));
    }

    #[tokio::test]
    async fn empty_phase_inserts_nothing() {
        let pool = unreachable_pool();
        assert_eq!(seed_customers(&pool, &[]).await.unwrap(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seeding_twice_inserts_once() {
        let (pool, _guard) = crate::db::testing::database().await;

        run(&pool).await.expect("first seed");
        let second = run(&pool).await.expect("second seed");
        assert_eq!(second, SeedSummary::default());
    }
}
