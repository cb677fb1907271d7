//! Dashboard tables
//!
//! Idempotent DDL run before seeding. Queries assume these tables exist.

use sqlx::PgPool;

const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#,
    ),
    (
        "customers",
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            image_url VARCHAR(255) NOT NULL
        )
        "#,
    ),
    (
        "invoices",
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            customer_id UUID NOT NULL,
            amount INT NOT NULL,
            status VARCHAR(255) NOT NULL,
            date DATE NOT NULL
        )
        "#,
    ),
    (
        "revenue",
        r#"
        CREATE TABLE IF NOT EXISTS revenue (
            month VARCHAR(4) NOT NULL UNIQUE,
            revenue INT NOT NULL
        )
        "#,
    ),
];

/// Create any missing dashboard tables.
pub async fn ensure(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring dashboard schema...");

    for (table, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table, "table ready");
    }

    Ok(())
}
