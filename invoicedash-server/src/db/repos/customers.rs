//! Customer repository

use invoicedash_core::models::{
    CustomerField, CustomerWithInvoices, CustomersTableRow, InvoiceAmount,
};
use invoicedash_core::search::like_pattern;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::db::rows;
use crate::db::DataError;

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All customers as select options, ordered by name.
    pub async fn all(&self) -> Result<Vec<CustomerField>, DataError> {
        let rows = sqlx::query("SELECT id, name FROM customers ORDER BY name ASC")
            .fetch_all(self.pool)
            .await
            .map_err(DataError::Customers.masking())?;

        rows.iter()
            .map(|r| {
                Ok(CustomerField {
                    id: r.try_get("id")?,
                    name: r.try_get("name")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(DataError::Customers.masking())
    }

    /// Customers whose name or email matches `query`, with invoice totals.
    ///
    /// Inner join: customers without invoices are not listed.
    pub async fn filtered(&self, query: &str) -> Result<Vec<CustomersTableRow>, DataError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.name, c.email, c.image_url, i.amount, i.status
            FROM customers c
            JOIN invoices i ON i.customer_id = c.id
            WHERE c.name ILIKE $1 OR c.email ILIKE $1
            ORDER BY c.name ASC, c.id
            "#,
        )
        .bind(like_pattern(query))
        .fetch_all(self.pool)
        .await
        .map_err(DataError::FilteredCustomers.masking())?;

        let flat = rows::decode_all(rows, customer_invoice_row)
            .map_err(DataError::FilteredCustomers.masking())?;

        Ok(group_by_customer(flat)
            .into_iter()
            .map(CustomersTableRow::from)
            .collect())
    }
}

/// One joined customer/invoice row
#[derive(Debug, Clone, PartialEq)]
struct CustomerInvoiceRow {
    id: Uuid,
    name: String,
    email: String,
    image_url: String,
    invoice: InvoiceAmount,
}

fn customer_invoice_row(row: &PgRow) -> Result<CustomerInvoiceRow, sqlx::Error> {
    Ok(CustomerInvoiceRow {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        image_url: row.try_get("image_url")?,
        invoice: rows::invoice_amount(row)?,
    })
}

/// Fold consecutive rows of the same customer into one nested record.
///
/// Rows must be ordered so each customer's rows are adjacent.
fn group_by_customer(rows: Vec<CustomerInvoiceRow>) -> Vec<CustomerWithInvoices> {
    let mut customers: Vec<CustomerWithInvoices> = Vec::new();

    for row in rows {
        match customers.last_mut() {
            Some(current) if current.id == row.id => current.invoices.push(row.invoice),
            _ => customers.push(CustomerWithInvoices {
                id: row.id,
                name: row.name,
                email: row.email,
                image_url: row.image_url,
                invoices: vec![row.invoice],
            }),
        }
    }

    customers
}
