//! Row decoding shared by the repositories
//!
//! Decoding never panics: bad columns or an unknown status become
//! `sqlx::Error` and follow the same path as query failures.

use invoicedash_core::models::{CustomerRef, InvoiceAmount, InvoiceStatus, InvoiceWithCustomer};
use sqlx::postgres::PgRow;
use sqlx::Row;

pub(crate) fn status(row: &PgRow) -> Result<InvoiceStatus, sqlx::Error> {
    let raw: String = row.try_get("status")?;
    raw.parse()
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// `amount` is INT in the schema; widen to i64 cents.
pub(crate) fn amount(row: &PgRow) -> Result<i64, sqlx::Error> {
    row.try_get::<i32, _>("amount").map(i64::from)
}

pub(crate) fn invoice_amount(row: &PgRow) -> Result<InvoiceAmount, sqlx::Error> {
    Ok(InvoiceAmount {
        amount: amount(row)?,
        status: status(row)?,
    })
}

/// Invoice columns plus `name`, `email`, `image_url` from the joined customer.
pub(crate) fn invoice_with_customer(row: &PgRow) -> Result<InvoiceWithCustomer, sqlx::Error> {
    Ok(InvoiceWithCustomer {
        id: row.try_get("id")?,
        amount: amount(row)?,
        date: row.try_get("date")?,
        status: status(row)?,
        customer: CustomerRef {
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            image_url: row.try_get("image_url")?,
        },
    })
}

/// Decode every row, failing on the first bad one.
pub(crate) fn decode_all<T>(
    rows: Vec<PgRow>,
    decode: fn(&PgRow) -> Result<T, sqlx::Error>,
) -> Result<Vec<T>, sqlx::Error> {
    rows.iter().map(decode).collect()
}
