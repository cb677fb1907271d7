//! Generic per-operation query errors

use std::fmt;

use thiserror::Error;

/// Failure of a dashboard query.
///
/// Carries no detail about the cause: the underlying error is logged at the
/// point of failure and dropped, so the message is safe to show end users.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataError {
    #[error("Failed to fetch revenue data.")]
    Revenue,

    #[error("Failed to fetch the latest invoices.")]
    LatestInvoices,

    #[error("Failed to fetch card data.")]
    CardData,

    #[error("Failed to fetch filtered invoices.")]
    FilteredInvoices,

    #[error("Failed to fetch total number of invoice pages.")]
    InvoicePages,

    #[error("Failed to fetch invoice.")]
    Invoice,

    #[error("Failed to fetch all customers.")]
    Customers,

    #[error("Failed to fetch filtered customers.")]
    FilteredCustomers,

    #[error("Failed to fetch user.")]
    User,
}

impl DataError {
    /// Adapter for `map_err`: logs `source` and replaces it with `self`.
    ///
    /// ```ignore
    /// sqlx::query("SELECT 1").execute(pool).await.map_err(DataError::Revenue.masking())?;
    /// ```
    pub(crate) fn masking<E: fmt::Display>(self) -> impl FnOnce(E) -> Self {
        move |source| {
            tracing::error!(operation = %self, error = %source, "Database Error");
            self
        }
    }
}
