use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CustomerRef, InvoiceStatus};
use crate::currency::{cents_to_dollars, format_currency};

/// Invoice row joined with its customer
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceWithCustomer {
    pub id: Uuid,
    /// Amount in cents
    pub amount: i64,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    pub customer: CustomerRef,
}

/// Amount and status only, for totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceAmount {
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// Dashboard "latest invoices" card entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub amount: String,
    pub date: NaiveDate,
    pub name: String,
    pub image_url: String,
    pub email: String,
}

impl From<InvoiceWithCustomer> for LatestInvoice {
    fn from(invoice: InvoiceWithCustomer) -> Self {
        let CustomerRef {
            name,
            email,
            image_url,
        } = invoice.customer;

        Self {
            id: invoice.id,
            amount: format_currency(invoice.amount),
            date: invoice.date,
            name,
            image_url,
            email,
        }
    }
}

/// Row of the searchable invoice table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicesTableRow {
    pub id: Uuid,
    pub amount: String,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    pub name: String,
    pub image_url: String,
    pub email: String,
}

impl From<InvoiceWithCustomer> for InvoicesTableRow {
    fn from(invoice: InvoiceWithCustomer) -> Self {
        Self {
            id: invoice.id,
            amount: format_currency(invoice.amount),
            date: invoice.date,
            status: invoice.status,
            name: invoice.customer.name,
            image_url: invoice.customer.image_url,
            email: invoice.customer.email,
        }
    }
}

/// Invoice as loaded into the edit form, amount in dollars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl InvoiceForm {
    pub fn from_cents(id: Uuid, customer_id: Uuid, amount: i64, status: InvoiceStatus) -> Self {
        Self {
            id,
            customer_id,
            amount: cents_to_dollars(amount),
            status,
        }
    }
}
