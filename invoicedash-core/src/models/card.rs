use serde::Serialize;

use super::{InvoiceAmount, InvoiceStatus};
use crate::currency::format_currency;

/// Summary figures for the dashboard cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardData {
    pub number_of_customers: usize,
    pub number_of_invoices: usize,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

impl CardData {
    /// Tally fetched invoice rows client-side.
    pub fn tally(invoices: &[InvoiceAmount], number_of_customers: usize) -> Self {
        let sum = |status: InvoiceStatus| -> i64 {
            invoices
                .iter()
                .filter(|inv| inv.status == status)
                .map(|inv| inv.amount)
                .sum()
        };

        Self {
            number_of_customers,
            number_of_invoices: invoices.len(),
            total_paid_invoices: format_currency(sum(InvoiceStatus::Paid)),
            total_pending_invoices: format_currency(sum(InvoiceStatus::Pending)),
        }
    }
}
