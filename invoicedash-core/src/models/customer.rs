use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{InvoiceAmount, InvoiceStatus};
use crate::currency::format_currency;

/// Customer fields embedded in an invoice query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Customer select option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}

/// Customer with the amount and status of each of its invoices
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerWithInvoices {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub invoices: Vec<InvoiceAmount>,
}

/// Row of the customers table, totals formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomersTableRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

impl CustomerWithInvoices {
    /// Sum of invoice amounts (cents) with the given status.
    pub fn total(&self, status: InvoiceStatus) -> i64 {
        self.invoices
            .iter()
            .filter(|inv| inv.status == status)
            .map(|inv| inv.amount)
            .sum()
    }
}

impl From<CustomerWithInvoices> for CustomersTableRow {
    fn from(customer: CustomerWithInvoices) -> Self {
        let total_pending = format_currency(customer.total(InvoiceStatus::Pending));
        let total_paid = format_currency(customer.total(InvoiceStatus::Paid));

        Self {
            total_invoices: customer.invoices.len() as i64,
            id: customer.id,
            name: customer.name,
            email: customer.email,
            image_url: customer.image_url,
            total_pending,
            total_paid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(amount: i64, status: InvoiceStatus) -> InvoiceAmount {
        InvoiceAmount { amount, status }
    }

    #[test]
    fn totals_split_by_status() {
        let customer = CustomerWithInvoices {
            id: Uuid::nil(),
            name: "Steven Tey".into(),
            email: "steven@tey.com".into(),
            image_url: "/customers/steven-tey.png".into(),
            invoices: vec![
                invoice(44800, InvoiceStatus::Paid),
                invoice(32545, InvoiceStatus::Paid),
                invoice(1000, InvoiceStatus::Pending),
            ],
        };

        let row = CustomersTableRow::from(customer);
        assert_eq!(row.total_invoices, 3);
        assert_eq!(row.total_paid, "$773.45");
        assert_eq!(row.total_pending, "$10.00");
        assert_eq!(row.name, "Steven Tey");
        assert_eq!(row.email, "steven@tey.com");
    }

    #[test]
    fn no_invoices_is_zero_totals() {
        let customer = CustomerWithInvoices {
            id: Uuid::nil(),
            name: "Amy Burns".into(),
            email: "amy@burns.com".into(),
            image_url: "/customers/amy-burns.png".into(),
            invoices: vec![],
        };

        let row = CustomersTableRow::from(customer);
        assert_eq!(row.total_invoices, 0);
        assert_eq!(row.total_paid, "$0.00");
        assert_eq!(row.total_pending, "$0.00");
    }
}
