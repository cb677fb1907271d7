//! Dashboard records
//!
//! Two shapes per entity where they differ:
//! - backend-shaped records mirror what a query returns, nested customer included
//! - presentation records are the flat, formatted shape the dashboard renders
//!
//! Conversions between the two are plain `From` impls.

pub mod card;
pub mod credentials;
pub mod customer;
pub mod invoice;
pub mod revenue;
pub mod status;
pub mod user;

pub use card::CardData;
pub use credentials::Credentials;
pub use customer::{CustomerField, CustomerRef, CustomerWithInvoices, CustomersTableRow};
pub use invoice::{InvoiceAmount, InvoiceForm, InvoiceWithCustomer, InvoicesTableRow, LatestInvoice};
pub use revenue::Revenue;
pub use status::InvoiceStatus;
pub use user::User;
