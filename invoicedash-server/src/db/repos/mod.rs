//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - borrows the pool, holds no other state
//! - one statement per read; joins instead of follow-up lookups
//! - rows are decoded fallibly, then reshaped into presentation records

pub mod cards;
pub mod customers;
pub mod invoices;
pub mod revenue;
pub mod users;

pub use cards::CardRepo;
pub use customers::CustomerRepo;
pub use invoices::{InvoiceRepo, LATEST_INVOICES_LIMIT};
pub use revenue::{RevenueRepo, SIMULATED_LATENCY};
pub use users::UserRepo;
