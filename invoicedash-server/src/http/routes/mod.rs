//! Route handlers organized by resource

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod invoices;
