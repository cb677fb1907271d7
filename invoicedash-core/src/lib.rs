//! invoicedash-core: presentation models and pure helpers
//!
//! Everything here is free of I/O apart from config loading:
//! - currency formatting (integer cents to display strings)
//! - pagination arithmetic for the invoice table
//! - typed reshaping from backend-shaped records to presentation records
//! - credential shape validation

pub mod config;
pub mod currency;
pub mod error;
pub mod models;
pub mod pagination;
pub mod search;

pub use config::DashboardConfig;
pub use currency::{cents_to_dollars, format_currency};
pub use error::{ConfigError, ValidationError};
pub use pagination::{total_pages, PageWindow, ITEMS_PER_PAGE};
