//! invoicedash-server: Postgres data access for the invoicing dashboard
//!
//! - `db`: connection pool, schema and one repository per table group
//! - `auth`: Argon2 password hashing and the sign-in credential check
//! - `seed`: one-shot population from embedded placeholder data
//! - `http`: JSON API over the repositories

pub mod auth;
pub mod db;
pub mod http;
pub mod seed;

pub use db::{create_pool, DataError};
pub use http::{run_server, ServerConfig, ServerError};
pub use seed::{SeedError, SeedSummary};

