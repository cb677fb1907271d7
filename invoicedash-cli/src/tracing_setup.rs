//! Tracing setup for the invoicedash CLI
//!
//! Usage:
//!   invoicedash --debug ...                    # Debug logging to stderr
//!   RUST_LOG=invoicedash_server=debug invoicedash ...  # Fine-grained control
//!
//! Logs go to stderr so query output on stdout stays machine-readable.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Debug level unless RUST_LOG is set
    pub debug: bool,
}

pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
