//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use invoicedash_core::DashboardConfig;
use invoicedash_server::http::{run_server, ServerConfig};

use super::connect;

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config; default 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server until shutdown.
pub async fn run_serve(args: ServeArgs, config: &DashboardConfig) -> Result<()> {
    let mut server = ServerConfig::from(config);
    if let Some(bind) = args.bind {
        server.bind_addr = bind;
    }
    server.cors_permissive |= args.cors_permissive;

    let pool = connect(config).await?;

    tracing::info!("Starting invoicedash server on {}", server.bind_addr);
    run_server(pool, server).await.context("Server error")?;

    Ok(())
}
