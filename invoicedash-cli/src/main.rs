//! invoicedash CLI - data access for the invoicing dashboard
//!
//! - `seed`: create tables and load placeholder data
//! - `serve`: run the JSON API
//! - `query`: run one dashboard read and print it as JSON
//! - `login`: check a credential pair

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use invoicedash_core::DashboardConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "invoicedash",
    author,
    version,
    about = "Seed, serve and query the invoicing dashboard database"
)]
struct Cli {
    /// Config file (default: ./invoicedash.toml, then ~/.invoicedash/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Postgres connection string (overrides config)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create tables and insert placeholder users, customers, invoices and revenue
    Seed,
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Run a single dashboard query and print the result as JSON
    Query(commands::query::QueryArgs),
    /// Check an email/password pair against the users table
    Login(commands::login::LoginArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let mut config =
        DashboardConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = cli.database_url.filter(|url| !url.is_empty()) {
        config.database.url = Some(url);
    }

    match cli.command {
        Commands::Seed => commands::run_seed(&config).await?,
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
        Commands::Query(args) => commands::run_query(args, &config).await?,
        Commands::Login(args) => commands::run_login(args, &config).await?,
    }
    Ok(())
}
