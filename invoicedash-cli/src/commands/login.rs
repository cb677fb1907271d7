//! Credential check command

use anyhow::{bail, Result};
use clap::Parser;
use invoicedash_core::DashboardConfig;
use invoicedash_server::auth::authorize;

use super::{connect, print_json};

#[derive(Parser, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    /// Password (or INVOICEDASH_PASSWORD)
    #[arg(long, env = "INVOICEDASH_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Print the user on success; denied credentials exit non-zero.
pub async fn run_login(args: LoginArgs, config: &DashboardConfig) -> Result<()> {
    let pool = connect(config).await?;

    match authorize(&pool, &args.email, &args.password).await? {
        Some(user) => print_json(&user),
        None => bail!("Invalid credentials."),
    }
}
