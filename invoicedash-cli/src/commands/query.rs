//! One-shot dashboard queries

use anyhow::Result;
use clap::{Parser, Subcommand};
use invoicedash_core::{DashboardConfig, PageWindow};
use invoicedash_server::db::{CardRepo, CustomerRepo, InvoiceRepo, RevenueRepo, UserRepo};
use serde_json::json;
use uuid::Uuid;

use super::{connect, print_json};

#[derive(Parser, Debug)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// Monthly revenue (after the configured simulated delay)
    Revenue,
    /// The five most recent invoices
    LatestInvoices,
    /// Summary card figures
    Cards,
    /// One page of invoices matching a search
    Invoices {
        /// Search text (matches name, email, amount, date or status)
        #[arg(long, default_value = "")]
        query: String,
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Number of invoice pages for a search
    InvoicePages {
        #[arg(long, default_value = "")]
        query: String,
    },
    /// A single invoice in edit-form shape
    Invoice {
        /// Invoice id (UUID)
        id: Uuid,
    },
    /// All customers as id/name pairs
    Customers,
    /// Customers matching a search, with invoice totals
    CustomerTable {
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Look up a user by email
    User { email: String },
}

pub async fn run_query(args: QueryArgs, config: &DashboardConfig) -> Result<()> {
    let pool = connect(config).await?;

    match args.command {
        QueryCommand::Revenue => {
            let revenue = RevenueRepo::new(&pool)
                .with_delay(config.revenue_delay())
                .fetch()
                .await?;
            print_json(&revenue)
        }
        QueryCommand::LatestInvoices => print_json(&InvoiceRepo::new(&pool).latest().await?),
        QueryCommand::Cards => print_json(&CardRepo::new(&pool).fetch().await?),
        QueryCommand::Invoices { query, page } => {
            let rows = InvoiceRepo::new(&pool)
                .filtered(&query, PageWindow::new(page))
                .await?;
            print_json(&rows)
        }
        QueryCommand::InvoicePages { query } => {
            let total_pages = InvoiceRepo::new(&pool).pages(&query).await?;
            print_json(&json!({ "total_pages": total_pages }))
        }
        QueryCommand::Invoice { id } => print_json(&InvoiceRepo::new(&pool).by_id(id).await?),
        QueryCommand::Customers => print_json(&CustomerRepo::new(&pool).all().await?),
        QueryCommand::CustomerTable { query } => {
            print_json(&CustomerRepo::new(&pool).filtered(&query).await?)
        }
        QueryCommand::User { email } => print_json(&UserRepo::new(&pool).get(&email).await?),
    }
}
