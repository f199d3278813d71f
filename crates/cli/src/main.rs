//! Foodcourt CLI - Dashboard data from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Print the dashboard metrics
//! fc-cli summary
//!
//! # List orders of the last 3 days
//! fc-cli recent-orders --days 3
//!
//! # Delete a user
//! fc-cli delete-user -e user@example.com -r Customer
//! ```
//!
//! # Commands
//!
//! - `summary` - Dashboard metrics and chart series
//! - `recent-orders` - Orders of the last N days, newest first
//! - `delete-user` - Delete a user (admins are refused)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fc-cli")]
#[command(author, version, about = "Foodcourt CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print dashboard metrics
    Summary,
    /// List recent orders
    RecentOrders {
        /// Window in days (defaults to `RECENT_ORDERS_DAYS` or 7)
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Delete a user
    DeleteUser {
        /// Email of the user to delete
        #[arg(short, long)]
        email: String,

        /// Role of the user (`Admin` is refused)
        #[arg(short, long)]
        role: String,
    },
}

#[tokio::main]
async fn main() {
    // Command output goes through tracing, so default to info
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Summary => commands::dashboard::summary().await?,
        Commands::RecentOrders { days } => commands::dashboard::recent_orders(days).await?,
        Commands::DeleteUser { email, role } => {
            commands::users::delete_user(&email, &role).await?;
        }
    }
    Ok(())
}
