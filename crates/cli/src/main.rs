//! SmartCanteen CLI - report and menu inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Print tomorrow's order report
//! sc-cli report
//!
//! # Print the report for a specific date as CSV
//! sc-cli report --date 2026-08-30 --csv
//!
//! # List the menu for a date
//! sc-cli menu list --date 2026-08-30
//! ```
//!
//! # Commands
//!
//! - `report` - Aggregate confirmed orders for a date
//! - `menu list` - List the menu items for a date
//!
//! # Environment Variables
//!
//! - `CANTEEN_SERVICE_URL` - Base URL of the canteen data service
//! - `CANTEEN_SERVICE_KEY` - Service API key
//! - `CANTEEN_UTC_OFFSET` - Used to derive the default date (tomorrow)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sc-cli")]
#[command(author, version, about = "SmartCanteen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate confirmed orders for a date
    Report {
        /// Date to report on (YYYY-MM-DD, default: tomorrow)
        #[arg(short, long)]
        date: Option<String>,

        /// Emit CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Inspect menus
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// List menu items for a date
    List {
        /// Date to list (YYYY-MM-DD, default: tomorrow)
        #[arg(short, long)]
        date: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Report { date, csv } => {
            commands::report::run(date.as_deref(), csv).await?;
        }
        Commands::Menu { action } => match action {
            MenuAction::List { date } => {
                commands::menu::list(date.as_deref()).await?;
            }
        },
    }
    Ok(())
}
