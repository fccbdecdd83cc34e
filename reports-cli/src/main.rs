//! Reports CLI
//!
//! Command-line interface for the sales reports API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use reports_client::ReportsClient;

#[derive(Parser)]
#[command(name = "reports")]
#[command(author, version, about = "Sales reports API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the reports API
    #[arg(long, env = "REPORTS_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the dataset from the upstream seed source
    Initialize,
    /// List a page of a month's transactions
    Transactions {
        /// Full English month name
        month: String,
        /// Free-text or numeric search
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        per_page: u32,
    },
    /// Summary statistics for a month
    Statistics { month: String },
    /// Price histogram for a month
    BarChart { month: String },
    /// Category distribution for a month
    PieChart { month: String },
    /// All three analytics views for a month
    Combined { month: String },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ReportsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Initialize => {
            let response = client.initialize().await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Transactions {
            month,
            search,
            page,
            per_page,
        } => {
            let listing = client.transactions(&month, &search, page, per_page).await?;
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }

        Commands::Statistics { month } => {
            let stats = client.statistics(&month).await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }

        Commands::BarChart { month } => {
            let buckets = client.bar_chart(&month).await?;
            println!("{}", serde_json::to_string_pretty(&buckets)?);
        }

        Commands::PieChart { month } => {
            let categories = client.pie_chart(&month).await?;
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }

        Commands::Combined { month } => {
            let report = client.combined(&month).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
