//! # Reports Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the store adapter and seed source
//! - Create the report service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reports_hex::{ReportService, inbound::HttpServer};
use reports_repo::{HttpSeedSource, build_store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reports_app=debug,reports_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting reports server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);

    // Build store (handles connection and migration)
    let store = build_store(&config.database_url).await?;

    // Create the report service
    let service = ReportService::new(store, HttpSeedSource::new(config.seed_url));

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
