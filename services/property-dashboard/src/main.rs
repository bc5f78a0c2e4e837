//! Property Dashboard CLI
//!
//! Command-line interface for the property dashboard backend.

use std::path::PathBuf;

use clap::Parser;
use property_dashboard::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "property-dashboard")]
#[command(about = "Backend and static host for the property dashboard")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, log_level={:?}",
        args.config,
        args.port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting property dashboard");
    tracing::debug!(
        "Tenants: {}, default tenant: {}",
        config.catalog.tenants.len(),
        config.catalog.default_tenant
    );

    property_dashboard::run(config).await?;

    Ok(())
}
