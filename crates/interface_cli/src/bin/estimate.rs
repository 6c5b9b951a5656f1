//! Estimate - Command-Line Binary
//!
//! # Usage
//!
//! ```bash
//! # List products from the built-in tables
//! estimate --offline types
//!
//! # Quote cancer insurance for someone born on 1990-04-01
//! estimate quote --type 3 --birth 1990-04-01
//!
//! # Check eligibility as of a fixed date, as JSON
//! estimate --today 2025-10-01 --format json eligible --birth 2005-10-02
//! ```
//!
//! Configuration is read from `ESTIMATE_*` variables; see
//! `interface_cli::config`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::output::{render_list, render_single};
use interface_cli::{commands, Cli, Commands, EstimateConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EstimateConfig::from_env()?;

    init_tracing(&config.log_level);

    let rendered = match &cli.command {
        Commands::Sources => render_list(&commands::sources(), cli.format)?,
        command => {
            let service = commands::build_service(&config, cli.offline, cli.today).await?;
            match command {
                Commands::Types => render_list(&commands::types(&service).await?, cli.format)?,
                Commands::Quote(args) => render_single(&commands::quote(&service, args).await?, cli.format)?,
                Commands::Eligible(args) => render_single(&commands::eligible(&service, args)?, cli.format)?,
                Commands::Sources => render_list(&commands::sources(), cli.format)?,
            }
        }
    };

    println!("{}", rendered);
    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
