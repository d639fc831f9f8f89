//! Fitlog - Personal Fitness Log Manager
//!
//! Main entry point for the application.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitlog::cli::Cli;
use fitlog::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        config::load_config_from(&cli.config_path()).context("Failed to load configuration")?;
    cli.apply(&mut config);

    // Log to stderr so output does not interleave with the menu
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Fitlog v{}", env!("CARGO_PKG_VERSION"));

    cli.save_if_requested(&config).context("Failed to save configuration")?;

    fitlog::app::run(&config).await?;
    Ok(())
}
