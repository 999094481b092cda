//! SwissInfo CLI
//!
//! Fetches city content and forecasts through the caching gateway and prints
//! them as JSON.

#![allow(clippy::print_stdout)]

mod cli;
mod commands;

use clap::Parser;
use infrastructure::{AppConfig, build_gateway, init_tracing};

use crate::cli::{Cli, Commands, log_filter_from_verbosity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    init_tracing(&config.telemetry, log_filter_from_verbosity(cli.verbose))?;

    let gateway = build_gateway(&config).await?;

    let output = match cli.command {
        Commands::Fetch {
            kind,
            locale,
            refresh,
            fallback,
        } => {
            let policy = fallback.unwrap_or(config.fallback.policy);
            commands::fetch(&gateway, kind, locale, refresh, policy).await?
        },
        Commands::Fallback { kind } => commands::fallback(&gateway, kind).await?,
        Commands::Prefetch { locale } => commands::prefetch(&gateway, locale).await,
        Commands::Cache { action } => commands::cache(&gateway, action).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
