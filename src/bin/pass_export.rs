// src/bin/pass_export.rs
//! pass → Bitwarden CSV export

use anyhow::{Context, Result};
use clap::Parser;
use pass_export::cli::{strategy_listing, Cli};
use pass_export::export::export_store;
use pass_export::secret::PassCommand;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if cli.list_strategies {
        println!("{}", strategy_listing());
        return Ok(());
    }

    let config = cli.resolve_config().context("Invalid configuration")?;
    let store_dir = config.store.resolved_dir();

    info!("Starting export using '{}' strategy...", config.parsing.strategy);
    info!("Reading from: {}", store_dir.display());
    info!("Output file: {}", config.output.path.display());

    let source = PassCommand::new(&store_dir);
    let summary = export_store(&config, &source).context("Export failed")?;

    println!(
        "\nDone! Saved {} entries to {}",
        summary.exported,
        config.output.path.display()
    );
    if summary.skipped > 0 {
        println!("Skipped {} unreadable or empty entries", summary.skipped);
    }
    println!("WARNING: This file contains plain text passwords. Delete it after importing!");

    Ok(())
}
