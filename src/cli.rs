// src/cli.rs
//! Command-line surface of the `pass-export` binary

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::core::Result;
use crate::enums::StrategyKind;

#[derive(Parser, Debug)]
#[command(name = "pass-export")]
#[command(
    about = "Export passwords from pass (Unix password-store) to Bitwarden CSV format.",
    after_help = "WARNING: Output file contains plaintext passwords. Delete after importing!"
)]
#[command(version, long_about = None)]
pub struct Cli {
    /// Output CSV file [default: bitwarden_smart_import.csv]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Parsing strategy to use: heuristic, depth-based or flat [default: heuristic]
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Password store directory [default: ~/.password-store]
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// TOML config file with strategy-specific settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List available parsing strategies and exit
    #[arg(long)]
    pub list_strategies: bool,
}

impl Cli {
    /// Load the config file (if any) and apply command-line overrides.
    ///
    /// The strategy name is checked here so a typo fails before anything
    /// is read from the store.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut conf = Config::load(self.config.as_deref())?;

        if let Some(strategy) = &self.strategy {
            let kind: StrategyKind = strategy.parse()?;
            conf.parsing.strategy = kind.as_str().to_string();
        }
        if let Some(dir) = &self.dir {
            conf.store.dir = dir.clone();
        }
        if let Some(output) = &self.output {
            conf.output.path = output.clone();
        }

        conf.parsing.resolve()?;
        Ok(conf)
    }
}

/// Text printed by `--list-strategies`
pub fn strategy_listing() -> String {
    let mut out = String::from("Available parsing strategies:\n");
    for kind in StrategyKind::ALL {
        out.push_str(&format!("  {:<13}: {}\n", kind.as_str(), kind.description()));
    }
    out.push_str("\nSet strategy-specific options in the [parsing] section of the config file.");
    out
}
