// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, STORE_DIR_ENV_VAR};
use crate::core::strategy::{DepthBasedConfig, FlatConfig, HeuristicConfig, StrategyConfig};
use crate::core::Result;
use crate::enums::StrategyKind;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub store: StoreConfig,
    pub output: OutputConfig,
    pub parsing: ParsingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub suffix: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
}

/// Strategy name plus the options of every strategy.
///
/// Only the options of the named strategy are used; the others are parsed
/// and then ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParsingConfig {
    pub strategy: String,
    pub heuristic: HeuristicConfig,
    pub depth_based: DepthBasedConfig,
    pub flat: FlatConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store: default_store(),
            output: default_output(),
            parsing: default_parsing(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        default_store()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        default_output()
    }
}

impl Default for ParsingConfig {
    fn default() -> Self {
        default_parsing()
    }
}

impl ParsingConfig {
    /// Pick the active strategy and keep only its options.
    pub fn resolve(&self) -> Result<StrategyConfig> {
        let config = match self.strategy.parse::<StrategyKind>()? {
            StrategyKind::Heuristic => StrategyConfig::Heuristic(self.heuristic.clone()),
            StrategyKind::DepthBased => StrategyConfig::DepthBased(self.depth_based.clone()),
            StrategyKind::Flat => StrategyConfig::Flat(self.flat.clone()),
        };
        Ok(config)
    }
}

impl StoreConfig {
    /// Store directory with a leading `~` expanded
    pub fn resolved_dir(&self) -> PathBuf {
        expand_home(&self.dir)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Build the startup config.
    ///
    /// An explicit path or `PASS_EXPORT_CONFIG` must exist; the default
    /// `pass-export.toml` is optional. `PASSWORD_STORE_DIR` then overrides
    /// the store directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let requested = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        let mut conf = match requested {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::from_file(&path)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                debug!("Loading config from {DEFAULT_CONFIG_FILE}");
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                debug!("No config file found, using built-in defaults");
                Config::default()
            }
        };

        if let Some(dir) = std::env::var_os(STORE_DIR_ENV_VAR) {
            conf.store.dir = PathBuf::from(dir);
        }

        Ok(conf)
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
