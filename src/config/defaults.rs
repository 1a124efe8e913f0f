// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{OutputConfig, ParsingConfig, StoreConfig};
use crate::consts::{DEFAULT_OUTPUT_FILE, DEFAULT_SECRET_SUFFIX, DEFAULT_STORE_DIR};
use crate::enums::StrategyKind;

pub fn default_store() -> StoreConfig {
    StoreConfig {
        dir: PathBuf::from(DEFAULT_STORE_DIR),
        suffix: DEFAULT_SECRET_SUFFIX.into(),
    }
}

pub fn default_output() -> OutputConfig {
    OutputConfig {
        path: PathBuf::from(DEFAULT_OUTPUT_FILE),
    }
}

pub fn default_parsing() -> ParsingConfig {
    ParsingConfig {
        strategy: StrategyKind::default().as_str().into(),
        heuristic: Default::default(),
        depth_based: Default::default(),
        flat: Default::default(),
    }
}
