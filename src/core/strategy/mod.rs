// src/core/strategy/mod.rs
//! Path classification strategies
//!
//! Each strategy maps a tokenized entry path to the four fields Bitwarden
//! derives from structure: folder, name, username and URL. Classification
//! is a pure function of (path, config).

pub mod depth;
pub mod flat;
pub mod heuristic;

pub use depth::{DepthBased, DepthBasedConfig};
pub use flat::{Flat, FlatConfig};
pub use heuristic::{Heuristic, HeuristicConfig};

use crate::core::tokens::PathTokens;
use crate::enums::{StrategyKind, UsernameSource};

/// The options of exactly one strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyConfig {
    Flat(FlatConfig),
    DepthBased(DepthBasedConfig),
    Heuristic(HeuristicConfig),
}

impl StrategyConfig {
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyConfig::Flat(_) => StrategyKind::Flat,
            StrategyConfig::DepthBased(_) => StrategyKind::DepthBased,
            StrategyConfig::Heuristic(_) => StrategyKind::Heuristic,
        }
    }
}

/// Fields derived from an entry's path.
///
/// `name` is never empty. An empty `folder` means the vault root and an
/// empty `url` means no URL was recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedFields {
    pub folder: String,
    pub name: String,
    pub username: String,
    pub url: String,
}

pub(crate) fn username_for(tokens: &PathTokens, source: UsernameSource) -> String {
    match source {
        UsernameSource::Filename => tokens.identifier().to_owned(),
        UsernameSource::ParentDir => tokens.immediate_parent().unwrap_or_default().to_owned(),
        UsernameSource::None => String::new(),
    }
}
