// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which parsing strategy
//! runs, where a username comes from, how flat names are composed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Identifier of a parsing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Heuristic,
    DepthBased,
    Flat,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Heuristic,
        StrategyKind::DepthBased,
        StrategyKind::Flat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::DepthBased => "depth-based",
            StrategyKind::Flat => "flat",
        }
    }

    /// One-line summary shown by `--list-strategies`
    pub fn description(self) -> &'static str {
        match self {
            StrategyKind::Heuristic => "Smart detection, adapts to mixed structures (recommended)",
            StrategyKind::DepthBased => "Fixed depth levels, for consistent hierarchies",
            StrategyKind::Flat => "All entries in one folder, simple import",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ExportError::UnknownStrategy(s.to_string()))
    }
}

/// Where the login username is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UsernameSource {
    /// The entry file name without its suffix
    #[default]
    Filename,
    /// The directory directly enclosing the entry
    ParentDir,
    /// Leave the username empty
    None,
}

/// How the flat strategy names an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NameFrom {
    /// Directories plus identifier, joined by `/`
    #[default]
    FullPath,
    /// Just the identifier
    Filename,
}
