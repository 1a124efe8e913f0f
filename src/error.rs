// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown parsing strategy: {0} (expected heuristic, depth-based or flat)")]
    UnknownStrategy(String),

    #[error("Invalid URL detection pattern: {0}")]
    InvalidUrlPattern(#[from] regex::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Could not reveal secret {id}: {reason}")]
    SecretRetrieval { id: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ExportError {
    /// Configuration errors abort the export before any entry is touched.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ExportError::UnknownStrategy(_) | ExportError::InvalidUrlPattern(_)
        )
    }
}
