// src/lib.rs
//! pass-export: turn a pass (password-store) tree into a Bitwarden CSV
//!
//! Features:
//! - Three path classification strategies: heuristic, depth-based, flat
//! - URL detection on item names
//! - Decrypted material kept in secure-gate wrappers until written

pub mod aliases;
pub mod cli;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod export;
pub mod secret;
pub mod walk;

pub mod error;

// Re-export everything users need at the crate root
pub use config::Config;
pub use core::{ClassifiedFields, Classifier, PathTokens, StrategyConfig, UrlSniffer};
pub use enums::{NameFrom, StrategyKind, UsernameSource};
pub use error::ExportError;
pub use export::{export_store, ExportSummary};
pub use secret::{PassCommand, SecretSource};
