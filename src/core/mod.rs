// src/core/mod.rs
pub mod dispatch;
pub mod strategy;
pub mod tokens;
pub mod url;
pub mod util;

pub use dispatch::Classifier;
pub use strategy::{ClassifiedFields, StrategyConfig};
pub use tokens::PathTokens;
pub use url::UrlSniffer;

pub type Result<T> = std::result::Result<T, crate::error::ExportError>;
