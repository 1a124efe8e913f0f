// src/config/mod.rs
//! Configuration system for pass-export
//!
//! One immutable `Config` value, built at startup from defaults, an
//! optional TOML file, `PASSWORD_STORE_DIR`, and CLI overrides.

pub use app::{expand_home, Config, OutputConfig, ParsingConfig, StoreConfig};

mod app;
mod defaults;
