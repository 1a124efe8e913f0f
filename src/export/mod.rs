// src/export/mod.rs
//! Export utilities for pass-export
//!
//! Output is plaintext by nature, so warn users heavily.

pub use bitwarden::{export_store, write_csv, ExportRecord, ExportSummary};

pub mod bitwarden;
