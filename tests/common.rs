// tests/common.rs
//! Shared test helpers for logging, fake secrets and temp stores

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pass_export::aliases::SecretContent;
use pass_export::{ExportError, SecretSource};
use tempfile::TempDir;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; safe to call from every test
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// In-memory stand-in for `pass show`
#[derive(Default)]
pub struct FakeSource {
    secrets: HashMap<String, String>,
}

impl FakeSource {
    pub fn with(mut self, id: &str, content: &str) -> Self {
        self.secrets.insert(id.to_string(), content.to_string());
        self
    }
}

impl SecretSource for FakeSource {
    fn reveal(&self, id: &str) -> Result<SecretContent, ExportError> {
        self.secrets
            .get(id)
            .map(|s| SecretContent::new(s.clone()))
            .ok_or_else(|| ExportError::SecretRetrieval {
                id: id.to_string(),
                reason: "gpg: decryption failed: No secret key".into(),
            })
    }
}

/// Create a store under a temp dir with empty files at the given
/// `/`-separated relative paths
pub fn make_store(paths: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp store");
    for rel in paths {
        let path = rel
            .split('/')
            .fold(dir.path().to_path_buf(), |acc, seg| acc.join(seg));
        touch(&path);
    }
    dir
}

pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, b"-----BEGIN PGP MESSAGE-----").expect("write entry");
}

/// Platform-native relative path from `/`-separated segments
pub fn native(rel: &str) -> String {
    rel.split('/')
        .collect::<Vec<_>>()
        .join(std::path::MAIN_SEPARATOR_STR)
}

/// Parse exported CSV into rows of strings, header included
pub fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bytes)
        .records()
        .map(|r| r.expect("valid csv").iter().map(str::to_owned).collect())
        .collect()
}
