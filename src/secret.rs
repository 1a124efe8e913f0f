// src/secret.rs
//! Secret retrieval, the boundary to `pass`/`gpg`
//!
//! Decryption is delegated to the `pass` command; this module only runs it
//! and splits what comes back into a password and notes.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::aliases::{LoginPassword, SecretContent};
use crate::consts::STORE_DIR_ENV_VAR;
use crate::core::Result;
use crate::error::ExportError;

/// Anything that can turn a `pass` identifier into decrypted content
pub trait SecretSource {
    fn reveal(&self, id: &str) -> Result<SecretContent>;
}

/// Runs `pass show <id>` against a given store directory
#[derive(Debug, Clone)]
pub struct PassCommand {
    program: String,
    store_dir: PathBuf,
}

impl PassCommand {
    pub fn new(store_dir: impl Into<PathBuf>) -> Self {
        PassCommand {
            program: "pass".into(),
            store_dir: store_dir.into(),
        }
    }

    /// Use a different executable, e.g. a wrapper script
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl SecretSource for PassCommand {
    fn reveal(&self, id: &str) -> Result<SecretContent> {
        let output = Command::new(&self.program)
            .arg("show")
            .arg(id)
            .env(STORE_DIR_ENV_VAR, &self.store_dir)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ExportError::SecretRetrieval {
                id: id.to_string(),
                reason: format!("failed to run {}: {e}", self.program),
            })?;

        if !output.status.success() {
            return Err(ExportError::SecretRetrieval {
                id: id.to_string(),
                reason: format!("{} exited with {}", self.program, output.status),
            });
        }

        Ok(SecretContent::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}

/// Split decrypted content into the password (first line) and notes (the
/// remaining lines, `\n`-joined).
pub fn split_content(content: &SecretContent) -> (LoginPassword, String) {
    let mut lines = content.expose_secret().lines();
    let password = lines.next().unwrap_or_default().to_owned();
    let notes = lines.collect::<Vec<_>>().join("\n");
    (LoginPassword::new(password), notes)
}
