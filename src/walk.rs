// src/walk.rs
//! Store discovery: every encrypted entry under the store root

use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::core::tokens::strip_suffix;
use crate::core::Result;

/// One encrypted entry found in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    /// Path relative to the store root, platform separators
    pub rel_path: PathBuf,
    /// Name `pass show` expects: `/`-joined, suffix removed
    pub id: String,
}

/// List every `suffix` file under `root`, sorted by name at each level.
///
/// Hidden directories (`.git`, `.extensions`, ...) are not descended into.
pub fn discover_entries(root: &Path, suffix: &str) -> Result<Vec<StoreEntry>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("password store not found: {}", root.display()),
        )
        .into());
    }

    let mut entries = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable store path: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() || !has_suffix(&entry, suffix) {
            continue;
        }
        let Ok(rel_path) = entry.path().strip_prefix(root) else {
            continue;
        };
        entries.push(StoreEntry {
            id: pass_id(rel_path, suffix),
            rel_path: rel_path.to_path_buf(),
        });
    }

    Ok(entries)
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_string_lossy().starts_with('.')
}

fn has_suffix(entry: &DirEntry, suffix: &str) -> bool {
    entry.file_name().to_string_lossy().ends_with(suffix)
}

/// `Work/Github/alice.gpg` → `Work/Github/alice`
pub fn pass_id(rel_path: &Path, suffix: &str) -> String {
    let segments: Vec<String> = rel_path
        .iter()
        .map(|s| s.to_string_lossy().into_owned())
        .collect();
    match segments.split_last() {
        Some((leaf, dirs)) => {
            let mut parts: Vec<&str> = dirs.iter().map(String::as_str).collect();
            parts.push(strip_suffix(leaf, suffix));
            parts.join("/")
        }
        None => String::new(),
    }
}
