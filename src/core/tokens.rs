// src/core/tokens.rs
//! Splits a store-relative path into directory segments and a leaf.

use std::path::{Component, Path};

/// A store-relative path, split for classification.
///
/// `dirs` keeps path order; `leaf` is the raw file name and `identifier`
/// is the leaf with the secret suffix removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTokens {
    dirs: Vec<String>,
    leaf: String,
    identifier: String,
}

impl PathTokens {
    /// Tokenize a relative path string using the platform separator(s).
    ///
    /// `rel_path` must name a file: the text after the last separator is the
    /// leaf, so `Work/Github/` has an empty leaf and is rejected in debug
    /// builds. Empty directory segments (`a//b`) are dropped; nothing else is
    /// normalized.
    pub fn parse(rel_path: &str, suffix: &str) -> Self {
        let mut segments = rel_path.split(std::path::is_separator);
        let leaf = segments.next_back().unwrap_or_default().to_owned();
        let dirs = segments
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        Self::from_parts(dirs, leaf, suffix)
    }

    /// Tokenize a relative `Path`, e.g. one produced by the store walker.
    ///
    /// Same contract as [`PathTokens::parse`]: the last component is the
    /// file name.
    pub fn from_path(rel_path: &Path, suffix: &str) -> Self {
        let mut segments: Vec<String> = rel_path
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        let leaf = segments.pop().unwrap_or_default();
        Self::from_parts(segments, leaf, suffix)
    }

    fn from_parts(dirs: Vec<String>, leaf: String, suffix: &str) -> Self {
        debug_assert!(!leaf.is_empty(), "store path has no file name");
        let identifier = strip_suffix(&leaf, suffix).to_owned();
        PathTokens {
            dirs,
            leaf,
            identifier,
        }
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// Leaf without its suffix; the default username
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Number of directory segments
    pub fn depth(&self) -> usize {
        self.dirs.len()
    }

    /// The directory directly enclosing the leaf
    pub fn immediate_parent(&self) -> Option<&str> {
        self.dirs.last().map(String::as_str)
    }
}

/// Remove `suffix` from `leaf` unless that would leave nothing.
pub fn strip_suffix<'a>(leaf: &'a str, suffix: &str) -> &'a str {
    match leaf.strip_suffix(suffix) {
        Some(bare) if !suffix.is_empty() && !bare.is_empty() => bare,
        _ => leaf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_dirs_and_strips_suffix() {
        let tokens = PathTokens::parse("Work/Github/alice.gpg", ".gpg");
        assert_eq!(tokens.dirs(), ["Work", "Github"]);
        assert_eq!(tokens.leaf(), "alice.gpg");
        assert_eq!(tokens.identifier(), "alice");
        assert_eq!(tokens.immediate_parent(), Some("Github"));
    }

    #[test]
    fn root_level_leaf_has_no_dirs() {
        let tokens = PathTokens::parse("alice.gpg", ".gpg");
        assert!(tokens.dirs().is_empty());
        assert_eq!(tokens.depth(), 0);
        assert_eq!(tokens.immediate_parent(), None);
        assert_eq!(tokens.identifier(), "alice");
    }

    #[test]
    fn bare_suffix_is_kept_as_identifier() {
        assert_eq!(strip_suffix(".gpg", ".gpg"), ".gpg");
        assert_eq!(strip_suffix("notes.txt", ".gpg"), "notes.txt");
        assert_eq!(strip_suffix("a.gpg.gpg", ".gpg"), "a.gpg");
    }

    #[test]
    fn keeps_whitespace_and_case() {
        let tokens = PathTokens::parse("My Bank/ Joint Account /Bob Smith.gpg", ".gpg");
        assert_eq!(tokens.dirs(), ["My Bank", " Joint Account "]);
        assert_eq!(tokens.identifier(), "Bob Smith");
    }

    #[test]
    fn empty_dir_segments_are_dropped() {
        let tokens = PathTokens::parse("Work//Github/alice.gpg", ".gpg");
        assert_eq!(tokens.dirs(), ["Work", "Github"]);
        assert_eq!(tokens.leaf(), "alice.gpg");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no file name")]
    fn trailing_separator_is_not_a_file() {
        PathTokens::parse("Work/Github/", ".gpg");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no file name")]
    fn empty_path_is_not_a_file() {
        PathTokens::parse("", ".gpg");
    }

    #[test]
    fn path_and_string_agree() {
        let path = Path::new("Cat").join("Service").join("alice.gpg");
        let from_path = PathTokens::from_path(&path, ".gpg");
        let from_str = PathTokens::parse(path.to_str().unwrap(), ".gpg");
        assert_eq!(from_path, from_str);
    }
}
