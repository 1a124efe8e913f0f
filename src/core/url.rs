// src/core/url.rs
//! URL-like segment detection
//!
//! A heuristic, not a validator: a segment is URL-like when the configured
//! pattern matches it from its first to its last character.

use regex::Regex;

use crate::core::Result;

#[derive(Debug, Clone)]
pub struct UrlSniffer {
    pattern: Regex,
}

impl UrlSniffer {
    pub fn new(pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{pattern})$");
        Ok(UrlSniffer {
            pattern: Regex::new(&anchored)?,
        })
    }

    pub fn is_url(&self, segment: &str) -> bool {
        !segment.is_empty() && self.pattern.is_match(segment)
    }

    /// `segment` itself when it looks like a URL, otherwise empty
    pub fn sniff(&self, segment: &str) -> String {
        if self.is_url(segment) {
            segment.to_owned()
        } else {
            String::new()
        }
    }
}
