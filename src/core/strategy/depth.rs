// src/core/strategy/depth.rs
//! DepthBased: fixed, positional hierarchy.
//!
//! Example with `folder_levels = [0]`, `name_level = 1`:
//! `Category/Service/user.gpg` → folder `Category`, name `Service`.

use serde::Deserialize;

use super::{username_for, ClassifiedFields};
use crate::consts::DEFAULT_URL_PATTERN;
use crate::core::tokens::PathTokens;
use crate::core::url::UrlSniffer;
use crate::core::util::join_segments;
use crate::core::Result;
use crate::enums::UsernameSource;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepthBasedConfig {
    /// Directory levels combined into the folder, in this order
    pub folder_levels: Vec<usize>,
    /// Directory level holding the item name (0-indexed)
    pub name_level: usize,
    pub username_from: UsernameSource,
    pub url_pattern: String,
}

impl Default for DepthBasedConfig {
    fn default() -> Self {
        DepthBasedConfig {
            folder_levels: vec![0],
            name_level: 1,
            username_from: UsernameSource::Filename,
            url_pattern: DEFAULT_URL_PATTERN.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DepthBased {
    config: DepthBasedConfig,
    sniffer: UrlSniffer,
}

impl DepthBased {
    pub fn new(config: DepthBasedConfig) -> Result<Self> {
        let sniffer = UrlSniffer::new(&config.url_pattern)?;
        Ok(DepthBased { config, sniffer })
    }

    pub fn classify(&self, tokens: &PathTokens) -> ClassifiedFields {
        let dirs = tokens.dirs();
        let username = username_for(tokens, self.config.username_from);

        // Levels deeper than this path are skipped, not an error
        let folder = join_segments(
            self.config
                .folder_levels
                .iter()
                .filter_map(|&level| dirs.get(level))
                .map(String::as_str),
        );

        let name = match dirs.get(self.config.name_level) {
            Some(segment) => segment.clone(),
            None if !username.is_empty() => username.clone(),
            None => tokens.identifier().to_owned(),
        };

        let url = self.sniffer.sniff(&name);

        ClassifiedFields {
            folder,
            name,
            username,
            url,
        }
    }
}
