// src/core/strategy/heuristic.rs
//! Heuristic: whatever directly contains the secret is its name.
//!
//! `Work/Github/alice.gpg` → folder `Work`, name `Github`, user `alice`.
//! Everything above the immediate parent becomes the folder. A lone
//! directory is the folder only while `min_folder_depth` is 0.

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
pub struct HeuristicConfig {
    pub url_pattern: String,
    /// 0: a single directory is also the folder; 1: it is only the name
    pub min_folder_depth: usize,
    pub username_from: UsernameSource,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig {
            url_pattern: DEFAULT_URL_PATTERN.into(),
            min_folder_depth: 0,
            username_from: UsernameSource::Filename,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Heuristic {
    config: HeuristicConfig,
    sniffer: UrlSniffer,
}

impl Heuristic {
    pub fn new(config: HeuristicConfig) -> Result<Self> {
        let sniffer = UrlSniffer::new(&config.url_pattern)?;
        Ok(Heuristic { config, sniffer })
    }

    pub fn classify(&self, tokens: &PathTokens) -> ClassifiedFields {
        let dirs = tokens.dirs();

        let Some((parent, ancestors)) = dirs.split_last() else {
            let identifier = tokens.identifier().to_owned();
            return ClassifiedFields {
                folder: String::new(),
                name: identifier.clone(),
                username: identifier,
                url: String::new(),
            };
        };

        let username = username_for(tokens, self.config.username_from);
        let name = parent.clone();

        let folder = if !ancestors.is_empty() {
            join_segments(ancestors.iter().map(String::as_str))
        } else if self.config.min_folder_depth == 0 {
            parent.clone()
        } else {
            String::new()
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
