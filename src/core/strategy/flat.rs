// src/core/strategy/flat.rs
//! Flat: ignore the hierarchy, put everything in one folder.

use serde::Deserialize;

use super::ClassifiedFields;
use crate::consts::DEFAULT_FLAT_FOLDER;
use crate::core::tokens::PathTokens;
use crate::core::util::join_segments;
use crate::enums::NameFrom;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlatConfig {
    pub default_folder: String,
    pub name_from: NameFrom,
}

impl Default for FlatConfig {
    fn default() -> Self {
        FlatConfig {
            default_folder: DEFAULT_FLAT_FOLDER.into(),
            name_from: NameFrom::FullPath,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Flat {
    config: FlatConfig,
}

impl Flat {
    pub fn new(config: FlatConfig) -> Self {
        Flat { config }
    }

    pub fn classify(&self, tokens: &PathTokens) -> ClassifiedFields {
        let username = tokens.identifier().to_owned();
        let name = match self.config.name_from {
            NameFrom::FullPath => join_segments(
                tokens
                    .dirs()
                    .iter()
                    .map(String::as_str)
                    .chain(std::iter::once(tokens.identifier())),
            ),
            NameFrom::Filename => username.clone(),
        };

        ClassifiedFields {
            folder: self.config.default_folder.clone(),
            name,
            username,
            url: String::new(),
        }
    }
}
