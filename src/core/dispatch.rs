// src/core/dispatch.rs
//! Routes every entry to the one active strategy.

use tracing::debug;

use crate::core::strategy::{ClassifiedFields, DepthBased, Flat, Heuristic, StrategyConfig};
use crate::core::tokens::PathTokens;
use crate::core::Result;
use crate::enums::StrategyKind;

/// A ready-to-run strategy.
///
/// Building one compiles any URL pattern, so every configuration error
/// surfaces here, before the first entry is classified.
#[derive(Debug, Clone)]
pub enum Classifier {
    Flat(Flat),
    DepthBased(DepthBased),
    Heuristic(Heuristic),
}

impl Classifier {
    pub fn new(config: StrategyConfig) -> Result<Self> {
        let classifier = match config {
            StrategyConfig::Flat(c) => Classifier::Flat(Flat::new(c)),
            StrategyConfig::DepthBased(c) => Classifier::DepthBased(DepthBased::new(c)?),
            StrategyConfig::Heuristic(c) => Classifier::Heuristic(Heuristic::new(c)?),
        };
        debug!("Using '{}' parsing strategy", classifier.kind());
        Ok(classifier)
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Classifier::Flat(_) => StrategyKind::Flat,
            Classifier::DepthBased(_) => StrategyKind::DepthBased,
            Classifier::Heuristic(_) => StrategyKind::Heuristic,
        }
    }

    pub fn classify(&self, tokens: &PathTokens) -> ClassifiedFields {
        match self {
            Classifier::Flat(s) => s.classify(tokens),
            Classifier::DepthBased(s) => s.classify(tokens),
            Classifier::Heuristic(s) => s.classify(tokens),
        }
    }

    /// Tokenize and classify a store-relative path string
    pub fn classify_path(&self, rel_path: &str, suffix: &str) -> ClassifiedFields {
        self.classify(&PathTokens::parse(rel_path, suffix))
    }
}
