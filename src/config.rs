//! Parser configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// How leaf terms are deduplicated within one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InternPolicy {
    /// Leaves are keyed by their literal text only. An atom and a number
    /// that happen to share their text collapse into whichever node was
    /// created first.
    ByLiteral,
    /// Leaves are keyed by kind and literal text.
    ByKindAndLiteral,
}

impl Default for InternPolicy {
    fn default() -> Self {
        Self::ByLiteral
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParserConfig {
    /// The deepest allowed nesting of argument lists, unbounded if unset.
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub interning: InternPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read parser config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse parser config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ParserConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..self
        }
    }

    pub fn with_interning(self, interning: InternPolicy) -> Self {
        Self { interning, ..self }
    }
}
