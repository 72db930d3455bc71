//! Configuration file support.
//!
//! A single JSON document groups the settings of every layer. Every section
//! and field is optional and falls back to its default:
//!
//! ```json
//! {
//!   "resolver": { "policy": "nearest", "threshold": 2 },
//!   "lexicon": { "reference_base": "http://example.org/skos/" },
//!   "annotator": { "unknown_lemma": "sconosciuto", "markup": { "element": "w" } }
//! }
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::annotate::AnnotatorConfig;
use crate::error::{LemmatagError, Result};
use crate::lexicon::DEFAULT_REFERENCE_BASE;
use crate::resolve::ResolverConfig;

/// Lexicon loading settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Prefix used to derive concept references for entries that have none.
    pub reference_base: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        LexiconConfig {
            reference_base: DEFAULT_REFERENCE_BASE.to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub resolver: ResolverConfig,
    pub lexicon: LexiconConfig,
    pub annotator: AnnotatorConfig,
}

impl Config {
    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.resolver.validate()?;
        self.annotator.validate()?;
        if self.lexicon.reference_base.trim().is_empty() {
            return Err(LemmatagError::config("reference_base must not be empty"));
        }
        Ok(())
    }
}
