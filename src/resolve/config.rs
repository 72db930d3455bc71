//! Resolver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{LemmatagError, Result};

/// Fuzzy fallback used when the exact pass finds nothing.
///
/// The two policies answer the same ambiguous input differently, so exactly
/// one of them runs per resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuzzyPolicy {
    /// Every lexicon form ranked by ascending distance, truncated to
    /// `max_suggestions`. No threshold.
    #[default]
    Ranked,
    /// The single nearest lexicon form if it is within `threshold`, otherwise
    /// the nearest vocabulary word under the same rule.
    Nearest,
}

/// Configuration for candidate resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Fuzzy fallback policy.
    pub policy: FuzzyPolicy,
    /// Maximum number of fuzzy candidates under [`FuzzyPolicy::Ranked`].
    pub max_suggestions: usize,
    /// Maximum accepted edit distance under [`FuzzyPolicy::Nearest`].
    pub threshold: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            policy: FuzzyPolicy::Ranked,
            max_suggestions: 5,
            threshold: 2,
        }
    }
}

impl ResolverConfig {
    /// Reject settings that can never produce a suggestion.
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(LemmatagError::config(
                "max_suggestions must be greater than zero",
            ));
        }
        Ok(())
    }
}
