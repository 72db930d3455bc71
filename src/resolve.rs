//! Word normalization: from a raw word to ranked lemma candidates.
//!
//! Resolution runs an exact pass over lexicon forms and lemmas and, only when
//! that finds nothing, one fuzzy pass chosen by [`FuzzyPolicy`]. It is a pure
//! function of its inputs.

pub mod candidate;
pub mod config;
pub mod resolver;

// Re-export commonly used types
pub use candidate::*;
pub use config::*;
pub use resolver::*;
