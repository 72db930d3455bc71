//! # lemmatag
//!
//! Annotate a word with a normalized lemma drawn from a small lexicon, with
//! approximate string matching when the word has no exact entry.
//!
//! ## Features
//!
//! - Levenshtein edit distance over Unicode characters
//! - Grouped (concept, lemma, forms) and flat (word to lemma) lexicons behind
//!   one representation
//! - Exact form/lemma matching with two explicit fuzzy fallback policies
//! - A caller layer for editors: word extraction, picker boundary, TEI markup
//!
//! ```
//! use lemmatag::lexicon::{Lexicon, Vocabulary};
//! use lemmatag::resolve::Resolver;
//!
//! let vocabulary = Vocabulary::new();
//! let resolver = Resolver::new(Lexicon::builtin(), &vocabulary);
//!
//! let candidates = resolver.resolve("Inarcature");
//! assert_eq!(candidates[0].lemma, "inarcatura");
//! ```

pub mod annotate;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod resolve;
pub mod util;

pub mod prelude {
    pub use crate::annotate::{AnnotationOutcome, Annotator, Picker, PickerOption, WordTarget};
    pub use crate::config::Config;
    pub use crate::error::{LemmatagError, Result};
    pub use crate::lexicon::{Lexicon, LexiconEntry, Vocabulary};
    pub use crate::resolve::{Candidate, FuzzyPolicy, MatchKind, Resolver, ResolverConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
