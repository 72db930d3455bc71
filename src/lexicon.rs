//! Lexicon data for word annotation.
//!
//! Two lexicon shapes are supported: grouped entries (a concept, its canonical
//! lemma and the surface forms mapping to it) and flat `word -> lemma`
//! mappings. Both are normalized into a single [`Lexicon`] so the resolver only
//! ever deals with one representation. Bare vocabulary words without a lemma
//! live in a separate [`Vocabulary`].

pub mod builtin;
pub mod entry;
pub mod store;
pub mod vocabulary;

// Re-export commonly used types
pub use entry::*;
pub use store::*;
pub use vocabulary::*;
