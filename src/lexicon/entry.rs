//! Lexicon entry and record types.

use serde::{Deserialize, Serialize};

/// Base URI used to derive concept references when an entry has none.
pub const DEFAULT_REFERENCE_BASE: &str = "http://example.org/skos/";

/// A concept/lemma record as written in a grouped lexicon file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Semantic category, e.g. "enjambement".
    pub concept: String,
    /// Canonical lemma assigned to every form of this entry.
    pub lemma: String,
    /// Inflected or alternate spellings mapping to the lemma.
    #[serde(default)]
    pub forms: Vec<String>,
    /// Explicit concept URI. Derived from the concept when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl LexiconEntry {
    /// Create a new entry without an explicit reference.
    pub fn new<C, L, I, F>(concept: C, lemma: L, forms: I) -> Self
    where
        C: Into<String>,
        L: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        LexiconEntry {
            concept: concept.into(),
            lemma: lemma.into(),
            forms: forms.into_iter().map(Into::into).collect(),
            reference: None,
        }
    }

    /// Set an explicit reference URI.
    pub fn with_reference<S: Into<String>>(mut self, reference: S) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// Normalized lexicon record shared by both lexicon shapes.
///
/// Grouped entries keep their concept and reference; flat mappings produce
/// records with a single form and neither concept nor reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Value assigned when this record is chosen.
    pub lemma: String,
    /// Owning concept, if the record came from a grouped entry.
    pub concept: Option<String>,
    /// Concept URI, if any.
    pub reference: Option<String>,
    /// Case-folded surface forms, deduplicated, in insertion order.
    pub forms: Vec<String>,
}

impl Record {
    /// What a candidate from this record points at in its label: the concept
    /// when there is one, the lemma otherwise.
    pub fn target(&self) -> &str {
        self.concept.as_deref().unwrap_or(&self.lemma)
    }
}

/// Case-fold a word the same way for lexicon data and queries.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}
