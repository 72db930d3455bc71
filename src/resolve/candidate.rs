//! Resolver output items.

use serde::Serialize;

use crate::lexicon::{ExactMatch, MatchField, SurfaceForm};

/// How a candidate was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The word is a registered surface form.
    Form,
    /// The word is a canonical lemma.
    Lemma,
    /// Approximate match on a surface form.
    Fuzzy,
    /// Approximate match on a bare vocabulary word.
    Vocabulary,
}

/// One annotation candidate offered to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Human-readable description of the match.
    pub label: String,
    /// Value to assign.
    pub lemma: String,
    /// Concept URI, when the lexicon provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// How the candidate was found.
    pub kind: MatchKind,
    /// The lexicon string that matched.
    pub matched: String,
    /// Edit distance used for ranking only.
    #[serde(skip)]
    distance: usize,
}

impl Candidate {
    /// Candidate for an exact hit on `word`.
    pub fn exact(word: &str, hit: ExactMatch<'_>) -> Self {
        let (kind, tag) = match hit.field {
            MatchField::Form => (MatchKind::Form, "form"),
            MatchField::Lemma => (MatchKind::Lemma, "lemma"),
        };

        Candidate {
            label: format!("{word} ({tag}) → {}", hit.record.target()),
            lemma: hit.record.lemma.clone(),
            reference: hit.record.reference.clone(),
            kind,
            matched: word.to_string(),
            distance: 0,
        }
    }

    /// Candidate for an approximate hit on a lexicon surface form.
    pub fn fuzzy(surface: SurfaceForm<'_>, distance: usize) -> Self {
        Candidate {
            label: format!("{} (form) → {}", surface.form, surface.record.target()),
            lemma: surface.record.lemma.clone(),
            reference: surface.record.reference.clone(),
            kind: MatchKind::Fuzzy,
            matched: surface.form.to_string(),
            distance,
        }
    }

    /// Candidate suggesting a vocabulary word as its own lemma.
    pub fn vocabulary(word: &str, distance: usize) -> Self {
        Candidate {
            label: format!("{word} (vocabulary)"),
            lemma: word.to_string(),
            reference: None,
            kind: MatchKind::Vocabulary,
            matched: word.to_string(),
            distance,
        }
    }

    pub(crate) fn distance(&self) -> usize {
        self.distance
    }
}
