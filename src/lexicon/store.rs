//! The unified, immutable lexicon.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::{LemmatagError, Result};
use crate::lexicon::entry::{DEFAULT_REFERENCE_BASE, LexiconEntry, Record, normalize_word};

/// Which field of a record an exact match was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    /// The word is one of the record's surface forms.
    Form,
    /// The word equals the record's lemma.
    Lemma,
}

/// An exact hit on a lexicon record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactMatch<'a> {
    pub record: &'a Record,
    pub field: MatchField,
}

/// One searchable surface form together with the record that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceForm<'a> {
    pub form: &'a str,
    pub record: &'a Record,
}

/// On-disk lexicon shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LexiconFile {
    Grouped(Vec<LexiconEntry>),
    Flat(serde_json::Map<String, serde_json::Value>),
}

/// Immutable lexicon built once and shared by reference.
///
/// Records keep insertion order. Exact lookups go through two hash indexes
/// (form and lemma) that map a case-folded word to the records containing it.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    records: Vec<Record>,
    form_index: AHashMap<String, Vec<usize>>,
    lemma_index: AHashMap<String, Vec<usize>>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from grouped entries, deriving missing references from
    /// [`DEFAULT_REFERENCE_BASE`].
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LexiconEntry>,
    {
        Self::from_entries_with_base(entries, DEFAULT_REFERENCE_BASE)
    }

    /// Build a lexicon from grouped entries, deriving missing references as
    /// `<base><concept>`. Entries with a blank lemma are skipped.
    pub fn from_entries_with_base<I>(entries: I, reference_base: &str) -> Self
    where
        I: IntoIterator<Item = LexiconEntry>,
    {
        let mut lexicon = Lexicon::new();
        for entry in entries {
            let reference = entry
                .reference
                .unwrap_or_else(|| format!("{reference_base}{}", entry.concept));
            lexicon.push(Record {
                lemma: entry.lemma,
                concept: Some(entry.concept),
                reference: Some(reference),
                forms: entry.forms,
            });
        }
        lexicon
    }

    /// Build a lexicon from a flat `word -> lemma` mapping.
    ///
    /// Each pair becomes a record with one form and no concept or reference.
    /// Pairs with a blank lemma are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut lexicon = Lexicon::new();
        for (word, lemma) in pairs {
            lexicon.push(Record {
                lemma: lemma.into(),
                concept: None,
                reference: None,
                forms: vec![word.into()],
            });
        }
        lexicon
    }

    /// Parse a lexicon from JSON text.
    ///
    /// An array of `{concept, lemma, forms, reference?}` objects is read as
    /// grouped entries; an object is read as a flat `word -> lemma` mapping
    /// whose key order is preserved.
    pub fn from_json_str(json: &str, reference_base: &str) -> Result<Self> {
        let lexicon = match serde_json::from_str::<LexiconFile>(json)? {
            LexiconFile::Grouped(entries) => {
                for entry in &entries {
                    if entry.lemma.trim().is_empty() {
                        return Err(LemmatagError::lexicon(format!(
                            "entry for concept '{}' has an empty lemma",
                            entry.concept
                        )));
                    }
                }
                Self::from_entries_with_base(entries, reference_base)
            }
            LexiconFile::Flat(map) => {
                let mut pairs = Vec::with_capacity(map.len());
                for (word, value) in map {
                    match value {
                        serde_json::Value::String(lemma) if lemma.trim().is_empty() => {
                            return Err(LemmatagError::lexicon(format!(
                                "value for '{word}' is an empty lemma"
                            )));
                        }
                        serde_json::Value::String(lemma) => pairs.push((word, lemma)),
                        other => {
                            return Err(LemmatagError::lexicon(format!(
                                "value for '{word}' must be a string, found {other}"
                            )));
                        }
                    }
                }
                Self::from_pairs(pairs)
            }
        };

        Ok(lexicon)
    }

    /// Load a lexicon file from disk.
    pub fn load<P: AsRef<Path>>(path: P, reference_base: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let lexicon = Self::from_json_str(&content, reference_base)?;
        info!(
            "Loaded lexicon {}: {} records, {} forms",
            path.display(),
            lexicon.len(),
            lexicon.form_count()
        );
        Ok(lexicon)
    }

    fn push(&mut self, mut record: Record) {
        let lemma_key = normalize_word(&record.lemma);
        if lemma_key.is_empty() {
            warn!("Skipping record with an empty lemma (forms {:?})", record.forms);
            return;
        }

        let index = self.records.len();

        let mut forms: Vec<String> = Vec::with_capacity(record.forms.len());
        for form in record.forms.drain(..) {
            let form = normalize_word(&form);
            if form.is_empty() || forms.contains(&form) {
                continue;
            }
            forms.push(form);
        }
        record.forms = forms;

        for form in &record.forms {
            self.form_index.entry(form.clone()).or_default().push(index);
        }

        let lemma_slots = self.lemma_index.entry(lemma_key).or_default();
        if !lemma_slots.is_empty() {
            warn!("Lemma '{}' appears in more than one record", record.lemma);
        }
        lemma_slots.push(index);

        debug!(
            "Lexicon record {}: lemma={} forms={:?}",
            index, record.lemma, record.forms
        );
        self.records.push(record);
    }

    /// Exact hits for an already normalized word, in record order.
    ///
    /// A record matching on both a form and its lemma yields two hits, the
    /// form hit first.
    pub fn exact_matches(&self, word: &str) -> Vec<ExactMatch<'_>> {
        let by_form = self.form_index.get(word);
        let by_lemma = self.lemma_index.get(word);

        let indices: BTreeSet<usize> = by_form
            .into_iter()
            .chain(by_lemma)
            .flatten()
            .copied()
            .collect();

        let mut matches = Vec::new();
        for index in indices {
            let record = &self.records[index];
            if by_form.is_some_and(|hits| hits.contains(&index)) {
                matches.push(ExactMatch {
                    record,
                    field: MatchField::Form,
                });
            }
            if by_lemma.is_some_and(|hits| hits.contains(&index)) {
                matches.push(ExactMatch {
                    record,
                    field: MatchField::Lemma,
                });
            }
        }
        matches
    }

    /// Every surface form, flattened in record order then form order.
    pub fn surface_forms(&self) -> impl Iterator<Item = SurfaceForm<'_>> + '_ {
        self.records.iter().flat_map(|record| {
            record
                .forms
                .iter()
                .map(move |form| SurfaceForm { form, record })
        })
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the lexicon has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of searchable surface forms.
    pub fn form_count(&self) -> usize {
        self.records.iter().map(|record| record.forms.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        Lexicon::from_entries(vec![
            LexiconEntry::new(
                "enjambement",
                "inarcatura",
                ["inarcature", "inarcamenti", "inarcare"],
            ),
            LexiconEntry::new("enjambement", "slittamento", ["slittamenti", "slittare"]),
            LexiconEntry::new("metafora", "traslato", ["traslazione", "traslati", "metafore"]),
        ])
    }

    #[test]
    fn test_exact_form_match() {
        let lexicon = sample();
        let matches = lexicon.exact_matches("slittare");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].field, MatchField::Form);
        assert_eq!(matches[0].record.lemma, "slittamento");
        assert_eq!(
            matches[0].record.reference.as_deref(),
            Some("http://example.org/skos/enjambement")
        );
    }

    #[test]
    fn test_exact_lemma_match() {
        let lexicon = sample();
        let matches = lexicon.exact_matches("traslato");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].field, MatchField::Lemma);
    }

    #[test]
    fn test_record_matching_form_and_lemma_yields_both() {
        let lexicon = Lexicon::from_entries(vec![LexiconEntry::new(
            "figura",
            "chiasmo",
            ["chiasmo", "chiasmi"],
        )]);
        let matches = lexicon.exact_matches("chiasmo");

        let fields: Vec<MatchField> = matches.iter().map(|m| m.field).collect();
        assert_eq!(fields, vec![MatchField::Form, MatchField::Lemma]);
    }

    #[test]
    fn test_exact_matches_follow_record_order() {
        let lexicon = Lexicon::from_entries(vec![
            LexiconEntry::new("a", "primo", ["comune"]),
            LexiconEntry::new("b", "comune", Vec::<String>::new()),
            LexiconEntry::new("c", "terzo", ["comune"]),
        ]);
        let lemmas: Vec<&str> = lexicon
            .exact_matches("comune")
            .iter()
            .map(|m| m.record.lemma.as_str())
            .collect();

        assert_eq!(lemmas, vec!["primo", "comune", "terzo"]);
    }

    #[test]
    fn test_forms_are_normalized_and_deduplicated() {
        let lexicon = Lexicon::from_entries(vec![LexiconEntry::new(
            "metafora",
            "traslato",
            ["Traslati", "traslati ", "", "METAFORE"],
        )]);

        assert_eq!(lexicon.records()[0].forms, vec!["traslati", "metafore"]);
        assert_eq!(lexicon.form_count(), 2);
        assert_eq!(lexicon.exact_matches("metafore").len(), 1);
    }

    #[test]
    fn test_surface_forms_order() {
        let lexicon = sample();
        let forms: Vec<&str> = lexicon.surface_forms().map(|f| f.form).collect();

        assert_eq!(
            forms,
            vec![
                "inarcature",
                "inarcamenti",
                "inarcare",
                "slittamenti",
                "slittare",
                "traslazione",
                "traslati",
                "metafore",
            ]
        );
    }

    #[test]
    fn test_from_pairs() {
        let lexicon = Lexicon::from_pairs([("fo", "so"), ("fuch", "such")]);

        assert_eq!(lexicon.len(), 2);
        let matches = lexicon.exact_matches("fuch");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].record.lemma, "such");
        assert!(matches[0].record.concept.is_none());
        assert!(matches[0].record.reference.is_none());
    }

    #[test]
    fn test_from_json_grouped() {
        let json = r#"[
            {"concept": "metafora", "lemma": "traslato", "forms": ["traslati"]},
            {"concept": "ironia", "lemma": "antifrasi", "forms": [], "reference": "urn:ironia"}
        ]"#;
        let lexicon = Lexicon::from_json_str(json, "urn:test:").unwrap();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(
            lexicon.records()[0].reference.as_deref(),
            Some("urn:test:metafora")
        );
        assert_eq!(lexicon.records()[1].reference.as_deref(), Some("urn:ironia"));
    }

    #[test]
    fn test_from_json_flat_preserves_order() {
        let json = r#"{"zeta": "z", "alpha": "a", "mid": "m"}"#;
        let lexicon = Lexicon::from_json_str(json, DEFAULT_REFERENCE_BASE).unwrap();

        let forms: Vec<&str> = lexicon.surface_forms().map(|f| f.form).collect();
        assert_eq!(forms, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_json_rejects_bad_data() {
        let err = Lexicon::from_json_str(r#"{"fo": 3}"#, DEFAULT_REFERENCE_BASE).unwrap_err();
        assert!(matches!(err, LemmatagError::Lexicon(_)));

        let err = Lexicon::from_json_str(
            r#"[{"concept": "x", "lemma": "  ", "forms": []}]"#,
            DEFAULT_REFERENCE_BASE,
        )
        .unwrap_err();
        assert!(matches!(err, LemmatagError::Lexicon(_)));

        let err = Lexicon::from_json_str("42", DEFAULT_REFERENCE_BASE).unwrap_err();
        assert!(matches!(err, LemmatagError::Json(_)));
    }

    #[test]
    fn test_empty_lemmas_never_indexed() {
        let err = Lexicon::from_json_str(r#"{"fo": "", "fa": "sa"}"#, DEFAULT_REFERENCE_BASE)
            .unwrap_err();
        assert!(matches!(err, LemmatagError::Lexicon(_)));

        let lexicon = Lexicon::from_pairs([("fo", " "), ("fa", "sa")]);
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.exact_matches("").is_empty());
        assert!(lexicon.exact_matches("fo").is_empty());

        let lexicon = Lexicon::from_entries(vec![
            LexiconEntry::new("x", "", ["vuoto"]),
            LexiconEntry::new("metafora", "traslato", ["traslati"]),
        ]);
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.records()[0].lemma, "traslato");
        assert!(lexicon.exact_matches("").is_empty());
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_empty());
        assert!(lexicon.exact_matches("anything").is_empty());
        assert_eq!(lexicon.surface_forms().count(), 0);
    }
}
