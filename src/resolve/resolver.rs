//! Candidate resolution against a lexicon and vocabulary.

use log::debug;

use crate::lexicon::{Lexicon, SurfaceForm, Vocabulary, normalize_word};
use crate::resolve::candidate::Candidate;
use crate::resolve::config::{FuzzyPolicy, ResolverConfig};
use crate::util::levenshtein::LevenshteinMatcher;

/// Resolves words to lemma candidates.
///
/// Borrows its lexicon and vocabulary; holds no mutable state, so repeated
/// calls with the same word return the same ordered output.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    lexicon: &'a Lexicon,
    vocabulary: &'a Vocabulary,
    config: ResolverConfig,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with the default configuration.
    pub fn new(lexicon: &'a Lexicon, vocabulary: &'a Vocabulary) -> Self {
        Self::with_config(lexicon, vocabulary, ResolverConfig::default())
    }

    /// Create a resolver with a custom configuration.
    pub fn with_config(
        lexicon: &'a Lexicon,
        vocabulary: &'a Vocabulary,
        config: ResolverConfig,
    ) -> Self {
        Resolver {
            lexicon,
            vocabulary,
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a word to an ordered list of candidates.
    ///
    /// The word is case-folded first. Exact matches are returned as-is when
    /// there are any; otherwise the configured fuzzy policy runs. The result
    /// may be empty and never includes the caller's terminal options. An
    /// empty lexicon always yields an empty result, vocabulary included.
    pub fn resolve(&self, word: &str) -> Vec<Candidate> {
        let word = normalize_word(word);

        if self.lexicon.is_empty() {
            debug!("'{}': lexicon is empty, no candidates", word);
            return Vec::new();
        }

        let exact = self.exact_pass(&word);
        if !exact.is_empty() {
            debug!("'{}': {} exact candidate(s)", word, exact.len());
            return exact;
        }

        let fuzzy = match self.config.policy {
            FuzzyPolicy::Ranked => self.ranked_pass(&word),
            FuzzyPolicy::Nearest => self.nearest_pass(&word),
        };
        debug!(
            "'{}': no exact match, {} fuzzy candidate(s) ({:?})",
            word,
            fuzzy.len(),
            self.config.policy
        );
        fuzzy
    }

    fn exact_pass(&self, word: &str) -> Vec<Candidate> {
        self.lexicon
            .exact_matches(word)
            .into_iter()
            .map(|hit| Candidate::exact(word, hit))
            .collect()
    }

    fn ranked_pass(&self, word: &str) -> Vec<Candidate> {
        let matcher = LevenshteinMatcher::new(word);

        let mut scored: Vec<(usize, SurfaceForm<'_>)> = self
            .lexicon
            .surface_forms()
            .map(|surface| (matcher.distance(surface.form), surface))
            .collect();

        // Stable: equal distances keep flattening order
        scored.sort_by_key(|(distance, _)| *distance);

        scored
            .into_iter()
            .take(self.config.max_suggestions)
            .map(|(distance, surface)| Candidate::fuzzy(surface, distance))
            .collect()
    }

    fn nearest_pass(&self, word: &str) -> Vec<Candidate> {
        let matcher = LevenshteinMatcher::new(word);
        let threshold = self.config.threshold;

        let forms: Vec<SurfaceForm<'_>> = self.lexicon.surface_forms().collect();
        if let Some((index, distance)) = matcher.nearest(forms.iter().map(|surface| surface.form))
        {
            if distance <= threshold {
                return vec![Candidate::fuzzy(forms[index], distance)];
            }
            debug!(
                "'{}': nearest form '{}' at {} exceeds threshold {}",
                word, forms[index].form, distance, threshold
            );
        }

        let words = self.vocabulary.words();
        if let Some((index, distance)) = matcher.nearest(words.iter().map(String::as_str)) {
            if distance <= threshold {
                return vec![Candidate::vocabulary(&words[index], distance)];
            }
            debug!(
                "'{}': nearest vocabulary word '{}' at {} exceeds threshold {}",
                word, words[index], distance, threshold
            );
        }

        Vec::new()
    }
}

/// Resolve `word` in one call without keeping a [`Resolver`] around.
pub fn resolve(
    word: &str,
    lexicon: &Lexicon,
    vocabulary: &Vocabulary,
    config: &ResolverConfig,
) -> Vec<Candidate> {
    Resolver::with_config(lexicon, vocabulary, config.clone()).resolve(word)
}
