//! Plain vocabulary word lists.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use log::info;

use crate::error::Result;
use crate::lexicon::entry::normalize_word;

/// Words with no associated lemma, used only as fuzzy-match candidates.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    word_set: AHashSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from words. Words are case-folded; empty words and
    /// duplicates are skipped, first occurrence wins.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Vocabulary::new();
        for word in words {
            vocabulary.insert(word.as_ref());
        }
        vocabulary
    }

    /// Parse a word list with one word per line. Blank lines and lines
    /// starting with `#` are ignored.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines().filter(|line| is_word_line(line)))
    }

    /// Load a word list file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);

        let mut vocabulary = Vocabulary::new();
        for line in reader.lines() {
            let line = line?;
            if is_word_line(&line) {
                vocabulary.insert(&line);
            }
        }

        info!(
            "Loaded vocabulary {}: {} words",
            path.display(),
            vocabulary.len()
        );
        Ok(vocabulary)
    }

    fn insert(&mut self, word: &str) {
        let word = normalize_word(word);
        if !word.is_empty() && self.word_set.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// Words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_word_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}
