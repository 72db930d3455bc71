//! Levenshtein edit distance.
//!
//! Distances are counted in Unicode scalar values, not bytes, so `"è"` and
//! `"e"` are one substitution apart. Case folding is left to callers.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions, deletions
/// or substitutions) required to change one string into the other. Only two
/// rows of the dynamic-programming matrix are kept, sized by the shorter input.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let mut long: Vec<char> = s1.chars().collect();
    let mut short: Vec<char> = s2.chars().collect();
    if short.len() > long.len() {
        std::mem::swap(&mut long, &mut short);
    }

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let cost = if lc == sc { 0 } else { 1 };

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold.
pub fn levenshtein_distance_within(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    // The length difference is a lower bound on the distance
    if len1.abs_diff(len2) > threshold {
        return None;
    }

    if len1 == 0 || len2 == 0 {
        return Some(len1.max(len2));
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Row minima never decrease, so the final distance is already too large
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}

/// A query string compared against many candidates.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new<S: Into<String>>(query: S) -> Self {
        LevenshteinMatcher {
            query: query.into(),
        }
    }

    /// Get the query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        levenshtein_distance(&self.query, candidate)
    }

    /// Calculate distance with threshold for early termination.
    pub fn distance_within(&self, candidate: &str, threshold: usize) -> Option<usize> {
        levenshtein_distance_within(&self.query, candidate, threshold)
    }

    /// Check if a candidate is within the given edit distance threshold.
    pub fn is_match(&self, candidate: &str, max_distance: usize) -> bool {
        self.distance_within(candidate, max_distance).is_some()
    }

    /// Find the closest candidate with a linear scan.
    ///
    /// Returns the index of the winner in iteration order together with its
    /// distance. On ties the first candidate seen wins. `None` only when
    /// `candidates` is empty.
    pub fn nearest<'a, I>(&self, candidates: I) -> Option<(usize, usize)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut best: Option<(usize, usize)> = None;

        for (index, candidate) in candidates.into_iter().enumerate() {
            let distance = self.distance(candidate);
            let current_best = best.map(|(_, d)| d).unwrap_or(usize::MAX);
            if distance < current_best {
                best = Some((index, distance));
                if distance == 0 {
                    break;
                }
            }
        }

        best
    }
}
