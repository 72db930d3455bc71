//! Shared utility modules used across lemmatag components.

pub mod levenshtein;
