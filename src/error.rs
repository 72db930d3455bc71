//! Error types for the lemmatag library.
//!
//! Resolution itself never fails: "nothing found" is an empty candidate list.
//! Errors only come from the edges of the crate, such as loading lexicon or
//! vocabulary files, validating configuration and parsing CLI input. All of
//! them are represented by the [`LemmatagError`] enum.
//!
//! # Examples
//!
//! ```
//! use lemmatag::error::{LemmatagError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LemmatagError::invalid_argument("cursor is past the end of the text"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lemmatag operations.
#[derive(Error, Debug)]
pub enum LemmatagError {
    /// I/O errors (reading lexicon, vocabulary or config files, terminal I/O)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed lexicon or vocabulary data
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Invalid resolver or markup configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument supplied by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LemmatagError.
pub type Result<T> = std::result::Result<T, LemmatagError>;

impl LemmatagError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        LemmatagError::Lexicon(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LemmatagError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LemmatagError::InvalidArgument(msg.into())
    }
}
