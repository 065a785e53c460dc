//! Error types for ucd-core

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Word-level parse errors.
///
/// Only strict word parsing fails; descriptor parsing is lenient and
/// never surfaces an error (unrecognized pieces are dropped), and index
/// lookups report misses as empty results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// More than one word in a single-word context
    #[error("more than one word given in {text:?}: a word must not contain ';'")]
    MultiWord { text: String },

    /// Word text empty after trimming
    #[error("empty word")]
    EmptyWord,
}

impl Error {
    /// Create a multi-word error
    pub fn multi_word(text: impl Into<String>) -> Self {
        Error::MultiWord { text: text.into() }
    }
}
