//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No stemmer is available for the requested language code
    #[error("no stemmer available for language '{code}'")]
    UnsupportedLanguage {
        /// The language code that was requested
        code: String,
    },

    /// The scorer must look at least at one stem
    #[error("top-k must be at least 1, got {0}")]
    InvalidTopK(usize),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
