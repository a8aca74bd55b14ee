//! Layered error types
//!
//! Core errors are deterministic; engine errors add I/O, naming and
//! batch-level failures on top of them.

use nausea_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Document could not be read from its source
    #[error("failed to read document {}: {source}", path.display())]
    DocumentRead {
        /// Path of the unreadable document
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Path does not end in a `<word>.txt` file name
    #[error("cannot derive a document identifier from {}", path.display())]
    IdentifierParse {
        /// The offending path
        path: PathBuf,
    },

    /// Worker pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Result sink rejected the batch
    #[error("result sink error: {0}")]
    Sink(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A document failed under the fail-fast policy
    #[error("batch aborted at {identifier}: {source}")]
    BatchAborted {
        /// Identifier (or path) of the first failed document
        identifier: String,
        /// Why it failed
        #[source]
        source: Box<EngineError>,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_document_read_display() {
        let error = EngineError::DocumentRead {
            path: PathBuf::from("text_files/0001.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            error.to_string(),
            "failed to read document text_files/0001.txt: no such file"
        );
    }

    #[test]
    fn test_identifier_parse_display() {
        let error = EngineError::IdentifierParse {
            path: PathBuf::from("notes.md"),
        };
        assert_eq!(
            error.to_string(),
            "cannot derive a document identifier from notes.md"
        );
    }

    #[test]
    fn test_core_error_conversion() {
        let error: EngineError = CoreError::InvalidTopK(0).into();
        assert!(matches!(error, EngineError::Core(CoreError::InvalidTopK(0))));
    }

    #[test]
    fn test_batch_aborted_keeps_source() {
        use std::error::Error as _;

        let error = EngineError::BatchAborted {
            identifier: "0002.txt".to_string(),
            source: Box::new(EngineError::Sink("locked".to_string())),
        };
        assert_eq!(
            error.to_string(),
            "batch aborted at 0002.txt: result sink error: locked"
        );
        assert!(error.source().is_some());
    }
}
