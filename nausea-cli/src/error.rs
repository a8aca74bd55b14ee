//! Error handling for the CLI application

use thiserror::Error;

/// Failures raised by the CLI itself, before or after the engine runs
#[derive(Debug, Error)]
pub enum CliError {
    /// No input path survived pattern resolution
    #[error("no input files match: {patterns}")]
    NoInputFiles {
        /// The patterns as given on the command line
        patterns: String,
    },

    /// A glob pattern could not be parsed
    #[error("invalid file pattern: {0}")]
    InvalidPattern(String),

    /// The TOML configuration file is malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// Every document of a lenient batch failed
    #[error("no document could be analyzed ({failed} failed), previous results left untouched")]
    NothingAnalyzed {
        /// Number of skipped documents
        failed: usize,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
