//! Configuration module
//!
//! Optional TOML file; values given on the command line take precedence.

use crate::{error::CliError, output::OutputFormat};
use anyhow::{Context, Result};
use nausea_core::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Scoring configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Batch execution configuration
    #[serde(default)]
    pub batch: BatchConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.message().to_string()).into())
    }
}

/// Scoring-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Stemmer language code
    pub language: String,

    /// Number of most frequent stems summed into the score
    pub top_k: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: "ru".to_string(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Batch execution configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Number of worker threads (0 = auto)
    pub threads: usize,

    /// Skip failed documents instead of aborting the batch
    pub keep_going: bool,
}

impl BatchConfig {
    /// Thread count for the engine, `None` meaning auto
    pub fn thread_count(&self) -> Option<usize> {
        (self.threads > 0).then_some(self.threads)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// SQLite database used by the `sqlite` format
    pub database: PathBuf,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            database: PathBuf::from("nausea.db"),
            pretty_json: true,
        }
    }
}
