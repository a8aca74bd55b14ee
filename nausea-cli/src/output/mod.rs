//! Output sinks for analysis results
//!
//! Every sink implements the engine's [`ResultSink`] and receives the whole
//! batch in a single call.

use anyhow::{Context, Result};
use clap::ValueEnum;
use nausea_engine::{EngineError, ResultSink};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

pub mod json;
pub mod markdown;
pub mod sqlite;
pub mod text;

pub use json::JsonSink;
pub use markdown::MarkdownSink;
pub use sqlite::SqliteSink;
pub use text::TextSink;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab-separated line per document
    #[default]
    Text,
    /// JSON array of results
    Json,
    /// Markdown table
    Markdown,
    /// SQLite `text_info` table
    Sqlite,
}

impl OutputFormat {
    /// All formats with a short description
    pub const ALL: [(OutputFormat, &'static str); 4] = [
        (OutputFormat::Text, "Tab-separated lines: file, score, repair flag"),
        (OutputFormat::Json, "JSON array with scores and top stems"),
        (OutputFormat::Markdown, "Markdown table for reports"),
        (OutputFormat::Sqlite, "SQLite table text_info (filename, nausea, cheat)"),
    ];

    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Sqlite => "sqlite",
        }
    }
}

/// Create the sink for `format`
///
/// Writer formats go to `output` or stdout; SQLite goes to `output` if given,
/// otherwise to `database`.
pub fn create_sink(
    format: OutputFormat,
    output: Option<&Path>,
    database: &Path,
    pretty_json: bool,
) -> Result<Box<dyn ResultSink>> {
    Ok(match format {
        OutputFormat::Text => Box::new(TextSink::new(open_writer(output)?)),
        OutputFormat::Json => Box::new(JsonSink::new(open_writer(output)?).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownSink::new(open_writer(output)?)),
        OutputFormat::Sqlite => Box::new(SqliteSink::open(output.unwrap_or(database))?),
    })
}

fn open_writer(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    })
}

pub(crate) fn write_failed(err: io::Error) -> EngineError {
    EngineError::Sink(format!("failed to write results: {err}"))
}
