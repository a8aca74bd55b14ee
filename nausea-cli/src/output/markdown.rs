//! Markdown output sink

use super::write_failed;
use nausea_core::AnalysisResult;
use nausea_engine::{ResultSink, Result};
use std::io::{self, Write};

/// Markdown sink - outputs the batch as a table
pub struct MarkdownSink<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownSink<W> {
    /// Create a new markdown sink
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_batch(&mut self, results: &[AnalysisResult]) -> io::Result<()> {
        writeln!(self.writer, "| File | Nausea | Repaired | Top stems |")?;
        writeln!(self.writer, "|------|--------|----------|-----------|")?;

        for result in results {
            let stems = result
                .top_stems
                .iter()
                .map(|s| format!("{} ({})", s.stem, s.count))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                self.writer,
                "| {} | {:.4} | {} | {} |",
                result.identifier,
                result.nausea_score,
                if result.repaired { "yes" } else { "no" },
                stems
            )?;
        }

        let repaired = results.iter().filter(|r| r.repaired).count();
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total documents: {}, repaired: {}*",
            results.len(),
            repaired
        )?;
        self.writer.flush()
    }
}

impl<W: Write> ResultSink for MarkdownSink<W> {
    fn persist(&mut self, results: &[AnalysisResult]) -> Result<()> {
        self.write_batch(results).map_err(write_failed)
    }
}
