//! JSON output sink

use super::write_failed;
use nausea_core::AnalysisResult;
use nausea_engine::{EngineError, ResultSink, Result};
use std::io::Write;

/// JSON sink - writes the batch as one JSON array
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    /// Create a new JSON sink with pretty printing enabled
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn persist(&mut self, results: &[AnalysisResult]) -> Result<()> {
        let encoded = if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, results)
        } else {
            serde_json::to_writer(&mut self.writer, results)
        };
        encoded.map_err(|e| EngineError::Sink(format!("failed to encode results: {e}")))?;

        writeln!(self.writer).map_err(write_failed)?;
        self.writer.flush().map_err(write_failed)
    }
}
