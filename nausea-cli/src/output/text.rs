//! Plain text output sink

use super::write_failed;
use nausea_core::AnalysisResult;
use nausea_engine::{ResultSink, Result};
use std::io::{self, Write};

/// Plain text sink - one tab-separated line per document
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    /// Create a new text sink
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_batch(&mut self, results: &[AnalysisResult]) -> io::Result<()> {
        for result in results {
            writeln!(
                self.writer,
                "{}\t{:.4}\t{}",
                result.identifier,
                result.nausea_score,
                if result.repaired { "repaired" } else { "clean" }
            )?;
        }
        self.writer.flush()
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn persist(&mut self, results: &[AnalysisResult]) -> Result<()> {
        self.write_batch(results).map_err(write_failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        let mut buffer = Vec::new();
        TextSink::new(&mut buffer)
            .persist(&[
                AnalysisResult {
                    identifier: "0001.txt".to_string(),
                    nausea_score: 0.8333333,
                    repaired: false,
                    token_count: 6,
                    top_stems: Vec::new(),
                },
                AnalysisResult {
                    identifier: "0002.txt".to_string(),
                    nausea_score: 1.0,
                    repaired: true,
                    token_count: 7,
                    top_stems: Vec::new(),
                },
            ])
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "0001.txt\t0.8333\tclean\n0002.txt\t1.0000\trepaired\n");
    }
}
