//! Result persistence capability

use crate::error::Result;
use nausea_core::AnalysisResult;

/// Destination for a finished batch
///
/// Implementations must replace whatever a previous call stored: a sink holds
/// exactly one batch at a time.
pub trait ResultSink {
    /// Store the full batch, replacing prior contents
    fn persist(&mut self, results: &[AnalysisResult]) -> Result<()>;
}

/// Keeps the last persisted batch in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    results: Vec<AnalysisResult>,
    batches: usize,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// The batch stored by the last call
    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    /// How many times a batch was persisted
    pub fn batches(&self) -> usize {
        self.batches
    }
}

impl ResultSink for MemorySink {
    fn persist(&mut self, results: &[AnalysisResult]) -> Result<()> {
        self.results = results.to_vec();
        self.batches += 1;
        Ok(())
    }
}

impl<S: ResultSink + ?Sized> ResultSink for Box<S> {
    fn persist(&mut self, results: &[AnalysisResult]) -> Result<()> {
        (**self).persist(results)
    }
}
