//! Configuration types for the engine

use crate::{
    error::{EngineError, Result},
    ExecutionMode,
};
use nausea_core::DEFAULT_TOP_K;

/// What a batch does when one of its documents fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// The first failure aborts the whole batch; nothing is persisted
    #[default]
    FailFast,
    /// Failed documents are dropped from the results and reported separately
    SkipFailed,
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of worker threads (None = available parallelism)
    pub threads: Option<usize>,
    /// Batch failure handling
    pub failure_policy: FailurePolicy,
    /// Number of most frequent stems summed by the scorer
    pub top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::default(),
            threads: None,
            failure_policy: FailurePolicy::FailFast,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration, useful for debugging and tests
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Default::default()
        }
    }

    /// Configuration that keeps going past failed documents
    pub fn lenient() -> Self {
        Self {
            failure_policy: FailurePolicy::SkipFailed,
            ..Default::default()
        }
    }

    /// Number of workers this configuration will use
    pub fn worker_count(&self) -> usize {
        match (self.execution_mode, self.threads) {
            (ExecutionMode::Sequential, _) => 1,
            (_, Some(threads)) => threads,
            (_, None) => default_parallelism(),
        }
    }

    /// Check that the configuration can be executed
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(EngineError::Config("top-k must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(feature = "parallel")]
fn default_parallelism() -> usize {
    num_cpus::get()
}

#[cfg(not(feature = "parallel"))]
fn default_parallelism() -> usize {
    1
}
