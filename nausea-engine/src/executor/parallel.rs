//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use rayon::prelude::*;
use std::sync::Arc;

/// Parallel executor backed by a dedicated rayon pool
#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    thread_pool: Arc<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create an executor with `threads` workers
    pub fn new(threads: usize) -> Result<Self> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("nausea-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        Ok(Self {
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Returns the number of threads in the pool
    pub fn thread_count(&self) -> usize {
        self.thread_pool.current_num_threads()
    }
}

impl Executor for ParallelExecutor {
    fn execute<I, T, F>(&self, items: Vec<I>, task: F) -> Vec<T>
    where
        I: Send,
        T: Send,
        F: Fn(I) -> T + Send + Sync,
    {
        // Indexed collect keeps input order regardless of completion order
        self.thread_pool
            .install(|| items.into_par_iter().map(&task).collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
