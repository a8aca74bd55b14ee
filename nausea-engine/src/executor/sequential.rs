//! Sequential execution strategy

use crate::executor::{ExecutionMode, Executor};

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute<I, T, F>(&self, items: Vec<I>, task: F) -> Vec<T>
    where
        I: Send,
        T: Send,
        F: Fn(I) -> T + Send + Sync,
    {
        items.into_iter().map(task).collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
