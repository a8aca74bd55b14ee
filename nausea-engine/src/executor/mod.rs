//! Execution strategies for batches of independent tasks

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Run every task on the calling thread
    Sequential,
    /// Run tasks on a worker pool
    Parallel,
    /// Parallel when more than one worker is available
    #[default]
    Adaptive,
}

/// Trait for execution strategies
///
/// Tasks are independent: the executor may run them in any order, but the
/// outputs are returned in input order.
pub trait Executor: Send + Sync {
    /// Apply `task` to every item
    fn execute<I, T, F>(&self, items: Vec<I>, task: F) -> Vec<T>
    where
        I: Send,
        T: Send,
        F: Fn(I) -> T + Send + Sync;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Resolve the adaptive mode for a worker count
pub fn auto_select(workers: usize) -> ExecutionMode {
    if workers <= 1 {
        return ExecutionMode::Sequential;
    }

    #[cfg(feature = "parallel")]
    return ExecutionMode::Parallel;

    #[cfg(not(feature = "parallel"))]
    ExecutionMode::Sequential
}
