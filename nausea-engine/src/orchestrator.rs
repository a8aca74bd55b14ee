//! Batch orchestration over a worker pool
//!
//! Every document is an independent unit of work. The orchestrator fans the
//! documents out, waits for all of them, applies the failure policy and only
//! then hands the batch to a [`ResultSink`] in a single call.

use crate::{
    analyzer::DocumentAnalyzer,
    assembler::{BatchOutcome, ResultAssembler},
    config::{EngineConfig, FailurePolicy},
    error::{EngineError, Result},
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    input::DocumentSource,
    sink::ResultSink,
};
use nausea_core::{stemmer_for, RawDocument, SnowballStemmer, Stemmer};
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Receives progress notifications from a running batch
///
/// Methods are called from worker threads.
pub trait BatchObserver: Send + Sync {
    /// A batch of `total` documents is about to start
    fn batch_started(&self, _total: usize) {}

    /// One document finished, successfully or not
    fn document_finished(&self, _identifier: &str, _succeeded: bool) {}

    /// Every document of the batch finished
    fn batch_finished(&self) {}
}

#[derive(Debug)]
enum BatchExecutor {
    Sequential(SequentialExecutor),
    #[cfg(feature = "parallel")]
    Parallel(ParallelExecutor),
}

impl BatchExecutor {
    fn from_config(config: &EngineConfig) -> Result<Self> {
        let workers = config.worker_count();
        let mode = match config.execution_mode {
            ExecutionMode::Adaptive => auto_select(workers),
            mode => mode,
        };

        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => Ok(Self::Parallel(ParallelExecutor::new(workers)?)),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                log::warn!("parallel execution not compiled in; running sequentially");
                Ok(Self::Sequential(SequentialExecutor))
            }
            _ => Ok(Self::Sequential(SequentialExecutor)),
        }
    }

    fn execute<I, T, F>(&self, items: Vec<I>, task: F) -> Vec<T>
    where
        I: Send,
        T: Send,
        F: Fn(I) -> T + Send + Sync,
    {
        match self {
            Self::Sequential(executor) => executor.execute(items, task),
            #[cfg(feature = "parallel")]
            Self::Parallel(executor) => executor.execute(items, task),
        }
    }

    fn mode(&self) -> ExecutionMode {
        match self {
            Self::Sequential(executor) => executor.mode(),
            #[cfg(feature = "parallel")]
            Self::Parallel(executor) => executor.mode(),
        }
    }
}

/// Runs a [`DocumentAnalyzer`] over many documents concurrently
pub struct BatchOrchestrator {
    analyzer: DocumentAnalyzer,
    assembler: ResultAssembler,
    executor: BatchExecutor,
    config: EngineConfig,
    observer: Option<Arc<dyn BatchObserver>>,
}

impl std::fmt::Debug for BatchOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchOrchestrator")
            .field("analyzer", &self.analyzer)
            .field("executor", &self.executor)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BatchOrchestrator {
    /// Create an orchestrator with default configuration
    pub fn new(analyzer: DocumentAnalyzer) -> Result<Self> {
        Self::with_config(analyzer, EngineConfig::default())
    }

    /// Create an orchestrator with custom configuration
    pub fn with_config(analyzer: DocumentAnalyzer, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let executor = BatchExecutor::from_config(&config)?;
        log::debug!(
            "batch orchestrator: {:?} mode, {} worker(s), {:?}",
            executor.mode(),
            config.worker_count(),
            config.failure_policy
        );

        Ok(Self {
            analyzer,
            assembler: ResultAssembler::new(config.failure_policy),
            executor,
            config,
            observer: None,
        })
    }

    /// Start building an orchestrator
    pub fn builder() -> BatchOrchestratorBuilder {
        BatchOrchestratorBuilder::new()
    }

    /// Attach a progress observer
    pub fn with_observer(mut self, observer: Arc<dyn BatchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Execution mode actually in use
    pub fn execution_mode(&self) -> ExecutionMode {
        self.executor.mode()
    }

    /// Analyze already loaded documents
    pub fn run(&self, docs: Vec<RawDocument>) -> Result<BatchOutcome> {
        self.notify(|o| o.batch_started(docs.len()));

        let outcomes = self.executor.execute(docs, |doc| {
            let result = self.analyzer.analyze(&doc);
            self.notify(|o| o.document_finished(&doc.identifier, true));
            (doc.identifier, Ok::<_, EngineError>(result))
        });

        self.notify(|o| o.batch_finished());
        self.assembler.assemble(outcomes)
    }

    /// Read, identify and analyze every path inside the worker pool
    pub fn run_paths<S>(&self, paths: Vec<PathBuf>, source: &S) -> Result<BatchOutcome>
    where
        S: DocumentSource + ?Sized,
    {
        self.notify(|o| o.batch_started(paths.len()));

        let outcomes = self.executor.execute(paths, |path| {
            let outcome = source.load(&path).map(|doc| self.analyzer.analyze(&doc));
            let key = match &outcome {
                Ok(result) => result.identifier.clone(),
                Err(_) => path.display().to_string(),
            };
            self.notify(|o| o.document_finished(&key, outcome.is_ok()));
            (key, outcome)
        });

        self.notify(|o| o.batch_finished());
        self.assembler.assemble(outcomes)
    }

    /// Analyze documents and persist the whole batch
    ///
    /// Nothing is persisted when the batch aborts. A lenient batch whose
    /// documents all failed is persisted empty and replaces the sink contents.
    pub fn run_into<K>(&self, docs: Vec<RawDocument>, sink: &mut K) -> Result<BatchOutcome>
    where
        K: ResultSink + ?Sized,
    {
        let outcome = self.run(docs)?;
        sink.persist(&outcome.results)?;
        Ok(outcome)
    }

    /// Read and analyze paths, then persist the whole batch
    ///
    /// Same persistence rules as [`BatchOrchestrator::run_into`].
    pub fn run_paths_into<S, K>(
        &self,
        paths: Vec<PathBuf>,
        source: &S,
        sink: &mut K,
    ) -> Result<BatchOutcome>
    where
        S: DocumentSource + ?Sized,
        K: ResultSink + ?Sized,
    {
        let outcome = self.run_paths(paths, source)?;
        sink.persist(&outcome.results)?;
        Ok(outcome)
    }

    fn notify<F: Fn(&dyn BatchObserver)>(&self, event: F) {
        if let Some(observer) = &self.observer {
            event(observer.as_ref());
        }
    }
}

/// Builder for [`BatchOrchestrator`]
#[derive(Default)]
pub struct BatchOrchestratorBuilder {
    stemmer: Option<Arc<dyn Stemmer>>,
    language: Option<String>,
    config: EngineConfig,
    observer: Option<Arc<dyn BatchObserver>>,
}

impl BatchOrchestratorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a stemmer
    pub fn stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    /// Pick a bundled stemmer by language code (ignored if a stemmer is injected)
    pub fn language<S: Into<String>>(mut self, code: S) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Replace the whole engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the failure policy
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    /// Set how many top stems the scorer sums
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.config.top_k = top_k;
        self
    }

    /// Attach a progress observer
    pub fn observer(mut self, observer: Arc<dyn BatchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Build the orchestrator
    pub fn build(self) -> Result<BatchOrchestrator> {
        let stemmer = match (self.stemmer, self.language) {
            (Some(stemmer), _) => stemmer,
            (None, Some(code)) => stemmer_for(&code)?,
            (None, None) => Arc::new(SnowballStemmer::russian()),
        };

        self.config.validate()?;
        let analyzer = DocumentAnalyzer::with_config(stemmer, &self.config)?;
        let mut orchestrator = BatchOrchestrator::with_config(analyzer, self.config)?;
        orchestrator.observer = self.observer;
        Ok(orchestrator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{input::MemorySource, sink::MemorySink};
    use nausea_core::IdentityStemmer;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn orchestrator(policy: FailurePolicy, threads: usize) -> BatchOrchestrator {
        BatchOrchestrator::builder()
            .stemmer(Arc::new(IdentityStemmer))
            .threads(Some(threads))
            .failure_policy(policy)
            .build()
            .unwrap()
    }

    fn docs(n: usize) -> Vec<RawDocument> {
        (0..n)
            .map(|i| RawDocument::new(format!("{i:04}.txt"), "слово слово другое"))
            .collect()
    }

    #[test]
    fn test_run_preserves_order() {
        let outcome = orchestrator(FailurePolicy::FailFast, 4).run(docs(50)).unwrap();
        let ids: Vec<String> = outcome.results.iter().map(|r| r.identifier.clone()).collect();
        let expected: Vec<String> = (0..50).map(|i| format!("{i:04}.txt")).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_single_thread_is_sequential() {
        let orchestrator = orchestrator(FailurePolicy::FailFast, 1);
        assert_eq!(orchestrator.execution_mode(), ExecutionMode::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_many_threads_is_parallel() {
        let orchestrator = orchestrator(FailurePolicy::FailFast, 2);
        assert_eq!(orchestrator.execution_mode(), ExecutionMode::Parallel);
    }

    #[test]
    fn test_run_paths_fail_fast_persists_nothing() {
        let source = MemorySource::new()
            .with_document("in/0001.txt", "текст")
            .with_document("in/notes.md", "текст");
        let mut sink = MemorySink::new();

        let err = orchestrator(FailurePolicy::FailFast, 2)
            .run_paths_into(
                vec![PathBuf::from("in/0001.txt"), PathBuf::from("in/notes.md")],
                &source,
                &mut sink,
            )
            .unwrap_err();

        assert!(matches!(err, EngineError::BatchAborted { .. }));
        assert_eq!(sink.batches(), 0);
    }

    #[test]
    fn test_run_paths_skip_failed() {
        let source = MemorySource::new().with_document("in/0001.txt", "текст текст");
        let mut sink = MemorySink::new();

        let outcome = orchestrator(FailurePolicy::SkipFailed, 2)
            .run_paths_into(
                vec![PathBuf::from("in/0001.txt"), PathBuf::from("in/0002.txt")],
                &source,
                &mut sink,
            )
            .unwrap();

        assert_eq!(outcome.succeeded(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].identifier, "in/0002.txt");
        assert_eq!(sink.results().len(), 1);
        assert_eq!(sink.results()[0].identifier, "0001.txt");
    }

    #[test]
    fn test_observer_sees_every_document() {
        #[derive(Default)]
        struct Counter {
            started: AtomicUsize,
            finished: AtomicUsize,
            done: AtomicUsize,
        }

        impl BatchObserver for Counter {
            fn batch_started(&self, total: usize) {
                self.started.store(total, Ordering::SeqCst);
            }
            fn document_finished(&self, _identifier: &str, _succeeded: bool) {
                self.finished.fetch_add(1, Ordering::SeqCst);
            }
            fn batch_finished(&self) {
                self.done.fetch_add(1, Ordering::SeqCst);
            }
        }

        let counter = Arc::new(Counter::default());
        let orchestrator =
            orchestrator(FailurePolicy::FailFast, 3).with_observer(counter.clone());
        orchestrator.run(docs(20)).unwrap();

        assert_eq!(counter.started.load(Ordering::SeqCst), 20);
        assert_eq!(counter.finished.load(Ordering::SeqCst), 20);
        assert_eq!(counter.done.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_builder_rejects_unknown_language() {
        let result = BatchOrchestrator::builder().language("xx").build();
        assert!(matches!(result, Err(EngineError::Core(_))));
    }

    #[test]
    fn test_builder_rejects_zero_threads() {
        let result = BatchOrchestrator::builder().threads(Some(0)).build();
        assert!(matches!(result, Err(EngineError::Config(_))));
    }
}
