//! Application orchestration for nausea scoring
//!
//! This crate composes the core algorithms into a per-document pipeline and
//! runs that pipeline over batches of documents on a worker pool, with an
//! explicit policy for failed documents.

#![warn(missing_docs)]

pub mod analyzer;
pub mod assembler;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod orchestrator;
pub mod sink;

// Re-export key types
pub use analyzer::DocumentAnalyzer;
pub use assembler::{BatchOutcome, DocumentFailure, ResultAssembler};
pub use config::{EngineConfig, FailurePolicy};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::{extract_identifier, DocumentSource, FileSource, MemorySource};
pub use orchestrator::{BatchObserver, BatchOrchestrator, BatchOrchestratorBuilder};
pub use sink::{MemorySink, ResultSink};

// Re-export from core for convenience
pub use nausea_core::{AnalysisResult, RawDocument, Stemmer};
