//! Result assembly module
//!
//! Collects the tagged outcome of every document in a batch and applies the
//! configured [`FailurePolicy`].

use crate::{
    config::FailurePolicy,
    error::{EngineError, Result},
};
use nausea_core::AnalysisResult;

/// A document that could not be analyzed
#[derive(Debug)]
pub struct DocumentFailure {
    /// Identifier, or the path when no identifier could be derived
    pub identifier: String,
    /// What went wrong
    pub error: EngineError,
}

/// Everything a finished batch produced
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successful results, in input order
    pub results: Vec<AnalysisResult>,
    /// Documents skipped under [`FailurePolicy::SkipFailed`], in input order
    pub failures: Vec<DocumentFailure>,
}

impl BatchOutcome {
    /// True if no document failed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of documents that produced a result
    pub fn succeeded(&self) -> usize {
        self.results.len()
    }

    /// Number of documents flagged as repaired
    pub fn repaired_count(&self) -> usize {
        self.results.iter().filter(|r| r.repaired).count()
    }
}

/// Assembler for combining per-document outcomes
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAssembler {
    policy: FailurePolicy,
}

impl ResultAssembler {
    /// Create a new result assembler
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    /// Policy applied by this assembler
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Assemble tagged outcomes, keyed by document, into a batch
    ///
    /// Under [`FailurePolicy::FailFast`] the first failure in input order
    /// aborts the batch.
    pub fn assemble(
        &self,
        outcomes: Vec<(String, Result<AnalysisResult>)>,
    ) -> Result<BatchOutcome> {
        let mut batch = BatchOutcome {
            results: Vec::with_capacity(outcomes.len()),
            failures: Vec::new(),
        };

        for (identifier, outcome) in outcomes {
            match outcome {
                Ok(result) => batch.results.push(result),
                Err(error) => match self.policy {
                    FailurePolicy::FailFast => {
                        return Err(EngineError::BatchAborted {
                            identifier,
                            source: Box::new(error),
                        });
                    }
                    FailurePolicy::SkipFailed => {
                        log::warn!("skipping {identifier}: {error}");
                        batch.failures.push(DocumentFailure { identifier, error });
                    }
                },
            }
        }

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ok(id: &str, repaired: bool) -> (String, Result<AnalysisResult>) {
        (
            id.to_string(),
            Ok(AnalysisResult {
                identifier: id.to_string(),
                nausea_score: 0.25,
                repaired,
                token_count: 4,
                top_stems: Vec::new(),
            }),
        )
    }

    fn failed(path: &str) -> (String, Result<AnalysisResult>) {
        (
            path.to_string(),
            Err(EngineError::IdentifierParse {
                path: PathBuf::from(path),
            }),
        )
    }

    #[test]
    fn test_all_successful() {
        let batch = ResultAssembler::default()
            .assemble(vec![ok("a.txt", false), ok("b.txt", true)])
            .unwrap();
        assert!(batch.is_complete());
        assert_eq!(batch.succeeded(), 2);
        assert_eq!(batch.repaired_count(), 1);
    }

    #[test]
    fn test_fail_fast_reports_first_failure() {
        let err = ResultAssembler::new(FailurePolicy::FailFast)
            .assemble(vec![ok("a.txt", false), failed("x.md"), failed("y.md")])
            .unwrap_err();

        match err {
            EngineError::BatchAborted { identifier, source } => {
                assert_eq!(identifier, "x.md");
                assert!(matches!(*source, EngineError::IdentifierParse { .. }));
            }
            other => panic!("expected BatchAborted, got {other:?}"),
        }
    }

    #[test]
    fn test_skip_failed_keeps_successes() {
        let batch = ResultAssembler::new(FailurePolicy::SkipFailed)
            .assemble(vec![failed("x.md"), ok("a.txt", false), failed("y.md")])
            .unwrap();

        assert_eq!(batch.succeeded(), 1);
        assert_eq!(batch.results[0].identifier, "a.txt");
        let skipped: Vec<&str> = batch.failures.iter().map(|f| f.identifier.as_str()).collect();
        assert_eq!(skipped, vec!["x.md", "y.md"]);
    }

    #[test]
    fn test_empty_batch() {
        let batch = ResultAssembler::default().assemble(Vec::new()).unwrap();
        assert!(batch.results.is_empty());
        assert!(batch.is_complete());
    }
}
