//! Per-document analysis pipeline

use crate::{config::EngineConfig, error::Result};
use nausea_core::{
    normalize_all, tokenize, AnalysisResult, NauseaScorer, RawDocument, SnowballStemmer, Stemmer,
};
use std::sync::Arc;

/// Runs tokenize → repair → stem → score on a single document
///
/// The analyzer holds only immutable state and can be shared across worker
/// threads.
#[derive(Clone)]
pub struct DocumentAnalyzer {
    stemmer: Arc<dyn Stemmer>,
    scorer: NauseaScorer,
}

impl std::fmt::Debug for DocumentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentAnalyzer")
            .field("stemmer", &self.stemmer.name())
            .field("scorer", &self.scorer)
            .finish()
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(SnowballStemmer::russian()))
    }
}

impl DocumentAnalyzer {
    /// Create an analyzer with the default top-5 scorer
    pub fn new(stemmer: Arc<dyn Stemmer>) -> Self {
        Self {
            stemmer,
            scorer: NauseaScorer::default(),
        }
    }

    /// Create an analyzer from engine configuration
    pub fn with_config(stemmer: Arc<dyn Stemmer>, config: &EngineConfig) -> Result<Self> {
        Ok(Self {
            stemmer,
            scorer: NauseaScorer::new(config.top_k)?,
        })
    }

    /// Replace the scorer
    pub fn with_scorer(mut self, scorer: NauseaScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Name of the injected stemmer
    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }

    /// Analyze one document
    pub fn analyze(&self, doc: &RawDocument) -> AnalysisResult {
        let tokens = tokenize(&doc.text);
        let normalized = normalize_all(&tokens);
        let stems = self.stemmer.stem_all(&normalized.tokens);
        let report = self.scorer.report(&stems);

        log::debug!(
            "{}: {} tokens, nausea {:.4}, repaired {}",
            doc.identifier,
            report.token_count,
            report.score,
            normalized.repaired
        );

        AnalysisResult {
            identifier: doc.identifier.clone(),
            nausea_score: report.score,
            repaired: normalized.repaired,
            token_count: report.token_count,
            top_stems: report.top_stems,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nausea_core::IdentityStemmer;

    fn identity_analyzer() -> DocumentAnalyzer {
        DocumentAnalyzer::new(Arc::new(IdentityStemmer))
    }

    #[test]
    fn test_empty_document() {
        let result = identity_analyzer().analyze(&RawDocument::new("0001.txt", ""));
        assert_eq!(result.identifier, "0001.txt");
        assert_eq!(result.nausea_score, 0.0);
        assert!(!result.repaired);
        assert_eq!(result.token_count, 0);
    }

    #[test]
    fn test_clean_document() {
        let doc = RawDocument::new("0002.txt", "один два три четыре пять шесть семь восемь");
        let result = identity_analyzer().analyze(&doc);
        assert!(!result.repaired);
        assert_eq!(result.token_count, 8);
        assert!((result.nausea_score - 5.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_repaired_flag_is_or_of_tokens() {
        let doc = RawDocument::new("0003.txt", "чистый текст с одним слoвом");
        assert!(identity_analyzer().analyze(&doc).repaired);
    }

    #[test]
    fn test_repair_merges_disguised_repeats() {
        // Without repair "окна" and "oкна" would be distinct stems
        let doc = RawDocument::new(
            "0004.txt",
            "окна oкна окнa один два три четыре пять шесть",
        );
        let result = identity_analyzer().analyze(&doc);
        assert_eq!(result.top_stems[0].stem, "окна");
        assert_eq!(result.top_stems[0].count, 3);
    }

    #[test]
    fn test_config_top_k() {
        let config = EngineConfig {
            top_k: 1,
            ..Default::default()
        };
        let analyzer = DocumentAnalyzer::with_config(Arc::new(IdentityStemmer), &config).unwrap();
        let result = analyzer.analyze(&RawDocument::new("0005.txt", "кот кот пес"));
        assert!((result.nausea_score - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_uses_russian_stemmer() {
        assert_eq!(DocumentAnalyzer::default().stemmer_name(), "snowball-russian");
    }
}
