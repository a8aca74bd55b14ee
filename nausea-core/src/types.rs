//! Document and result types shared by every layer

use crate::scorer::StemCount;
use serde::{Deserialize, Serialize};

/// A loaded document awaiting analysis
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDocument {
    /// Identifier the result is keyed by (typically a file name)
    pub identifier: String,
    /// Full document text
    pub text: String,
}

impl RawDocument {
    /// Create a new document
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }
}

/// Per-document analysis outcome
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Identifier of the analyzed document
    pub identifier: String,
    /// Share of tokens taken by the most frequent stems, in `[0, 1]`
    pub nausea_score: f64,
    /// True if any token mixed alphabets and had to be repaired
    pub repaired: bool,
    /// Number of tokens that were scored
    #[serde(default)]
    pub token_count: usize,
    /// Most frequent stems, ranked
    #[serde(default)]
    pub top_stems: Vec<StemCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_document_new() {
        let doc = RawDocument::new("0001.txt", "text");
        assert_eq!(doc.identifier, "0001.txt");
        assert_eq!(doc.text, "text");
    }

    #[test]
    fn test_result_deserializes_without_extras() {
        let json = r#"{"identifier":"0001.txt","nausea_score":0.5,"repaired":true}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.identifier, "0001.txt");
        assert!(result.repaired);
        assert_eq!(result.token_count, 0);
        assert!(result.top_stems.is_empty());
    }
}
