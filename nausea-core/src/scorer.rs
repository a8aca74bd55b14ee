//! Lexical density ("nausea") scoring
//!
//! The nausea rate of a document is the share of its tokens taken by its
//! most frequent stems. Keyword-stuffed text scores close to 1.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of top stems summed by default
pub const DEFAULT_TOP_K: usize = 5;

/// A distinct stem and how often it occurred
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemCount {
    /// The stem
    pub stem: String,
    /// Number of occurrences
    pub count: usize,
}

/// Full scoring outcome for one stem sequence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NauseaReport {
    /// Nausea rate in `[0, 1]`
    pub score: f64,
    /// Length of the scored sequence
    pub token_count: usize,
    /// Ranked stems that contributed to the score
    pub top_stems: Vec<StemCount>,
}

/// Computes the nausea rate over the `top_k` most frequent stems
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NauseaScorer {
    top_k: usize,
}

impl Default for NauseaScorer {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl NauseaScorer {
    /// Create a scorer summing the `top_k` most frequent stems
    pub fn new(top_k: usize) -> Result<Self> {
        if top_k == 0 {
            return Err(CoreError::InvalidTopK(top_k));
        }
        Ok(Self { top_k })
    }

    /// Number of stems summed
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Nausea rate of a stem sequence; `0.0` when empty
    pub fn score<S: AsRef<str>>(&self, stems: &[S]) -> f64 {
        self.report(stems).score
    }

    /// Score a stem sequence and keep the ranking that produced the score
    ///
    /// Documents with fewer than `top_k` distinct stems sum every stem they
    /// have instead of failing.
    pub fn report<S: AsRef<str>>(&self, stems: &[S]) -> NauseaReport {
        if stems.is_empty() {
            return NauseaReport {
                score: 0.0,
                token_count: 0,
                top_stems: Vec::new(),
            };
        }

        let mut ranked = rank_stems(stems);
        ranked.truncate(self.top_k);

        let covered: usize = ranked.iter().map(|entry| entry.count).sum();
        NauseaReport {
            score: covered as f64 / stems.len() as f64,
            token_count: stems.len(),
            top_stems: ranked,
        }
    }
}

/// Distinct stems by count descending, ties in order of first appearance
pub fn rank_stems<S: AsRef<str>>(stems: &[S]) -> Vec<StemCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<StemCount> = Vec::new();

    for stem in stems {
        let stem = stem.as_ref();
        match index.get(stem) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(stem, counts.len());
                counts.push(StemCount {
                    stem: stem.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so first-appearance order survives among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stems(words: &str) -> Vec<String> {
        words.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_empty_sequence_scores_zero() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(NauseaScorer::default().score(&empty), 0.0);
    }

    #[test]
    fn test_top_five_of_many() {
        // 7 distinct stems, counts 4,3,2,2,1,1,1 = 14 tokens; top 5 sum = 12
        let seq = stems("a a a a b b b c c d d e f g");
        let score = NauseaScorer::default().score(&seq);
        assert!((score - 12.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_fewer_than_five_distinct_is_clamped() {
        let seq = stems("кот кот пес");
        let report = NauseaScorer::default().report(&seq);
        assert_eq!(report.top_stems.len(), 2);
        assert_eq!(report.score, 1.0);
    }

    #[test]
    fn test_single_stem() {
        assert_eq!(NauseaScorer::default().score(&stems("слово")), 1.0);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let ranked = rank_stems(&stems("x y z y x w"));
        let order: Vec<&str> = ranked.iter().map(|e| e.stem.as_str()).collect();
        assert_eq!(order, vec!["x", "y", "z", "w"]);
    }

    #[test]
    fn test_tie_break_decides_cutoff() {
        let scorer = NauseaScorer::new(2).unwrap();
        let report = scorer.report(&stems("p q r r q p s"));
        let top: Vec<&str> = report.top_stems.iter().map(|e| e.stem.as_str()).collect();
        assert_eq!(top, vec!["p", "q"]);
        assert!((report.score - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_top_k_rejected() {
        assert_eq!(NauseaScorer::new(0), Err(CoreError::InvalidTopK(0)));
    }

    #[test]
    fn test_report_token_count() {
        let report = NauseaScorer::default().report(&stems("a b c d e f"));
        assert_eq!(report.token_count, 6);
        assert!((report.score - 5.0 / 6.0).abs() < 1e-12);
    }
}
