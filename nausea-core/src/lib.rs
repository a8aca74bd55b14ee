//! Keyword-density scoring with homoglyph repair
//!
//! This crate holds the deterministic building blocks for measuring how
//! "nauseous" (keyword-stuffed) a Latin/Cyrillic document is, and for spotting
//! words that were disguised by swapping letters for look-alikes from the
//! other alphabet.
//!
//! # Pipeline
//!
//! - [`tokenize`] splits raw text into lowercase words of 3+ letters
//! - [`classify`] tells whether a word is pure Latin, pure Cyrillic or mixed
//! - [`normalize`] repairs mixed words with a fixed look-alike table
//! - a [`Stemmer`] reduces each word to its root
//! - [`NauseaScorer`] measures the share of the top stems
//!
//! # Example
//!
//! ```rust
//! use nausea_core::{normalize_all, tokenize, IdentityStemmer, NauseaScorer, Stemmer};
//!
//! let tokens = tokenize("Купить слoны, купить слоны дешево!");
//! let normalized = normalize_all(&tokens);
//! assert!(normalized.repaired);
//!
//! let stems = IdentityStemmer.stem_all(&normalized.tokens);
//! let score = NauseaScorer::default().score(&stems);
//! assert_eq!(score, 1.0);
//! ```

pub mod alphabet;
pub mod error;
pub mod homoglyph;
pub mod scorer;
pub mod stemmer;
pub mod tokenizer;
pub mod types;

pub use alphabet::{classify, is_letter, Alphabet, AlphabetClass};
pub use error::{CoreError, Result};
pub use homoglyph::{
    normalize, normalize_all, HomoglyphTable, NormalizedToken, NormalizedTokens, RepairDirection,
};
pub use scorer::{rank_stems, NauseaReport, NauseaScorer, StemCount, DEFAULT_TOP_K};
pub use stemmer::{
    stemmer_for, IdentityStemmer, SnowballStemmer, Stemmer, StemmerLanguage, SUPPORTED_LANGUAGES,
};
pub use tokenizer::{tokenize, MIN_TOKEN_CHARS};
pub use types::{AnalysisResult, RawDocument};
