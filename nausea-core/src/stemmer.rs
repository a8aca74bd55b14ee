//! Pluggable morphological stemming
//!
//! The scorer groups inflected forms through a [`Stemmer`]. Any deterministic
//! implementation can be injected; the crate ships Snowball stemmers and a
//! no-op stemmer.

use crate::error::{CoreError, Result};
use rust_stemmers::Algorithm;
use std::fmt;
use std::sync::Arc;

/// Reduces a normalized token to its canonical root
pub trait Stemmer: Send + Sync {
    /// Stem a single lowercase token
    fn stem(&self, token: &str) -> String;

    /// Short name used in logs and listings
    fn name(&self) -> &'static str;

    /// Stem every token, preserving length and order
    fn stem_all(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|token| self.stem(token)).collect()
    }
}

/// Languages with a bundled Snowball stemmer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StemmerLanguage {
    /// Russian Snowball stemmer
    Russian,
    /// English (Porter2) Snowball stemmer
    English,
}

impl StemmerLanguage {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            StemmerLanguage::Russian => "ru",
            StemmerLanguage::English => "en",
        }
    }

    fn algorithm(self) -> Algorithm {
        match self {
            StemmerLanguage::Russian => Algorithm::Russian,
            StemmerLanguage::English => Algorithm::English,
        }
    }
}

/// Snowball stemmer backed by `rust-stemmers`
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
    language: StemmerLanguage,
}

impl SnowballStemmer {
    /// Create a stemmer for the given language
    pub fn new(language: StemmerLanguage) -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(language.algorithm()),
            language,
        }
    }

    /// Russian stemmer
    pub fn russian() -> Self {
        Self::new(StemmerLanguage::Russian)
    }

    /// Language this stemmer was built for
    pub fn language(&self) -> StemmerLanguage {
        self.language
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }

    fn name(&self) -> &'static str {
        match self.language {
            StemmerLanguage::Russian => "snowball-russian",
            StemmerLanguage::English => "snowball-english",
        }
    }
}

/// Stemmer that returns tokens unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Language codes accepted by [`stemmer_for`]
pub const SUPPORTED_LANGUAGES: [(&str, &str); 3] = [
    ("ru", "Russian Snowball stemmer"),
    ("en", "English Snowball stemmer"),
    ("none", "No stemming"),
];

/// Look up a stemmer by language code
pub fn stemmer_for(code: &str) -> Result<Arc<dyn Stemmer>> {
    match code.to_ascii_lowercase().as_str() {
        "ru" | "russian" => Ok(Arc::new(SnowballStemmer::new(StemmerLanguage::Russian))),
        "en" | "english" => Ok(Arc::new(SnowballStemmer::new(StemmerLanguage::English))),
        "none" | "identity" => Ok(Arc::new(IdentityStemmer)),
        _ => Err(CoreError::UnsupportedLanguage {
            code: code.to_string(),
        }),
    }
}
