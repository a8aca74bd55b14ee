//! Homoglyph detection and repair
//!
//! A token mixing Latin and Cyrillic letters is assumed to be corrupted by
//! look-alike substitution. Repair first tries to turn it into a pure
//! Cyrillic word and falls back to the Latin reading.
//!
//! The direction chosen for a token made only of look-alike letters is a
//! guess: `"сaт"` and `"cат"` both become the Cyrillic `"сат"` even when the
//! author meant the Latin `"cat"`. Callers only get a deterministic
//! normalization, never a recovered intent.

use crate::alphabet::{classify, AlphabetClass};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Latin letters paired with their Cyrillic look-alikes
const LOOKALIKE_PAIRS: [(char, char); 17] = [
    ('a', 'а'),
    ('c', 'с'),
    ('e', 'е'),
    ('o', 'о'),
    ('p', 'р'),
    ('y', 'у'),
    ('A', 'А'),
    ('B', 'В'),
    ('C', 'С'),
    ('E', 'Е'),
    ('H', 'Н'),
    ('K', 'К'),
    ('M', 'М'),
    ('O', 'О'),
    ('P', 'Р'),
    ('T', 'Т'),
    ('X', 'Х'),
];

static TABLE: OnceLock<HomoglyphTable> = OnceLock::new();

/// Bidirectional look-alike substitution table
#[derive(Debug)]
pub struct HomoglyphTable {
    to_cyrillic: HashMap<char, char>,
    to_latin: HashMap<char, char>,
}

impl HomoglyphTable {
    fn build() -> Self {
        let to_cyrillic: HashMap<char, char> = LOOKALIKE_PAIRS.iter().copied().collect();
        let to_latin = to_cyrillic.iter().map(|(&l, &c)| (c, l)).collect();
        Self {
            to_cyrillic,
            to_latin,
        }
    }

    /// The process-wide table, built on first access
    pub fn global() -> &'static HomoglyphTable {
        TABLE.get_or_init(Self::build)
    }

    /// Replace every Latin look-alike with its Cyrillic counterpart
    pub fn to_cyrillic(&self, text: &str) -> String {
        substitute(text, &self.to_cyrillic)
    }

    /// Replace every Cyrillic look-alike with its Latin counterpart
    pub fn to_latin(&self, text: &str) -> String {
        substitute(text, &self.to_latin)
    }

    /// Cyrillic look-alike of a Latin letter
    pub fn cyrillic_for(&self, latin: char) -> Option<char> {
        self.to_cyrillic.get(&latin).copied()
    }

    /// Latin look-alike of a Cyrillic letter
    pub fn latin_for(&self, cyrillic: char) -> Option<char> {
        self.to_latin.get(&cyrillic).copied()
    }

    /// Number of look-alike pairs
    pub fn len(&self) -> usize {
        self.to_cyrillic.len()
    }

    /// Always false; the table is never empty
    pub fn is_empty(&self) -> bool {
        self.to_cyrillic.is_empty()
    }
}

fn substitute(text: &str, map: &HashMap<char, char>) -> String {
    text.chars()
        .map(|ch| map.get(&ch).copied().unwrap_or(ch))
        .collect()
}

/// Direction in which a mixed token was repaired
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairDirection {
    /// Latin look-alikes were replaced by Cyrillic letters
    ToCyrillic,
    /// Cyrillic look-alikes were replaced by Latin letters
    ToLatin,
}

/// A token after homoglyph normalization
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedToken {
    /// The normalized text
    pub text: String,
    /// How the token was repaired, if at all
    pub repair: Option<RepairDirection>,
}

impl NormalizedToken {
    /// Whether any substitution was needed
    pub fn was_repaired(&self) -> bool {
        self.repair.is_some()
    }
}

/// Repair a token that mixes Latin and Cyrillic letters
///
/// Pure tokens are returned unchanged. A mixed token is first rewritten with
/// Cyrillic look-alikes; if that yields a pure Cyrillic word it is accepted,
/// otherwise the original token is rewritten with Latin look-alikes instead.
/// The Latin rewrite is returned even if it is still mixed.
pub fn normalize(token: &str) -> NormalizedToken {
    if classify(token).is_pure() {
        return NormalizedToken {
            text: token.to_string(),
            repair: None,
        };
    }

    let table = HomoglyphTable::global();
    let cyrillic = table.to_cyrillic(token);
    if classify(&cyrillic) == AlphabetClass::PureCyrillic {
        return NormalizedToken {
            text: cyrillic,
            repair: Some(RepairDirection::ToCyrillic),
        };
    }

    NormalizedToken {
        text: table.to_latin(token),
        repair: Some(RepairDirection::ToLatin),
    }
}

/// Token sequence after normalization
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedTokens {
    /// Normalized tokens, positionally matching the input
    pub tokens: Vec<String>,
    /// True if at least one token needed repair
    pub repaired: bool,
}

/// Normalize every token, preserving length and order
pub fn normalize_all<S: AsRef<str>>(tokens: &[S]) -> NormalizedTokens {
    let mut repaired = false;
    let tokens = tokens
        .iter()
        .map(|token| {
            let normalized = normalize(token.as_ref());
            repaired |= normalized.was_repaired();
            normalized.text
        })
        .collect();

    NormalizedTokens { tokens, repaired }
}
