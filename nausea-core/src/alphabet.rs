//! Alphabet membership and token classification
//!
//! The analyzer works with exactly two alphabets: Latin (`A-Z`, `a-z`) and
//! the Russian Cyrillic alphabet (`А-Я`, `а-я`, `Ё`, `ё`). Every other
//! character, including accented Latin and non-Russian Cyrillic letters, is
//! treated as a separator by the tokenizer and as foreign by the classifier.

use serde::{Deserialize, Serialize};

/// One of the two alphabets the analyzer understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alphabet {
    /// Basic Latin letters
    Latin,
    /// Russian Cyrillic letters
    Cyrillic,
}

impl Alphabet {
    /// Check whether a character is a letter of this alphabet (either case)
    pub fn contains(self, ch: char) -> bool {
        match self {
            Alphabet::Latin => ch.is_ascii_alphabetic(),
            Alphabet::Cyrillic => matches!(ch, 'А'..='я' | 'Ё' | 'ё'),
        }
    }

    /// Check whether every character of `text` belongs to this alphabet
    pub fn is_pure(self, text: &str) -> bool {
        text.chars().all(|ch| self.contains(ch))
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Latin => "Latin",
            Alphabet::Cyrillic => "Cyrillic",
        }
    }
}

/// Classification of a token by the alphabet(s) it is written in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlphabetClass {
    /// Every character is a Latin letter
    PureLatin,
    /// Every character is a Cyrillic letter
    PureCyrillic,
    /// Letters of both alphabets, or characters of neither
    Mixed,
}

impl AlphabetClass {
    /// The alphabet of a pure token
    pub fn alphabet(self) -> Option<Alphabet> {
        match self {
            AlphabetClass::PureLatin => Some(Alphabet::Latin),
            AlphabetClass::PureCyrillic => Some(Alphabet::Cyrillic),
            AlphabetClass::Mixed => None,
        }
    }

    /// Check if the token is written in a single alphabet
    pub fn is_pure(self) -> bool {
        !matches!(self, AlphabetClass::Mixed)
    }
}

/// Check if a character is a letter of either supported alphabet
pub fn is_letter(ch: char) -> bool {
    Alphabet::Latin.contains(ch) || Alphabet::Cyrillic.contains(ch)
}

/// Classify a token by alphabet
///
/// Cyrillic is checked first, so the empty string reports as
/// [`AlphabetClass::PureCyrillic`].
pub fn classify(token: &str) -> AlphabetClass {
    if Alphabet::Cyrillic.is_pure(token) {
        AlphabetClass::PureCyrillic
    } else if Alphabet::Latin.is_pure(token) {
        AlphabetClass::PureLatin
    } else {
        AlphabetClass::Mixed
    }
}
