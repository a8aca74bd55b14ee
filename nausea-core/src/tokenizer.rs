//! Word extraction from raw text

use crate::alphabet::is_letter;

/// Tokens of this many characters or fewer are dropped
pub const MIN_TOKEN_CHARS: usize = 3;

/// Split raw text into lowercase candidate words
///
/// Anything that is not a Latin or Cyrillic letter separates words, so
/// `"Далеко-далеко"` yields two tokens. Words shorter than
/// [`MIN_TOKEN_CHARS`] characters are dropped. Order is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|ch: char| !is_letter(ch))
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
        .collect()
}
