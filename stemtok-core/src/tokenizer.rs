//! Word tokenization
//!
//! Delegates to the UAX #29 word segmentation rules provided by
//! `unicode-segmentation`. Whitespace-only segments are dropped;
//! punctuation comes through as its own token and is not filtered.

use unicode_segmentation::UnicodeSegmentation;

/// Split a sentence into word and punctuation tokens, in source order
pub fn words(sentence: &str) -> impl Iterator<Item = &str> {
    sentence
        .split_word_bounds()
        .filter(|segment| !segment.chars().all(char::is_whitespace))
}
