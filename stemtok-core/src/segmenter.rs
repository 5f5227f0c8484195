//! Sentence boundary detection
//!
//! Delegates to the UAX #29 sentence segmentation rules provided by
//! `unicode-segmentation`. Segments cover the whole input, so sentence
//! order is the order of appearance in the text.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into sentences, in source order
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split_sentence_bounds()
}
