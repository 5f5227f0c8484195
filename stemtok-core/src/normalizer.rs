//! ASCII transliteration
//!
//! Maps non-ASCII characters to their closest ASCII representation via
//! `unidecode`. Characters with no reasonable mapping are dropped, so
//! the result is always pure ASCII.

use unidecode::unidecode;

/// Transliterate text to a best-effort ASCII approximation
pub fn to_ascii(text: &str) -> String {
    unidecode(text)
}
