//! Stemming
//!
//! Wraps the Snowball rule tables from `rust-stemmers`. The wrapper
//! lower-cases before applying the rules, since the rule tables expect
//! lower-case input; callers therefore always get lower-case stems
//! without a separate normalization pass.

use crate::config::Language;
use rust_stemmers::Stemmer;

/// Rule-based stemmer, constructed once per preprocessor
pub struct TokenStemmer {
    inner: Stemmer,
}

impl TokenStemmer {
    /// Create a stemmer for the given language
    pub fn new(language: Language) -> Self {
        Self {
            inner: Stemmer::create(language.algorithm()),
        }
    }

    /// Reduce a word to its lower-case stemmed root
    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> TokenStemmer {
        TokenStemmer::new(Language::English)
    }

    #[test]
    fn stems_english_inflections() {
        let stemmer = english();
        assert_eq!(stemmer.stem("foxes"), "fox");
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("quickly"), "quick");
        assert_eq!(stemmer.stem("indexing"), "index");
    }

    #[test]
    fn lower_cases_input() {
        let stemmer = english();
        assert_eq!(stemmer.stem("The"), "the");
        assert_eq!(stemmer.stem("FOXES"), "fox");
    }

    #[test]
    fn already_stemmed_words_are_fixed_points() {
        let stemmer = english();
        for word in ["fox", "run", "quick", "cafe", "egg", "store"] {
            assert_eq!(stemmer.stem(word), word);
        }
    }

    #[test]
    fn punctuation_passes_through() {
        let stemmer = english();
        assert_eq!(stemmer.stem("."), ".");
        assert_eq!(stemmer.stem(","), ",");
    }

    #[test]
    fn empty_word_stems_to_empty() {
        assert_eq!(english().stem(""), "");
    }

    #[test]
    fn other_languages_lower_case_and_are_deterministic() {
        let french = TokenStemmer::new(Language::French);
        let stem = french.stem("Continuera");
        assert_eq!(stem, french.stem("continuera"));
        assert_eq!(stem, stem.to_lowercase());
    }
}
