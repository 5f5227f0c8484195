//! Property tests for the preprocessing pipeline

use proptest::prelude::*;
use stemtok_core::{normalizer, segmenter, tokenizer, Preprocessor};

proptest! {
    /// Transliteration is best-effort but its output is always ASCII.
    #[test]
    fn transliteration_output_is_ascii(input in ".*") {
        prop_assert!(normalizer::to_ascii(&input).is_ascii());
    }

    /// Every emitted token is ASCII, whatever the input was.
    #[test]
    fn preprocessed_words_are_ascii(word in "\\PC{0,24}") {
        let preprocessor = Preprocessor::new();
        prop_assert!(preprocessor.preprocess_word(&word).is_ascii());
    }

    /// The token count equals the sum of per-sentence tokenizer output
    /// lengths; the pipeline neither drops nor invents tokens.
    #[test]
    fn token_count_matches_segmentation(text in "\\PC{0,200}") {
        let output = Preprocessor::new().process_text(&text).unwrap();

        let expected: usize = segmenter::sentences(&text)
            .map(|sentence| tokenizer::words(sentence).count())
            .sum();
        prop_assert_eq!(output.tokens.len(), expected);
        prop_assert_eq!(output.metadata.token_count, expected);
    }

    /// Lower-case ASCII alphanumeric stems never gain characters
    /// outside lower-case ASCII.
    #[test]
    fn ascii_words_stay_lower_case_ascii(word in "[a-z0-9]{1,16}") {
        let stemmed = Preprocessor::new().preprocess_word(&word);
        prop_assert!(stemmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
