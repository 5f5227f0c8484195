//! Basic tests for the stemtok-core public API

use stemtok_core::*;

#[test]
fn test_preprocess_word_ascii() {
    let preprocessor = Preprocessor::new();
    assert_eq!(preprocessor.preprocess_word("foxes"), "fox");
    assert_eq!(preprocessor.preprocess_word("Running"), "run");
}

#[test]
fn test_preprocess_word_transliterates() {
    let preprocessor = Preprocessor::new();
    assert_eq!(preprocessor.preprocess_word("café"), "cafe");
    assert_eq!(preprocessor.preprocess_word("Résumé"), "resum");
    assert_eq!(preprocessor.preprocess_word("naïve"), "naiv");
}

#[test]
fn test_preprocess_word_empty() {
    let preprocessor = Preprocessor::new();
    assert_eq!(preprocessor.preprocess_word(""), "");
}

#[test]
fn test_preprocess_word_idempotent_on_stems() {
    let preprocessor = Preprocessor::new();
    for word in ["the", "fox", "are", "run", "quick", "cafe"] {
        let once = preprocessor.preprocess_word(word);
        assert_eq!(once, word);
        assert_eq!(preprocessor.preprocess_word(&once), once);
    }
}

#[test]
fn test_with_language() {
    let preprocessor = Preprocessor::with_language("fr").unwrap();
    assert_eq!(preprocessor.language(), Language::French);

    assert!(Preprocessor::with_language("klingon").is_err());
}

#[test]
fn test_config_builder() {
    let config = Config::builder().language("de").unwrap().build();
    let preprocessor = Preprocessor::with_config(config);
    assert_eq!(preprocessor.language(), Language::German);
}

#[test]
fn test_process_text_convenience() {
    let output = preprocess_text("Hello world. This is a test.").unwrap();

    assert_eq!(output.metadata.total_bytes, 28);
    assert_eq!(output.metadata.sentence_count, 2);
    assert_eq!(output.metadata.token_count, output.tokens.len());
}

#[test]
fn test_input_text_processing() {
    let input = Input::from_text("Hello world.");
    assert_eq!(input.read_text().unwrap(), "Hello world.");
}

#[test]
fn test_input_bytes_processing() {
    let input = Input::from_bytes(b"Hello world.".to_vec());
    assert_eq!(input.read_text().unwrap(), "Hello world.");
}

#[cfg(feature = "serde")]
#[test]
fn test_output_serialization() {
    let output = preprocess_text("The foxes are running quickly.").unwrap();

    let json = serde_json::to_string(&output).unwrap();
    let deserialized: Output = serde_json::from_str(&json).unwrap();

    assert_eq!(output.tokens, deserialized.tokens);
    assert_eq!(
        output.metadata.token_count,
        deserialized.metadata.token_count
    );
}
