//! Document preprocessing for text indexing
//!
//! This crate converts raw document text into a normalized stream of
//! word tokens: sentence segmentation, word tokenization, ASCII
//! transliteration, and stemming, in that order. It is the front half
//! of an indexing pipeline; indexing itself lives elsewhere.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod normalizer;
pub mod output;
pub mod segmenter;
pub mod stemmer;
pub mod tokenizer;

use std::path::Path;
use std::time::Instant;

use stemmer::TokenStemmer;

// Re-export key types
pub use config::{Config, ConfigBuilder, Language};
pub use error::{PreprocessError, Result};
pub use input::Input;
pub use output::{Metadata, Output};

/// Main entry point for document preprocessing
///
/// Owns a stemmer that is constructed once and reused across calls.
/// All operations are pure transformations of their input; a single
/// `Preprocessor` is safe to share across threads.
pub struct Preprocessor {
    stemmer: TokenStemmer,
    config: Config,
}

impl Preprocessor {
    /// Create a new preprocessor with default configuration (English)
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new preprocessor for a specific language code
    pub fn with_language(lang_code: &str) -> Result<Self> {
        let config = Config::builder().language(lang_code)?.build();
        Ok(Self::with_config(config))
    }

    /// Create a new preprocessor with custom configuration
    pub fn with_config(config: Config) -> Self {
        let stemmer = TokenStemmer::new(config.language());
        Self { stemmer, config }
    }

    /// Normalize and stem a single word
    ///
    /// Transliterates to ASCII, then stems. Lower-casing happens
    /// inside the stemming step, so the result is always lower case.
    /// An empty string stems to an empty string.
    pub fn preprocess_word(&self, word: &str) -> String {
        self.stemmer.stem(&normalizer::to_ascii(word))
    }

    /// Preprocess a UTF-8 text file into a flat list of stemmed tokens
    ///
    /// Token order follows source order: sentences in document order,
    /// words in sentence order. Punctuation tokens are kept; nothing
    /// is deduplicated or filtered.
    pub fn preprocess_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let output = self.process(Input::from_file(path.as_ref().to_path_buf()))?;
        Ok(output.tokens)
    }

    /// Run the full pipeline over any input source
    ///
    /// Returns the token list together with run statistics.
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let text = input.read_text()?;
        let total_bytes = text.len();
        let total_chars = text.chars().count();

        let mut tokens = Vec::new();
        let mut sentence_count = 0;
        for sentence in segmenter::sentences(&text) {
            sentence_count += 1;
            for word in tokenizer::words(sentence) {
                tokens.push(self.preprocess_word(word));
            }
        }

        let metadata = Metadata {
            total_bytes,
            total_chars,
            sentence_count,
            token_count: tokens.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Output { tokens, metadata })
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the configured language
    pub fn language(&self) -> Language {
        self.config.language()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Preprocess text with default configuration
pub fn preprocess_text(text: &str) -> Result<Output> {
    Preprocessor::new().process(Input::from_text(text))
}

/// Preprocess a file with default configuration
pub fn preprocess_file<P: AsRef<Path>>(path: P) -> Result<Output> {
    Preprocessor::new().process(Input::from_file(path.as_ref().to_path_buf()))
}
