//! Preprocessor configuration

use crate::error::{PreprocessError, Result};
use rust_stemmers::Algorithm;

/// Languages with stemming rule tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// English (Snowball)
    #[default]
    English,
    /// French
    French,
    /// German
    German,
    /// Spanish
    Spanish,
}

impl Language {
    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
        }
    }

    /// Parse a language code or name
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "fr" | "french" => Ok(Language::French),
            "de" | "german" => Ok(Language::German),
            "es" | "spanish" => Ok(Language::Spanish),
            other => Err(PreprocessError::Config(format!(
                "unsupported language: {other}"
            ))),
        }
    }

    /// All supported languages
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::French,
            Language::German,
            Language::Spanish,
        ]
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::French => Algorithm::French,
            Language::German => Algorithm::German,
            Language::Spanish => Algorithm::Spanish,
        }
    }
}

/// High-level configuration for preprocessing
#[derive(Debug, Clone, Default)]
pub struct Config {
    language: Language,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured language
    pub fn language(&self) -> Language {
        self.language
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language by code ("en", "fr", "de", "es")
    pub fn language(mut self, code: &str) -> Result<Self> {
        self.config.language = Language::from_code(code)?;
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
