//! Stem command implementation

use anyhow::Result;
use clap::Args;

use super::process::Language;
use crate::error::CliError;
use stemtok_core::Preprocessor;

/// Arguments for the stem command
#[derive(Debug, Args)]
pub struct StemArgs {
    /// Words to preprocess
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Language for the stemming rule tables
    #[arg(short, long, value_enum, default_value = "english")]
    pub language: Language,
}

impl StemArgs {
    /// Execute the stem command
    pub fn execute(&self) -> Result<()> {
        let config = stemtok_core::Config::builder()
            .language(self.language.code())
            .map_err(|e| CliError::ConfigError(e.to_string()))?
            .build();
        let preprocessor = Preprocessor::with_config(config);

        for word in &self.words {
            println!("{}", preprocessor.preprocess_word(word));
        }

        Ok(())
    }
}
