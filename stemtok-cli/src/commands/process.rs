//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use stemtok_core::{Input, Preprocessor};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input text file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Language for the stemming rule tables
    #[arg(short, long, value_enum, default_value = "english")]
    pub language: Language,

    /// Suppress logging output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one token per line
    Text,
    /// JSON array of tokens
    Json,
}

/// Supported stemming languages
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Language {
    /// English stemming rules
    English,
    /// French stemming rules
    French,
    /// German stemming rules
    German,
    /// Spanish stemming rules
    Spanish,
}

impl Language {
    /// Language code understood by the core configuration
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Preprocessing {}", self.input.display());

        if !self.input.exists() {
            return Err(CliError::FileNotFound(self.input.display().to_string()).into());
        }

        let text = FileReader::read_text(&self.input)?;

        let preprocessor = self.build_preprocessor()?;
        let result = preprocessor
            .process(Input::from_text(text))
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;

        log::debug!(
            "{} sentences, {} tokens in {} ms",
            result.metadata.sentence_count,
            result.metadata.token_count,
            result.metadata.processing_time_ms
        );

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for token in &result.tokens {
            formatter.format_token(token)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn build_preprocessor(&self) -> Result<Preprocessor> {
        let config = stemtok_core::Config::builder()
            .language(self.language.code())
            .map_err(|e| CliError::ConfigError(e.to_string()))?
            .build();
        Ok(Preprocessor::with_config(config))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
