//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single token
    fn format_token(&mut self, token: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
