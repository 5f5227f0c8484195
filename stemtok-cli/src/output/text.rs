//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one token per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &str) -> Result<()> {
        writeln!(self.writer, "{token}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
