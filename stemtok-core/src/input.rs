//! Input source abstraction
//!
//! Provides a unified interface for feeding text into the pipeline
//! from strings, files, bytes, or readers.

use crate::error::{PreprocessError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for preprocessing
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader stream (for stdin, network, etc.)
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    ///
    /// Fails with an I/O error for unreadable paths and with a decode
    /// error for content that is not valid UTF-8.
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(PreprocessError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(PreprocessError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(PreprocessError::Io)?;
                Ok(buffer)
            }
        }
    }
}
