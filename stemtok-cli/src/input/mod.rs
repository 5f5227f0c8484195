//! Input handling for the CLI

mod file_reader;

pub use file_reader::FileReader;
