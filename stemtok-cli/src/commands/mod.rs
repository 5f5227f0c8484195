//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod process;
pub mod stem;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Preprocess a text file into stemmed tokens
    Process(process::ProcessArgs),

    /// Preprocess individual words given as arguments
    Stem(stem::StemArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported stemming languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Stem(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            ListCommands::Languages => {
                for language in stemtok_core::Language::all() {
                    println!("{}", language.code());
                }
            }
            ListCommands::Formats => {
                println!("text");
                println!("json");
            }
        }
        Ok(())
    }
}
