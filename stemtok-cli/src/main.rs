//! stemtok command-line entry point

use clap::Parser;
use stemtok_cli::commands::Commands;

/// Preprocess documents into stemmed token streams for indexing
#[derive(Debug, Parser)]
#[command(name = "stemtok", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
