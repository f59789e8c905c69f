//! Subtok CLI - Command-line interface for the subword tokenizer.
//!
//! This is the main entry point for the `subtok` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{EncodeCommand, TrainCommand};

#[derive(Parser)]
#[command(name = "subtok")]
#[command(about = "A trainable subword tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a new tokenizer from text data
    Train(TrainCommand),
    /// Encode text into tokens or token IDs
    Encode(EncodeCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
    }

    Ok(())
}
