//! Encode command implementation.

use anyhow::{bail, Result};
use clap::Parser;
use std::io::Read;
use std::path::Path;
use subtok_tokenizer::{Strategy, Tokenizer};

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the trained model directory
    #[arg(short, long)]
    pub model: String,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Emit token IDs instead of token strings
    #[arg(long, default_value_t = false)]
    pub ids: bool,

    /// Override the model's encoding strategy (merges | longest-match)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(cmd: EncodeCommand) -> Result<()> {
    let mut tokenizer = Tokenizer::load(Path::new(&cmd.model))?;

    if let Some(name) = &cmd.strategy {
        let strategy = match name.as_str() {
            "merges" => Strategy::MergeDriven,
            "longest-match" => Strategy::LongestMatch,
            other => bail!("unknown strategy '{other}' (expected merges or longest-match)"),
        };
        tokenizer = tokenizer.with_strategy(strategy);
    }

    let text = if cmd.input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.input
    };

    let rendered = if cmd.ids {
        let ids = tokenizer.encode_ids(&text)?;
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        tokenizer
            .tokens(&text)
            .map(|symbol| symbol.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("Encoded output written to {}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
