//! Train command implementation.

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::Path;
use std::time::Instant;
use subtok_tokenizer::{Tokenizer, TokenizerConfig};

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training data file
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the trained model
    #[arg(short, long)]
    pub output: String,

    /// Target vocabulary size
    #[arg(short, long, default_value_t = 30_000)]
    pub vocab_size: usize,

    /// Minimum frequency for merges
    #[arg(short, long, default_value_t = 1)]
    pub min_frequency: u64,

    /// Count pairs sequentially instead of in parallel
    #[arg(long, default_value_t = false)]
    pub sequential: bool,
}

pub fn run(cmd: TrainCommand) -> Result<()> {
    println!("Training tokenizer...");
    println!("  Input: {}", cmd.input);
    println!("  Output: {}", cmd.output);
    println!("  Vocab size: {}", cmd.vocab_size);
    println!("  Min frequency: {}", cmd.min_frequency);
    println!();

    let start = Instant::now();
    let data = fs::read_to_string(&cmd.input)?;
    println!(
        "Read {} bytes in {:.2}s",
        data.len(),
        start.elapsed().as_secs_f64()
    );

    let mut tokenizer = Tokenizer::new(TokenizerConfig {
        vocab_size: cmd.vocab_size,
        min_frequency: cmd.min_frequency,
        parallel: !cmd.sequential,
        ..Default::default()
    });

    let start = Instant::now();
    tokenizer.train(&data)?;
    println!(
        "Training completed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    println!("Final vocab size: {}", tokenizer.vocab_size());
    println!("Learned merges: {}", tokenizer.merges().len());

    tokenizer.save(Path::new(&cmd.output))?;
    println!("Model saved to {}", cmd.output);

    Ok(())
}
