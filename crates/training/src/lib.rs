//! Subtok-training - merge rule training infrastructure
//!
//! This crate learns a fixed-size token inventory from a text corpus by
//! iteratively merging frequent adjacent symbol pairs.
//!
//! # Features
//!
//! - Word frequency corpus model with in-place merge rewriting
//! - Pair statistics with an optional parallel counting reduction
//! - Deterministic merge selection (fixed tie-break for equal counts)
//!
//! # Example
//!
//! ```rust
//! use subtok_training::Trainer;
//!
//! let trainer = Trainer::with_vocab_size(20);
//! let (vocab, merges) = trainer.train("low lower lowest")?;
//! assert!(!merges.is_empty());
//! # Ok::<(), subtok_training::TokenizerError>(())
//! ```

pub use subtok_core::{Result, TokenizerError};

pub mod corpus;
pub use corpus::{Corpus, WordEntry};

pub mod pairs;
pub use pairs::{best_pair, count_pairs, count_pairs_parallel};

pub mod trainer;
pub use trainer::{Trainer, TrainerConfig};
