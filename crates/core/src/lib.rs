//! Subtok-core - Core subword tokenization primitives
//!
//! This crate provides the fundamental data structures shared by training
//! and inference: symbols, the vocabulary, and merge rules.
//!
//! # Features
//!
//! - Tagged [`Symbol`] type with a dedicated end-of-word marker and
//!   unknown-token sentinel (never magic strings)
//! - Vocabulary with dense, deterministically assigned ids, immutable once
//!   finalized
//! - Merge rules kept in learning order, the priority invariant at encode
//!   time
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use subtok_core::{Symbol, VocabularyBuilder};
//!
//! let mut builder = VocabularyBuilder::new();
//! builder.insert(Symbol::plain("a"));
//! builder.insert(Symbol::plain("b"));
//! let vocab = builder.finish();
//! assert_eq!(vocab.len(), 2);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod symbol;
pub use symbol::{Symbol, UNKNOWN_DISPLAY, WORD_END_DISPLAY};

pub mod vocab;
pub use vocab::{Vocabulary, VocabularyBuilder};

pub mod merges;
pub use merges::{MergeRule, MergeRules, Pair};
