//! Subtok-tokenizer - High-level tokenizer API
//!
//! This crate provides the user-facing interface for subword tokenization:
//! the two encoding strategies, training integration, and model
//! serialization.
//!
//! # Features
//!
//! - Builder pattern for tokenizer configuration
//! - Merge-rule-driven and vocabulary longest-match encoding strategies
//! - Lazy, restartable token streams; parallel batch encoding
//! - Saving and loading trained models with fail-fast artifact validation
//!
//! # Example
//!
//! ```rust
//! use subtok_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::builder().vocab_size(10).build();
//! tokenizer.train("low lower lowest")?;
//!
//! let tokens: Vec<String> = tokenizer
//!     .tokens("lowest")
//!     .map(|symbol| symbol.to_string())
//!     .collect();
//! assert_eq!(tokens, vec!["low", "e", "s", "t", "</w>"]);
//! # Ok::<(), subtok_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use subtok_core::{MergeRules, Result, Symbol, TokenizerError, Vocabulary};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Strategy, Tokenizer, TokenizerBuilder, TokenizerConfig};

// Encoding strategies
pub mod encoder;
pub use encoder::{LongestMatchEncoder, MergeEncoder, Segmenter, TokenStream};

// IO/Serialization
pub mod io;
pub use io::{ModelLoader, ModelSaver, SerializedModel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
