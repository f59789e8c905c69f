//! Error types for the tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Invalid configuration (e.g. target vocabulary size below the base
    /// symbol count, or zero)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unknown token string
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Unknown token ID
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// A merge rule that is inconsistent with its vocabulary
    #[error("Invalid merge rule: {0}")]
    InvalidMerge(String),

    /// Error loading a model artifact
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a model artifact
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
