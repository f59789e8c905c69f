//! Format definitions for model serialization.
//!
//! A persisted model is a single `tokenizer.json`: the id-ordered token
//! table and the rank-ordered merge triples, everything an encoder needs to
//! be reconstructed without retraining.

use serde::{Deserialize, Serialize};
use subtok_core::{MergeRule, Symbol};

/// Complete model serialization format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedModel {
    /// Format version
    pub version: String,
    /// Token table in id order (index = id)
    pub tokens: Vec<Symbol>,
    /// Merge rules in learning order (index = rank)
    pub merges: Vec<MergeRule>,
    /// Configuration
    pub config: SerializedConfig,
}

/// Model configuration in serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedConfig {
    pub vocab_size: usize,
    pub min_frequency: u64,
    pub strategy: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_roundtrip() {
        let model = SerializedModel {
            version: "0.1.0".to_string(),
            tokens: vec![
                Symbol::plain("a"),
                Symbol::plain("ab"),
                Symbol::plain("b"),
                Symbol::word_end(),
                Symbol::Unknown,
            ],
            merges: vec![MergeRule {
                left: Symbol::plain("a"),
                right: Symbol::plain("b"),
                result: Symbol::plain("ab"),
            }],
            config: SerializedConfig {
                vocab_size: 5,
                min_frequency: 1,
                strategy: "MergeDriven".to_string(),
            },
        };

        let json = serde_json::to_string(&model).unwrap();
        let back: SerializedModel = serde_json::from_str(&json).unwrap();

        assert_eq!(back.version, model.version);
        assert_eq!(back.tokens, model.tokens);
        assert_eq!(back.merges, model.merges);
        assert_eq!(back.config.strategy, model.config.strategy);
    }
}
