//! Load functionality for trained models.
//!
//! Loading validates the artifact before anything is constructed: a merge
//! whose operands or result are missing from the accompanying vocabulary
//! means a corrupted or mismatched pair of artifacts, and must fail fast
//! rather than silently tokenize partially.

use super::format::SerializedModel;
use super::save::MODEL_FILE;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use subtok_core::{MergeRules, Result, TokenizerError, Vocabulary};

/// Model loader - reads and validates a persisted model.
pub struct ModelLoader;

impl ModelLoader {
    /// Load `tokenizer.json` from a model directory.
    pub fn load(path: &Path) -> Result<(Vocabulary, MergeRules, SerializedModel)> {
        let file_path = path.join(MODEL_FILE);
        let file = File::open(&file_path).map_err(|err| TokenizerError::Io {
            path: file_path.clone(),
            err,
        })?;

        let reader = BufReader::new(file);
        let serialized: SerializedModel = serde_json::from_reader(reader)
            .map_err(|e| TokenizerError::Load(format!("Failed to deserialize model: {}", e)))?;

        let (vocab, merges) = Self::deserialize(&serialized)?;
        Ok((vocab, merges, serialized))
    }

    /// Rebuild and validate the artifacts.
    pub(crate) fn deserialize(data: &SerializedModel) -> Result<(Vocabulary, MergeRules)> {
        let vocab = Vocabulary::from_ordered(data.tokens.clone())?;
        let merges = MergeRules::from_rules(data.merges.clone())?;

        for rule in merges.iter() {
            for symbol in [&rule.left, &rule.right, &rule.result] {
                if !vocab.contains(symbol) {
                    return Err(TokenizerError::InvalidMerge(format!(
                        "merge '{}' + '{}' -> '{}' references '{symbol}', \
                         which is missing from the vocabulary",
                        rule.left, rule.right, rule.result
                    )));
                }
            }
        }

        Ok((vocab, merges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::format::SerializedConfig;
    use subtok_core::{MergeRule, Symbol};

    fn model(tokens: Vec<Symbol>, merges: Vec<MergeRule>) -> SerializedModel {
        SerializedModel {
            version: "0.1.0".to_string(),
            config: SerializedConfig {
                vocab_size: tokens.len(),
                min_frequency: 1,
                strategy: "MergeDriven".to_string(),
            },
            tokens,
            merges,
        }
    }

    #[test]
    fn test_deserialize_valid_model() {
        let data = model(
            vec![
                Symbol::plain("a"),
                Symbol::plain("ab"),
                Symbol::plain("b"),
                Symbol::Unknown,
            ],
            vec![MergeRule {
                left: Symbol::plain("a"),
                right: Symbol::plain("b"),
                result: Symbol::plain("ab"),
            }],
        );

        let (vocab, merges) = ModelLoader::deserialize(&data).unwrap();
        assert_eq!(vocab.len(), 4);
        assert_eq!(merges.len(), 1);
        assert_eq!(vocab.id(&Symbol::plain("ab")), Some(1));
    }

    #[test]
    fn test_merge_with_missing_operand_is_rejected() {
        // "b" is absent from the token table.
        let data = model(
            vec![Symbol::plain("a"), Symbol::plain("ab")],
            vec![MergeRule {
                left: Symbol::plain("a"),
                right: Symbol::plain("b"),
                result: Symbol::plain("ab"),
            }],
        );

        let err = ModelLoader::deserialize(&data).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
    }

    #[test]
    fn test_merge_with_missing_result_is_rejected() {
        let data = model(
            vec![Symbol::plain("a"), Symbol::plain("b")],
            vec![MergeRule {
                left: Symbol::plain("a"),
                right: Symbol::plain("b"),
                result: Symbol::plain("ab"),
            }],
        );

        let err = ModelLoader::deserialize(&data).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ModelLoader::load(Path::new("/nonexistent/model/dir")).unwrap_err();
        assert!(matches!(err, TokenizerError::Io { .. }));
    }
}
