//! Save functionality for trained models.

use super::format::{SerializedConfig, SerializedModel};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use subtok_core::{MergeRules, Result, TokenizerError, Vocabulary};

/// Name of the artifact file inside a model directory.
pub const MODEL_FILE: &str = "tokenizer.json";

/// Model saver - writes a trained model to a directory.
pub struct ModelSaver<'a> {
    vocab: &'a Vocabulary,
    merges: &'a MergeRules,
    config: SerializedConfig,
}

impl<'a> ModelSaver<'a> {
    /// Create a saver over trained artifacts.
    pub fn new(vocab: &'a Vocabulary, merges: &'a MergeRules, config: SerializedConfig) -> Self {
        Self {
            vocab,
            merges,
            config,
        }
    }

    /// Save the model as `tokenizer.json` inside `path`, creating the
    /// directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            TokenizerError::Save(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;

        let file_path = path.join(MODEL_FILE);
        let file = File::create(&file_path).map_err(|e| {
            TokenizerError::Save(format!(
                "Failed to create file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.serialize())
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize model: {}", e)))?;

        Ok(())
    }

    /// Serialize the model to its on-disk structure.
    pub(crate) fn serialize(&self) -> SerializedModel {
        SerializedModel {
            version: env!("CARGO_PKG_VERSION").to_string(),
            tokens: self.vocab.iter().map(|(_, symbol)| symbol.clone()).collect(),
            merges: self.merges.rules().to_vec(),
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtok_core::{Symbol, VocabularyBuilder};

    #[test]
    fn test_serialize_keeps_id_and_rank_order() {
        let mut builder = VocabularyBuilder::new();
        builder.extend([Symbol::plain("b"), Symbol::plain("a"), Symbol::Unknown]);
        let vocab = builder.finish();

        let mut merges = MergeRules::new();
        merges.push(Symbol::plain("a"), Symbol::plain("b"));

        let config = SerializedConfig {
            vocab_size: vocab.len(),
            min_frequency: 1,
            strategy: "MergeDriven".to_string(),
        };
        let serialized = ModelSaver::new(&vocab, &merges, config).serialize();

        assert_eq!(serialized.tokens[0], Symbol::plain("a"));
        assert_eq!(serialized.tokens[1], Symbol::plain("b"));
        assert_eq!(serialized.merges.len(), 1);
        assert_eq!(serialized.version, env!("CARGO_PKG_VERSION"));
    }
}
