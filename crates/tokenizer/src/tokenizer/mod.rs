//! Main tokenizer implementation.
//!
//! The high-level [`Tokenizer`] integrates the vocabulary, the merge rules,
//! and the two encoding strategies. Artifacts are `Arc`-shared and read-only
//! after training, so encoding is safe to run concurrently without locking.

use crate::encoder::{LongestMatchEncoder, MergeEncoder, Segmenter, TokenStream};
use crate::io::{ModelLoader, ModelSaver, SerializedConfig};
use std::path::Path;
use std::sync::Arc;
use subtok_core::{MergeRules, Result, Symbol, TokenizerError, Vocabulary};

/// Encoding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Apply learned merge rules in priority order (training-consistent)
    #[default]
    MergeDriven,
    /// Greedy longest-prefix matching against the vocabulary, with an
    /// unknown-token fallback
    LongestMatch,
}

impl Strategy {
    fn parse(s: &str) -> Strategy {
        match s {
            "LongestMatch" => Strategy::LongestMatch,
            _ => Strategy::MergeDriven,
        }
    }
}

/// Configuration for building a tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Target vocabulary size for training
    pub vocab_size: usize,
    /// Minimum pair frequency for merges during training
    pub min_frequency: u64,
    /// Encoding strategy
    pub strategy: Strategy,
    /// Whether training counts pairs in parallel
    pub parallel: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocab_size: 30_000,
            min_frequency: 1,
            strategy: Strategy::default(),
            parallel: true,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target vocabulary size.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Set the minimum pair frequency for merges.
    pub fn min_frequency(mut self, freq: u64) -> Self {
        self.config.min_frequency = freq;
        self
    }

    /// Set the encoding strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Build an untrained tokenizer.
    pub fn build(self) -> Tokenizer {
        Tokenizer::new(self.config)
    }
}

/// Main tokenizer struct.
pub struct Tokenizer {
    vocab: Arc<Vocabulary>,
    merges: Arc<MergeRules>,
    config: TokenizerConfig,
    merge_encoder: MergeEncoder,
    longest_match: LongestMatchEncoder,
}

impl Tokenizer {
    /// Create an untrained tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        Self::assemble(Vocabulary::default(), MergeRules::default(), config)
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Construct a tokenizer from previously trained artifacts.
    pub fn from_artifacts(
        vocab: Vocabulary,
        merges: MergeRules,
        config: TokenizerConfig,
    ) -> Self {
        Self::assemble(vocab, merges, config)
    }

    fn assemble(vocab: Vocabulary, merges: MergeRules, config: TokenizerConfig) -> Self {
        let vocab = Arc::new(vocab);
        let merges = Arc::new(merges);
        Self {
            merge_encoder: MergeEncoder::new(merges.clone()),
            longest_match: LongestMatchEncoder::new(vocab.clone()),
            vocab,
            merges,
            config,
        }
    }

    /// Switch the encoding strategy, keeping the trained artifacts.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Train on the given text, replacing any previous artifacts.
    pub fn train(&mut self, text: &str) -> Result<()> {
        use subtok_training::{Trainer, TrainerConfig};

        let trainer = Trainer::new(TrainerConfig {
            target_vocab_size: self.config.vocab_size,
            min_frequency: self.config.min_frequency,
            parallel: self.config.parallel,
        });
        let (vocab, merges) = trainer.train(text)?;

        *self = Self::assemble(vocab, merges, self.config.clone());
        Ok(())
    }

    fn segmenter(&self) -> &dyn Segmenter {
        match self.config.strategy {
            Strategy::MergeDriven => &self.merge_encoder,
            Strategy::LongestMatch => &self.longest_match,
        }
    }

    /// Lazily tokenize a text with the configured strategy.
    ///
    /// The stream is finite and restartable: encoding the same text again
    /// yields the identical sequence.
    pub fn tokens<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        TokenStream::new(text, self.segmenter())
    }

    /// Tokenize a text into a vector of symbols.
    pub fn encode(&self, text: &str) -> Vec<Symbol> {
        self.tokens(text).collect()
    }

    /// Tokenize a text into token ids.
    ///
    /// Tokens missing from the vocabulary take the unknown id; if the
    /// vocabulary carries no unknown entry, the miss is an error.
    pub fn encode_ids(&self, text: &str) -> Result<Vec<u32>> {
        self.tokens(text)
            .map(|symbol| {
                self.vocab
                    .id(&symbol)
                    .or_else(|| self.vocab.unknown_id())
                    .ok_or_else(|| TokenizerError::UnknownToken(symbol.to_string()))
            })
            .collect()
    }

    /// Tokenize a batch of texts in parallel.
    pub fn encode_batch(&self, texts: &[String]) -> Vec<Vec<Symbol>> {
        use rayon::prelude::*;

        texts.par_iter().map(|text| self.encode(text)).collect()
    }

    /// Reassemble text from token ids. A terminal token closes its word.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        let mut out = String::new();
        for &id in ids {
            let symbol = self
                .vocab
                .token(id)
                .ok_or(TokenizerError::UnknownTokenId(id))?;
            match symbol {
                Symbol::Unknown => out.push_str(subtok_core::UNKNOWN_DISPLAY),
                _ => {
                    out.push_str(symbol.text());
                    if symbol.is_terminal() {
                        out.push(' ');
                    }
                }
            }
        }
        Ok(out.trim_end().to_string())
    }

    /// The vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The learned merge rules.
    pub fn merges(&self) -> &MergeRules {
        &self.merges
    }

    /// The configured encoding strategy.
    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    /// Save the model to a directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        let config = SerializedConfig {
            vocab_size: self.config.vocab_size,
            min_frequency: self.config.min_frequency,
            strategy: format!("{:?}", self.config.strategy),
        };
        ModelSaver::new(&self.vocab, &self.merges, config).save(path)
    }

    /// Load a model from a directory.
    pub fn load(path: &Path) -> Result<Self> {
        let (vocab, merges, serialized) = ModelLoader::load(path)?;

        let config = TokenizerConfig {
            vocab_size: serialized.config.vocab_size,
            min_frequency: serialized.config.min_frequency,
            strategy: Strategy::parse(&serialized.config.strategy),
            parallel: true,
        };

        Ok(Self::assemble(vocab, merges, config))
    }
}
