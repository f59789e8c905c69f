//! The merge trainer.
//!
//! Iteratively selects the most frequent adjacent pair, commits it as a
//! merge rule, rewrites the corpus, and grows the working vocabulary until
//! the target size is reached or no pairs remain.

use crate::corpus::Corpus;
use crate::pairs;
use subtok_core::{MergeRules, Result, Symbol, TokenizerError, Vocabulary, VocabularyBuilder};

/// Configuration for training.
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    /// Target vocabulary size (base symbols + learned merges)
    pub target_vocab_size: usize,
    /// Minimum frequency for a pair to be merged
    pub min_frequency: u64,
    /// Whether to count pairs in parallel
    pub parallel: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            target_vocab_size: 30_000,
            min_frequency: 1,
            parallel: true,
        }
    }
}

/// Learns merge rules and a vocabulary from text.
///
/// Training is deterministic: identical text and configuration produce an
/// identical rule order and id assignment.
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    /// Create a trainer with the given configuration.
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    /// Create a trainer with the given target vocabulary size and defaults
    /// otherwise.
    pub fn with_vocab_size(target_vocab_size: usize) -> Self {
        Self::new(TrainerConfig {
            target_vocab_size,
            ..Default::default()
        })
    }

    /// Train on the given text.
    ///
    /// Returns the finalized vocabulary and the learned merge rules, the
    /// only artifacts an encoder needs. Empty text yields a trivial model.
    /// A target below the number of base symbols is an `InvalidConfig`
    /// error; running out of pairs before the target is a normal early stop.
    pub fn train(&self, text: &str) -> Result<(Vocabulary, MergeRules)> {
        if self.config.target_vocab_size == 0 {
            return Err(TokenizerError::InvalidConfig(
                "target vocabulary size must be positive".to_string(),
            ));
        }

        let mut corpus = Corpus::build(text);
        if corpus.is_empty() {
            let mut builder = VocabularyBuilder::new();
            builder.insert(Symbol::Unknown);
            return Ok((builder.finish(), MergeRules::new()));
        }

        let base = corpus.base_symbols();
        if self.config.target_vocab_size < base.len() {
            return Err(TokenizerError::InvalidConfig(format!(
                "target vocabulary size {} is below the {} base symbols",
                self.config.target_vocab_size,
                base.len()
            )));
        }

        let mut working = base;
        let mut merges =
            MergeRules::with_capacity(self.config.target_vocab_size - working.len());

        while working.len() < self.config.target_vocab_size {
            let counts = if self.config.parallel {
                pairs::count_pairs_parallel(&corpus)
            } else {
                pairs::count_pairs(&corpus)
            };

            // All words fully merged: normal early termination.
            let Some((pair, count)) = pairs::best_pair(&counts) else {
                break;
            };
            if count < self.config.min_frequency {
                break;
            }
            let (left, right) = pair.clone();

            let result = merges.push(left.clone(), right.clone());
            corpus.apply_merge(&left, &right, &result);
            working.insert(result);
        }

        // The unknown sentinel is added after the loop and does not count
        // toward the target, so at most target - base merges are learned.
        let mut builder = VocabularyBuilder::new();
        builder.extend(working);
        builder.insert(Symbol::Unknown);

        Ok((builder.finish(), merges))
    }
}
