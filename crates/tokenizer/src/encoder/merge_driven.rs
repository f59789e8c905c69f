//! Merge-rule-driven encoding.
//!
//! A word is decomposed exactly as during training, then rules are applied
//! in learning order: among all matches present in the current sequence, the
//! rule with the smallest rank wins, at its leftmost occurrence. This
//! reproduces the training-time decomposition of any word the trainer saw.

use super::Segmenter;
use std::sync::Arc;
use subtok_core::{MergeRules, Symbol};

/// Encoder driven by an ordered merge rule list.
pub struct MergeEncoder {
    merges: Arc<MergeRules>,
}

impl MergeEncoder {
    /// Create an encoder over a shared rule list.
    pub fn new(merges: Arc<MergeRules>) -> Self {
        Self { merges }
    }
}

impl Segmenter for MergeEncoder {
    fn segment(&self, word: &str) -> Vec<Symbol> {
        let mut symbols = Symbol::decompose(word);

        loop {
            // Scan for the lowest-ranked rule with a live occurrence;
            // strict comparison keeps the leftmost position for that rank.
            let mut best: Option<(u32, usize)> = None;
            for (pos, window) in symbols.windows(2).enumerate() {
                if let Some(rank) = self.merges.rank_of(&window[0], &window[1]) {
                    if best.map_or(true, |(best_rank, _)| rank < best_rank) {
                        best = Some((rank, pos));
                    }
                }
            }

            let Some((rank, pos)) = best else {
                return symbols;
            };
            // The rank came from this rule list, so the rule exists.
            let Some(rule) = self.merges.rule(rank) else {
                return symbols;
            };
            symbols[pos] = rule.result.clone();
            symbols.remove(pos + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtok_training::Trainer;

    fn rules(pairs: &[(Symbol, Symbol)]) -> Arc<MergeRules> {
        let mut merges = MergeRules::new();
        for (left, right) in pairs {
            merges.push(left.clone(), right.clone());
        }
        Arc::new(merges)
    }

    #[test]
    fn test_chained_merges() {
        let merges = rules(&[
            (Symbol::plain("a"), Symbol::plain("b")),
            (Symbol::plain("ab"), Symbol::plain("c")),
        ]);
        let encoder = MergeEncoder::new(merges);

        assert_eq!(
            encoder.segment("abc"),
            vec![Symbol::plain("abc"), Symbol::word_end()]
        );
    }

    #[test]
    fn test_rules_apply_in_learning_order() {
        // (b,c) was learned first, so it wins even though (a,b) also matches.
        let merges = rules(&[
            (Symbol::plain("b"), Symbol::plain("c")),
            (Symbol::plain("a"), Symbol::plain("b")),
        ]);
        let encoder = MergeEncoder::new(merges);

        assert_eq!(
            encoder.segment("abc"),
            vec![Symbol::plain("a"), Symbol::plain("bc"), Symbol::word_end()]
        );
    }

    #[test]
    fn test_equal_rank_matches_leftmost_first() {
        let merges = rules(&[(Symbol::plain("a"), Symbol::plain("a"))]);
        let encoder = MergeEncoder::new(merges);

        // Leftmost occurrence merges first, then the remaining pair.
        assert_eq!(
            encoder.segment("aaaa"),
            vec![Symbol::plain("aa"), Symbol::plain("aa"), Symbol::word_end()]
        );
    }

    #[test]
    fn test_no_applicable_rule_leaves_decomposition() {
        let encoder = MergeEncoder::new(Arc::new(MergeRules::new()));
        assert_eq!(
            encoder.segment("hi"),
            vec![Symbol::plain("h"), Symbol::plain("i"), Symbol::word_end()]
        );
    }

    #[test]
    fn test_reproduces_training_decomposition() {
        // After two merges on this corpus, "lowest" trains to
        // [low, e, s, t, </w>]; encoding must reproduce exactly that.
        let trainer = Trainer::with_vocab_size(10);
        let (_, merges) = trainer.train("low lower lowest").unwrap();
        let encoder = MergeEncoder::new(Arc::new(merges));

        assert_eq!(
            encoder.segment("lowest"),
            vec![
                Symbol::plain("low"),
                Symbol::plain("e"),
                Symbol::plain("s"),
                Symbol::plain("t"),
                Symbol::word_end(),
            ]
        );
    }
}
