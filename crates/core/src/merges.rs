//! Merge rule storage.
//!
//! Learning order is a semantic invariant: at encode time rules must be tried
//! earliest-learned first. Rules therefore live in an ordered `Vec` whose
//! index is the rank; the pair index on the side only accelerates lookup.

use crate::error::{Result, TokenizerError};
use crate::symbol::Symbol;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// An ordered pair of adjacent symbols considered for merging.
pub type Pair = (Symbol, Symbol);

/// A learned instruction: replace the adjacent `(left, right)` pair with
/// `result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRule {
    pub left: Symbol,
    pub right: Symbol,
    pub result: Symbol,
}

/// The ordered list of learned merge rules, with a derived rank index.
#[derive(Debug, Clone, Default)]
pub struct MergeRules {
    /// Rules in learning order; index = rank (lower = higher priority)
    rules: Vec<MergeRule>,
    /// Pair -> rank of the earliest rule for that pair
    ranks: AHashMap<Pair, u32>,
}

impl MergeRules {
    /// Create an empty rule list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty rule list with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Vec::with_capacity(capacity),
            ranks: AHashMap::with_capacity(capacity),
        }
    }

    /// Record the next learned merge and return the resulting symbol.
    pub fn push(&mut self, left: Symbol, right: Symbol) -> Symbol {
        let result = Symbol::merge(&left, &right);
        let rank = self.rules.len() as u32;
        self.ranks
            .entry((left.clone(), right.clone()))
            .or_insert(rank);
        self.rules.push(MergeRule {
            left,
            right,
            result: result.clone(),
        });
        result
    }

    /// Rank of the rule for an adjacent pair, if one was learned.
    #[inline]
    pub fn rank_of(&self, left: &Symbol, right: &Symbol) -> Option<u32> {
        self.ranks.get(&(left.clone(), right.clone())).copied()
    }

    /// Look up the rule for a pair: `(rank, result)`.
    pub fn get(&self, left: &Symbol, right: &Symbol) -> Option<(u32, &Symbol)> {
        let rank = self.rank_of(left, right)?;
        self.rules
            .get(rank as usize)
            .map(|rule| (rank, &rule.result))
    }

    /// The rule at a given rank.
    pub fn rule(&self, rank: u32) -> Option<&MergeRule> {
        self.rules.get(rank as usize)
    }

    /// Rules in learning order.
    pub fn rules(&self) -> &[MergeRule] {
        &self.rules
    }

    /// Iterate rules in learning order.
    pub fn iter(&self) -> std::slice::Iter<'_, MergeRule> {
        self.rules.iter()
    }

    /// Number of learned rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rules have been learned.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rebuild from a persisted rule list, validating internal consistency.
    ///
    /// Each rule's result must equal the concatenation of its operands, and
    /// the unknown sentinel may not appear in any rule. A violation means the
    /// artifact is corrupted and loading must fail fast.
    pub fn from_rules(rules: Vec<MergeRule>) -> Result<Self> {
        let mut out = Self::with_capacity(rules.len());
        for rule in rules {
            if rule.left.is_unknown() || rule.right.is_unknown() || rule.result.is_unknown() {
                return Err(TokenizerError::InvalidMerge(
                    "merge rule references the unknown sentinel".to_string(),
                ));
            }
            let expected = Symbol::merge(&rule.left, &rule.right);
            if expected != rule.result {
                return Err(TokenizerError::InvalidMerge(format!(
                    "merge of '{}' and '{}' should produce '{expected}', artifact says '{}'",
                    rule.left, rule.right, rule.result
                )));
            }
            out.push(rule.left, rule.right);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_ranks_in_order() {
        let mut rules = MergeRules::new();
        let lo = rules.push(Symbol::plain("l"), Symbol::plain("o"));
        let low = rules.push(lo.clone(), Symbol::plain("w"));

        assert_eq!(lo, Symbol::plain("lo"));
        assert_eq!(low, Symbol::plain("low"));
        assert_eq!(rules.rank_of(&Symbol::plain("l"), &Symbol::plain("o")), Some(0));
        assert_eq!(rules.rank_of(&lo, &Symbol::plain("w")), Some(1));
        assert_eq!(rules.rank_of(&Symbol::plain("o"), &Symbol::plain("w")), None);
    }

    #[test]
    fn test_get_returns_rank_and_result() {
        let mut rules = MergeRules::new();
        rules.push(Symbol::plain("w"), Symbol::word_end());

        let (rank, result) = rules.get(&Symbol::plain("w"), &Symbol::word_end()).unwrap();
        assert_eq!(rank, 0);
        assert_eq!(result, &Symbol::terminal("w"));
    }

    #[test]
    fn test_from_rules_roundtrip() {
        let mut rules = MergeRules::new();
        rules.push(Symbol::plain("a"), Symbol::plain("b"));
        rules.push(Symbol::plain("ab"), Symbol::word_end());

        let rebuilt = MergeRules::from_rules(rules.rules().to_vec()).unwrap();
        assert_eq!(rebuilt.rules(), rules.rules());
    }

    #[test]
    fn test_from_rules_rejects_mismatched_result() {
        let rules = vec![MergeRule {
            left: Symbol::plain("a"),
            right: Symbol::plain("b"),
            result: Symbol::plain("zz"),
        }];
        let err = MergeRules::from_rules(rules).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
    }

    #[test]
    fn test_from_rules_rejects_unknown_operand() {
        let rules = vec![MergeRule {
            left: Symbol::Unknown,
            right: Symbol::plain("b"),
            result: Symbol::Unknown,
        }];
        let err = MergeRules::from_rules(rules).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
    }
}
