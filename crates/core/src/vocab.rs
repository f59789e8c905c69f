//! Vocabulary storage and lookup.
//!
//! A [`Vocabulary`] is built exactly once, through [`VocabularyBuilder`], and
//! is immutable afterwards: the finalized type exposes no mutation API, so
//! "add a token after finalization" is unrepresentable.

use crate::error::{Result, TokenizerError};
use crate::symbol::Symbol;
use ahash::AHashMap;
use std::collections::BTreeSet;

/// Accumulates the token set during training and assigns ids on [`finish`].
///
/// Symbols are kept in a `BTreeSet`, so ids come out dense and in the fixed
/// total order of [`Symbol`] regardless of insertion order.
///
/// [`finish`]: VocabularyBuilder::finish
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    symbols: BTreeSet<Symbol>,
}

impl VocabularyBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symbol. Returns false if it was already present.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        self.symbols.insert(symbol)
    }

    /// Number of distinct symbols collected so far.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if no symbols have been collected.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Finalize: assign dense ids `0..len` in sorted symbol order.
    pub fn finish(self) -> Vocabulary {
        let reverse: Vec<Symbol> = self.symbols.into_iter().collect();
        let forward: AHashMap<Symbol, u32> = reverse
            .iter()
            .enumerate()
            .map(|(id, symbol)| (symbol.clone(), id as u32))
            .collect();
        let unknown = forward.get(&Symbol::Unknown).copied();

        Vocabulary {
            forward,
            reverse,
            unknown,
        }
    }
}

impl Extend<Symbol> for VocabularyBuilder {
    fn extend<I: IntoIterator<Item = Symbol>>(&mut self, iter: I) {
        self.symbols.extend(iter);
    }
}

/// Finalized token-to-id mapping. Read-only; ids are dense `0..len`.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Forward mapping: symbol -> ID
    forward: AHashMap<Symbol, u32>,
    /// Reverse mapping, indexed by ID
    reverse: Vec<Symbol>,
    /// ID of the unknown sentinel, if present (cached for fast access)
    unknown: Option<u32>,
}

impl Vocabulary {
    /// Rebuild a vocabulary from an id-ordered token table, as read from a
    /// persisted artifact. Fails on duplicate entries.
    pub fn from_ordered(tokens: Vec<Symbol>) -> Result<Self> {
        let mut forward = AHashMap::with_capacity(tokens.len());
        for (id, symbol) in tokens.iter().enumerate() {
            if forward.insert(symbol.clone(), id as u32).is_some() {
                return Err(TokenizerError::Load(format!(
                    "duplicate token '{symbol}' in vocabulary table"
                )));
            }
        }
        let unknown = forward.get(&Symbol::Unknown).copied();

        Ok(Self {
            forward,
            reverse: tokens,
            unknown,
        })
    }

    /// Get the ID for a symbol.
    #[inline]
    pub fn id(&self, symbol: &Symbol) -> Option<u32> {
        self.forward.get(symbol).copied()
    }

    /// Get the symbol for an ID.
    #[inline]
    pub fn token(&self, id: u32) -> Option<&Symbol> {
        self.reverse.get(id as usize)
    }

    /// Check whether a symbol is present.
    #[inline]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.forward.contains_key(symbol)
    }

    /// ID of the unknown sentinel, if the vocabulary carries one.
    #[inline]
    pub fn unknown_id(&self) -> Option<u32> {
        self.unknown
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    /// Iterate tokens in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Symbol)> {
        self.reverse
            .iter()
            .enumerate()
            .map(|(id, symbol)| (id as u32, symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense_and_sorted() {
        let mut builder = VocabularyBuilder::new();
        builder.insert(Symbol::plain("o"));
        builder.insert(Symbol::plain("l"));
        builder.insert(Symbol::word_end());
        builder.insert(Symbol::plain("lo"));
        let vocab = builder.finish();

        assert_eq!(vocab.len(), 4);
        // Plain sorts before Terminal; text is lexicographic within a variant.
        assert_eq!(vocab.id(&Symbol::plain("l")), Some(0));
        assert_eq!(vocab.id(&Symbol::plain("lo")), Some(1));
        assert_eq!(vocab.id(&Symbol::plain("o")), Some(2));
        assert_eq!(vocab.id(&Symbol::word_end()), Some(3));
        assert_eq!(vocab.token(1), Some(&Symbol::plain("lo")));
        assert_eq!(vocab.token(4), None);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let mut a = VocabularyBuilder::new();
        a.extend([Symbol::plain("a"), Symbol::plain("b"), Symbol::Unknown]);
        let mut b = VocabularyBuilder::new();
        b.extend([Symbol::Unknown, Symbol::plain("b"), Symbol::plain("a")]);

        let (a, b) = (a.finish(), b.finish());
        assert_eq!(a.len(), b.len());
        for (id, symbol) in a.iter() {
            assert_eq!(b.token(id), Some(symbol));
        }
    }

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let mut builder = VocabularyBuilder::new();
        assert!(builder.insert(Symbol::plain("a")));
        assert!(!builder.insert(Symbol::plain("a")));
        assert_eq!(builder.finish().len(), 1);
    }

    #[test]
    fn test_unknown_id_is_cached() {
        let mut builder = VocabularyBuilder::new();
        builder.insert(Symbol::plain("a"));
        builder.insert(Symbol::Unknown);
        let vocab = builder.finish();

        assert_eq!(vocab.unknown_id(), vocab.id(&Symbol::Unknown));
        assert!(vocab.unknown_id().is_some());
    }

    #[test]
    fn test_from_ordered_preserves_ids() {
        let tokens = vec![Symbol::plain("b"), Symbol::plain("a")];
        let vocab = Vocabulary::from_ordered(tokens).unwrap();
        // The table's order wins, even when it is not sorted.
        assert_eq!(vocab.id(&Symbol::plain("b")), Some(0));
        assert_eq!(vocab.id(&Symbol::plain("a")), Some(1));
    }

    #[test]
    fn test_from_ordered_rejects_duplicates() {
        let tokens = vec![Symbol::plain("a"), Symbol::plain("a")];
        let err = Vocabulary::from_ordered(tokens).unwrap_err();
        assert!(matches!(err, TokenizerError::Load(_)));
    }
}
