//! The training-time corpus representation.
//!
//! Word entries exist only while training runs: each distinct whitespace
//! token owns its occurrence count and a mutable symbol sequence that merges
//! rewrite in place. The entry's identity (the original word) never changes.

use ahash::AHashMap;
use compact_str::CompactString;
use std::collections::BTreeSet;
use subtok_core::Symbol;

/// A distinct word from the training text.
#[derive(Debug, Clone)]
pub struct WordEntry {
    /// The original word; identity only, never mutated
    pub text: CompactString,
    /// Occurrence count in the corpus
    pub count: u64,
    /// Current decomposition; rewritten as merges are applied
    pub symbols: Vec<Symbol>,
}

/// Word frequency model over a training text.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<WordEntry>,
}

impl Corpus {
    /// Split the text on whitespace, count duplicate words, and decompose
    /// each distinct word into graphemes plus the end-of-word marker.
    ///
    /// Empty input yields an empty corpus; that is a valid trivial model,
    /// not an error. Entries keep first-seen order.
    pub fn build(text: &str) -> Self {
        let mut entries: Vec<WordEntry> = Vec::new();
        let mut index: AHashMap<CompactString, usize> = AHashMap::new();

        for word in text.split_whitespace() {
            let key = CompactString::from(word);
            match index.get(&key) {
                Some(&pos) => entries[pos].count += 1,
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push(WordEntry {
                        symbols: Symbol::decompose(word),
                        text: key,
                        count: 1,
                    });
                }
            }
        }

        Self { entries }
    }

    /// The word entries, in first-seen order.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the corpus holds no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The distinct symbols appearing in the initial decompositions.
    pub fn base_symbols(&self) -> BTreeSet<Symbol> {
        self.entries
            .iter()
            .flat_map(|entry| entry.symbols.iter().cloned())
            .collect()
    }

    /// Whether any entry still has an adjacent pair left to merge.
    pub fn has_pairs(&self) -> bool {
        self.entries.iter().any(|entry| entry.symbols.len() >= 2)
    }

    /// Rewrite every entry, replacing each non-overlapping left-to-right
    /// occurrence of the adjacent `(left, right)` pair with `result`.
    pub fn apply_merge(&mut self, left: &Symbol, right: &Symbol, result: &Symbol) {
        for entry in &mut self.entries {
            let mut i = 0;
            while i + 1 < entry.symbols.len() {
                if &entry.symbols[i] == left && &entry.symbols[i + 1] == right {
                    entry.symbols[i] = result.clone();
                    entry.symbols.remove(i + 1);
                }
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts_duplicates() {
        let corpus = Corpus::build("low low lower");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entries()[0].text, "low");
        assert_eq!(corpus.entries()[0].count, 2);
        assert_eq!(corpus.entries()[1].text, "lower");
        assert_eq!(corpus.entries()[1].count, 1);
    }

    #[test]
    fn test_build_empty_input() {
        assert!(Corpus::build("").is_empty());
        assert!(Corpus::build("   \n\t ").is_empty());
    }

    #[test]
    fn test_initial_decomposition() {
        let corpus = Corpus::build("ab");
        assert_eq!(
            corpus.entries()[0].symbols,
            vec![Symbol::plain("a"), Symbol::plain("b"), Symbol::word_end()]
        );
    }

    #[test]
    fn test_base_symbols_include_marker() {
        let corpus = Corpus::build("ab ba");
        let base = corpus.base_symbols();
        assert_eq!(base.len(), 3);
        assert!(base.contains(&Symbol::plain("a")));
        assert!(base.contains(&Symbol::plain("b")));
        assert!(base.contains(&Symbol::word_end()));
    }

    #[test]
    fn test_apply_merge_rewrites_all_entries() {
        let mut corpus = Corpus::build("lo lot");
        corpus.apply_merge(
            &Symbol::plain("l"),
            &Symbol::plain("o"),
            &Symbol::plain("lo"),
        );

        assert_eq!(
            corpus.entries()[0].symbols,
            vec![Symbol::plain("lo"), Symbol::word_end()]
        );
        assert_eq!(
            corpus.entries()[1].symbols,
            vec![Symbol::plain("lo"), Symbol::plain("t"), Symbol::word_end()]
        );
    }

    #[test]
    fn test_apply_merge_is_non_overlapping() {
        let mut corpus = Corpus::build("aaa");
        corpus.apply_merge(
            &Symbol::plain("a"),
            &Symbol::plain("a"),
            &Symbol::plain("aa"),
        );

        // Left-to-right: the first two merge, the third is left alone.
        assert_eq!(
            corpus.entries()[0].symbols,
            vec![Symbol::plain("aa"), Symbol::plain("a"), Symbol::word_end()]
        );
    }

    #[test]
    fn test_has_pairs() {
        let mut corpus = Corpus::build("ab");
        assert!(corpus.has_pairs());

        corpus.apply_merge(
            &Symbol::plain("a"),
            &Symbol::plain("b"),
            &Symbol::plain("ab"),
        );
        corpus.apply_merge(
            &Symbol::plain("ab"),
            &Symbol::word_end(),
            &Symbol::terminal("ab"),
        );
        assert!(!corpus.has_pairs());
    }
}
