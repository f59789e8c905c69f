//! Vocabulary-driven longest-match encoding.
//!
//! Each word is consumed greedily: the longest prefix present in the
//! vocabulary is emitted and the cursor advances past it. When not even the
//! next single grapheme is known, the unknown sentinel is emitted and the
//! cursor advances by one, so the encoder always makes progress and a word
//! of n graphemes yields at most n tokens.

use super::Segmenter;
use ahash::AHashMap;
use compact_str::CompactString;
use std::sync::Arc;
use subtok_core::{Symbol, Vocabulary};
use unicode_segmentation::UnicodeSegmentation;

/// Trie node keyed by grapheme cluster.
///
/// A node can complete both a plain token and its terminal twin; which one
/// applies depends on whether the match reaches the end of the word.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: AHashMap<CompactString, TrieNode>,
    plain: Option<Symbol>,
    terminal: Option<Symbol>,
}

/// Encoder matching the longest vocabulary prefix at each position.
pub struct LongestMatchEncoder {
    root: TrieNode,
    vocab: Arc<Vocabulary>,
}

impl LongestMatchEncoder {
    /// Build the prefix trie over a shared vocabulary.
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        let mut root = TrieNode::default();

        for (_, symbol) in vocab.iter() {
            let text = symbol.text();
            if text.is_empty() {
                // The unknown sentinel and the bare marker match no graphemes.
                continue;
            }
            let mut node = &mut root;
            for grapheme in text.graphemes(true) {
                node = node
                    .children
                    .entry(CompactString::from(grapheme))
                    .or_default();
            }
            if symbol.is_terminal() {
                node.terminal = Some(symbol.clone());
            } else {
                node.plain = Some(symbol.clone());
            }
        }

        Self { root, vocab }
    }

    /// The vocabulary this encoder matches against.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Longest match starting at `pos`: the token and the position after it.
    ///
    /// A terminal token only matches when it reaches the end of the word,
    /// and is preferred there over its plain twin.
    fn find_longest(&self, graphemes: &[&str], pos: usize) -> Option<(Symbol, usize)> {
        let mut node = &self.root;
        let mut best: Option<(Symbol, usize)> = None;

        for (i, grapheme) in graphemes.iter().enumerate().skip(pos) {
            match node.children.get(*grapheme) {
                Some(child) => {
                    node = child;
                    let at_end = i + 1 == graphemes.len();
                    let candidate = if at_end {
                        child.terminal.as_ref().or(child.plain.as_ref())
                    } else {
                        child.plain.as_ref()
                    };
                    if let Some(symbol) = candidate {
                        best = Some((symbol.clone(), i + 1));
                    }
                }
                None => break,
            }
        }

        best
    }
}

impl Segmenter for LongestMatchEncoder {
    fn segment(&self, word: &str) -> Vec<Symbol> {
        let graphemes: Vec<&str> = word.graphemes(true).collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < graphemes.len() {
            match self.find_longest(&graphemes, pos) {
                Some((symbol, next)) => {
                    tokens.push(symbol);
                    pos = next;
                }
                None => {
                    tokens.push(Symbol::Unknown);
                    pos += 1;
                }
            }
        }

        tokens
    }
}
