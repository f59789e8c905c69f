//! The atomic unit participating in merges.
//!
//! A [`Symbol`] is either an in-word piece of text, a piece that closes its
//! word (it carries the end-of-word marker), or the unknown-token sentinel.
//! The marker and the sentinel are dedicated variants rather than reserved
//! strings, so they can never collide with real text content.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// Suffix used when rendering a terminal symbol as text.
pub const WORD_END_DISPLAY: &str = "</w>";

/// Rendering of the unknown-token sentinel.
pub const UNKNOWN_DISPLAY: &str = "<unk>";

/// An atomic unit eligible for merging.
///
/// The derived `Ord` (variant order, then text) is the fixed total order used
/// everywhere determinism matters: the merge tie-break and vocabulary id
/// assignment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    /// An in-word piece of text (initially a single grapheme cluster).
    Plain(CompactString),
    /// A piece that ends its word. The bare end-of-word marker is
    /// `Terminal("")`; merges can grow text in front of it.
    Terminal(CompactString),
    /// The unknown-token sentinel emitted when no vocabulary entry matches.
    Unknown,
}

impl Symbol {
    /// Create an in-word symbol.
    pub fn plain(text: impl Into<CompactString>) -> Self {
        Symbol::Plain(text.into())
    }

    /// Create a word-ending symbol.
    pub fn terminal(text: impl Into<CompactString>) -> Self {
        Symbol::Terminal(text.into())
    }

    /// The bare end-of-word marker.
    pub fn word_end() -> Self {
        Symbol::Terminal(CompactString::default())
    }

    /// The text this symbol contributes to its word.
    ///
    /// The unknown sentinel contributes nothing.
    pub fn text(&self) -> &str {
        match self {
            Symbol::Plain(s) | Symbol::Terminal(s) => s.as_str(),
            Symbol::Unknown => "",
        }
    }

    /// Whether this symbol carries the end-of-word marker.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Whether this symbol is the unknown sentinel.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Symbol::Unknown)
    }

    /// Concatenate two adjacent symbols into the merged symbol.
    ///
    /// The result is terminal exactly when either operand is, so the marker
    /// is preserved through any chain of merges. The unknown sentinel never
    /// appears in a merge pair; if it does (a corrupted artifact), the
    /// sentinel is returned unchanged and artifact validation rejects the
    /// rule before it is ever applied.
    pub fn merge(left: &Symbol, right: &Symbol) -> Symbol {
        if left.is_unknown() || right.is_unknown() {
            return Symbol::Unknown;
        }

        let mut text = CompactString::from(left.text());
        text.push_str(right.text());

        if left.is_terminal() || right.is_terminal() {
            Symbol::Terminal(text)
        } else {
            Symbol::Plain(text)
        }
    }

    /// Decompose a word into its initial symbol sequence: one plain symbol
    /// per extended grapheme cluster, followed by the end-of-word marker.
    pub fn decompose(word: &str) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = word
            .graphemes(true)
            .map(|g| Symbol::Plain(CompactString::from(g)))
            .collect();
        symbols.push(Symbol::word_end());
        symbols
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Plain(s) => f.write_str(s),
            Symbol::Terminal(s) => write!(f, "{s}{WORD_END_DISPLAY}"),
            Symbol::Unknown => f.write_str(UNKNOWN_DISPLAY),
        }
    }
}
