//! Encoding strategies.
//!
//! Both strategies segment one whitespace-delimited word at a time; the
//! [`TokenStream`] wrapper turns per-word segmentation into a lazy, finite,
//! restartable token sequence over a whole text.

mod longest_match;
mod merge_driven;

pub use longest_match::LongestMatchEncoder;
pub use merge_driven::MergeEncoder;

use std::str::SplitWhitespace;
use subtok_core::Symbol;

/// A strategy for segmenting a single word into tokens.
pub trait Segmenter: Send + Sync {
    /// Segment one whitespace-delimited word.
    fn segment(&self, word: &str) -> Vec<Symbol>;
}

/// Lazy token sequence over a text.
///
/// Words are segmented on demand; iterating twice over streams built from
/// the same text and encoder yields identical output.
pub struct TokenStream<'a> {
    words: SplitWhitespace<'a>,
    segmenter: &'a dyn Segmenter,
    buffer: std::vec::IntoIter<Symbol>,
}

impl<'a> TokenStream<'a> {
    pub(crate) fn new(text: &'a str, segmenter: &'a dyn Segmenter) -> Self {
        Self {
            words: text.split_whitespace(),
            segmenter,
            buffer: Vec::new().into_iter(),
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        loop {
            if let Some(symbol) = self.buffer.next() {
                return Some(symbol);
            }
            let word = self.words.next()?;
            self.buffer = self.segmenter.segment(word).into_iter();
        }
    }
}
