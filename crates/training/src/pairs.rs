//! Pair frequency statistics over a corpus.
//!
//! Counting is a pure reduction, so the parallel form splits per entry and
//! folds partial maps together. Counts must be recomputed after every merge
//! commit: a merge changes adjacency in every word containing the pair.

use crate::corpus::Corpus;
use ahash::AHashMap;
use rayon::prelude::*;
use subtok_core::Pair;

/// Count every adjacent pair across all entries, weighted by entry count.
pub fn count_pairs(corpus: &Corpus) -> AHashMap<Pair, u64> {
    let mut counts: AHashMap<Pair, u64> = AHashMap::new();

    for entry in corpus.entries() {
        for window in entry.symbols.windows(2) {
            let pair = (window[0].clone(), window[1].clone());
            *counts.entry(pair).or_insert(0) += entry.count;
        }
    }

    counts
}

/// Parallel pair counting: per-entry partial maps reduced into one.
pub fn count_pairs_parallel(corpus: &Corpus) -> AHashMap<Pair, u64> {
    corpus
        .entries()
        .par_iter()
        .map(|entry| {
            let mut counts: AHashMap<Pair, u64> = AHashMap::new();
            for window in entry.symbols.windows(2) {
                let pair = (window[0].clone(), window[1].clone());
                *counts.entry(pair).or_insert(0) += entry.count;
            }
            counts
        })
        .reduce(AHashMap::new, |mut acc, counts| {
            for (pair, count) in counts {
                *acc.entry(pair).or_insert(0) += count;
            }
            acc
        })
}

/// Select the most frequent pair.
///
/// Ties are broken by the smallest pair under [`Symbol`]'s total order, so
/// selection never depends on map iteration order and training stays
/// reproducible across runs.
///
/// [`Symbol`]: subtok_core::Symbol
pub fn best_pair(counts: &AHashMap<Pair, u64>) -> Option<(&Pair, u64)> {
    counts.iter().fold(None, |best, (pair, &count)| match best {
        None => Some((pair, count)),
        Some((best_pair, best_count)) => {
            if count > best_count || (count == best_count && pair < best_pair) {
                Some((pair, count))
            } else {
                Some((best_pair, best_count))
            }
        }
    })
}
