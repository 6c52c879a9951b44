//! Bigram statistics: adjacent-pair counts and most-frequent-pair selection.

use crate::symbol::{Pair, Symbol};
use ahash::AHashMap as HashMap;

/// Adjacent-pair frequencies over one sequence.
///
/// Pairs are kept in the order they first appear scanning left to right,
/// which is what breaks ties in [`BigramCounts::most_frequent`].
#[derive(Debug, Clone, Default)]
pub struct BigramCounts {
    /// Pair to position in `entries`
    index: HashMap<Pair, usize>,
    /// (pair, count) in first-occurrence order
    entries: Vec<(Pair, usize)>,
}

impl BigramCounts {
    fn record(&mut self, pair: Pair) {
        match self.index.get(&pair) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(pair, self.entries.len());
                self.entries.push((pair, 1));
            }
        }
    }

    /// Returns the count for `pair`, or 0 if it never occurs.
    pub fn get(&self, pair: &Pair) -> usize {
        self.index
            .get(pair)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of adjacent positions counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Iterates `(pair, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the pair with the highest count and that count.
    ///
    /// Among pairs with equal counts the one that first appears earliest in
    /// the sequence wins.
    pub fn most_frequent(&self) -> Option<(Pair, usize)> {
        let mut best: Option<(Pair, usize)> = None;
        for &(pair, count) in &self.entries {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((pair, count)),
            }
        }
        best
    }
}

/// Counts every adjacent pair `(sequence[i], sequence[i + 1])`.
///
/// Overlapping occurrences are all counted, so `a a a` holds `(a, a)` twice.
/// Sequences shorter than two symbols produce empty counts.
pub fn count_bigrams(sequence: &[Symbol]) -> BigramCounts {
    let mut counts = BigramCounts::default();
    for window in sequence.windows(2) {
        counts.record(Pair::new(window[0], window[1]));
    }
    counts
}

/// Selects the most frequent adjacent pair, or `None` if the sequence has
/// fewer than two symbols.
pub fn most_frequent_pair(sequence: &[Symbol]) -> Option<Pair> {
    count_bigrams(sequence).most_frequent().map(|(pair, _)| pair)
}
