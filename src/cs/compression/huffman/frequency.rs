use std::collections::BTreeMap;

use super::Symbol;

/// Occurrence count of every symbol in an input.
///
/// Iteration is in ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: BTreeMap<Symbol, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `symbol`.
    pub fn increment(&mut self, symbol: Symbol) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    pub fn get(&self, symbol: Symbol) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the analyzed input.
    /// Saturates at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.counts
            .values()
            .fold(0usize, |acc, &count| acc.saturating_add(count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.counts.keys().copied()
    }
}

impl FromIterator<(Symbol, usize)> for FrequencyMap {
    /// Collect explicit counts. Zero counts are dropped and repeated symbols
    /// are summed, saturating at `usize::MAX`; [`build_huffman_tree`] rejects
    /// tables whose weights do not fit.
    ///
    /// [`build_huffman_tree`]: super::build_huffman_tree
    fn from_iter<I: IntoIterator<Item = (Symbol, usize)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (symbol, count) in iter {
            if count > 0 {
                let entry = counts.entry(symbol).or_insert(0usize);
                *entry = entry.saturating_add(count);
            }
        }
        FrequencyMap { counts }
    }
}

/// Build a frequency table mapping each character in `input` to its frequency.
///
/// An empty input yields an empty table.
pub fn build_frequency_table(input: &str) -> FrequencyMap {
    let mut freq = FrequencyMap::new();
    for ch in input.chars() {
        freq.increment(Symbol::from(ch));
    }
    freq
}
