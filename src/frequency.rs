use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;

/// Occurrence count of every distinct symbol in a text.
///
/// Iteration is in ascending symbol order, which is what the tree builder
/// relies on to seed its queue deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Count symbols in a single pass over `text`.
    pub fn from_text(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        let mut total = 0;
        for symbol in text.chars() {
            *counts.entry(symbol).or_insert(0) += 1;
            total += 1;
        }
        FrequencyTable { counts, total }
    }

    /// Count symbols in raw bytes that must hold UTF-8 text.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_text(std::str::from_utf8(bytes)?))
    }

    pub fn get(&self, symbol: char) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of chars counted.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
