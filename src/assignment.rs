use std::fmt;
use std::iter::Rev;
use std::ops::Range;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::symbols::{Symbol, SymbolSet};
use crate::valuation::Valuation;

/// Number of assignments over `n` symbols.
pub const fn row_count(n: usize) -> usize {
    1 << n
}

/// One complete mapping from the symbols of a set to truth values.
///
/// Assignment `index` gives symbol `i` the value of bit `n - 1 - i` of
/// `index`, so the first symbol owns the most significant bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    index: usize,
    symbols: Arc<SymbolSet>,
    values: Vec<bool>,
}

impl Assignment {
    /// The assignment numbered `index`, or `None` when `index >= 2^n`.
    pub fn from_index(symbols: &Arc<SymbolSet>, index: usize) -> Option<Self> {
        (index < row_count(symbols.len())).then(|| Self::decode(symbols, index))
    }

    fn decode(symbols: &Arc<SymbolSet>, index: usize) -> Self {
        let n = symbols.len();
        let values = (0..n).map(|i| (index >> (n - 1 - i)) & 1 == 1).collect();

        Self {
            index,
            symbols: symbols.clone(),
            values,
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn get(&self, name: char) -> Option<bool> {
        self.symbols.get(name).map(|s| self.values[s.id])
    }

    /// Symbols and their values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, bool)> + '_ {
        self.symbols.iter().copied().zip(self.values.iter().copied())
    }

    pub fn to_map(&self) -> FxHashMap<char, bool> {
        self.iter().map(|(s, v)| (s.name, v)).collect()
    }

    /// The n-bit binary representation of the index, `1` meaning true.
    pub fn bit_string(&self) -> String {
        self.values
            .iter()
            .map(|&v| if v { '1' } else { '0' })
            .collect()
    }
}

impl Valuation for Assignment {
    fn value(&self, symbol: Symbol) -> Option<bool> {
        self.values
            .get(symbol.id)
            .filter(|_| self.symbols[symbol.id].name == symbol.name)
            .copied()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.bit_string())
    }
}

/// Every assignment over a symbol set, from all-true down to all-false.
#[derive(Debug, Clone)]
pub struct Assignments {
    symbols: Arc<SymbolSet>,
    indices: Rev<Range<usize>>,
}

impl Assignments {
    pub fn new(symbols: &Arc<SymbolSet>) -> Self {
        Self {
            symbols: symbols.clone(),
            indices: (0..row_count(symbols.len())).rev(),
        }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        self.indices
            .next()
            .map(|index| Assignment::decode(&self.symbols, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for Assignments {
    fn next_back(&mut self) -> Option<Assignment> {
        self.indices
            .next_back()
            .map(|index| Assignment::decode(&self.symbols, index))
    }
}

impl ExactSizeIterator for Assignments {}
