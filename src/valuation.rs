use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::symbols::Symbol;

/// Anything that can supply a truth value for a symbol.
pub trait Valuation {
    fn value(&self, symbol: Symbol) -> Option<bool>;
}

impl<H: BuildHasher> Valuation for HashMap<char, bool, H> {
    fn value(&self, symbol: Symbol) -> Option<bool> {
        self.get(&symbol.name).copied()
    }
}

impl Valuation for BTreeMap<char, bool> {
    fn value(&self, symbol: Symbol) -> Option<bool> {
        self.get(&symbol.name).copied()
    }
}

impl Valuation for [(char, bool)] {
    fn value(&self, symbol: Symbol) -> Option<bool> {
        self.iter()
            .find(|(name, _)| *name == symbol.name)
            .map(|&(_, v)| v)
    }
}
