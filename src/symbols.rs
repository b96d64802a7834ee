use rustc_hash::FxHashMap;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Index,
    slice::Iter,
};

/// A single-character boolean variable together with its position in the
/// symbol set it was declared in.
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    pub name: char,
    pub id: usize,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Symbol> for usize {
    fn from(s: Symbol) -> Self {
        s.id
    }
}

impl From<Symbol> for char {
    fn from(s: Symbol) -> Self {
        s.name
    }
}

/// The ordered set of symbols of a session.
///
/// The order is fixed at construction: the first symbol owns the most
/// significant bit of an assignment and the first column of a table.
/// Instances are only handed out by the validator, so a `SymbolSet` is always
/// non-empty and free of duplicates and reserved characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
    lookup: FxHashMap<char, usize>,
}

impl SymbolSet {
    pub(crate) fn from_validated(names: Vec<char>) -> Self {
        let symbols: Vec<Symbol> = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Symbol { name, id })
            .collect();

        let lookup = symbols.iter().map(|s| (s.name, s.id)).collect();

        Self { symbols, lookup }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, name: char) -> Option<Symbol> {
        self.lookup.get(&name).map(|&id| self.symbols[id])
    }

    pub fn contains(&self, name: char) -> bool {
        self.lookup.contains_key(&name)
    }

    pub fn iter(&self) -> Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().map(|s| s.name)
    }
}

impl Index<usize> for SymbolSet {
    type Output = Symbol;

    fn index(&self, id: usize) -> &Symbol {
        &self.symbols[id]
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
