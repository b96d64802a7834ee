use std::sync::Arc;

use crate::assignment::Assignment;
use crate::symbols::SymbolSet;

/// The value of every formula under every assignment.
///
/// Results are stored once, row by row in enumeration order (all-true
/// assignment first). [`TruthTable::row`] and [`TruthTable::column`] are
/// views over the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    symbols: Arc<SymbolSet>,
    formulas: Vec<String>,
    assignments: Vec<Assignment>,
    results: Vec<bool>,
}

/// All formula values under one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub assignment: &'a Assignment,
    pub values: &'a [bool],
}

/// The values of one formula under every assignment.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    table: &'a TruthTable,
    formula: usize,
}

impl TruthTable {
    pub(crate) fn new(
        symbols: Arc<SymbolSet>,
        formulas: Vec<String>,
        assignments: Vec<Assignment>,
        results: Vec<bool>,
    ) -> Self {
        debug_assert_eq!(assignments.len() * formulas.len(), results.len());

        Self {
            symbols,
            formulas,
            assignments,
            results,
        }
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn formulas(&self) -> &[String] {
        &self.formulas
    }

    /// The raw symbol assignments, in enumeration order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn row_count(&self) -> usize {
        self.assignments.len()
    }

    fn position(&self, index: usize) -> Option<usize> {
        self.assignments.len().checked_sub(index)?.checked_sub(1)
    }

    fn row_at(&self, position: usize) -> Row<'_> {
        let width = self.formulas.len();

        Row {
            assignment: &self.assignments[position],
            values: &self.results[position * width..(position + 1) * width],
        }
    }

    /// Row-major view, in enumeration order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row<'_>> + '_ {
        (0..self.assignments.len()).map(|position| self.row_at(position))
    }

    /// The row of the assignment numbered `index`.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.position(index).map(|position| self.row_at(position))
    }

    /// Column-major view, one column per formula in declaration order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = Column<'_>> + '_ {
        (0..self.formulas.len()).map(|formula| Column {
            table: self,
            formula,
        })
    }

    pub fn column(&self, formula: usize) -> Option<Column<'_>> {
        (formula < self.formulas.len()).then_some(Column {
            table: self,
            formula,
        })
    }

    /// The value of formula `formula` under assignment `index`.
    pub fn value(&self, index: usize, formula: usize) -> Option<bool> {
        self.row(index)
            .and_then(|row| row.values.get(formula).copied())
    }
}

impl<'a> Column<'a> {
    pub const fn formula_index(&self) -> usize {
        self.formula
    }

    pub fn formula(&self) -> &'a str {
        &self.table.formulas[self.formula]
    }

    /// Assignments and the formula's value under each, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a Assignment, bool)> + 'a {
        let table = self.table;
        let formula = self.formula;
        let width = table.formulas.len();

        table
            .assignments
            .iter()
            .enumerate()
            .map(move |(position, a)| (a, table.results[position * width + formula]))
    }

    pub fn values(&self) -> Vec<bool> {
        self.iter().map(|(_, v)| v).collect()
    }

    pub fn value(&self, index: usize) -> Option<bool> {
        self.table.value(index, self.formula)
    }

    pub fn is_tautology(&self) -> bool {
        self.iter().all(|(_, v)| v)
    }

    pub fn is_contradiction(&self) -> bool {
        self.iter().all(|(_, v)| !v)
    }

    pub fn is_satisfiable(&self) -> bool {
        !self.is_contradiction()
    }

    /// Indices of the assignments that satisfy the formula.
    pub fn models(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, v)| *v)
            .map(|(a, _)| a.index())
            .collect()
    }
}
