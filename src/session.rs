use std::sync::Arc;

use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::assignment::{Assignment, Assignments};
use crate::error::{Error, MalformedExpression};
use crate::postfix::Postfix;
use crate::symbols::SymbolSet;
use crate::truth_table::TruthTable;
use crate::validator;
use crate::valuation::Valuation;

/// A validated formula and its cached postfix form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    text: String,
    postfix: Postfix,
}

impl Formula {
    fn parse(symbols: &SymbolSet, text: &str) -> Result<Self, Error> {
        validator::validate_formula(symbols, text)?;
        Self::convert(symbols, text)
    }

    fn convert(symbols: &SymbolSet, text: &str) -> Result<Self, Error> {
        let postfix = Postfix::convert(symbols, text)?;
        postfix
            .check()
            .map_err(|source| Error::malformed(text, source))?;

        Ok(Self {
            text: text.to_string(),
            postfix,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn evaluate<V: Valuation + ?Sized>(
        &self,
        valuation: &V,
    ) -> Result<bool, MalformedExpression> {
        self.postfix.evaluate(valuation)
    }
}

/// A fixed symbol set together with validated, pre-converted formulas.
///
/// A `Session` only exists when every symbol and every formula passed
/// validation; it is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    symbols: Arc<SymbolSet>,
    formulas: Vec<Formula>,
}

impl Session {
    pub fn new<I, S, F>(symbols: I, formulas: &[F]) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: AsRef<str>,
    {
        let symbols = validator::validate(symbols, formulas)?;

        let formulas = formulas
            .iter()
            .map(|f| Formula::convert(&symbols, f.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        for formula in &formulas {
            debug!("{} => {}", formula.text, formula.postfix);
        }

        Ok(Self {
            symbols: Arc::new(symbols),
            formulas,
        })
    }

    pub fn symbols(&self) -> &Arc<SymbolSet> {
        &self.symbols
    }

    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    pub fn assignments(&self) -> Assignments {
        Assignments::new(&self.symbols)
    }

    pub fn assignment(&self, index: usize) -> Option<Assignment> {
        Assignment::from_index(&self.symbols, index)
    }

    /// The symbol-to-value map of every assignment, keyed by its number, in
    /// enumeration order.
    pub fn truth_map(&self) -> impl Iterator<Item = (usize, FxHashMap<char, bool>)> {
        self.assignments().map(|a| (a.index(), a.to_map()))
    }

    /// Evaluate one of the session's formulas under a valuation.
    pub fn evaluate_formula<V: Valuation + ?Sized>(
        &self,
        formula: usize,
        valuation: &V,
    ) -> Option<Result<bool, MalformedExpression>> {
        self.formulas.get(formula).map(|f| f.evaluate(valuation))
    }

    /// Validate, convert and evaluate a formula that is not part of the
    /// session, using the session's symbols.
    pub fn evaluate<V: Valuation + ?Sized>(
        &self,
        formula: &str,
        valuation: &V,
    ) -> Result<bool, Error> {
        let formula = Formula::parse(&self.symbols, formula)?;

        formula
            .evaluate(valuation)
            .map_err(|source| Error::malformed(&formula.text, source))
    }

    fn evaluate_row(&self, assignment: &Assignment) -> Result<Vec<bool>, Error> {
        let values = self
            .formulas
            .iter()
            .map(|f| {
                f.evaluate(assignment)
                    .map_err(|source| Error::malformed(&f.text, source))
            })
            .collect::<Result<Vec<_>, _>>()?;

        trace!("{assignment}: {values:?}");

        Ok(values)
    }

    fn assemble(&self, assignments: Vec<Assignment>, rows: Vec<Vec<bool>>) -> TruthTable {
        TruthTable::new(
            self.symbols.clone(),
            self.formulas.iter().map(|f| f.text.clone()).collect(),
            assignments,
            rows.into_iter().flatten().collect(),
        )
    }

    /// Evaluate every formula under every assignment.
    pub fn truth_table(&self) -> Result<TruthTable, Error> {
        debug!(
            "building truth table: {} row(s), {} formula(s)",
            self.assignments().len(),
            self.formulas.len()
        );

        let assignments: Vec<Assignment> = self.assignments().collect();
        let rows = assignments
            .iter()
            .map(|a| self.evaluate_row(a))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.assemble(assignments, rows))
    }

    /// Like [`Session::truth_table`], but rows are evaluated on the rayon
    /// thread pool. The result is identical.
    pub fn par_truth_table(&self) -> Result<TruthTable, Error> {
        debug!(
            "building truth table in parallel: {} row(s), {} formula(s)",
            self.assignments().len(),
            self.formulas.len()
        );

        let assignments: Vec<Assignment> = self.assignments().collect();
        let rows = assignments
            .par_iter()
            .map(|a| self.evaluate_row(a))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.assemble(assignments, rows))
    }
}
