//! Construction-time checks on symbol lists and formula strings.
//!
//! Nothing downstream of this module re-checks characters or parentheses:
//! the converter relies on every formula it sees having passed
//! [`validate_formula`].

use log::debug;
use rustc_hash::FxHashSet;

use crate::error::{Imbalance, ValidationError};
use crate::grammar::{self, CLOSE_PAREN, OPEN_PAREN};
use crate::symbols::SymbolSet;

/// Highest symbol count whose rows can still be numbered by a `usize`.
pub const MAX_SYMBOLS: usize = (usize::BITS - 1) as usize;

pub fn validate_symbols<I, S>(symbols: I) -> Result<SymbolSet, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<char> = Vec::new();
    let mut seen: FxHashSet<char> = FxHashSet::default();

    for symbol in symbols {
        let symbol = symbol.as_ref();
        let mut chars = symbol.chars();

        let name = match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => c,
            _ => {
                return Err(ValidationError::InvalidSymbol {
                    symbol: symbol.to_string(),
                })
            }
        };

        if grammar::is_reserved(name) {
            return Err(ValidationError::SymbolCollision { symbol: name });
        }

        if !seen.insert(name) {
            return Err(ValidationError::DuplicateSymbol { symbol: name });
        }

        names.push(name);
    }

    if names.is_empty() {
        return Err(ValidationError::EmptySymbolSet);
    }

    if names.len() > MAX_SYMBOLS {
        return Err(ValidationError::TooManySymbols {
            count: names.len(),
            max: MAX_SYMBOLS,
        });
    }

    Ok(SymbolSet::from_validated(names))
}

/// Check one formula against the symbol set: every character must be known,
/// the first one must be able to start an expression and the parentheses must
/// balance.
pub fn validate_formula(symbols: &SymbolSet, formula: &str) -> Result<(), ValidationError> {
    let is_known = |c: char| symbols.contains(c) || grammar::is_reserved(c);

    if let Some((position, character)) =
        grammar::significant_chars(formula).find(|&(_, c)| !is_known(c))
    {
        return Err(ValidationError::IllegalCharacter {
            formula: formula.to_string(),
            character,
            position,
        });
    }

    let Some((_, first)) = grammar::significant_chars(formula).next() else {
        return Err(ValidationError::EmptyFormula {
            formula: formula.to_string(),
        });
    };

    if !(symbols.contains(first) || grammar::is_valid_first(first)) {
        return Err(ValidationError::InvalidFirstCharacter {
            formula: formula.to_string(),
            character: first,
        });
    }

    let mut depth: usize = 0;

    for (position, c) in grammar::significant_chars(formula) {
        match c {
            OPEN_PAREN => depth += 1,
            CLOSE_PAREN => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    ValidationError::ParenthesisMismatch {
                        formula: formula.to_string(),
                        imbalance: Imbalance::FrontLoaded { position },
                    }
                })?;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ValidationError::ParenthesisMismatch {
            formula: formula.to_string(),
            imbalance: Imbalance::Unclosed { open: depth },
        });
    }

    Ok(())
}

/// Validate a complete symbol list and formula list. The first violation
/// aborts the whole check.
pub fn validate<I, S, F>(symbols: I, formulas: &[F]) -> Result<SymbolSet, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: AsRef<str>,
{
    let symbols = validate_symbols(symbols)?;

    for formula in formulas {
        validate_formula(&symbols, formula.as_ref())?;
    }

    debug!(
        "validated {} symbol(s) and {} formula(s)",
        symbols.len(),
        formulas.len()
    );

    Ok(symbols)
}
