use std::error;
use std::fmt;

use crate::grammar::Operator;

/// The way in which the parentheses of a formula fail to balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imbalance {
    /// A `)` at the given position closes more groups than were opened.
    FrontLoaded { position: usize },
    /// The formula ends with this many groups still open.
    Unclosed { open: usize },
}

/// Rejection of a symbol list or formula during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptySymbolSet,
    /// A symbol is not exactly one non-whitespace character.
    InvalidSymbol { symbol: String },
    DuplicateSymbol { symbol: char },
    /// A symbol equals one of the reserved operator or parenthesis characters.
    SymbolCollision { symbol: char },
    /// More symbols than there are bits to number the rows.
    TooManySymbols { count: usize, max: usize },
    EmptyFormula { formula: String },
    InvalidFirstCharacter { formula: String, character: char },
    IllegalCharacter {
        formula: String,
        character: char,
        position: usize,
    },
    ParenthesisMismatch { formula: String, imbalance: Imbalance },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySymbolSet => write!(f, "at least one symbol is required"),
            Self::InvalidSymbol { symbol } => {
                write!(f, "symbol {symbol:?} is not a single non-whitespace character")
            }
            Self::DuplicateSymbol { symbol } => write!(f, "symbol '{symbol}' is declared twice"),
            Self::SymbolCollision { symbol } => {
                write!(f, "symbol '{symbol}' is already an operator")
            }
            Self::TooManySymbols { count, max } => {
                write!(f, "{count} symbols given, at most {max} are supported")
            }
            Self::EmptyFormula { formula } => write!(f, "formula {formula:?} is empty"),
            Self::InvalidFirstCharacter { formula, character } => write!(
                f,
                "the formula {formula} has an invalid first character: {character}"
            ),
            Self::IllegalCharacter {
                formula,
                character,
                position,
            } => write!(
                f,
                "the formula {formula} has an invalid character at {position}: {character}"
            ),
            Self::ParenthesisMismatch {
                formula,
                imbalance: Imbalance::FrontLoaded { position },
            } => write!(
                f,
                "front loaded right parenthesis at {position} in formula: {formula}"
            ),
            Self::ParenthesisMismatch {
                formula,
                imbalance: Imbalance::Unclosed { open },
            } => write!(
                f,
                "parenthesis mismatch in formula {formula}: {open} group(s) left open"
            ),
        }
    }
}

impl error::Error for ValidationError {}

/// A token sequence that does not describe exactly one boolean value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedExpression {
    /// The operator at `position` of the postfix sequence is missing an operand.
    StackUnderflow { operator: Operator, position: usize },
    /// Evaluation ended with `remaining` values instead of one.
    InvalidResult { remaining: usize },
    /// The assignment has no value for this symbol.
    UnassignedSymbol { symbol: char },
    UnexpectedToken { token: String, position: usize },
    UnexpectedEnd,
    /// Nesting of `~` and parentheses exceeds what the tree parser accepts.
    TooDeep { limit: usize },
}

impl fmt::Display for MalformedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackUnderflow { operator, position } => write!(
                f,
                "operator '{operator}' at postfix position {position} is missing an operand"
            ),
            Self::InvalidResult { remaining } => write!(
                f,
                "expression leaves {remaining} values instead of exactly one"
            ),
            Self::UnassignedSymbol { symbol } => {
                write!(f, "symbol '{symbol}' has no value in the assignment")
            }
            Self::UnexpectedToken { token, position } => {
                write!(f, "unexpected token '{token}' at {position}")
            }
            Self::UnexpectedEnd => write!(f, "unexpected end of formula"),
            Self::TooDeep { limit } => write!(f, "formula nests deeper than {limit} levels"),
        }
    }
}

impl error::Error for MalformedExpression {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Validation(ValidationError),
    Malformed {
        formula: String,
        source: MalformedExpression,
    },
}

impl Error {
    pub(crate) fn malformed(formula: &str, source: MalformedExpression) -> Self {
        Self::Malformed {
            formula: formula.to_string(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => fmt::Display::fmt(e, f),
            Self::Malformed { formula, .. } => write!(f, "malformed formula {formula}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Validation(e) => error::Error::source(e),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
