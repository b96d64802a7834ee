use std::fmt::{self, Display};

use crate::symbols::Symbol;

pub const NOT: char = '~';
pub const IMPLIES: char = '>';
pub const AND: char = '^';
pub const OR: char = '|';
pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';

/// Characters that can never be used as a symbol.
pub const RESERVED: [char; 6] = [NOT, IMPLIES, AND, OR, OPEN_PAREN, CLOSE_PAREN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// The four logical connectives.
///
/// The derived ordering follows binding strength: [`Implies`] binds loosest,
/// [`Not`] binds tightest.
///
/// [`Implies`]: Operator::Implies
/// [`Not`]: Operator::Not
pub enum Operator {
    Implies,
    Or,
    And,
    Not,
}

impl Operator {
    pub const fn variants<'a>() -> &'a [Self] {
        &[Self::Implies, Self::Or, Self::And, Self::Not]
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            NOT => Some(Self::Not),
            IMPLIES => Some(Self::Implies),
            AND => Some(Self::And),
            OR => Some(Self::Or),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Not => NOT,
            Self::Implies => IMPLIES,
            Self::And => AND,
            Self::Or => OR,
        }
    }

    pub const fn arity(self) -> usize {
        match self {
            Self::Not => 1,
            Self::Implies | Self::Or | Self::And => 2,
        }
    }

    pub const fn is_unary(self) -> bool {
        self.arity() == 1
    }

    /// Whether `self`, sitting on the operator stack, has to be emitted before
    /// `incoming` is pushed.
    ///
    /// Anything binding at least as tight as a binary operator is emitted first,
    /// which makes binary operators left-associative. A prefix operator has no
    /// left operand, so nothing on the stack is complete when one arrives.
    pub fn yields_to(self, incoming: Self) -> bool {
        !incoming.is_unary() && self >= incoming
    }

    /// Apply the connective. The second operand is ignored by [`Operator::Not`].
    pub const fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Self::Not => !a,
            Self::And => a && b,
            Self::Or => a || b,
            Self::Implies => !a || b,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Symbol(Symbol),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(s) => Display::fmt(s, f),
            Self::Operator(op) => Display::fmt(op, f),
            Self::OpenParen => write!(f, "{OPEN_PAREN}"),
            Self::CloseParen => write!(f, "{CLOSE_PAREN}"),
        }
    }
}

pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Characters that may open a formula, apart from the symbols themselves.
pub fn is_valid_first(c: char) -> bool {
    matches!(c, NOT | OPEN_PAREN)
}

/// Iterate over the non-whitespace characters of a formula together with their
/// character position in the original text.
pub fn significant_chars(formula: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    formula.chars().enumerate().filter(|(_, c)| !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_order() {
        assert!(Operator::Not > Operator::And);
        assert!(Operator::And > Operator::Or);
        assert!(Operator::Or > Operator::Implies);
    }

    #[test]
    fn test_yields_to() {
        // left associativity
        for &op in &Operator::variants()[..3] {
            assert!(op.yields_to(op));
        }

        assert!(Operator::And.yields_to(Operator::Or));
        assert!(!Operator::Or.yields_to(Operator::And));
        assert!(!Operator::Implies.yields_to(Operator::Or));
        assert!(Operator::Not.yields_to(Operator::Implies));

        // prefix negation never completes anything on the stack
        for &op in Operator::variants() {
            assert!(!op.yields_to(Operator::Not));
        }
    }

    #[test]
    fn test_chars() {
        for &op in Operator::variants() {
            assert_eq!(Operator::from_char(op.as_char()), Some(op));
            assert!(is_reserved(op.as_char()));
        }

        assert_eq!(Operator::from_char('('), None);
        assert!(is_valid_first('~'));
        assert!(!is_valid_first('>'));
    }

    #[test]
    fn test_apply() {
        assert!(!Operator::Implies.apply(true, false));
        assert!(Operator::Implies.apply(false, false));
        assert!(Operator::Not.apply(false, true));
    }
}
