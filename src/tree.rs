use std::fmt;
use std::iter::Peekable;
use std::slice::Iter;

use crate::error::{Error, MalformedExpression};
use crate::grammar::{Operator, Token};
use crate::postfix;
use crate::symbols::{Symbol, SymbolSet};
use crate::validator;
use crate::valuation::Valuation;

/// Expression tree of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Var(Symbol),
    Not(Box<Expr>),
    /// A binary connective; never [`Operator::Not`].
    BinaryOp(Operator, Box<Expr>, Box<Expr>),
}

/// Deepest nesting of `~` and parentheses the tree parser accepts.
pub const MAX_DEPTH: usize = 256;

type TokenReader<'a> = Peekable<std::iter::Enumerate<Iter<'a, Token>>>;

impl Expr {
    /// Parse a formula by recursive descent.
    ///
    /// Binding strength and associativity are the same as in the postfix
    /// converter: `~` binds tightest, then `^`, `|` and `>`, and binary
    /// connectives group to the left. Nesting deeper than [`MAX_DEPTH`] is
    /// rejected.
    pub fn parse(symbols: &SymbolSet, formula: &str) -> Result<Self, Error> {
        validator::validate_formula(symbols, formula)?;
        let tokens = postfix::tokenize(symbols, formula)?;

        Self::parse_tokens(&tokens).map_err(|source| Error::malformed(formula, source))
    }

    pub fn parse_tokens(tokens: &[Token]) -> Result<Self, MalformedExpression> {
        let mut reader = tokens.iter().enumerate().peekable();
        let result = Self::parse_binary(&mut reader, Operator::Implies, 0)?;

        match reader.next() {
            None => Ok(result),
            Some((position, t)) => Err(MalformedExpression::UnexpectedToken {
                token: t.to_string(),
                position,
            }),
        }
    }

    fn tighter(op: Operator) -> Option<Operator> {
        match op {
            Operator::Implies => Some(Operator::Or),
            Operator::Or => Some(Operator::And),
            Operator::And | Operator::Not => None,
        }
    }

    fn parse_operand(
        tokens: &mut TokenReader,
        op: Operator,
        depth: usize,
    ) -> Result<Self, MalformedExpression> {
        match Self::tighter(op) {
            Some(next) => Self::parse_binary(tokens, next, depth),
            None => Self::parse_unary(tokens, depth),
        }
    }

    fn parse_binary(
        tokens: &mut TokenReader,
        op: Operator,
        depth: usize,
    ) -> Result<Self, MalformedExpression> {
        let mut left = Self::parse_operand(tokens, op, depth)?;

        while let Some((_, Token::Operator(next))) = tokens.peek() {
            if *next != op {
                break;
            }
            tokens.next();

            let right = Self::parse_operand(tokens, op, depth)?;
            left = Self::BinaryOp(op, Box::new(left), Box::new(right));
        }

        Ok(left)
    }

    fn parse_unary(tokens: &mut TokenReader, depth: usize) -> Result<Self, MalformedExpression> {
        if depth > MAX_DEPTH {
            return Err(MalformedExpression::TooDeep { limit: MAX_DEPTH });
        }

        match tokens.next() {
            Some((_, Token::Symbol(s))) => Ok(Self::Var(*s)),
            Some((_, Token::Operator(Operator::Not))) => {
                Ok(Self::Not(Box::new(Self::parse_unary(tokens, depth + 1)?)))
            }
            Some((_, Token::OpenParen)) => {
                let inner = Self::parse_binary(tokens, Operator::Implies, depth + 1)?;
                expect(Token::CloseParen, tokens)?;
                Ok(inner)
            }
            Some((position, t)) => Err(MalformedExpression::UnexpectedToken {
                token: t.to_string(),
                position,
            }),
            None => Err(MalformedExpression::UnexpectedEnd),
        }
    }

    pub fn eval<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, MalformedExpression> {
        match self {
            Self::Var(s) => valuation
                .value(*s)
                .ok_or(MalformedExpression::UnassignedSymbol { symbol: s.name }),
            Self::Not(e) => Ok(!e.eval(valuation)?),
            Self::BinaryOp(op, l, r) => {
                let l = l.eval(valuation)?;
                let r = r.eval(valuation)?;
                Ok(op.apply(l, r))
            }
        }
    }

    /// Post-order listing of the tree, matching the converter's output.
    pub fn postfix_tokens(&self) -> Vec<Token> {
        let mut out = Vec::new();
        self.postfix_recursive(&mut out);
        out
    }

    fn postfix_recursive(&self, out: &mut Vec<Token>) {
        match self {
            Self::Var(s) => out.push(Token::Symbol(*s)),
            Self::Not(e) => {
                e.postfix_recursive(out);
                out.push(Token::Operator(Operator::Not));
            }
            Self::BinaryOp(op, l, r) => {
                l.postfix_recursive(out);
                r.postfix_recursive(out);
                out.push(Token::Operator(*op));
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(s) => write!(f, "{s}"),
            Self::Not(e) => write!(f, "~{e}"),
            Self::BinaryOp(op, l, r) => write!(f, "({l}{op}{r})"),
        }
    }
}

fn expect(token: Token, tokens: &mut TokenReader) -> Result<(), MalformedExpression> {
    match tokens.next() {
        Some((_, t)) if *t == token => Ok(()),
        Some((position, t)) => Err(MalformedExpression::UnexpectedToken {
            token: t.to_string(),
            position,
        }),
        None => Err(MalformedExpression::UnexpectedEnd),
    }
}
