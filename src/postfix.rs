use std::fmt;

use itertools::Itertools;
use log::trace;

use crate::error::{MalformedExpression, ValidationError};
use crate::grammar::{self, Operator, Token, CLOSE_PAREN, OPEN_PAREN};
use crate::symbols::{Symbol, SymbolSet};
use crate::valuation::Valuation;

/// Split a formula into tokens, dropping whitespace.
pub fn tokenize(symbols: &SymbolSet, formula: &str) -> Result<Vec<Token>, ValidationError> {
    grammar::significant_chars(formula)
        .map(|(position, c)| match c {
            OPEN_PAREN => Ok(Token::OpenParen),
            CLOSE_PAREN => Ok(Token::CloseParen),
            c => Operator::from_char(c)
                .map(Token::Operator)
                .or_else(|| symbols.get(c).map(Token::Symbol))
                .ok_or_else(|| ValidationError::IllegalCharacter {
                    formula: formula.to_string(),
                    character: c,
                    position,
                }),
        })
        .collect()
}

/// A formula in reverse polish notation. Contains no parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// Shunting-yard conversion of an infix token sequence.
    ///
    /// The input is expected to have passed validation; operator-level
    /// mistakes (two binary operators in a row, a trailing `~`) are carried
    /// into the output and rejected by [`Postfix::check`] or
    /// [`Postfix::evaluate`].
    pub fn from_infix(infix: &[Token]) -> Self {
        let mut output: Vec<Token> = Vec::with_capacity(infix.len());
        let mut stack: Vec<Token> = Vec::new();

        for token in infix {
            match token {
                Token::Symbol(_) => output.push(token.clone()),
                Token::OpenParen => stack.push(Token::OpenParen),
                Token::CloseParen => {
                    while let Some(top) = stack.pop() {
                        if top == Token::OpenParen {
                            break;
                        }
                        output.push(top);
                    }
                }
                Token::Operator(op) => {
                    while let Some(Token::Operator(top)) = stack.last() {
                        if !top.yields_to(*op) {
                            break;
                        }
                        output.push(Token::Operator(*top));
                        stack.pop();
                    }
                    stack.push(Token::Operator(*op));
                }
            }
        }

        output.extend(
            stack
                .into_iter()
                .rev()
                .filter(|t| !matches!(t, Token::OpenParen | Token::CloseParen)),
        );

        Self { tokens: output }
    }

    /// Tokenize and convert a formula that already passed validation.
    pub fn convert(symbols: &SymbolSet, formula: &str) -> Result<Self, ValidationError> {
        let postfix = Self::from_infix(&tokenize(symbols, formula)?);
        trace!("{formula} => {postfix}");
        Ok(postfix)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            Token::Symbol(s) => Some(*s),
            _ => None,
        })
    }

    /// Simulate the evaluation stack without looking at any values.
    ///
    /// A sequence that passes this check evaluates without error under every
    /// valuation that covers its symbols.
    pub fn check(&self) -> Result<(), MalformedExpression> {
        let mut depth: usize = 0;

        for (position, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Symbol(_) => depth += 1,
                Token::Operator(op) => {
                    if depth < op.arity() {
                        return Err(MalformedExpression::StackUnderflow {
                            operator: *op,
                            position,
                        });
                    }
                    depth -= op.arity() - 1;
                }
                Token::OpenParen | Token::CloseParen => {
                    return Err(MalformedExpression::UnexpectedToken {
                        token: token.to_string(),
                        position,
                    })
                }
            }
        }

        if depth == 1 {
            Ok(())
        } else {
            Err(MalformedExpression::InvalidResult { remaining: depth })
        }
    }

    /// Evaluate the expression under a valuation of its symbols.
    pub fn evaluate<V: Valuation + ?Sized>(
        &self,
        valuation: &V,
    ) -> Result<bool, MalformedExpression> {
        let mut stack: Vec<bool> = Vec::with_capacity(self.tokens.len());

        for (position, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Symbol(s) => {
                    let value = valuation
                        .value(*s)
                        .ok_or(MalformedExpression::UnassignedSymbol { symbol: s.name })?;
                    stack.push(value);
                }
                Token::Operator(op) => {
                    let underflow = MalformedExpression::StackUnderflow {
                        operator: *op,
                        position,
                    };

                    let result = if op.is_unary() {
                        let x = stack.pop().ok_or(underflow)?;
                        op.apply(x, x)
                    } else {
                        let b = stack.pop().ok_or_else(|| underflow.clone())?;
                        let a = stack.pop().ok_or(underflow)?;
                        op.apply(a, b)
                    };

                    stack.push(result);
                }
                Token::OpenParen | Token::CloseParen => {
                    return Err(MalformedExpression::UnexpectedToken {
                        token: token.to_string(),
                        position,
                    })
                }
            }
        }

        match stack.as_slice() {
            [result] => Ok(*result),
            rest => Err(MalformedExpression::InvalidResult {
                remaining: rest.len(),
            }),
        }
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}
