#![warn(clippy::disallowed_types)]

pub use assignment::{Assignment, Assignments};
pub use error::{Error, Imbalance, MalformedExpression, ValidationError};
pub use grammar::{Operator, Token};
pub use session::{Formula, Session};
pub use symbols::*;
pub use truth_table::{Column, Row, TruthTable};
pub use valuation::Valuation;

pub mod assignment;
pub mod error;
pub mod grammar;
pub mod input;
pub mod postfix;
pub mod render;
pub mod session;
pub mod tree;
pub mod tree_io;
pub mod validator;

mod truth_table;
mod valuation;

mod symbols;
