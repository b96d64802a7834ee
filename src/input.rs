//! Reader for truth-table input files.
//!
//! ```text
//! # comments run to the end of the line
//! p, q, r
//! p | q ^ r
//! (p > q) ^ (q > r) > (p > r)
//! ```
//!
//! The first non-empty line lists the symbols, every further line holds one
//! formula.

use lazy_static::lazy_static;
use regex::Regex;
use std::io;
use std::io::BufRead;

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"#.*$").unwrap();
    static ref SEPARATOR: Regex = Regex::new(r"[\s,]+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Problem {
    pub symbols: Vec<String>,
    pub formulas: Vec<String>,
}

impl Problem {
    pub fn new(contents: &mut dyn BufRead) -> io::Result<Self> {
        let mut lines = Vec::new();

        for line in contents.lines() {
            let line = line?;
            let line = COMMENT.replace(&line, "");
            let line = line.trim();

            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }

        let mut lines = lines.into_iter();

        let symbols = lines
            .next()
            .map(|header| Self::split_symbols(&header))
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "missing symbol list"))?;

        Ok(Self {
            symbols,
            formulas: lines.collect(),
        })
    }

    /// Split a symbol list on commas and whitespace.
    pub fn split_symbols(list: &str) -> Vec<String> {
        SEPARATOR
            .split(list)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
