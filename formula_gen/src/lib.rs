use std::io::Write;

use rand::seq::SliceRandom;
use rand::Rng;
use rsprop::grammar::{CLOSE_PAREN, OPEN_PAREN};
use rsprop::validator;
use rsprop::Operator;

/// Characters with a meaning in problem files besides the grammar's own.
const INPUT_SYNTAX: [char; 2] = ['#', ','];

/// Parse a string of single-character symbols (e.g. "pqr"), ignoring
/// whitespace. Symbols must be usable by the truth-table generator: unique,
/// not an operator or parenthesis, and not part of the input file syntax.
pub fn parse_symbols(symbols: &str) -> anyhow::Result<Vec<char>> {
    let names: Vec<char> = symbols.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(c) = names.iter().find(|&&c| INPUT_SYNTAX.contains(&c)) {
        anyhow::bail!("Symbol '{}' cannot be used in an input file", c);
    }

    let set = validator::validate_symbols(names.iter().map(|c| c.to_string()))?;

    Ok(set.names().collect())
}

fn binary_operators() -> Vec<char> {
    Operator::variants()
        .iter()
        .filter(|op| !op.is_unary())
        .map(|op| op.as_char())
        .collect()
}

/// Generate a random formula over `symbols` with at most `depth` levels of
/// nested connectives.
pub fn generate_formula<R: Rng>(
    rng: &mut R,
    symbols: &[char],
    depth: usize,
) -> anyhow::Result<String> {
    if depth == 0 || rng.gen_bool(0.3) {
        return symbols
            .choose(rng)
            .map(|c| c.to_string())
            .ok_or_else(|| anyhow::anyhow!("Cannot choose from an empty symbol list"));
    }

    if rng.gen_bool(0.2) {
        let inner = generate_formula(rng, symbols, depth - 1)?;
        return Ok(format!("{}{inner}", Operator::Not.as_char()));
    }

    let op = *binary_operators()
        .choose(rng)
        .ok_or_else(|| anyhow::anyhow!("Cannot choose an operator"))?;
    let left = generate_formula(rng, symbols, depth - 1)?;
    let right = generate_formula(rng, symbols, depth - 1)?;

    // without parentheses the default binding strength applies
    if rng.gen_bool(0.5) {
        Ok(format!("{OPEN_PAREN}{left} {op} {right}{CLOSE_PAREN}"))
    } else {
        Ok(format!("{left} {op} {right}"))
    }
}

/// Write a problem file: the symbol list on the first line, followed by
/// `count` random formulas, one per line.
pub fn write_problem<W: Write, R: Rng>(
    writer: &mut W,
    rng: &mut R,
    symbols: &[char],
    count: usize,
    depth: usize,
) -> anyhow::Result<()> {
    let header: Vec<String> = symbols.iter().map(|c| c.to_string()).collect();
    writeln!(writer, "{}", header.join(", "))?;

    for _ in 0..count {
        writeln!(writer, "{}", generate_formula(rng, symbols, depth)?)?;
    }

    Ok(())
}
