use std::collections::HashSet;

use pretty_assertions::assert_eq;
use test_log::test;

use rsprop::{Error, MalformedExpression, Session, Valuation};

fn column(symbols: &[&str], formula: &str) -> Vec<bool> {
    let session = Session::new(symbols, &[formula]).unwrap();
    let table = session.truth_table().unwrap();
    let column = table.column(0).unwrap();
    column.values()
}

const T: bool = true;
const F: bool = false;

#[test]
fn test_negation() {
    assert_eq!(column(&["p"], "~p"), vec![F, T]);
}

#[test]
fn test_implication() {
    assert_eq!(column(&["p", "q"], "p>q"), vec![T, F, T, T]);
}

#[test]
fn test_grouping() {
    assert_eq!(column(&["p", "q"], "(p|q)^~p"), vec![F, F, T, F]);
}

#[test]
fn test_precedence() {
    assert_eq!(
        column(&["p", "q", "r"], "p|q^r"),
        column(&["p", "q", "r"], "p|(q^r)")
    );
    assert_ne!(
        column(&["p", "q", "r"], "p|q^r"),
        column(&["p", "q", "r"], "(p|q)^r")
    );
}

#[test]
fn test_implication_groups_left() {
    assert_eq!(
        column(&["p", "q", "r"], "p>q>r"),
        column(&["p", "q", "r"], "(p>q)>r")
    );
    assert_ne!(
        column(&["p", "q", "r"], "p>q>r"),
        column(&["p", "q", "r"], "p>(q>r)")
    );
}

#[test]
fn test_enumeration_order() {
    let session = Session::new(["a", "b", "c", "d"], &["a"]).unwrap();
    let assignments: Vec<_> = session.assignments().collect();

    assert_eq!(assignments.len(), 16);
    assert_eq!(session.assignments().len(), 16);

    let indices: Vec<usize> = assignments.iter().map(|a| a.index()).collect();
    assert_eq!(indices, (0..16).rev().collect::<Vec<_>>());

    let distinct: HashSet<Vec<bool>> = assignments.iter().map(|a| a.values().to_vec()).collect();
    assert_eq!(distinct.len(), 16);

    assert_eq!(assignments[0].values(), &[T, T, T, T]);
    assert_eq!(assignments[15].values(), &[F, F, F, F]);

    // the first symbol owns the most significant bit
    let six = session.assignment(6).unwrap();
    assert_eq!(six.bit_string(), "0110");
    assert_eq!(six.get('a'), Some(F));
    assert_eq!(six.get('b'), Some(T));
    assert_eq!(six.get('c'), Some(T));
    assert_eq!(six.get('d'), Some(F));
    assert_eq!(six.get('e'), None);

    assert!(session.assignment(16).is_none());

    let ascending: Vec<usize> = session.assignments().rev().map(|a| a.index()).collect();
    assert_eq!(ascending, (0..16).collect::<Vec<_>>());
}

#[test]
fn test_assignment_as_valuation() {
    let session = Session::new(["p", "q"], &["p"]).unwrap();
    let other = Session::new(["q", "p"], &["p"]).unwrap();

    let assignment = session.assignment(0b10).unwrap();
    let p = session.symbols().get('p').unwrap();
    let foreign_p = other.symbols().get('p').unwrap();

    assert_eq!(assignment.value(p), Some(T));
    // same position, different symbol
    assert_eq!(assignment.value(foreign_p), None);
}

#[test]
fn test_truth_map() {
    let session = Session::new(["p", "q"], &["p^q"]).unwrap();
    let map: Vec<_> = session.truth_map().collect();

    assert_eq!(map.len(), 4);
    assert_eq!(map[0].0, 3);
    assert_eq!(map[0].1[&'p'], T);
    assert_eq!(map[0].1[&'q'], T);
    assert_eq!(map[2].0, 1);
    assert_eq!(map[2].1[&'p'], F);
    assert_eq!(map[2].1[&'q'], T);
}

#[test]
fn test_row_and_column_views() {
    let session = Session::new(["p", "q"], &["p^q", "p|q", "p>q"]).unwrap();
    let table = session.truth_table().unwrap();

    assert_eq!(table.row_count(), 4);
    assert_eq!(table.formulas(), &["p^q", "p|q", "p>q"]);

    let row = table.row(0b10).unwrap();
    assert_eq!(row.assignment.bit_string(), "10");
    assert_eq!(row.values, &[F, T, F]);

    let rows: Vec<Vec<bool>> = table.rows().map(|r| r.values.to_vec()).collect();
    assert_eq!(
        rows,
        vec![vec![T, T, T], vec![F, T, F], vec![F, T, T], vec![F, F, T]]
    );

    let columns: Vec<Vec<bool>> = table.columns().map(|c| c.values()).collect();
    assert_eq!(
        columns,
        vec![vec![T, F, F, F], vec![T, T, T, F], vec![T, F, T, T]]
    );

    // both views agree cell by cell
    for row in table.rows() {
        for column in table.columns() {
            assert_eq!(
                column.value(row.assignment.index()),
                Some(row.values[column.formula_index()])
            );
        }
    }

    assert_eq!(table.value(0, 2), Some(T));
    assert_eq!(table.value(4, 0), None);
    assert_eq!(table.value(0, 3), None);
    assert!(table.column(3).is_none());
}

#[test]
fn test_column_summaries() {
    let session = Session::new(["p", "q"], &["p|~p", "p^~p", "p>q"]).unwrap();
    let table = session.truth_table().unwrap();

    let tautology = table.column(0).unwrap();
    assert!(tautology.is_tautology());
    assert!(tautology.is_satisfiable());

    let contradiction = table.column(1).unwrap();
    assert!(contradiction.is_contradiction());
    assert!(!contradiction.is_satisfiable());
    assert_eq!(contradiction.models(), Vec::<usize>::new());

    let implication = table.column(2).unwrap();
    assert_eq!(implication.formula(), "p>q");
    assert_eq!(implication.models(), vec![3, 1, 0]);
}

#[test]
fn test_parallel_table_matches() {
    let formulas = [
        "p|q^r",
        "(p>q)^(q>r)>(p>r)",
        "~(p^q)>~p|~q",
        "~~r",
        "p^~q|r>s",
    ];
    let session = Session::new(["p", "q", "r", "s"], &formulas).unwrap();

    assert_eq!(session.truth_table(), session.par_truth_table());
}

#[test]
fn test_ad_hoc_evaluation() {
    let session = Session::new(["p", "q"], &["p"]).unwrap();
    let assignment = session.assignment(0b10).unwrap();

    assert_eq!(session.evaluate("p>q", &assignment), Ok(F));
    assert_eq!(session.evaluate("q>p", &assignment), Ok(T));

    assert_eq!(
        session.evaluate("p^", &assignment),
        Err(Error::Malformed {
            formula: "p^".to_string(),
            source: MalformedExpression::StackUnderflow {
                operator: rsprop::Operator::And,
                position: 1
            }
        })
    );

    assert!(matches!(
        session.evaluate("p^x", &assignment),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_idempotence() {
    let session = Session::new(["p", "q", "r"], &["(p|q)^~r>q"]).unwrap();

    for assignment in session.assignments() {
        let first = session.evaluate_formula(0, &assignment).unwrap();
        for _ in 0..3 {
            assert_eq!(session.evaluate_formula(0, &assignment).unwrap(), first);
        }
    }

    assert_eq!(session.truth_table(), session.truth_table());
    assert!(session.evaluate_formula(1, &session.assignment(0).unwrap()).is_none());
}

#[test]
fn test_malformed_formula_aborts_construction() {
    assert!(matches!(
        Session::new(["p", "q"], &["p", "p^^q"]),
        Err(Error::Malformed { .. })
    ));
    assert!(matches!(
        Session::new(["p", "q"], &["p q"]),
        Err(Error::Malformed {
            source: MalformedExpression::InvalidResult { remaining: 2 },
            ..
        })
    ));
}

#[test]
fn test_error_chain_has_no_repeats() {
    use std::error::Error as _;

    let e = Session::new(["p", "q"], &["p q"]).unwrap_err();
    assert_eq!(e.to_string(), "malformed formula p q");
    assert_eq!(
        e.source().map(|s| s.to_string()),
        Some("expression leaves 2 values instead of exactly one".to_string())
    );

    let e = Session::new(["p", "p"], &["p"]).unwrap_err();
    assert_eq!(e.to_string(), "symbol 'p' is declared twice");
    assert!(e.source().is_none());

    let e = Session::new(["p", "q"], &["p q"]).unwrap_err();
    let chain = format!("{:#}", anyhow::Error::from(e));
    assert_eq!(
        chain,
        "malformed formula p q: expression leaves 2 values instead of exactly one"
    );
}

#[test]
fn test_no_formulas() {
    let session = Session::new(["p"], &[] as &[&str]).unwrap();
    let table = session.truth_table().unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.columns().len(), 0);
    assert_eq!(table.row(1).unwrap().values, &[] as &[bool]);
}
