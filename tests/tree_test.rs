use pretty_assertions::assert_eq;

use rsprop::grammar::Operator;
use rsprop::tree::{Expr, MAX_DEPTH};
use rsprop::tree_io::ParseForest;
use rsprop::{Error, MalformedExpression, Session};

fn parse(formula: &str) -> Expr {
    let session = Session::new(["p", "q", "r"], &["p"]).unwrap();
    Expr::parse(session.symbols(), formula).unwrap()
}

#[test]
fn test_tree_shape() {
    assert_eq!(parse("p|q^r").to_string(), "(p|(q^r))");
    assert_eq!(parse("p>q>r").to_string(), "((p>q)>r)");
    assert_eq!(parse("~~p^q").to_string(), "(~~p^q)");
    assert_eq!(parse("~(p^q)").to_string(), "~(p^q)");
    assert_eq!(parse("((p))"), parse("p"));

    match parse("p>q|r") {
        Expr::BinaryOp(Operator::Implies, _, r) => {
            assert!(matches!(*r, Expr::BinaryOp(Operator::Or, _, _)))
        }
        other => panic!("unexpected tree {other}"),
    }
}

#[test]
fn test_tree_errors() {
    let session = Session::new(["p", "q"], &["p"]).unwrap();

    assert_eq!(
        Expr::parse(session.symbols(), "p^"),
        Err(Error::Malformed {
            formula: "p^".to_string(),
            source: MalformedExpression::UnexpectedEnd
        })
    );
    assert_eq!(
        Expr::parse(session.symbols(), "p q"),
        Err(Error::Malformed {
            formula: "p q".to_string(),
            source: MalformedExpression::UnexpectedToken {
                token: "q".to_string(),
                position: 1
            }
        })
    );
    assert!(matches!(
        Expr::parse(session.symbols(), "(p"),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_tree_depth_limit() {
    let session = Session::new(["p"], &["p"]).unwrap();

    let shallow = format!("{}p", "~".repeat(MAX_DEPTH));
    assert!(Expr::parse(session.symbols(), &shallow).is_ok());

    let nested = format!("{}p{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert_eq!(Expr::parse(session.symbols(), &nested).unwrap(), parse("p"));

    let too_deep = format!("{}p", "~".repeat(MAX_DEPTH + 1));
    assert!(matches!(
        Expr::parse(session.symbols(), &too_deep),
        Err(Error::Malformed {
            source: MalformedExpression::TooDeep { limit: MAX_DEPTH },
            ..
        })
    ));

    let too_nested = format!("{}p{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    assert!(matches!(
        Expr::parse(session.symbols(), &too_nested),
        Err(Error::Malformed {
            source: MalformedExpression::TooDeep { .. },
            ..
        })
    ));
}

#[test]
fn test_deep_formula_without_tree() {
    // far beyond the tree parser's limit; the postfix path has no recursion
    let formula = format!("{}p", "~".repeat(200_000));

    let symbols = Session::new(["p"], &["p"]).unwrap();
    assert!(matches!(
        Expr::parse(symbols.symbols(), &formula),
        Err(Error::Malformed {
            source: MalformedExpression::TooDeep { .. },
            ..
        })
    ));

    let session = Session::new(["p"], &[formula.as_str()]).unwrap();
    let table = session.truth_table().unwrap();
    let column = table.column(0).unwrap();
    assert_eq!(column.values(), vec![true, false]);
}

#[test]
fn test_render_forest() {
    let formulas = ["p^q", "~(p^q)"];
    let trees: Vec<(&str, Expr)> = formulas.iter().map(|f| (*f, parse(f))).collect();

    let forest = ParseForest::new(&trees);

    // p, q, p^q and ~(p^q); the conjunction is shared
    assert_eq!(forest.nodes.len(), 4);

    let mut out: Vec<u8> = Vec::new();
    forest.render_dot(&mut out).unwrap();
    let dot = String::from_utf8(out).unwrap();

    assert!(dot.starts_with("digraph parse_forest"));
    assert!(dot.contains("label=\"~(p^q)\""));
    assert!(dot.contains("label=\"^\""));
    assert!(dot.contains("n_5"));
    assert!(!dot.contains("n_6"));
}
