use std::io::Cursor;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use formula_gen::{generate_formula, parse_symbols, write_problem};
use rsprop::input::Problem;
use rsprop::Session;

#[test]
fn test_generated_problem_loads() {
    let symbols = parse_symbols("p q r s").unwrap();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out: Vec<u8> = Vec::new();
        write_problem(&mut out, &mut rng, &symbols, 10, 5).unwrap();

        let problem = Problem::new(&mut Cursor::new(out)).unwrap();
        assert_eq!(problem.symbols, vec!["p", "q", "r", "s"]);
        assert_eq!(problem.formulas.len(), 10);

        let session = Session::new(&problem.symbols, &problem.formulas).unwrap();
        let table = session.truth_table().unwrap();
        assert_eq!(table.row_count(), 16);
        assert_eq!(table.columns().len(), 10);
    }
}

#[test]
fn test_same_seed_same_formula() {
    let symbols = parse_symbols("pq").unwrap();

    let a = generate_formula(&mut StdRng::seed_from_u64(7), &symbols, 6).unwrap();
    let b = generate_formula(&mut StdRng::seed_from_u64(7), &symbols, 6).unwrap();
    assert_eq!(a, b);

    let leaf = generate_formula(&mut StdRng::seed_from_u64(7), &symbols, 0).unwrap();
    assert!(leaf == "p" || leaf == "q");
}

#[test]
fn test_symbol_list() {
    assert_eq!(parse_symbols("p q\tr").unwrap(), vec!['p', 'q', 'r']);

    // duplicates would make the problem file unloadable
    assert!(parse_symbols("ppq").is_err());
    assert!(parse_symbols("p q p").is_err());

    assert!(parse_symbols("").is_err());
    assert!(parse_symbols("   ").is_err());

    for reserved in ["p~", "p>", "p^", "p|", "p(", "p)", "p#", "p,"] {
        assert!(parse_symbols(reserved).is_err(), "{reserved} was accepted");
    }
}
