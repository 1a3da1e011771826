//! Truth tables, tautologies, equivalence and validity end to end

use prop_logic::table::{Mark, PlainText, TruthLabels};
use prop_logic::{
    Argument, EquivalenceMode, Expr, LogicError, Proposition, TableConfig, VariableOrder,
};
use std::collections::HashSet;

fn config() -> TableConfig {
    TableConfig::default()
}

#[test]
fn test_table_has_every_assignment_once() {
    for (statement, width) in [("p", 1), ("p and q", 2), ("a -> b xor c", 3), ("w or x or y or z", 4)] {
        let prop = Proposition::new(statement, config()).unwrap();
        let table = prop.truth_table().unwrap();
        assert_eq!(table.len(), 1usize << width, "{}", statement);

        let assignments: HashSet<Vec<u8>> = table
            .rows()
            .iter()
            .map(|row| row.cells()[..width].to_vec())
            .collect();
        assert_eq!(assignments.len(), 1usize << width, "{}", statement);
    }
}

#[test]
fn test_first_row_is_all_false_by_default() {
    let prop = Proposition::new("p or q or r", config()).unwrap();
    let table = prop.truth_table().unwrap();
    assert_eq!(&table.rows()[0].cells()[..3], &[0, 0, 0]);
    assert_eq!(&table.rows()[7].cells()[..3], &[1, 1, 1]);

    let reversed = TableConfig {
        reverse_order: true,
        ..config()
    };
    let prop = Proposition::new("p or q or r", reversed).unwrap();
    assert_eq!(&prop.truth_table().unwrap().rows()[0].cells()[..3], &[1, 1, 1]);
}

#[test]
fn test_excluded_middle_and_contradiction() {
    for name in ["A", "rain", "x_1"] {
        let middle = Proposition::new(&format!("{0} or not {0}", name), config()).unwrap();
        assert!(middle.is_tautology().unwrap());
        assert!(!middle.is_contradiction().unwrap());

        let clash = Proposition::new(&format!("{0} and not {0}", name), config()).unwrap();
        assert!(clash.is_contradiction().unwrap());
        assert!(!clash.is_tautology().unwrap());
    }
}

#[test]
fn test_implication_shape_versus_value() {
    let implication = Expr::parse("p -> q").unwrap();
    let disjunction = Expr::parse("(not p) or q").unwrap();
    assert!(!implication.same_shape(&disjunction));

    let argument = Argument::from_statements(&["p -> q", "(not p) or q"], None, config()).unwrap();
    let report = argument.test_equivalence(EquivalenceMode::Direct).unwrap();
    assert!(report.is_equivalent());
    assert!(!report.tests[0].same_shape);
}

#[test]
fn test_modus_ponens() {
    let argument = Argument::from_statements(&["p -> q", "p"], Some("q"), config()).unwrap();
    let validity = argument.is_valid().unwrap();
    assert!(validity.valid);
    assert!(validity.failing_rows.is_empty());
    assert!(validity.countermodel.is_none());
}

#[test]
fn test_invalid_argument_countermodel() {
    let argument = Argument::from_statements(&["p -> q"], Some("p"), config()).unwrap();
    let validity = argument.is_valid().unwrap();
    assert!(!validity.valid);

    let countermodel = validity.countermodel.unwrap();
    assert_eq!(countermodel.get("p"), Some(0));
    assert_eq!(countermodel.to_string(), "p=0, q=0");

    // Both rows with p=0 fail
    let table = argument.truth_table().unwrap();
    let failing: Vec<String> = validity
        .failing_rows
        .iter()
        .map(|row| table.assignment(*row).unwrap().to_string())
        .collect();
    assert_eq!(failing, vec!["p=0, q=0", "p=0, q=1"]);
}

#[test]
fn test_commutative_statements() {
    let argument = Argument::from_statements(&["p and q", "q and p"], None, config()).unwrap();
    let report = argument.test_equivalence(EquivalenceMode::Pairwise).unwrap();
    assert_eq!(report.tests.len(), 1);
    assert!(report.tests[0].same_shape);
    assert!(report.is_equivalent());
}

#[test]
fn test_contrapositive() {
    let argument =
        Argument::from_statements(&["p -> q", "not q -> not p"], None, config()).unwrap();
    let report = argument.test_equivalence(EquivalenceMode::Direct).unwrap();
    assert!(report.is_equivalent());
    assert!(!report.tests[0].same_shape);
}

#[test]
fn test_converse_is_not_equivalent() {
    let argument = Argument::from_statements(&["p -> q", "q -> p"], None, config()).unwrap();
    let report = argument.test_equivalence(EquivalenceMode::Direct).unwrap();
    assert!(!report.is_equivalent());
    assert_eq!(report.failures().count(), 1);
    assert!(!report.tests[0].biconditional.is_tautology().unwrap());
}

#[test]
fn test_demorgan_tables_match() {
    let left = Proposition::new("not (a or b)", config()).unwrap();
    let right = Proposition::new("not a and not b", config()).unwrap();
    assert_eq!(left.values().unwrap(), right.values().unwrap());
    assert_eq!(left.values().unwrap(), vec![1, 0, 0, 0]);
}

#[test]
fn test_variable_limit() {
    let limited = TableConfig {
        max_variables: 3,
        ..config()
    };
    let err = Argument::from_statements(&["a and b", "c or d"], None, limited).unwrap_err();
    assert!(matches!(err, LogicError::Config(_)));
}

#[test]
fn test_sorted_argument_columns() {
    let sorted = TableConfig {
        variable_order: VariableOrder::Sorted,
        ..config()
    };
    let argument = Argument::from_statements(&["z -> a"], Some("m"), sorted).unwrap();
    let names: Vec<&str> = argument.variables().iter().map(|v| v.as_ref()).collect();
    assert_eq!(names, ["a", "m", "z"]);
}

#[test]
fn test_validity_table_rendering() {
    let labelled = TableConfig {
        labels: Some(TruthLabels::parse("TF").unwrap()),
        ..config()
    };
    let argument = Argument::from_statements(&["p -> q"], Some("q"), labelled).unwrap();
    let mut sink = PlainText::new(Vec::new());
    argument
        .write_table(&mut sink, Some(Mark::Counterexample))
        .unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let expected = "\
p | q | p → q | q
--+---+-------+--
F | F | T     | F | ✗
F | T | T     | T | ✓
T | F | F     | F | ✓
T | T | T     | T | ✓
";
    assert_eq!(text, expected);
}
