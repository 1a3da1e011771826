//! Evaluation and semantic checks for expressions

use super::{Expr, Node};
use crate::error::EvaluationError;
use crate::table::Assignments;
use std::fmt;
use std::sync::Arc;

/// A truth value: `0` (false) or `1` (true)
///
/// Kept as an integer so table cells and countermodels print without any
/// truthy/falsy ambiguity.
pub type Truth = u8;

/// A mapping from variable names to truth values
///
/// Keeps insertion order so countermodels print in the table's column order.
/// Lookups are linear, which is fine at the variable counts a truth table can
/// hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    entries: Vec<(Arc<str>, Truth)>,
}

impl Assignment {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair each variable with the value at the same position
    pub fn from_row(variables: &[Arc<str>], values: &[Truth]) -> Self {
        variables
            .iter()
            .zip(values)
            .map(|(name, value)| (Arc::clone(name), *value))
            .collect()
    }

    /// Set a variable; any non-zero value is stored as `1`
    pub fn insert(&mut self, name: impl Into<Arc<str>>, value: Truth) {
        let name = name.into();
        let value = Truth::from(value != 0);
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value of a variable, if assigned
    pub fn get(&self, name: &str) -> Option<Truth> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_ref() == name)
            .map(|(_, value)| *value)
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Truth)> {
        self.entries.iter().map(|(name, value)| (name.as_ref(), *value))
    }

    /// Number of assigned variables
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no variable is assigned
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Arc<str>, Truth)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Arc<str>, Truth)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (name, value) in iter {
            assignment.insert(name, value);
        }
        assignment
    }
}

/// Formats as `p=0, q=1`
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

/// Fold operand values left to right with a bitwise operator
fn fold_operands(
    operands: &[Expr],
    assignment: &Assignment,
    init: Truth,
    op: fn(Truth, Truth) -> Truth,
) -> Result<Truth, EvaluationError> {
    let mut acc = init;
    for operand in operands {
        acc = op(acc, operand.evaluate(assignment)?);
    }
    Ok(acc)
}

impl Expr {
    /// Evaluate the expression under an assignment
    ///
    /// Every operand is evaluated (no short-circuiting), so a missing variable
    /// is reported wherever it appears.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::UnassignedVariable`] if a free variable has no
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_logic::{Assignment, Expr};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let expr = Expr::parse("p xor q xor r")?;
    ///
    /// let mut assignment = Assignment::new();
    /// assignment.insert("p", 1);
    /// assignment.insert("q", 1);
    /// assignment.insert("r", 1);
    /// assert_eq!(expr.evaluate(&assignment)?, 1); // odd number of ones
    ///
    /// assignment.insert("r", 0);
    /// assert_eq!(expr.evaluate(&assignment)?, 0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<Truth, EvaluationError> {
        match self.node.as_ref() {
            Node::Variable(name) => {
                assignment
                    .get(name)
                    .ok_or_else(|| EvaluationError::UnassignedVariable {
                        name: Arc::clone(name),
                    })
            }
            Node::Negation(inner) => Ok(1 - inner.evaluate(assignment)?),
            Node::Conjunction(operands) => fold_operands(operands, assignment, 1, |a, b| a & b),
            Node::Disjunction(operands) => fold_operands(operands, assignment, 0, |a, b| a | b),
            Node::XDisjunction(operands) => fold_operands(operands, assignment, 0, |a, b| a ^ b),
            Node::Implication(left, right) => {
                Ok((1 - left.evaluate(assignment)?) | right.evaluate(assignment)?)
            }
            Node::Biconditional(left, right) => Ok(Truth::from(
                left.evaluate(assignment)? == right.evaluate(assignment)?,
            )),
        }
    }

    /// Values of the expression over every assignment of its own variables,
    /// in ascending binary order (all-false first)
    ///
    /// Every row binds every variable, so evaluation cannot fail here.
    fn own_values(&self) -> impl Iterator<Item = Truth> + '_ {
        let variables = self.variables();
        Assignments::new(variables.len(), false).map(move |row| {
            let assignment = Assignment::from_row(&variables, &row);
            match self.evaluate(&assignment) {
                Ok(value) => value,
                Err(e) => {
                    debug_assert!(false, "row is missing a variable: {}", e);
                    0
                }
            }
        })
    }

    /// True iff the expression evaluates to 1 under every assignment
    ///
    /// The check walks all `2^n` assignments without consulting
    /// [`TableConfig::max_variables`](crate::TableConfig::max_variables); use
    /// [`Proposition::is_tautology`](crate::Proposition::is_tautology) for a
    /// capped check.
    pub fn is_tautology(&self) -> bool {
        self.own_values().all(|value| value == 1)
    }

    /// True iff the expression evaluates to 0 under every assignment
    ///
    /// Not capped by `max_variables`, as with [`Expr::is_tautology`].
    pub fn is_contradiction(&self) -> bool {
        self.own_values().all(|value| value == 0)
    }

    /// True iff some assignment makes the expression 1
    ///
    /// Stops at the first satisfying row. Not capped by `max_variables`.
    pub fn is_satisfiable(&self) -> bool {
        self.own_values().any(|value| value == 1)
    }

    /// Check whether two expressions compute the same boolean function
    ///
    /// Builds `self iff other` and checks that it is a tautology by enumerating
    /// every assignment of the combined variables, with no variable cap.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_logic::Expr;
    ///
    /// # fn main() -> Result<(), prop_logic::StatementError> {
    /// let implication = Expr::parse("p -> q")?;
    /// let disjunction = Expr::parse("not p or q")?;
    ///
    /// assert!(implication.equivalent_to(&disjunction));
    /// assert!(implication != disjunction); // different shape
    /// # Ok(())
    /// # }
    /// ```
    pub fn equivalent_to(&self, other: &Expr) -> bool {
        self.iff(other).is_tautology()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvaluationError;

    use test_log::test;

    fn assign(pairs: &[(&str, Truth)]) -> Assignment {
        pairs
            .iter()
            .map(|(name, value)| (Arc::from(*name), *value))
            .collect()
    }

    fn eval(text: &str, pairs: &[(&str, Truth)]) -> Truth {
        Expr::parse(text).unwrap().evaluate(&assign(pairs)).unwrap()
    }

    #[test]
    fn test_semantic_checks_ignore_table_limit() {
        let names: Vec<String> = (0..21).map(|i| format!("v{}", i)).collect();
        let wide = Expr::parse(&names.join(" or ")).unwrap();

        assert!(wide.is_satisfiable());
        assert!(!wide.is_contradiction());
        assert!(matches!(
            crate::Proposition::from_expr(wide, crate::TableConfig::default()),
            Err(crate::LogicError::Config(
                crate::ConfigError::TooManyVariables { count: 21, limit: 20 }
            ))
        ));
    }

    #[test]
    fn test_eval_negation() {
        assert_eq!(eval("not p", &[("p", 0)]), 1);
        assert_eq!(eval("not p", &[("p", 1)]), 0);
    }

    #[test]
    fn test_eval_nary_folds() {
        assert_eq!(eval("a and b and c", &[("a", 1), ("b", 1), ("c", 1)]), 1);
        assert_eq!(eval("a and b and c", &[("a", 1), ("b", 0), ("c", 1)]), 0);
        assert_eq!(eval("a or b or c", &[("a", 0), ("b", 0), ("c", 1)]), 1);
        assert_eq!(eval("a or b or c", &[("a", 0), ("b", 0), ("c", 0)]), 0);
        assert_eq!(eval("a xor b xor c", &[("a", 1), ("b", 1), ("c", 0)]), 0);
        assert_eq!(eval("a xor b xor c", &[("a", 1), ("b", 0), ("c", 0)]), 1);
    }

    #[test]
    fn test_eval_implication_and_biconditional() {
        let implication = [(0, 0, 1), (0, 1, 1), (1, 0, 0), (1, 1, 1)];
        for (p, q, expected) in implication {
            assert_eq!(eval("p -> q", &[("p", p), ("q", q)]), expected);
        }
        let biconditional = [(0, 0, 1), (0, 1, 0), (1, 0, 0), (1, 1, 1)];
        for (p, q, expected) in biconditional {
            assert_eq!(eval("p iff q", &[("p", p), ("q", q)]), expected);
        }
    }

    #[test]
    fn test_unassigned_variable_is_reported() {
        let expr = Expr::parse("p and q").unwrap();
        let err = expr.evaluate(&assign(&[("p", 0)])).unwrap_err();
        match err {
            EvaluationError::UnassignedVariable { name } => assert_eq!(name.as_ref(), "q"),
        }
    }

    #[test]
    fn test_assignment_normalises_values() {
        let mut assignment = Assignment::new();
        assignment.insert("p", 7);
        assignment.insert("q", 0);
        assignment.insert("p", 0);
        assert_eq!(assignment.get("p"), Some(0));
        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.to_string(), "p=0, q=0");
        assignment.insert("p", 3);
        assert_eq!(assignment.get("p"), Some(1));
    }

    #[test]
    fn test_tautology_and_contradiction() {
        assert!(Expr::parse("A or not A").unwrap().is_tautology());
        assert!(Expr::parse("A and not A").unwrap().is_contradiction());
        let contingent = Expr::parse("A -> B").unwrap();
        assert!(!contingent.is_tautology());
        assert!(!contingent.is_contradiction());
        assert!(contingent.is_satisfiable());
    }

    #[test]
    fn test_equivalence_is_semantic() {
        let a = Expr::parse("p -> q").unwrap();
        let b = Expr::parse("not q -> not p").unwrap();
        assert!(a.equivalent_to(&b));
        assert!(!a.same_shape(&b));
        assert!(!a.equivalent_to(&Expr::parse("q -> p").unwrap()));
    }
}
