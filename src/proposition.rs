//! Single statements and their truth tables

use crate::error::{ConfigError, LogicError};
use crate::expression::{Expr, Truth};
use crate::syntax::compile_statement;
use crate::table::{RenderedColumn, TableSink, TruthTable};
use crate::{TableConfig, VariableOrder};
use log::{debug, warn};
use std::fmt;
use std::io;
use std::sync::{Arc, OnceLock};

/// Tables above this many variables are built, but with a warning
pub const WARN_VARIABLES: usize = 16;

/// Order the variables of a statement for its table columns
pub(crate) fn ordered_variables(expr: &Expr, order: VariableOrder) -> Vec<Arc<str>> {
    match order {
        VariableOrder::FirstSeen => expr.variables(),
        VariableOrder::Sorted => expr.sorted_variables(),
    }
}

/// Reject variable counts above the configured cap, warn above [`WARN_VARIABLES`]
pub(crate) fn check_variable_count(count: usize, config: &TableConfig) -> Result<(), ConfigError> {
    if count > config.max_variables {
        return Err(ConfigError::TooManyVariables {
            count,
            limit: config.max_variables,
        });
    }
    if count > WARN_VARIABLES {
        warn!(
            "truth table over {} variables will have {} rows",
            count,
            crate::table::row_count(count).unwrap_or(usize::MAX)
        );
    }
    Ok(())
}

/// A parsed statement with its configuration and a lazily built truth table
///
/// Each proposition owns its expression and its table; nothing is shared
/// between instances. The table is built on first use and kept.
///
/// # Examples
///
/// ```
/// use prop_logic::{Proposition, TableConfig};
///
/// # fn main() -> Result<(), prop_logic::LogicError> {
/// let prop = Proposition::new("p or not p", TableConfig::default())?;
/// assert!(prop.is_tautology()?);
///
/// let table = prop.truth_table()?;
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.column("p ∨ ¬p"), Some(vec![1, 1]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Proposition {
    statement: Arc<str>,
    expr: Expr,
    constituents: Vec<Expr>,
    variables: Vec<Arc<str>>,
    config: TableConfig,
    table: OnceLock<TruthTable>,
}

impl Proposition {
    /// Parse a statement
    ///
    /// # Errors
    ///
    /// [`LogicError::Statement`] if the statement is malformed, or
    /// [`LogicError::Config`] if it has more variables than
    /// `config.max_variables`.
    pub fn new(statement: &str, config: TableConfig) -> Result<Self, LogicError> {
        let compiled = compile_statement(statement)?;
        Self::assemble(Arc::from(statement), compiled.expr, compiled.constituents, config)
    }

    /// Wrap an already built expression
    ///
    /// The statement text is the expression's rendering.
    pub fn from_expr(expr: Expr, config: TableConfig) -> Result<Self, LogicError> {
        let statement = Arc::from(expr.to_string());
        let constituents = expr.constituents();
        Self::assemble(statement, expr, constituents, config)
    }

    fn assemble(
        statement: Arc<str>,
        expr: Expr,
        constituents: Vec<Expr>,
        config: TableConfig,
    ) -> Result<Self, LogicError> {
        let variables = ordered_variables(&expr, config.variable_order);
        check_variable_count(variables.len(), &config)?;
        debug!(
            "proposition {:?}: {} variables, {} constituents",
            statement,
            variables.len(),
            constituents.len()
        );
        Ok(Proposition {
            statement,
            expr,
            constituents,
            variables,
            config,
            table: OnceLock::new(),
        })
    }

    /// The proposition `not (statement)` with the same configuration
    pub fn negated(&self) -> Proposition {
        let expr = self.expr.not();
        Proposition {
            statement: Arc::from(format!("not ({})", self.statement)),
            constituents: expr.constituents(),
            expr,
            // Negation neither adds nor reorders variables
            variables: self.variables.clone(),
            config: self.config.clone(),
            table: OnceLock::new(),
        }
    }

    /// The statement as written
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// The compiled expression
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Free variables in column order
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Distinct sub-expressions in post-order, root last
    pub fn constituents(&self) -> &[Expr] {
        &self.constituents
    }

    /// The configuration this proposition was built with
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Statement columns of the table, after the variable columns
    ///
    /// With atomic columns every non-variable constituent gets a column;
    /// without, only the root does. A bare variable adds no column.
    pub fn columns(&self) -> Vec<Expr> {
        if self.config.include_atomic_columns {
            self.constituents
                .iter()
                .filter(|expr| !expr.is_variable())
                .cloned()
                .collect()
        } else if self.expr.is_variable() {
            Vec::new()
        } else {
            vec![self.expr.clone()]
        }
    }

    /// Index of the column holding the statement's value
    pub fn result_column(&self) -> usize {
        match self.expr.as_variable() {
            Some(name) => self
                .variables
                .iter()
                .position(|v| v.as_ref() == name)
                .unwrap_or(0),
            None => self.variables.len() + self.columns().len() - 1,
        }
    }

    /// The truth table, built on first call
    ///
    /// # Errors
    ///
    /// [`LogicError::Evaluation`] only if the table could not be filled, which
    /// would mean an internal invariant was broken.
    pub fn truth_table(&self) -> Result<&TruthTable, LogicError> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let table = TruthTable::build(
            self.variables.clone(),
            &self.columns(),
            self.config.reverse_order,
        )?;
        Ok(self.table.get_or_init(|| table))
    }

    /// The statement's value on every row, top to bottom
    pub fn values(&self) -> Result<Vec<Truth>, LogicError> {
        let table = self.truth_table()?;
        Ok(table.column_values(self.result_column()).collect())
    }

    /// True iff the statement is 1 on every row
    pub fn is_tautology(&self) -> Result<bool, LogicError> {
        Ok(self.truth_table()?.is_column_tautology(self.result_column()))
    }

    /// True iff the statement is 0 on every row
    pub fn is_contradiction(&self) -> Result<bool, LogicError> {
        Ok(self
            .truth_table()?
            .is_column_contradiction(self.result_column()))
    }

    /// True iff the statement is 1 on some row
    pub fn is_satisfiable(&self) -> Result<bool, LogicError> {
        Ok(!self.is_contradiction()?)
    }

    /// The table rendered to text with the configured labels
    pub fn rendered_columns(&self) -> Result<Vec<RenderedColumn>, LogicError> {
        Ok(self.truth_table()?.render(self.config.labels.as_ref()))
    }

    /// Render the table into a sink
    pub fn write_table<S: TableSink>(&self, sink: &mut S) -> io::Result<()> {
        let columns = self.rendered_columns()?;
        sink.render(&columns, None)
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::StatementError;
    use crate::table::{PlainText, TruthLabels};

    use test_log::test;

    fn prop(statement: &str) -> Proposition {
        Proposition::new(statement, TableConfig::default()).unwrap()
    }

    fn headers(table: &TruthTable) -> Vec<&str> {
        table.headers().iter().map(|h| h.as_ref()).collect()
    }

    #[test]
    fn test_table_columns() {
        let p = prop("(p and q) or not p");
        let table = p.truth_table().unwrap();
        assert_eq!(headers(table), ["p", "q", "p ∧ q", "¬p", "p ∧ q ∨ ¬p"]);
        assert_eq!(table.len(), 4);
        assert_eq!(p.result_column(), 4);
        assert_eq!(p.values().unwrap(), vec![1, 1, 0, 1]);
    }

    #[test]
    fn test_without_atomic_columns() {
        let config = TableConfig {
            include_atomic_columns: false,
            ..TableConfig::default()
        };
        let p = Proposition::new("(p and q) or not p", config).unwrap();
        assert_eq!(headers(p.truth_table().unwrap()), ["p", "q", "p ∧ q ∨ ¬p"]);
        assert_eq!(p.result_column(), 2);
    }

    #[test]
    fn test_bare_variable() {
        let p = prop("(q)");
        let table = p.truth_table().unwrap();
        assert_eq!(headers(table), ["q"]);
        assert_eq!(p.result_column(), 0);
        assert!(!p.is_tautology().unwrap());
        assert!(p.is_satisfiable().unwrap());
    }

    #[test]
    fn test_sorted_variable_order() {
        let config = TableConfig {
            variable_order: VariableOrder::Sorted,
            ..TableConfig::default()
        };
        let p = Proposition::new("z or a", config).unwrap();
        let names: Vec<&str> = p.variables().iter().map(|v| v.as_ref()).collect();
        assert_eq!(names, ["a", "z"]);
        assert_eq!(prop("z or a").variables()[0].as_ref(), "z");
    }

    #[test]
    fn test_tautology_and_contradiction() {
        for name in ["A", "p", "long_name_1"] {
            assert!(prop(&format!("{0} or not {0}", name)).is_tautology().unwrap());
            assert!(prop(&format!("{0} and not {0}", name))
                .is_contradiction()
                .unwrap());
        }
    }

    #[test]
    fn test_negated() {
        let p = prop("p or not p");
        let negated = p.negated();
        assert_eq!(negated.statement(), "not (p or not p)");
        assert!(negated.is_contradiction().unwrap());
        assert_eq!(negated.variables(), p.variables());
    }

    #[test]
    fn test_too_many_variables() {
        let config = TableConfig {
            max_variables: 2,
            ..TableConfig::default()
        };
        let err = Proposition::new("a and b and c", config).unwrap_err();
        assert!(matches!(
            err,
            LogicError::Config(ConfigError::TooManyVariables { count: 3, limit: 2 })
        ));
    }

    #[test]
    fn test_statement_errors_propagate() {
        let err = Proposition::new("(p and)", TableConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            LogicError::Statement(StatementError::MissingOperandOrOperator { .. })
        ));
    }

    #[test]
    fn test_write_table_with_labels() {
        let config = TableConfig {
            labels: Some(TruthLabels::parse("TF").unwrap()),
            ..TableConfig::default()
        };
        let p = Proposition::new("~p", config).unwrap();
        let mut sink = PlainText::new(Vec::new());
        p.write_table(&mut sink).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "p | ¬p\n--+---\nF | T\nT | F\n");
    }

    #[test]
    fn test_table_is_cached() {
        let p = prop("p -> q");
        let first = p.truth_table().unwrap() as *const TruthTable;
        let second = p.truth_table().unwrap() as *const TruthTable;
        assert_eq!(first, second);
    }
}
