//! Truth tables
//!
//! A [`TruthTable`] has one column per variable followed by one column per
//! evaluated statement. Rows follow [`Assignments`] order, so with ascending
//! order row `i` is the binary expansion of `i` over the variable columns.
//!
//! Tables are built by [`Proposition`](crate::Proposition) and
//! [`Argument`](crate::Argument); this module only knows how to fill, query
//! and render them.

mod assignments;
mod labels;
mod sink;

pub use assignments::{row_count, Assignments};
pub use labels::TruthLabels;
pub use sink::{Mark, PlainText, RenderedColumn, TableSink};

use crate::error::EvaluationError;
use crate::expression::{Assignment, Expr, Truth};
use labels::render_value;
use log::trace;
use std::sync::Arc;

/// One row of a truth table: variable values, then statement values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Truth>,
}

impl Row {
    /// All cells, variable columns first
    pub fn cells(&self) -> &[Truth] {
        &self.cells
    }

    /// Cell at a column index
    pub fn get(&self, column: usize) -> Option<Truth> {
        self.cells.get(column).copied()
    }
}

/// A fully evaluated truth table
#[derive(Debug, Clone)]
pub struct TruthTable {
    variables: Vec<Arc<str>>,
    headers: Vec<Arc<str>>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Evaluate `columns` over every assignment of `variables`
    ///
    /// The variable list must contain every free variable of every column;
    /// the callers derive it from the expressions themselves.
    ///
    /// # Errors
    ///
    /// [`EvaluationError::UnassignedVariable`] if a column uses a variable
    /// missing from `variables`. Filling stops at the first failing row.
    pub fn build(
        variables: Vec<Arc<str>>,
        columns: &[Expr],
        reverse_order: bool,
    ) -> Result<Self, EvaluationError> {
        let headers = variables
            .iter()
            .cloned()
            .chain(columns.iter().map(|expr| Arc::from(expr.to_string())))
            .collect();

        let mut rows = Vec::with_capacity(row_count(variables.len()).unwrap_or(0));
        for values in Assignments::new(variables.len(), reverse_order) {
            let assignment = Assignment::from_row(&variables, &values);
            let mut cells = values;
            for expr in columns {
                cells.push(expr.evaluate(&assignment)?);
            }
            trace!("row {}: {:?}", rows.len(), cells);
            rows.push(Row { cells });
        }

        Ok(TruthTable {
            variables,
            headers,
            rows,
        })
    }

    /// Variable names, in column order
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Headers of every column: variable names, then rendered statements
    pub fn headers(&self) -> &[Arc<str>] {
        &self.headers
    }

    /// Data rows in enumeration order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows (`2^variables`)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: even a table without variables has one row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Index of the first column with the given header
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.as_ref() == header)
    }

    /// Values of the column with the given header, top to bottom
    pub fn column(&self, header: &str) -> Option<Vec<Truth>> {
        self.column_index(header)
            .map(|index| self.column_values(index).collect())
    }

    /// Values of the column at `index`, top to bottom
    ///
    /// Yields nothing for an out-of-range index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = Truth> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// True iff every cell of the column is 1
    ///
    /// Returns false for an out-of-range index.
    pub fn is_column_tautology(&self, index: usize) -> bool {
        index < self.width() && self.column_values(index).all(|value| value == 1)
    }

    /// True iff every cell of the column is 0
    ///
    /// Returns false for an out-of-range index.
    pub fn is_column_contradiction(&self, index: usize) -> bool {
        index < self.width() && self.column_values(index).all(|value| value == 0)
    }

    /// The assignment of the variable columns on a row
    pub fn assignment(&self, row: usize) -> Option<Assignment> {
        let row = self.rows.get(row)?;
        Some(Assignment::from_row(
            &self.variables,
            &row.cells[..self.variables.len()],
        ))
    }

    /// Render every column to text, with custom labels if any
    pub fn render(&self, labels: Option<&TruthLabels>) -> Vec<RenderedColumn> {
        self.render_columns(0..self.width(), labels)
    }

    /// Render selected columns to text, in the order given
    ///
    /// Out-of-range indices are skipped.
    pub fn render_columns(
        &self,
        indices: impl IntoIterator<Item = usize>,
        labels: Option<&TruthLabels>,
    ) -> Vec<RenderedColumn> {
        indices
            .into_iter()
            .filter_map(|index| {
                let header = self.headers.get(index)?;
                Some(RenderedColumn {
                    header: header.to_string(),
                    cells: self
                        .column_values(index)
                        .map(|value| render_value(value, labels))
                        .collect(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn vars(names: &[&str]) -> Vec<Arc<str>> {
        names.iter().map(|name| Arc::from(*name)).collect()
    }

    #[test]
    fn test_build_shape() {
        let expr = Expr::parse("p and q").unwrap();
        let table = TruthTable::build(vars(&["p", "q"]), &[expr], false).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.width(), 3);
        let headers: Vec<&str> = table.headers().iter().map(|h| h.as_ref()).collect();
        assert_eq!(headers, ["p", "q", "p ∧ q"]);
        assert_eq!(table.column("p ∧ q"), Some(vec![0, 0, 0, 1]));
        assert_eq!(table.column("p"), Some(vec![0, 0, 1, 1]));
        assert_eq!(table.column("r"), None);
    }

    #[test]
    fn test_reverse_order() {
        let expr = Expr::parse("p -> q").unwrap();
        let table = TruthTable::build(vars(&["p", "q"]), &[expr], true).unwrap();
        assert_eq!(table.rows()[0].cells(), &[1, 1, 1]);
        assert_eq!(table.column_values(2).collect::<Vec<_>>(), vec![1, 0, 1, 1]);
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let expr = Expr::parse("p and q").unwrap();
        let err = TruthTable::build(vars(&["p"]), &[expr], false).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::UnassignedVariable {
                name: Arc::from("q")
            }
        );
    }

    #[test]
    fn test_column_queries() {
        let columns = [
            Expr::parse("p or not p").unwrap(),
            Expr::parse("p and not p").unwrap(),
        ];
        let table = TruthTable::build(vars(&["p"]), &columns, false).unwrap();
        assert!(table.is_column_tautology(1));
        assert!(!table.is_column_tautology(2));
        assert!(table.is_column_contradiction(2));
        assert!(!table.is_column_tautology(9));
        assert_eq!(table.assignment(1).unwrap().to_string(), "p=1");
        assert!(table.assignment(2).is_none());
    }

    #[test]
    fn test_render_with_labels() {
        let expr = Expr::parse("not p").unwrap();
        let table = TruthTable::build(vars(&["p"]), &[expr], false).unwrap();
        let labels = TruthLabels::parse("TF").unwrap();
        let rendered = table.render(Some(&labels));
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[1].header, "¬p");
        assert_eq!(rendered[1].cells, vec!["T", "F"]);
        let selected = table.render_columns([1, 7], None);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].cells, vec!["1", "0"]);
    }
}
