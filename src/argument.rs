//! Arguments: premises, an optional conclusion and a shared truth table

use crate::error::LogicError;
use crate::expression::{Assignment, Expr};
use crate::proposition::check_variable_count;
use crate::table::{Mark, RenderedColumn, TableSink, TruthTable};
use crate::{Proposition, TableConfig, VariableOrder};
use log::{debug, info};
use std::io;
use std::sync::{Arc, OnceLock};

/// How statements are compared in [`Argument::test_equivalence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EquivalenceMode {
    /// Every statement against the first one
    #[default]
    Direct,
    /// Every unordered pair of statements
    Pairwise,
}

/// Outcome of a validity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    /// True iff no row makes every premise 1 and the conclusion 0
    pub valid: bool,
    /// Variable values of the first failing row
    pub countermodel: Option<Assignment>,
    /// Indices of every failing row, in table order
    pub failing_rows: Vec<usize>,
}

/// One biconditional checked by [`Argument::test_equivalence`]
#[derive(Debug, Clone)]
pub struct EquivalenceTest {
    /// Index of the left statement
    pub left: usize,
    /// Index of the right statement
    pub right: usize,
    /// Both statements have the same shape
    pub same_shape: bool,
    /// The biconditional is a tautology
    pub equivalent: bool,
    /// `left iff right`, for showing its table
    pub biconditional: Proposition,
}

/// All equivalence tests run for an argument
#[derive(Debug, Clone, Default)]
pub struct EquivalenceReport {
    /// One entry per compared pair
    pub tests: Vec<EquivalenceTest>,
}

impl EquivalenceReport {
    /// True iff every compared pair is equivalent
    pub fn is_equivalent(&self) -> bool {
        self.tests.iter().all(|test| test.equivalent)
    }

    /// The pairs that failed
    pub fn failures(&self) -> impl Iterator<Item = &EquivalenceTest> {
        self.tests.iter().filter(|test| !test.equivalent)
    }
}

/// Premises and an optional conclusion evaluated over one truth table
///
/// Table columns are the variables of all statements (those of the first
/// premise first, then new ones in order of appearance), one column per
/// premise, then the conclusion.
///
/// # Examples
///
/// ```
/// use prop_logic::{Argument, TableConfig};
///
/// # fn main() -> Result<(), prop_logic::LogicError> {
/// let config = TableConfig::default();
/// let modus_ponens = Argument::from_statements(&["p -> q", "p"], Some("q"), config.clone())?;
/// assert!(modus_ponens.is_valid()?.valid);
///
/// let affirming = Argument::from_statements(&["p -> q", "q"], Some("p"), config)?;
/// let validity = affirming.is_valid()?;
/// assert!(!validity.valid);
/// assert_eq!(validity.countermodel.unwrap().to_string(), "p=0, q=1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Argument {
    premises: Vec<Proposition>,
    conclusion: Option<Proposition>,
    variables: Vec<Arc<str>>,
    config: TableConfig,
    table: OnceLock<TruthTable>,
}

impl Argument {
    /// Build an argument from parsed propositions
    ///
    /// # Errors
    ///
    /// [`LogicError::EmptyArgument`] with neither premises nor conclusion, or
    /// [`LogicError::Config`] if the statements together have more variables
    /// than `config.max_variables`.
    pub fn new(
        premises: Vec<Proposition>,
        conclusion: Option<Proposition>,
        config: TableConfig,
    ) -> Result<Self, LogicError> {
        if premises.is_empty() && conclusion.is_none() {
            return Err(LogicError::EmptyArgument);
        }

        let mut variables: Vec<Arc<str>> = Vec::new();
        for statement in premises.iter().chain(conclusion.as_ref()) {
            for name in statement.expr().variables() {
                if !variables.contains(&name) {
                    variables.push(name);
                }
            }
        }
        if config.variable_order == VariableOrder::Sorted {
            variables.sort();
        }
        check_variable_count(variables.len(), &config)?;

        debug!(
            "argument with {} premises, conclusion: {}, {} variables",
            premises.len(),
            conclusion.is_some(),
            variables.len()
        );
        Ok(Argument {
            premises,
            conclusion,
            variables,
            config,
            table: OnceLock::new(),
        })
    }

    /// Parse premises and an optional conclusion
    pub fn from_statements(
        premises: &[&str],
        conclusion: Option<&str>,
        config: TableConfig,
    ) -> Result<Self, LogicError> {
        let premises = premises
            .iter()
            .map(|statement| Proposition::new(statement, config.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        let conclusion = conclusion
            .map(|statement| Proposition::new(statement, config.clone()))
            .transpose()?;
        Self::new(premises, conclusion, config)
    }

    /// The premises, in order
    pub fn premises(&self) -> &[Proposition] {
        &self.premises
    }

    /// The conclusion, if any
    pub fn conclusion(&self) -> Option<&Proposition> {
        self.conclusion.as_ref()
    }

    /// Premises followed by the conclusion
    pub fn statements(&self) -> impl Iterator<Item = &Proposition> {
        self.premises.iter().chain(self.conclusion.as_ref())
    }

    /// Variables of all statements in column order
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Index of the conclusion column, if there is a conclusion
    pub fn conclusion_column(&self) -> Option<usize> {
        self.conclusion
            .as_ref()
            .map(|_| self.variables.len() + self.premises.len())
    }

    /// The shared truth table, built on first call
    pub fn truth_table(&self) -> Result<&TruthTable, LogicError> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let columns: Vec<Expr> = self.statements().map(|s| s.expr().clone()).collect();
        let table = TruthTable::build(
            self.variables.clone(),
            &columns,
            self.config.reverse_order,
        )?;
        Ok(self.table.get_or_init(|| table))
    }

    /// Check that no row makes every premise 1 and the conclusion 0
    ///
    /// # Errors
    ///
    /// [`LogicError::MissingConclusion`] if the argument has no conclusion.
    pub fn is_valid(&self) -> Result<Validity, LogicError> {
        let conclusion = self
            .conclusion_column()
            .ok_or(LogicError::MissingConclusion)?;
        let table = self.truth_table()?;
        let premises = self.variables.len()..conclusion;

        let failing_rows: Vec<usize> = table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                let cells = row.cells();
                cells[premises.clone()].iter().all(|value| *value == 1) && cells[conclusion] == 0
            })
            .map(|(index, _)| index)
            .collect();

        let countermodel = failing_rows.first().and_then(|row| table.assignment(*row));
        let valid = failing_rows.is_empty();
        info!(
            "argument is {} ({} failing rows)",
            if valid { "valid" } else { "invalid" },
            failing_rows.len()
        );
        Ok(Validity {
            valid,
            countermodel,
            failing_rows,
        })
    }

    /// Compare statements by building biconditionals and checking each for
    /// tautology
    ///
    /// The shape comparison is reported alongside but never decides the result.
    pub fn test_equivalence(&self, mode: EquivalenceMode) -> Result<EquivalenceReport, LogicError> {
        let statements: Vec<&Proposition> = self.statements().collect();
        let pairs: Vec<(usize, usize)> = match mode {
            EquivalenceMode::Direct => (1..statements.len()).map(|i| (0, i)).collect(),
            EquivalenceMode::Pairwise => (0..statements.len())
                .flat_map(|i| (i + 1..statements.len()).map(move |j| (i, j)))
                .collect(),
        };

        // Biconditional tables show only the variables and the whole statement
        let config = TableConfig {
            include_atomic_columns: false,
            ..self.config.clone()
        };
        let mut tests = Vec::with_capacity(pairs.len());
        for (left, right) in pairs {
            let (a, b) = (statements[left], statements[right]);
            let biconditional = Proposition::from_expr(a.expr().iff(b.expr()), config.clone())?;
            let equivalent = biconditional.is_tautology()?;
            debug!(
                "statements {} and {}: equivalent {}",
                left, right, equivalent
            );
            tests.push(EquivalenceTest {
                left,
                right,
                same_shape: a.expr().same_shape(b.expr()),
                equivalent,
                biconditional,
            });
        }
        Ok(EquivalenceReport { tests })
    }

    /// Row flags for a mark column
    ///
    /// [`Mark::Equivalent`] passes rows where every statement has the same
    /// value. [`Mark::Counterexample`] fails rows where every premise is 1 and
    /// the conclusion is 0; without a conclusion every row passes.
    pub fn marks(&self, mark: Mark) -> Result<Vec<bool>, LogicError> {
        let table = self.truth_table()?;
        let first = self.variables.len();
        let marks = table
            .rows()
            .iter()
            .map(|row| {
                let statements = &row.cells()[first..];
                match (mark, self.conclusion_column()) {
                    (Mark::Equivalent, _) => statements.windows(2).all(|w| w[0] == w[1]),
                    (Mark::Counterexample, Some(conclusion)) => {
                        let premises = &row.cells()[first..conclusion];
                        !(premises.iter().all(|v| *v == 1) && row.cells()[conclusion] == 0)
                    }
                    (Mark::Counterexample, None) => true,
                }
            })
            .collect();
        Ok(marks)
    }

    /// The table rendered to text with the configured labels
    pub fn rendered_columns(&self) -> Result<Vec<RenderedColumn>, LogicError> {
        Ok(self.truth_table()?.render(self.config.labels.as_ref()))
    }

    /// Render the table into a sink, with an optional mark column
    pub fn write_table<S: TableSink>(&self, sink: &mut S, mark: Option<Mark>) -> io::Result<()> {
        let columns = self.rendered_columns()?;
        let marks = mark.map(|mark| self.marks(mark)).transpose()?;
        sink.render(&columns, marks.as_deref())
    }
}
