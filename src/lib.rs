//! # Propositional Logic Engine
//!
//! Parse propositional statements written in any of the usual notations,
//! build their truth tables, and answer semantic questions about them:
//! tautology, contradiction, equivalence of several statements and validity
//! of arguments.
//!
//! ## Overview
//!
//! A statement goes through a small pipeline:
//!
//! 1. **Normalizer** - every operator spelling (`~`, `¬`, `&&`, `∧`, `->`, `⇔`,
//!    `XOR`, ...) is rewritten to one canonical keyword
//! 2. **Parser** - a lalrpop grammar recovers the parenthesis structure, then
//!    each group is validated and split by operator precedence
//! 3. **Compiler** - the result is lowered into an [`Expr`] in canonical form
//!    (no double negation, flattened `and`/`or`/`xor` chains)
//!
//! On top of the expression model sit the [`Proposition`] and [`Argument`]
//! types, each owning a lazily built [`TruthTable`](table::TruthTable).
//!
//! ## Statements
//!
//! ```
//! use prop_logic::Expr;
//!
//! # fn main() -> Result<(), prop_logic::StatementError> {
//! let expr = Expr::parse("~(p & q) <-> (!p | !q)")?;
//! println!("{}", expr); // ¬(p ∧ q) ↔ ¬p ∨ ¬q
//! assert!(expr.is_tautology());
//! # Ok(())
//! # }
//! ```
//!
//! Precedence from tightest to loosest is `not`, `and`, `or`, `xor`, `->`,
//! `iff`. Chains of one connective group to the right, so `p -> q -> r` reads
//! as `p -> (q -> r)`.
//!
//! ## Truth Tables
//!
//! ```
//! use prop_logic::{Proposition, TableConfig};
//! use prop_logic::table::{PlainText, TruthLabels};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TableConfig {
//!     labels: Some(TruthLabels::parse("TF")?),
//!     ..TableConfig::default()
//! };
//! let prop = Proposition::new("p -> q", config)?;
//!
//! let mut sink = PlainText::new(Vec::new());
//! prop.write_table(&mut sink)?;
//! let text = String::from_utf8(sink.into_inner())?;
//! assert!(text.starts_with("p | q | p → q"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Arguments
//!
//! ```
//! use prop_logic::{Argument, EquivalenceMode, TableConfig};
//!
//! # fn main() -> Result<(), prop_logic::LogicError> {
//! let config = TableConfig::default();
//!
//! let contrapositive = Argument::from_statements(&["p -> q", "~q -> ~p"], None, config.clone())?;
//! assert!(contrapositive.test_equivalence(EquivalenceMode::Direct)?.is_equivalent());
//!
//! let invalid = Argument::from_statements(&["p -> q"], Some("p"), config)?;
//! let validity = invalid.is_valid()?;
//! assert!(!validity.valid);
//! println!("countermodel: {}", validity.countermodel.unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! ## Building Expressions in Code
//!
//! The [`prop!`] macro uses Rust-friendly operators with the same precedence:
//!
//! ```
//! use prop_logic::{prop, Expr};
//!
//! let p = Expr::variable("p");
//! let q = Expr::variable("q");
//!
//! let demorgan = prop!(!(p & q) <-> (!p | !q));
//! assert!(demorgan.is_tautology());
//!
//! let with_literals = prop!("a" ^ "b" -> "c");
//! assert_eq!(with_literals.to_string(), "a ⊻ b → c");
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: pipeline
//! stages at `debug`, per-row table evaluation at `trace`, and a `warn` when a
//! table grows past [`proposition::WARN_VARIABLES`] variables.

// Public modules
pub mod argument;
pub mod error;
pub mod expression;
pub mod proposition;
pub mod syntax;
pub mod table;

// Re-export high-level public API
pub use argument::{Argument, EquivalenceMode, EquivalenceReport, EquivalenceTest, Validity};
pub use error::{ConfigError, EvaluationError, LabelProblem, LogicError};
pub use expression::{Assignment, Connective, Expr, ExprKind, ExprNode, Truth};
pub use proposition::Proposition;
pub use syntax::{parse_statement, StatementError};
pub use table::TruthLabels;

pub use prop_logic_macros::prop;

/// Order of the variable columns in a truth table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariableOrder {
    /// Order of first appearance in the statement
    #[default]
    FirstSeen,
    /// Ascending lexicographic order
    Sorted,
}

/// Configuration for truth tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Enumerate assignments from all ones down to all zeros
    pub reverse_order: bool,
    /// Characters for true and false in rendered tables (`1`/`0` if unset)
    pub labels: Option<TruthLabels>,
    /// Show a column for every sub-expression, not just the whole statement
    pub include_atomic_columns: bool,
    /// Order of the variable columns
    pub variable_order: VariableOrder,
    /// Refuse to build tables over more variables than this
    pub max_variables: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            reverse_order: false,
            labels: None,
            include_atomic_columns: true,
            variable_order: VariableOrder::FirstSeen,
            max_variables: 20,
        }
    }
}

impl TableConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
