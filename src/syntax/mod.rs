//! Statement front end: normalizer, structural parser and compiler
//!
//! A statement goes through four stages:
//!
//! 1. [`normalize`] rewrites every operator spelling to a canonical keyword
//! 2. [`RawTree::parse`] recovers the parenthesis structure
//! 3. [`SyntaxTree::check`] validates names and resolves precedence
//! 4. [`compile`] builds the canonical [`Expr`]
//!
//! [`parse_statement`] runs them all. Precedence from tightest to loosest is
//! `not`, `and`, `or`, `xor`, `->`, `iff`; chains of one binary connective group
//! to the right.

mod compiler;
mod error;
mod normalize;
mod parser;

pub use compiler::{compile, Compiled};
pub use error::{StatementError, SyntaxProblem, NAME_RULES};
pub use normalize::normalize;
pub use parser::{RawTree, SyntaxTree};

use crate::expression::Expr;
use log::debug;

/// Parse and compile a statement in one go
///
/// # Errors
///
/// Returns a [`StatementError`] describing the first problem found. Nothing is
/// recovered: a statement is either accepted whole or rejected.
///
/// # Examples
///
/// ```
/// use prop_logic::syntax::compile_statement;
///
/// # fn main() -> Result<(), prop_logic::StatementError> {
/// let compiled = compile_statement("(p & q) | ~p")?;
/// assert_eq!(compiled.expr.to_string(), "p ∧ q ∨ ¬p");
/// assert_eq!(compiled.constituents.len(), 5);
/// # Ok(())
/// # }
/// ```
pub fn compile_statement(statement: &str) -> Result<Compiled, StatementError> {
    let normalized = normalize(statement);
    debug!("statement {:?} normalized to {:?}", statement, normalized);

    let raw = RawTree::parse(&normalized)?;
    let tree = SyntaxTree::check(&raw)?;
    debug!("syntax tree: {:?}", tree);

    let compiled = compile(&tree);
    debug!(
        "compiled {:?} with {} constituents",
        compiled.expr.to_string(),
        compiled.constituents.len()
    );
    Ok(compiled)
}

/// Parse a statement into its canonical expression
///
/// Shorthand for [`compile_statement`] when the constituents are not needed.
pub fn parse_statement(statement: &str) -> Result<Expr, StatementError> {
    compile_statement(statement).map(|compiled| compiled.expr)
}

impl Expr {
    /// Parse a statement written in any supported notation
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_logic::Expr;
    ///
    /// # fn main() -> Result<(), prop_logic::StatementError> {
    /// let words = Expr::parse("not (p and q) iff not p or not q")?;
    /// let symbols = Expr::parse("¬(p ∧ q) ↔ ¬p ∨ ¬q")?;
    /// assert_eq!(words, symbols);
    /// assert!(words.is_tautology());
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(statement: &str) -> Result<Expr, StatementError> {
        parse_statement(statement)
    }
}

impl std::str::FromStr for Expr {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_statement(s)
    }
}
