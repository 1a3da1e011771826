//! Error types for statement parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Rules a variable name must follow, shown with [`StatementError::BadIdentifier`]
pub const NAME_RULES: &str = "Rules:
1. Contains only alpha-numeric characters and underscores.
2. Must not start with a number.
3. Must not be an operator keyword.
4. Case-sensitive.";

/// What exactly is missing in a [`StatementError::MissingOperandOrOperator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxProblem {
    /// An operator keyword stands where an expression is expected, e.g. `p and or`
    OperatorAsOperand,
    /// A binary operator has nothing on one side, e.g. `p and`
    MissingOperand,
    /// Two or more operands with no operator between them, e.g. `p q`
    MissingOperator,
    /// `not` followed by an operator or by nothing
    MalformedNegation,
    /// Empty parentheses inside a statement, e.g. `p and ()`
    EmptyGroup,
}

impl fmt::Display for SyntaxProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SyntaxProblem::OperatorAsOperand => "expected an expression, found an operator",
            SyntaxProblem::MissingOperand => "operator is missing an operand",
            SyntaxProblem::MissingOperator => "expected an operator between expressions",
            SyntaxProblem::MalformedNegation => "'not' must be followed by an expression",
            SyntaxProblem::EmptyGroup => "empty parentheses",
        };
        f.write_str(text)
    }
}

/// Errors raised while normalizing, parsing or compiling a statement
///
/// Each variant carries the offending text so callers can report a precise
/// diagnostic. These are user-input errors: the statement is rejected as a
/// whole and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// A token is neither an operator nor a valid variable name
    BadIdentifier {
        /// The offending token
        name: Arc<str>,
    },
    /// Parentheses do not pair up
    UnmatchedParentheses {
        /// The statement as written
        statement: Arc<str>,
        /// Offset in the normalized statement where nesting broke down, if known
        position: Option<usize>,
    },
    /// A group has no recognisable operator, or an operator lacks an operand
    MissingOperandOrOperator {
        /// The offending sub-expression, rendered from the parsed tokens
        fragment: Arc<str>,
        /// What is wrong with it
        problem: SyntaxProblem,
    },
    /// The statement contains no tokens at all
    EmptyStatement,
}

impl fmt::Display for StatementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementError::BadIdentifier { name } => {
                write!(f, "Bad name: {:?}.\n{}", name, NAME_RULES)
            }
            StatementError::UnmatchedParentheses {
                statement,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Syntax error: Unmatched parentheses at position {}. Expression: {:?}",
                        pos, statement
                    )
                } else {
                    write!(
                        f,
                        "Syntax error: Unmatched parentheses. Expression: {:?}",
                        statement
                    )
                }
            }
            StatementError::MissingOperandOrOperator { fragment, problem } => {
                write!(f, "Syntax error: {} in {:?}", problem, fragment)
            }
            StatementError::EmptyStatement => write!(f, "Error: Null statement."),
        }
    }
}

impl std::error::Error for StatementError {}

impl From<StatementError> for io::Error {
    fn from(err: StatementError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
