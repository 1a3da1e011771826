//! Error types for the propositional logic engine
//!
//! User-input problems ([`StatementError`], [`ConfigError`]) are kept apart
//! from [`EvaluationError`], which only arises when an internal invariant is
//! broken. [`LogicError`] wraps all of them for the high-level API.

use crate::syntax::StatementError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Why a custom label string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelProblem {
    /// Not exactly two characters
    Length,
    /// Both characters are the same
    Identical,
}

/// Errors in table configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Custom true/false labels must be exactly two distinct characters
    CustomLabelInvalid {
        /// The label string as given
        labels: Arc<str>,
        /// What is wrong with it
        problem: LabelProblem,
    },
    /// The statements use more variables than the configured limit
    ///
    /// A truth table has `2^count` rows, so the limit is checked before any
    /// table is allocated.
    TooManyVariables {
        /// Number of distinct variables
        count: usize,
        /// Configured maximum
        limit: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CustomLabelInvalid { labels, problem } => match problem {
                LabelProblem::Length => write!(
                    f,
                    "Custom label string must be of length 2, got {:?}.",
                    labels
                ),
                LabelProblem::Identical => {
                    write!(f, "Custom labels must be different, got {:?}.", labels)
                }
            },
            ConfigError::TooManyVariables { count, limit } => write!(
                f,
                "Statement uses {} variables but truth tables are limited to {} \
                 ({} rows would be needed).",
                count,
                limit,
                1u128.checked_shl(*count as u32).unwrap_or(u128::MAX)
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure while evaluating an expression
///
/// The query engine only evaluates expressions against assignments built from
/// their own variables, so this signals a bug rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// A variable of the expression has no value in the assignment
    UnassignedVariable {
        /// The missing variable
        name: Arc<str>,
    },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::UnassignedVariable { name } => {
                write!(f, "Variable {:?} has no assigned value", name)
            }
        }
    }
}

impl std::error::Error for EvaluationError {}

/// The main error type for propositions and arguments
#[derive(Debug)]
pub enum LogicError {
    /// A statement could not be parsed
    Statement(StatementError),
    /// The table configuration is invalid
    Config(ConfigError),
    /// Evaluation failed (internal invariant breach)
    Evaluation(EvaluationError),
    /// Validity was requested for an argument that has no conclusion
    MissingConclusion,
    /// An argument needs at least one premise or a conclusion
    EmptyArgument,
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::Statement(e) => write!(f, "{}", e),
            LogicError::Config(e) => write!(f, "{}", e),
            LogicError::Evaluation(e) => write!(f, "An unexpected error occurred: {}", e),
            LogicError::MissingConclusion => {
                write!(f, "The argument has no conclusion to check validity against.")
            }
            LogicError::EmptyArgument => write!(f, "The argument has no statements."),
        }
    }
}

impl std::error::Error for LogicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogicError::Statement(e) => Some(e),
            LogicError::Config(e) => Some(e),
            LogicError::Evaluation(e) => Some(e),
            LogicError::MissingConclusion | LogicError::EmptyArgument => None,
        }
    }
}

impl From<StatementError> for LogicError {
    fn from(err: StatementError) -> Self {
        LogicError::Statement(err)
    }
}

impl From<ConfigError> for LogicError {
    fn from(err: ConfigError) -> Self {
        LogicError::Config(err)
    }
}

impl From<EvaluationError> for LogicError {
    fn from(err: EvaluationError) -> Self {
        LogicError::Evaluation(err)
    }
}

impl From<LogicError> for io::Error {
    fn from(err: LogicError) -> Self {
        match err {
            LogicError::Evaluation(e) => io::Error::new(io::ErrorKind::Other, e),
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
