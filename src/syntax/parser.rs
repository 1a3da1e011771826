//! Structural parser: bracket nesting first, operator structure second
//!
//! [`RawTree::parse`] turns a normalized statement into nested groups of
//! tokens. [`SyntaxTree::check`] then validates every group and resolves
//! operator precedence, producing a tree with exactly one connective per node.

use super::error::{StatementError, SyntaxProblem};
use crate::expression::{is_valid_name, Connective};
use lalrpop_util::ParseError;
use std::fmt;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/syntax/groups.rs"));
}

/// Parenthesis tree of a statement
///
/// Each parenthesised group is a [`RawTree::Group`]; each operator keyword or
/// name is a [`RawTree::Token`]. No validation has happened yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTree {
    /// An operator keyword or a would-be variable name
    Token(Arc<str>),
    /// A parenthesised group
    Group(Vec<RawTree>),
}

impl RawTree {
    /// Parse the bracket structure of a normalized statement
    ///
    /// The statement is wrapped in one enclosing pair of parentheses first, so
    /// the result is always a [`RawTree::Group`].
    ///
    /// # Errors
    ///
    /// Any failure to close the bracket nesting is reported as
    /// [`StatementError::UnmatchedParentheses`]: because of the enclosing pair,
    /// a token after the outer group closes or an end of input inside a group
    /// can only come from unbalanced parentheses.
    pub fn parse(normalized: &str) -> Result<Self, StatementError> {
        let wrapped = format!("({})", normalized);
        parser_impl::GroupParser::new()
            .parse(&wrapped)
            .map_err(|e| {
                let location = match e {
                    ParseError::InvalidToken { location } => Some(location),
                    ParseError::UnrecognizedEof { location, .. } => Some(location),
                    ParseError::UnrecognizedToken {
                        token: (start, _, _),
                        ..
                    } => Some(start),
                    ParseError::ExtraToken {
                        token: (start, _, _),
                    } => Some(start),
                    ParseError::User { .. } => None,
                };
                StatementError::UnmatchedParentheses {
                    statement: Arc::from(normalized),
                    // Offsets in `wrapped` are one past the statement's own
                    position: location.map(|l| l.saturating_sub(1).min(normalized.len())),
                }
            })
    }

    /// Returns the connective if this is an operator keyword token
    fn connective(&self) -> Option<Connective> {
        match self {
            RawTree::Token(token) => Connective::from_keyword(token),
            RawTree::Group(_) => None,
        }
    }

    fn is_connective(&self, connective: Connective) -> bool {
        self.connective() == Some(connective)
    }
}

/// Render a sequence of items the way it reads in the statement
fn render(items: &[RawTree]) -> Arc<str> {
    let text = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Arc::from(text)
}

impl fmt::Display for RawTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawTree::Token(token) => write!(f, "{}", token),
            RawTree::Group(items) => write!(f, "({})", render(items)),
        }
    }
}

/// Validated syntax tree: one connective per node, names checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxTree {
    /// A valid variable name
    Name(Arc<str>),
    /// `not` applied to an operand
    Not(Box<SyntaxTree>),
    /// A binary connective with its two sides
    Binary {
        /// One of `and`, `or`, `xor`, `->`, `iff`
        connective: Connective,
        /// Left-hand side
        left: Box<SyntaxTree>,
        /// Right-hand side
        right: Box<SyntaxTree>,
    },
}

impl SyntaxTree {
    /// Validate a parenthesis tree and resolve operator structure
    ///
    /// Each group is handled by size:
    /// - one item is passed through (a name, or a nested group)
    /// - otherwise the group is split at the first occurrence of the loosest
    ///   binary connective present (`iff`, then `->`, `xor`, `or`, `and`), so
    ///   chains of the same connective group to the right
    /// - with no binary connective, the group must be `not` followed by an operand
    /// - an empty group is an empty statement at the top level and an error
    ///   anywhere else
    pub fn check(raw: &RawTree) -> Result<Self, StatementError> {
        check_item(raw, true)
    }
}

fn check_item(item: &RawTree, top_level: bool) -> Result<SyntaxTree, StatementError> {
    match item {
        RawTree::Token(token) => {
            if Connective::is_keyword(token) {
                Err(StatementError::MissingOperandOrOperator {
                    fragment: Arc::clone(token),
                    problem: SyntaxProblem::OperatorAsOperand,
                })
            } else if is_valid_name(token) {
                Ok(SyntaxTree::Name(Arc::clone(token)))
            } else {
                Err(StatementError::BadIdentifier {
                    name: Arc::clone(token),
                })
            }
        }
        RawTree::Group(items) => check_group(items, top_level),
    }
}

fn check_group(items: &[RawTree], top_level: bool) -> Result<SyntaxTree, StatementError> {
    match items {
        [] if top_level => Err(StatementError::EmptyStatement),
        [] => Err(StatementError::MissingOperandOrOperator {
            fragment: Arc::from("()"),
            problem: SyntaxProblem::EmptyGroup,
        }),
        [single] => check_item(single, top_level),
        _ => check_sequence(items),
    }
}

fn check_sequence(items: &[RawTree]) -> Result<SyntaxTree, StatementError> {
    for connective in Connective::BINARY_BY_PRECEDENCE {
        let Some(index) = items.iter().position(|item| item.is_connective(connective)) else {
            continue;
        };

        let (left, right) = (&items[..index], &items[index + 1..]);
        if left.is_empty() || right.is_empty() {
            return Err(StatementError::MissingOperandOrOperator {
                fragment: render(items),
                problem: SyntaxProblem::MissingOperand,
            });
        }

        return Ok(SyntaxTree::Binary {
            connective,
            left: Box::new(check_group(left, false)?),
            right: Box::new(check_group(right, false)?),
        });
    }

    // No binary connective: only a negation is left
    match items.split_first() {
        Some((first, operand)) if first.is_connective(Connective::Not) => {
            if operand.iter().all(|item| item.is_connective(Connective::Not)) {
                return Err(StatementError::MissingOperandOrOperator {
                    fragment: render(items),
                    problem: SyntaxProblem::MalformedNegation,
                });
            }
            Ok(SyntaxTree::Not(Box::new(check_group(operand, false)?)))
        }
        _ => Err(StatementError::MissingOperandOrOperator {
            fragment: render(items),
            problem: SyntaxProblem::MissingOperator,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str) -> RawTree {
        RawTree::Token(Arc::from(text))
    }

    fn check(normalized: &str) -> Result<SyntaxTree, StatementError> {
        SyntaxTree::check(&RawTree::parse(normalized)?)
    }

    fn name(text: &str) -> Box<SyntaxTree> {
        Box::new(SyntaxTree::Name(Arc::from(text)))
    }

    #[test]
    fn test_raw_tree_nesting() {
        let tree = RawTree::parse("a and (b or c)").unwrap();
        assert_eq!(
            tree,
            RawTree::Group(vec![
                token("a"),
                token("and"),
                RawTree::Group(vec![token("b"), token("or"), token("c")]),
            ])
        );
        assert_eq!(tree.to_string(), "(a and (b or c))");
    }

    #[test]
    fn test_unmatched_parentheses() {
        for text in ["(p and q", "p and q)", "p) and (q", "((p)", ")("] {
            let err = RawTree::parse(text).unwrap_err();
            assert!(
                matches!(err, StatementError::UnmatchedParentheses { .. }),
                "{}: {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_precedence_split() {
        // iff binds loosest, and tightest
        let tree = check("p and q or r -> s").unwrap();
        let SyntaxTree::Binary {
            connective, left, ..
        } = tree
        else {
            panic!("expected binary");
        };
        assert_eq!(connective, Connective::Implies);
        assert!(matches!(
            *left,
            SyntaxTree::Binary {
                connective: Connective::Or,
                ..
            }
        ));
    }

    #[test]
    fn test_chains_group_to_the_right() {
        let tree = check("p -> q -> r").unwrap();
        assert_eq!(
            tree,
            SyntaxTree::Binary {
                connective: Connective::Implies,
                left: name("p"),
                right: Box::new(SyntaxTree::Binary {
                    connective: Connective::Implies,
                    left: name("q"),
                    right: name("r"),
                }),
            }
        );
    }

    #[test]
    fn test_negation_binds_tightest() {
        let tree = check("not p and q").unwrap();
        assert_eq!(
            tree,
            SyntaxTree::Binary {
                connective: Connective::And,
                left: Box::new(SyntaxTree::Not(name("p"))),
                right: name("q"),
            }
        );
        assert_eq!(
            check("not not p").unwrap(),
            SyntaxTree::Not(Box::new(SyntaxTree::Not(name("p"))))
        );
    }

    #[test]
    fn test_missing_operand() {
        let err = check("(p and)").unwrap_err();
        assert_eq!(
            err,
            StatementError::MissingOperandOrOperator {
                fragment: Arc::from("p and"),
                problem: SyntaxProblem::MissingOperand,
            }
        );
        assert!(matches!(
            check("or q"),
            Err(StatementError::MissingOperandOrOperator {
                problem: SyntaxProblem::MissingOperand,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_operator() {
        assert!(matches!(
            check("p q"),
            Err(StatementError::MissingOperandOrOperator {
                problem: SyntaxProblem::MissingOperator,
                ..
            })
        ));
        assert!(matches!(
            check("p not q"),
            Err(StatementError::MissingOperandOrOperator {
                problem: SyntaxProblem::MissingOperator,
                ..
            })
        ));
    }

    #[test]
    fn test_operator_as_operand() {
        assert!(matches!(
            check("and"),
            Err(StatementError::MissingOperandOrOperator {
                problem: SyntaxProblem::OperatorAsOperand,
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_negation() {
        assert_eq!(
            check("not not").unwrap_err(),
            StatementError::MissingOperandOrOperator {
                fragment: Arc::from("not not"),
                problem: SyntaxProblem::MalformedNegation,
            }
        );
        // A lone `not` is an operator standing in for an operand
        for text in ["not", "p and not"] {
            assert!(matches!(
                check(text),
                Err(StatementError::MissingOperandOrOperator {
                    problem: SyntaxProblem::OperatorAsOperand,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_bad_identifier() {
        assert_eq!(
            check("1p and q").unwrap_err(),
            StatementError::BadIdentifier {
                name: Arc::from("1p"),
            }
        );
        assert!(matches!(
            check("p and q$"),
            Err(StatementError::BadIdentifier { .. })
        ));
    }

    #[test]
    fn test_empty_groups() {
        assert_eq!(check("").unwrap_err(), StatementError::EmptyStatement);
        assert_eq!(check("()").unwrap_err(), StatementError::EmptyStatement);
        assert!(matches!(
            check("p and ()"),
            Err(StatementError::MissingOperandOrOperator {
                problem: SyntaxProblem::EmptyGroup,
                ..
            })
        ));
    }
}
