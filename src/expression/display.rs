//! Display and Debug formatting for expressions

use super::{Connective, Expr, Node};
use std::fmt;

/// Which side of a binary connective an operand sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Expr {
    /// Binding strength of the root; variables bind tightest
    fn binding(&self) -> u8 {
        match self.connective() {
            Some(connective) => connective.precedence(),
            None => u8::MAX,
        }
    }

    fn write_connective(f: &mut fmt::Formatter<'_>, connective: Connective) -> fmt::Result {
        if f.alternate() {
            write!(f, " {} ", connective.keyword())
        } else {
            write!(f, " {} ", connective.symbol())
        }
    }

    /// Write an operand of a connective with the given precedence, adding
    /// parentheses only when re-parsing would otherwise group it differently.
    ///
    /// Binary chains of `->` and `iff` group to the right, so a left operand of
    /// equal precedence needs parentheses and a right one does not.
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parent: u8, side: Side) -> fmt::Result {
        let binding = self.binding();
        let needs_parens = binding < parent || (binding == parent && side == Side::Left);

        if needs_parens {
            write!(f, "(")?;
        }
        self.fmt_tree(f)?;
        if needs_parens {
            write!(f, ")")?;
        }
        Ok(())
    }

    fn fmt_operands(
        f: &mut fmt::Formatter<'_>,
        connective: Connective,
        operands: &[Expr],
    ) -> fmt::Result {
        let parent = connective.precedence();
        for (index, operand) in operands.iter().enumerate() {
            if index > 0 {
                Self::write_connective(f, connective)?;
            }
            operand.fmt_operand(f, parent, Side::Right)?;
        }
        Ok(())
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.as_ref() {
            Node::Variable(name) => write!(f, "{}", name),

            Node::Negation(inner) => {
                if f.alternate() {
                    write!(f, "{} ", Connective::Not.keyword())?;
                } else {
                    write!(f, "{}", Connective::Not.symbol())?;
                }
                // Only variables follow a negation without parentheses
                match inner.node.as_ref() {
                    Node::Variable(_) => inner.fmt_tree(f),
                    _ => {
                        write!(f, "(")?;
                        inner.fmt_tree(f)?;
                        write!(f, ")")
                    }
                }
            }

            Node::Conjunction(operands) => Self::fmt_operands(f, Connective::And, operands),
            Node::Disjunction(operands) => Self::fmt_operands(f, Connective::Or, operands),
            Node::XDisjunction(operands) => Self::fmt_operands(f, Connective::Xor, operands),

            Node::Implication(left, right) | Node::Biconditional(left, right) => {
                let connective = if matches!(self.node.as_ref(), Node::Implication(_, _)) {
                    Connective::Implies
                } else {
                    Connective::Iff
                };
                let parent = connective.precedence();
                left.fmt_operand(f, parent, Side::Left)?;
                Self::write_connective(f, connective)?;
                right.fmt_operand(f, parent, Side::Right)
            }
        }
    }
}

/// Display formatting for expressions
///
/// Uses the glyphs `¬ ∧ ∨ ⊻ → ↔` with minimal parentheses. The alternate form
/// (`{:#}`) spells connectives with the parser's keywords instead. Both forms
/// parse back to an expression of the same shape.
///
/// # Examples
///
/// ```
/// use prop_logic::Expr;
///
/// # fn main() -> Result<(), prop_logic::StatementError> {
/// let expr = Expr::parse("~(p & q) => r")?;
/// assert_eq!(format!("{}", expr), "¬(p ∧ q) → r");
/// assert_eq!(format!("{:#}", expr), "not (p and q) -> r");
/// # Ok(())
/// # }
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f)
    }
}

/// Debug formatting for expressions
///
/// Same text as `Display`, so test failures read like statements.
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f)
    }
}
