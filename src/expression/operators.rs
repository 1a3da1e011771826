//! Operator overloading for expressions
//!
//! `&` is AND, `|` is OR, `^` is XOR and `!` is NOT. Implication and
//! biconditional have no operator and use [`Expr::implies`] / [`Expr::iff`].

use super::Expr;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Logical AND operator for references: `&a & &b`
///
/// # Examples
///
/// ```
/// use prop_logic::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
/// let result = &a & &b;  // Equivalent to a.and(&b)
/// assert_eq!(result, a.and(&b));
/// ```
impl BitAnd for &Expr {
    type Output = Expr;

    fn bitand(self, rhs: &Expr) -> Expr {
        self.and(rhs)
    }
}

/// Logical AND operator: `a & b` (delegates to reference version)
impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        self.and(&rhs)
    }
}

/// Logical OR operator for references: `&a | &b`
///
/// # Examples
///
/// ```
/// use prop_logic::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
/// let result = &a | &b;  // Equivalent to a.or(&b)
/// assert_eq!(result, b.or(&a)); // same shape, operand order ignored
/// ```
impl BitOr for &Expr {
    type Output = Expr;

    fn bitor(self, rhs: &Expr) -> Expr {
        self.or(rhs)
    }
}

/// Logical OR operator: `a | b` (delegates to reference version)
impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        self.or(&rhs)
    }
}

/// Exclusive OR operator for references: `&a ^ &b`
impl BitXor for &Expr {
    type Output = Expr;

    fn bitxor(self, rhs: &Expr) -> Expr {
        self.xor(rhs)
    }
}

/// Exclusive OR operator: `a ^ b` (delegates to reference version)
impl BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Expr) -> Expr {
        self.xor(&rhs)
    }
}

/// Logical NOT operator for references: `!&a`
///
/// # Examples
///
/// ```
/// use prop_logic::Expr;
///
/// let a = Expr::variable("a");
/// let not_a = !&a;
/// assert_eq!(!&not_a, a); // double negation collapses
/// ```
impl Not for &Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(self)
    }
}

/// Logical NOT operator: `!a` (delegates to reference version)
impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(&self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Expr, ExprKind};

    #[test]
    fn test_operators_build_flattened_nodes() {
        let a = Expr::variable("a");
        let b = Expr::variable("b");
        let c = Expr::variable("c");

        let expr = &(&a & &b) & &c;
        match expr.kind() {
            ExprKind::Conjunction(operands) => assert_eq!(operands.len(), 3),
            other => panic!("expected conjunction, got {:?}", other),
        }

        let expr = a.clone() ^ b.clone() ^ c.clone();
        assert!(matches!(expr.kind(), ExprKind::XDisjunction(ops) if ops.len() == 3));
    }

    #[test]
    fn test_owned_and_borrowed_agree() {
        let a = Expr::variable("a");
        let b = Expr::variable("b");

        assert_eq!(&a | &b, a.clone() | b.clone());
        assert_eq!(!&a, !a.clone());
    }
}
