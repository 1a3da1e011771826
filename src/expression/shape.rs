//! Structural ("same shape") equality

use super::Expr;
use std::sync::Arc;

impl Expr {
    /// Check whether two expressions have the same tree shape
    ///
    /// Operands of the n-ary connectives (`and`, `or`, `xor`) may appear in any
    /// order, and the two sides of `iff` may be swapped. Implications are
    /// compared side by side. This says nothing about logical meaning: De
    /// Morgan pairs are equivalent but not the same shape.
    ///
    /// N-ary operands are matched by searching for a bijection, which is
    /// exponential in the operand count.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_logic::Expr;
    ///
    /// # fn main() -> Result<(), prop_logic::StatementError> {
    /// let a = Expr::parse("p and q or r")?;
    /// let b = Expr::parse("r or q and p")?;
    /// assert!(a.same_shape(&b));
    ///
    /// let c = Expr::parse("not (p or q)")?;
    /// let d = Expr::parse("not p and not q")?;
    /// assert!(!c.same_shape(&d));
    /// assert!(c.equivalent_to(&d));
    /// # Ok(())
    /// # }
    /// ```
    pub fn same_shape(&self, other: &Expr) -> bool {
        if Arc::ptr_eq(&self.node, &other.node) {
            return true;
        }

        if let (Some(a), Some(b)) = (self.as_variable(), other.as_variable()) {
            return a == b;
        }
        let Some(connective) = self.connective() else {
            return false;
        };
        if other.connective() != Some(connective) {
            return false;
        }

        let (left, right) = (self.operands(), other.operands());
        if connective.is_commutative() {
            operands_match(&left, &right)
        } else {
            left.len() == right.len() && left.iter().zip(&right).all(|(l, r)| l.same_shape(r))
        }
    }
}

/// Find a pairing of `left` and `right` operands where every pair has the same shape
fn operands_match(left: &[&Expr], right: &[&Expr]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut taken = vec![false; right.len()];
    match_remaining(left, right, &mut taken)
}

fn match_remaining(left: &[&Expr], right: &[&Expr], taken: &mut [bool]) -> bool {
    let Some((first, rest)) = left.split_first() else {
        return true;
    };

    for (index, candidate) in right.iter().enumerate() {
        if taken[index] || !first.same_shape(candidate) {
            continue;
        }
        taken[index] = true;
        if match_remaining(rest, right, taken) {
            return true;
        }
        taken[index] = false;
    }
    false
}

/// Shape equality
///
/// `==` on expressions is [`Expr::same_shape`], not logical equivalence.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.same_shape(other)
    }
}

impl Eq for Expr {}

#[cfg(test)]
mod tests {
    use crate::Expr;

    fn parse(text: &str) -> Expr {
        Expr::parse(text).unwrap()
    }

    #[test]
    fn test_commutative_operands_match_in_any_order() {
        assert!(parse("a and b and c").same_shape(&parse("c and a and b")));
        assert!(parse("a xor b").same_shape(&parse("b xor a")));
        assert!(parse("a iff b").same_shape(&parse("b iff a")));
    }

    #[test]
    fn test_implication_is_ordered() {
        assert!(!parse("a -> b").same_shape(&parse("b -> a")));
        assert!(parse("a -> b").same_shape(&parse("(a) -> (b)")));
    }

    #[test]
    fn test_operand_count_and_kind_must_agree() {
        assert!(!parse("a and b").same_shape(&parse("a and b and c")));
        assert!(!parse("a and b").same_shape(&parse("a or b")));
        assert!(!parse("a").same_shape(&parse("not a")));
    }

    #[test]
    fn test_repeated_operands_need_a_bijection() {
        // Every operand on the left has a partner on the right, but not one-to-one
        assert!(!parse("a and a and b").same_shape(&parse("a and b and b")));
        assert!(parse("a and b and a").same_shape(&parse("a and a and b")));
    }

    #[test]
    fn test_nested_commutativity() {
        let left = parse("(p or q) and not (r xor s)");
        let right = parse("not (s xor r) and (q or p)");
        assert!(left.same_shape(&right));
        assert!(right.same_shape(&left));
    }

    #[test]
    fn test_reflexive_on_compiled_expressions() {
        for text in ["p", "not p", "p -> q -> r", "(p iff q) iff r", "a and (b or c) xor d"] {
            let expr = parse(text);
            assert!(expr.same_shape(&expr.clone()), "{}", text);
            assert!(expr.same_shape(&parse(text)), "{}", text);
        }
    }
}
