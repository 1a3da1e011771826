//! Read-only views of the expression tree and fold operations

use super::{Expr, Node};

/// Borrowed view of the root node of an [`Expr`]
///
/// Returned by [`Expr::kind`] for pattern matching without exposing the
/// internal `Arc` representation. N-ary operands always number at least two and
/// never include a node of the same kind.
#[derive(Debug, Clone, Copy)]
pub enum ExprKind<'a> {
    /// A variable with the given name
    Variable(&'a str),
    /// Negation of a non-negation
    Negation(&'a Expr),
    /// Conjunction of two or more operands
    Conjunction(&'a [Expr]),
    /// Disjunction of two or more operands
    Disjunction(&'a [Expr]),
    /// Exclusive disjunction of two or more operands
    XDisjunction(&'a [Expr]),
    /// Implication `left -> right`
    Implication(&'a Expr, &'a Expr),
    /// Biconditional `left iff right`
    Biconditional(&'a Expr, &'a Expr),
}

/// Node type for expression tree folding
///
/// Used with [`Expr::fold`]: `T` is the accumulated result of the child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// Logical NOT with the result from the inner subtree
    Not(T),
    /// Logical AND with the results of every operand
    And(Vec<T>),
    /// Logical OR with the results of every operand
    Or(Vec<T>),
    /// Exclusive OR with the results of every operand
    Xor(Vec<T>),
    /// Implication with results from left and right subtrees
    Implies(T, T),
    /// Biconditional with results from left and right subtrees
    Iff(T, T),
}

impl Expr {
    /// Borrow the root node for pattern matching
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_logic::{Expr, ExprKind};
    ///
    /// # fn main() -> Result<(), prop_logic::StatementError> {
    /// let expr = Expr::parse("a and b and c")?;
    /// match expr.kind() {
    ///     ExprKind::Conjunction(operands) => assert_eq!(operands.len(), 3),
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn kind(&self) -> ExprKind<'_> {
        match self.node.as_ref() {
            Node::Variable(name) => ExprKind::Variable(name),
            Node::Negation(inner) => ExprKind::Negation(inner),
            Node::Conjunction(operands) => ExprKind::Conjunction(operands),
            Node::Disjunction(operands) => ExprKind::Disjunction(operands),
            Node::XDisjunction(operands) => ExprKind::XDisjunction(operands),
            Node::Implication(left, right) => ExprKind::Implication(left, right),
            Node::Biconditional(left, right) => ExprKind::Biconditional(left, right),
        }
    }

    /// Direct children of the root node, left to right
    pub fn operands(&self) -> Vec<&Expr> {
        match self.kind() {
            ExprKind::Variable(_) => Vec::new(),
            ExprKind::Negation(inner) => vec![inner],
            ExprKind::Conjunction(operands)
            | ExprKind::Disjunction(operands)
            | ExprKind::XDisjunction(operands) => operands.iter().collect(),
            ExprKind::Implication(left, right) | ExprKind::Biconditional(left, right) => {
                vec![left, right]
            }
        }
    }

    /// Fold the expression tree depth-first from leaves to root
    ///
    /// The function receives an [`ExprNode`] holding the results already
    /// computed for the node's children.
    ///
    /// # Examples
    ///
    /// Count the connectives in an expression:
    ///
    /// ```
    /// use prop_logic::{Expr, ExprNode};
    ///
    /// # fn main() -> Result<(), prop_logic::StatementError> {
    /// let expr = Expr::parse("a and b and not c")?;
    ///
    /// let op_count = expr.fold(|node| match node {
    ///     ExprNode::Variable(_) => 0,
    ///     ExprNode::Not(inner) => inner + 1,
    ///     ExprNode::And(ops) | ExprNode::Or(ops) | ExprNode::Xor(ops) => {
    ///         ops.into_iter().sum::<usize>() + 1
    ///     }
    ///     ExprNode::Implies(l, r) | ExprNode::Iff(l, r) => l + r + 1,
    /// });
    ///
    /// assert_eq!(op_count, 2); // one flattened AND, one NOT
    /// # Ok(())
    /// # }
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T + Copy,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        let fold_all = |operands: &[Expr]| -> Vec<T> {
            operands.iter().map(|operand| operand.fold_impl(f)).collect()
        };

        match self.node.as_ref() {
            Node::Variable(name) => f(ExprNode::Variable(name)),
            Node::Negation(inner) => {
                let inner_result = inner.fold_impl(f);
                f(ExprNode::Not(inner_result))
            }
            Node::Conjunction(operands) => f(ExprNode::And(fold_all(operands))),
            Node::Disjunction(operands) => f(ExprNode::Or(fold_all(operands))),
            Node::XDisjunction(operands) => f(ExprNode::Xor(fold_all(operands))),
            Node::Implication(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Implies(left_result, right_result))
            }
            Node::Biconditional(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Iff(left_result, right_result))
            }
        }
    }
}
