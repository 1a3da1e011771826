//! Canonical expression model for propositional statements
//!
//! An [`Expr`] is an immutable tree built either by the statement compiler
//! ([`crate::parse_statement`]), by the method API, by operator overloading or by
//! the [`prop!`](crate::prop) macro. Every construction path goes through the same
//! constructors, so every tree is in canonical form:
//!
//! - no double negation: `not not p` is stored as `p`
//! - no same-kind nesting of associative connectives: `(a and b) and c` is stored
//!   as a single conjunction with three operands
//!
//! # Quick Start
//!
//! ```
//! use prop_logic::{prop, Expr};
//!
//! # fn main() -> Result<(), prop_logic::StatementError> {
//! let p = Expr::variable("p");
//! let q = Expr::variable("q");
//!
//! // Method API
//! let implication = p.implies(&q);
//!
//! // Operator overloading
//! let disjunction = &!&p | &q;
//!
//! // Macro
//! let contrapositive = prop!(!q -> !p);
//!
//! // Parsing
//! let parsed = Expr::parse("p -> q")?;
//!
//! assert!(parsed.same_shape(&implication));
//! assert!(!implication.same_shape(&disjunction));
//! assert!(implication.equivalent_to(&contrapositive));
//! # Ok(())
//! # }
//! ```
//!
//! # Two kinds of equality
//!
//! [`Expr::same_shape`] (also used by `==`) compares tree structure up to operand
//! order of commutative connectives. [`Expr::equivalent_to`] compares the boolean
//! function by enumerating every assignment. `p -> q` and `not p or q` are
//! equivalent but do not have the same shape.

// Submodules
mod ast;
mod connective;
mod display;
mod eval;
mod operators;
mod shape;

pub use ast::{ExprKind, ExprNode};
pub use connective::Connective;
pub use eval::{Assignment, Truth};

use std::sync::Arc;

/// A propositional expression in canonical form
///
/// Uses `Arc` internally for cheap cloning; sub-expressions are shared, never
/// copied. Once built an expression is never mutated, so it can be sent to and
/// evaluated from any number of threads.
#[derive(Clone)]
pub struct Expr {
    node: Arc<Node>,
}

/// Internal node representation
#[derive(Debug)]
pub(crate) enum Node {
    Variable(Arc<str>),
    Negation(Expr),
    Conjunction(Vec<Expr>),
    Disjunction(Vec<Expr>),
    XDisjunction(Vec<Expr>),
    Implication(Expr, Expr),
    Biconditional(Expr, Expr),
}

/// Collect the operands of a new `connective` node, splicing in either side
/// that is already a node of the same associative kind.
fn flatten(connective: Connective, left: &Expr, right: &Expr) -> Vec<Expr> {
    let mut operands = Vec::new();
    for side in [left, right] {
        if connective.is_associative() && side.connective() == Some(connective) {
            operands.extend(side.operands().into_iter().cloned());
        } else {
            operands.push(side.clone());
        }
    }
    operands
}

impl Expr {
    fn from_node(node: Node) -> Self {
        Expr {
            node: Arc::new(node),
        }
    }

    /// Create a variable expression with the given name
    ///
    /// The name is taken as-is. Statements read through [`Expr::parse`] only ever
    /// contain names matching `[A-Za-z_][A-Za-z0-9_]*` that are not operator
    /// keywords; use [`is_valid_name`] to apply the same rule to programmatic names.
    pub fn variable(name: &str) -> Self {
        Self::from_node(Node::Variable(Arc::from(name)))
    }

    /// Logical NOT; negating a negation returns the inner expression
    pub fn not(&self) -> Self {
        match self.node.as_ref() {
            Node::Negation(inner) => inner.clone(),
            _ => Self::from_node(Node::Negation(self.clone())),
        }
    }

    /// Logical AND, flattened into an existing conjunction on either side
    pub fn and(&self, other: &Expr) -> Self {
        Self::from_node(Node::Conjunction(flatten(Connective::And, self, other)))
    }

    /// Logical OR, flattened into an existing disjunction on either side
    pub fn or(&self, other: &Expr) -> Self {
        Self::from_node(Node::Disjunction(flatten(Connective::Or, self, other)))
    }

    /// Exclusive OR, flattened into an existing exclusive disjunction on either side
    pub fn xor(&self, other: &Expr) -> Self {
        Self::from_node(Node::XDisjunction(flatten(Connective::Xor, self, other)))
    }

    /// Material implication `self -> other`
    pub fn implies(&self, other: &Expr) -> Self {
        Self::from_node(Node::Implication(self.clone(), other.clone()))
    }

    /// Biconditional `self iff other` (binary, never flattened)
    pub fn iff(&self, other: &Expr) -> Self {
        Self::from_node(Node::Biconditional(self.clone(), other.clone()))
    }

    /// The connective at the root, or `None` for a variable
    pub fn connective(&self) -> Option<Connective> {
        match self.node.as_ref() {
            Node::Variable(_) => None,
            Node::Negation(_) => Some(Connective::Not),
            Node::Conjunction(_) => Some(Connective::And),
            Node::Disjunction(_) => Some(Connective::Or),
            Node::XDisjunction(_) => Some(Connective::Xor),
            Node::Implication(_, _) => Some(Connective::Implies),
            Node::Biconditional(_, _) => Some(Connective::Iff),
        }
    }

    /// The variable name if this expression is a single variable
    pub fn as_variable(&self) -> Option<&str> {
        match self.node.as_ref() {
            Node::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this expression is a single variable
    pub fn is_variable(&self) -> bool {
        self.as_variable().is_some()
    }

    /// Free variable names, deduplicated, in order of first occurrence
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_logic::Expr;
    ///
    /// # fn main() -> Result<(), prop_logic::StatementError> {
    /// let expr = Expr::parse("(q or p) and not q")?;
    /// let vars = expr.variables();
    /// let names: Vec<&str> = vars.iter().map(|v| v.as_ref()).collect();
    /// assert_eq!(names, ["q", "p"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn variables(&self) -> Vec<Arc<str>> {
        self.fold(|node| match node {
            ExprNode::Variable(name) => vec![Arc::from(name)],
            ExprNode::Not(inner) => inner,
            ExprNode::And(operands) | ExprNode::Or(operands) | ExprNode::Xor(operands) => {
                merge_variables(operands)
            }
            ExprNode::Implies(left, right) | ExprNode::Iff(left, right) => {
                merge_variables(vec![left, right])
            }
        })
    }

    /// Free variable names in ascending lexicographic order
    pub fn sorted_variables(&self) -> Vec<Arc<str>> {
        let mut variables = self.variables();
        variables.sort();
        variables
    }

    /// Every sub-expression including `self`, in post-order
    ///
    /// Variables are included and repeated sub-expressions appear once per
    /// occurrence. See [`Expr::constituents`] for the deduplicated list.
    pub fn sentences(&self) -> Vec<Expr> {
        let mut sentences = Vec::new();
        self.collect_sentences(&mut sentences);
        sentences
    }

    fn collect_sentences(&self, out: &mut Vec<Expr>) {
        match self.node.as_ref() {
            Node::Variable(_) => {}
            Node::Negation(inner) => inner.collect_sentences(out),
            Node::Conjunction(operands)
            | Node::Disjunction(operands)
            | Node::XDisjunction(operands) => {
                for operand in operands {
                    operand.collect_sentences(out);
                }
            }
            Node::Implication(left, right) | Node::Biconditional(left, right) => {
                left.collect_sentences(out);
                right.collect_sentences(out);
            }
        }
        out.push(self.clone());
    }

    /// Sub-expressions in post-order with later shape duplicates removed
    ///
    /// These are the truth table's candidate columns: `p and q or q and p`
    /// yields `p`, `q`, `p ∧ q` and the whole statement, because `q ∧ p` has the
    /// same shape as `p ∧ q`.
    pub fn constituents(&self) -> Vec<Expr> {
        let mut distinct: Vec<Expr> = Vec::new();
        for sentence in self.sentences() {
            if !distinct.iter().any(|seen| seen.same_shape(&sentence)) {
                distinct.push(sentence);
            }
        }
        distinct
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        self.fold(|node| match node {
            ExprNode::Variable(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::And(operands) | ExprNode::Or(operands) | ExprNode::Xor(operands) => {
                operands.into_iter().sum::<usize>() + 1
            }
            ExprNode::Implies(left, right) | ExprNode::Iff(left, right) => left + right + 1,
        })
    }
}

fn merge_variables(groups: Vec<Vec<Arc<str>>>) -> Vec<Arc<str>> {
    let mut merged: Vec<Arc<str>> = Vec::new();
    for name in groups.into_iter().flatten() {
        if !merged.contains(&name) {
            merged.push(name);
        }
    }
    merged
}

/// Check a variable name against the identifier rules of the statement parser
///
/// Names start with an ASCII letter or underscore, continue with ASCII letters,
/// digits or underscores, and must not be an operator keyword.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !Connective::is_keyword(name)
}
