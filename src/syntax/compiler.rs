//! Lowering of validated syntax trees into canonical expressions

use super::parser::SyntaxTree;
use crate::expression::{Connective, Expr};

/// Result of compiling a statement
///
/// `constituents` lists every distinct sub-expression of `expr` in post-order
/// (children before parents), variables included, with the root last.
/// Sub-expressions that occur more than once (up to shape) appear once, at
/// their first position.
#[derive(Debug, Clone)]
pub struct Compiled {
    /// The canonical expression
    pub expr: Expr,
    /// Distinct sub-expressions, root last
    pub constituents: Vec<Expr>,
}

/// Compile a validated syntax tree into canonical form
///
/// Children are compiled before their parent is built, so the parent's
/// constructor sees already simplified operands: double negations collapse and
/// nested `and`/`or`/`xor` chains are spliced into one n-ary node.
pub fn compile(tree: &SyntaxTree) -> Compiled {
    let expr = lower(tree);
    let constituents = expr.constituents();
    Compiled { expr, constituents }
}

fn lower(tree: &SyntaxTree) -> Expr {
    match tree {
        SyntaxTree::Name(name) => Expr::variable(name),
        SyntaxTree::Not(operand) => lower(operand).not(),
        SyntaxTree::Binary {
            connective,
            left,
            right,
        } => {
            let left = lower(left);
            let right = lower(right);
            match connective {
                Connective::And => left.and(&right),
                Connective::Or => left.or(&right),
                Connective::Xor => left.xor(&right),
                Connective::Implies => left.implies(&right),
                Connective::Iff => left.iff(&right),
                // `not` is unary and never appears in a binary node
                Connective::Not => right.not(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::ExprKind;
    use crate::syntax::{normalize, RawTree};

    fn compile_text(text: &str) -> Compiled {
        let raw = RawTree::parse(&normalize(text)).unwrap();
        compile(&SyntaxTree::check(&raw).unwrap())
    }

    #[test]
    fn test_double_negation_collapses() {
        let compiled = compile_text("~~p");
        assert_eq!(compiled.expr.as_variable(), Some("p"));
        assert_eq!(compiled.constituents.len(), 1);

        let compiled = compile_text("~~~p");
        assert!(matches!(compiled.expr.kind(), ExprKind::Negation(_)));
    }

    #[test]
    fn test_right_grouped_chain_is_flattened() {
        let compiled = compile_text("a and b and c and d");
        match compiled.expr.kind() {
            ExprKind::Conjunction(operands) => assert_eq!(operands.len(), 4),
            other => panic!("expected conjunction, got {:?}", other),
        }
    }

    #[test]
    fn test_parenthesised_groups_are_flattened() {
        let compiled = compile_text("(a or b) or (c or d)");
        match compiled.expr.kind() {
            ExprKind::Disjunction(operands) => assert_eq!(operands.len(), 4),
            other => panic!("expected disjunction, got {:?}", other),
        }
    }

    #[test]
    fn test_implication_is_not_flattened() {
        let compiled = compile_text("p -> q -> r");
        match compiled.expr.kind() {
            ExprKind::Implication(left, right) => {
                assert_eq!(left.as_variable(), Some("p"));
                assert!(matches!(right.kind(), ExprKind::Implication(_, _)));
            }
            other => panic!("expected implication, got {:?}", other),
        }
    }

    #[test]
    fn test_constituents_post_order_without_duplicates() {
        let compiled = compile_text("(p and q) or (q and p)");
        let rendered: Vec<String> = compiled
            .constituents
            .iter()
            .map(|expr| format!("{:#}", expr))
            .collect();
        assert_eq!(
            rendered,
            vec!["p", "q", "p and q", "p and q or q and p"]
        );
        assert!(compiled
            .constituents
            .last()
            .is_some_and(|root| root.same_shape(&compiled.expr)));
    }
}
