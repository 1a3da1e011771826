//! The six logical connectives and their fixed properties

use std::fmt;

/// A logical connective recognised by the statement parser
///
/// Binding strength, from loosest to tightest:
/// `iff` < `->` < `xor` < `or` < `and` < `not`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// Negation (`not`, `¬`)
    Not,
    /// Conjunction (`and`, `∧`)
    And,
    /// Disjunction (`or`, `∨`)
    Or,
    /// Exclusive disjunction (`xor`, `⊻`)
    Xor,
    /// Material implication (`->`, `→`)
    Implies,
    /// Biconditional (`iff`, `↔`)
    Iff,
}

impl Connective {
    /// Binary connectives ordered from loosest to tightest binding.
    ///
    /// The parser splits a group at the first connective of this list it finds.
    pub const BINARY_BY_PRECEDENCE: [Connective; 5] = [
        Connective::Iff,
        Connective::Implies,
        Connective::Xor,
        Connective::Or,
        Connective::And,
    ];

    /// All connectives
    pub const ALL: [Connective; 6] = [
        Connective::Not,
        Connective::And,
        Connective::Or,
        Connective::Xor,
        Connective::Implies,
        Connective::Iff,
    ];

    /// Canonical keyword produced by the notation normalizer
    pub fn keyword(self) -> &'static str {
        match self {
            Connective::Not => "not",
            Connective::And => "and",
            Connective::Or => "or",
            Connective::Xor => "xor",
            Connective::Implies => "->",
            Connective::Iff => "iff",
        }
    }

    /// Display glyph used when rendering expressions
    pub fn symbol(self) -> &'static str {
        match self {
            Connective::Not => "\u{00ac}",
            Connective::And => "\u{2227}",
            Connective::Or => "\u{2228}",
            Connective::Xor => "\u{22bb}",
            Connective::Implies => "\u{2192}",
            Connective::Iff => "\u{2194}",
        }
    }

    /// Look up a connective by its canonical keyword
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.keyword() == word)
    }

    /// Returns true if `word` is one of the reserved operator keywords
    pub fn is_keyword(word: &str) -> bool {
        Self::from_keyword(word).is_some()
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Connective::Iff => 1,
            Connective::Implies => 2,
            Connective::Xor => 3,
            Connective::Or => 4,
            Connective::And => 5,
            Connective::Not => 6,
        }
    }

    /// Operand order does not matter
    pub fn is_commutative(self) -> bool {
        matches!(
            self,
            Connective::And | Connective::Or | Connective::Xor | Connective::Iff
        )
    }

    /// Nested uses flatten into one n-ary node.
    ///
    /// `iff` is commutative but kept strictly binary.
    pub fn is_associative(self) -> bool {
        matches!(self, Connective::And | Connective::Or | Connective::Xor)
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.keyword())
        } else {
            f.write_str(self.symbol())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for connective in Connective::ALL {
            assert_eq!(Connective::from_keyword(connective.keyword()), Some(connective));
        }
        assert_eq!(Connective::from_keyword("AND"), None);
        assert_eq!(Connective::from_keyword("p"), None);
    }

    #[test]
    fn test_precedence_order() {
        let precedences: Vec<u8> = Connective::BINARY_BY_PRECEDENCE
            .iter()
            .map(|c| c.precedence())
            .collect();
        assert!(precedences.windows(2).all(|w| w[0] < w[1]));
        assert!(Connective::Not.precedence() > Connective::And.precedence());
    }

    #[test]
    fn test_iff_is_not_flattened() {
        assert!(Connective::Iff.is_commutative());
        assert!(!Connective::Iff.is_associative());
        assert!(!Connective::Implies.is_commutative());
    }
}
