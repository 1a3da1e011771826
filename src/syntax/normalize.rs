//! Notation normalizer: rewrites every operator spelling to one keyword
//!
//! The substitutions run in a fixed order so that multi-character glyphs are
//! claimed before a shorter pattern can eat part of them: `<->` must become
//! `iff` before the implication pattern sees `->`, and `^` must become `xor`
//! before the disjunction patterns run.

use crate::expression::{is_valid_name, Connective};
use log::trace;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Operator spellings, in the order they are substituted
const SPELLINGS: [(Connective, &str); 6] = [
    (Connective::Not, r"∼|¬|~|!|\b(?:NOT|not)\b"),
    (Connective::And, r"[&*∧⋅]+|\b(?:AND|and)\b"),
    (Connective::Iff, r"<-+>|<=+>|⇔|⟷|↔|⟺|\b(?:IFF|iff)\b"),
    (Connective::Implies, r"-+>|=+>|⟹|⟶|→|⇒|\bto\b"),
    (Connective::Xor, r"[\^⊻⊕⨁]+|\b(?:XOR|xor)\b"),
    (Connective::Or, r"[|+∨]+|\b(?:OR|or)\b"),
];

struct Patterns {
    spellings: Vec<(Regex, String)>,
    whitespace: Regex,
    after_open: Regex,
    before_close: Regex,
    redundant_group: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        // Patterns are compile-time constants; a failure here is a typo in this file
        let compile = |pattern: &str| match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(e) => panic!("invalid normalizer pattern {:?}: {}", pattern, e),
        };
        Patterns {
            spellings: SPELLINGS
                .iter()
                .map(|(connective, pattern)| {
                    (compile(pattern), format!(" {} ", connective.keyword()))
                })
                .collect(),
            whitespace: compile(r"\s+"),
            after_open: compile(r"\(\s+"),
            before_close: compile(r"\s+\)"),
            redundant_group: compile(r"\(((?:not )*[A-Za-z0-9_]+)\)"),
        }
    })
}

/// Collapse whitespace runs and remove padding inside parentheses
fn tidy(text: &str) -> String {
    let p = patterns();
    let text = p.whitespace.replace_all(text, " ");
    let text = p.after_open.replace_all(&text, "(");
    let text = p.before_close.replace_all(&text, ")");
    text.trim().to_string()
}

/// Unwrap a `(name)` or `(not ... name)` group, leaving groups that end in an
/// operator keyword for the parser to reject
fn unwrap_group(caps: &Captures) -> String {
    let inner = &caps[1];
    let last = inner.rsplit(' ').next().unwrap_or(inner);
    if is_valid_name(last) {
        format!(" {} ", inner)
    } else {
        caps[0].to_string()
    }
}

/// Rewrite a statement so every operator uses its canonical keyword
///
/// Recognised spellings:
///
/// | Connective | Spellings |
/// |---|---|
/// | not | `~` `!` `¬` `∼` `not` `NOT` |
/// | and | `&` `*` `∧` `⋅` `and` `AND` |
/// | iff | `<->` `<=>` `⇔` `⟷` `↔` `⟺` `iff` `IFF` |
/// | -> | `->` `=>` `⟹` `⟶` `→` `⇒` `to` |
/// | xor | `^` `⊻` `⊕` `⨁` `xor` `XOR` |
/// | or | `\|` `+` `∨` `or` `OR` |
///
/// Whitespace is collapsed and parentheses around a single variable (or a
/// chain of `not`s applied to one) are removed until none are left. A group
/// holding only keywords, such as `(and)` or `(not not)`, is kept.
/// Parentheses are otherwise left alone, so unbalanced input stays unbalanced
/// and is reported by the parser.
///
/// Normalizing an already normalized statement returns it unchanged.
///
/// # Examples
///
/// ```
/// use prop_logic::syntax::normalize;
///
/// assert_eq!(normalize("~(p&q) <-> (!p)+(¬q)"), "not (p and q) iff not p or not q");
/// assert_eq!(normalize("a ⊕ b → c"), "a xor b -> c");
/// ```
pub fn normalize(statement: &str) -> String {
    let p = patterns();

    let mut text = p.whitespace.replace_all(statement, " ").into_owned();
    for (regex, keyword) in &p.spellings {
        text = regex.replace_all(&text, keyword.as_str()).into_owned();
    }
    text = tidy(&text);

    loop {
        let stripped = tidy(&p.redundant_group.replace_all(&text, unwrap_group));
        if stripped == text {
            break;
        }
        text = stripped;
    }

    trace!("normalized {:?} to {:?}", statement, text);
    text
}
