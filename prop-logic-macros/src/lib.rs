use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// AST for propositional expressions
enum Ast {
    Variable(Ident),
    StringLiteral(syn::LitStr),
    Not(Box<Ast>),
    And(Box<Ast>, Box<Ast>),
    Or(Box<Ast>, Box<Ast>),
    Xor(Box<Ast>, Box<Ast>),
    Implies(Box<Ast>, Box<Ast>),
    Iff(Box<Ast>, Box<Ast>),
}

impl Ast {
    /// Generate code for this expression using references
    ///
    /// Identifiers are only ever borrowed, so `Expr` values in scope stay usable
    /// after the macro call.
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        let binary = |method: &str, left: &Ast, right: &Ast| {
            let method = Ident::new(method, proc_macro2::Span::call_site());
            let left_tokens = left.to_tokens();
            let right_tokens = right.to_tokens();
            quote! {
                (&(#left_tokens)).#method(&(#right_tokens))
            }
        };

        match self {
            Ast::Variable(ident) => quote! {
                #ident
            },
            Ast::StringLiteral(lit) => quote! {
                Expr::variable(#lit)
            },
            Ast::Not(inner) => {
                let inner_tokens = inner.to_tokens();
                quote! {
                    (&(#inner_tokens)).not()
                }
            }
            Ast::And(left, right) => binary("and", left, right),
            Ast::Or(left, right) => binary("or", left, right),
            Ast::Xor(left, right) => binary("xor", left, right),
            Ast::Implies(left, right) => binary("implies", left, right),
            Ast::Iff(left, right) => binary("iff", left, right),
        }
    }
}

/// Parser for propositional expressions with operator precedence
struct PropParser {
    ast: Ast,
}

impl Parse for PropParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let ast = parse_iff(input)?;
        Ok(PropParser { ast })
    }
}

/// True if the input continues with `<->`
fn peek_iff(input: ParseStream) -> bool {
    let ahead = input.fork();
    ahead.parse::<Token![<-]>().is_ok() && ahead.peek(Token![>])
}

/// Parse biconditionals (lowest precedence, grouping to the right)
fn parse_iff(input: ParseStream) -> Result<Ast> {
    let left = parse_implies(input)?;

    if peek_iff(input) {
        input.parse::<Token![<-]>()?;
        input.parse::<Token![>]>()?;
        let right = parse_iff(input)?;
        return Ok(Ast::Iff(Box::new(left), Box::new(right)));
    }

    Ok(left)
}

/// Parse implications (grouping to the right)
fn parse_implies(input: ParseStream) -> Result<Ast> {
    let left = parse_xor(input)?;

    if input.peek(Token![->]) {
        input.parse::<Token![->]>()?;
        let right = parse_implies(input)?;
        return Ok(Ast::Implies(Box::new(left), Box::new(right)));
    }

    Ok(left)
}

/// Parse XOR expressions
fn parse_xor(input: ParseStream) -> Result<Ast> {
    let mut left = parse_or(input)?;

    while input.peek(Token![^]) {
        input.parse::<Token![^]>()?;
        let right = parse_or(input)?;
        left = Ast::Xor(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse OR expressions
fn parse_or(input: ParseStream) -> Result<Ast> {
    let mut left = parse_and(input)?;

    while input.peek(Token![+]) || input.peek(Token![|]) {
        if input.peek(Token![+]) {
            input.parse::<Token![+]>()?;
        } else {
            input.parse::<Token![|]>()?;
        }
        let right = parse_and(input)?;
        left = Ast::Or(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse AND expressions
fn parse_and(input: ParseStream) -> Result<Ast> {
    let mut left = parse_unary(input)?;

    while input.peek(Token![*]) || input.peek(Token![&]) {
        if input.peek(Token![*]) {
            input.parse::<Token![*]>()?;
        } else {
            input.parse::<Token![&]>()?;
        }
        let right = parse_unary(input)?;
        left = Ast::And(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse unary expressions (NOT) and atoms (highest precedence)
fn parse_unary(input: ParseStream) -> Result<Ast> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let inner = parse_unary(input)?;
        Ok(Ast::Not(Box::new(inner)))
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        let inner = parse_unary(input)?;
        Ok(Ast::Not(Box::new(inner)))
    } else {
        parse_atom(input)
    }
}

/// Parse atoms: identifiers, string literals and parenthesized expressions
fn parse_atom(input: ParseStream) -> Result<Ast> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        parse_iff(&content)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        Ok(Ast::StringLiteral(lit))
    } else if input.peek(Ident) {
        let ident: Ident = input.parse()?;
        Ok(Ast::Variable(ident))
    } else {
        Err(input.error("expected an `Expr` identifier, a string literal or `(`"))
    }
}

/// The `prop!` procedural macro for propositional expressions
///
/// Builds an `Expr` at compile time from `Expr` values in scope and string
/// literals, with the same precedence as the statement parser.
///
/// # Supported Syntax
///
/// - `p` - any `Expr` identifier in scope (borrowed, not moved)
/// - `"p"` - string literal (creates `Expr::variable("p")`; `Expr` must be in scope)
/// - `!p` or `~p` - negation
/// - `p & q` or `p * q` - conjunction
/// - `p | q` or `p + q` - disjunction
/// - `p ^ q` - exclusive disjunction
/// - `p -> q` - implication
/// - `p <-> q` - biconditional
/// - `(p | q) & r` - parentheses for grouping
///
/// # Operator Precedence
///
/// From tightest to loosest:
/// 1. `( )`
/// 2. `!` / `~`
/// 3. `&` / `*`
/// 4. `|` / `+`
/// 5. `^`
/// 6. `->` (groups to the right)
/// 7. `<->` (groups to the right)
///
/// # Examples
///
/// ```ignore
/// use prop_logic::{prop, Expr};
///
/// let p = Expr::variable("p");
/// let q = Expr::variable("q");
///
/// let contrapositive = prop!((p -> q) <-> (!q -> !p));
/// assert!(contrapositive.is_tautology());
///
/// // String literals create variables
/// let parity = prop!("a" ^ "b" ^ "c");
///
/// // Sub-expressions compose
/// let both = prop!(contrapositive & parity);
/// ```
#[proc_macro]
pub fn prop(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as PropParser);
    let tokens = parser.ast.to_tokens();
    TokenStream::from(tokens)
}
