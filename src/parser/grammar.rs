//! Grammar for type signatures
//!
//! Precedence from loosest to tightest: `->` (right associative), labelled
//! and optional parameters, `*` (left associative), postfix constructor
//! application.

use crate::lexer::Token;
use crate::types::TypeExpr;

use super::combinators::{
    BoxedParser, chain_left, expect_arrow, expect_colon, expect_comma, expect_lparen,
    expect_question, expect_rparen, expect_star, expect_tilde, many, optional, sep_by1,
};
use super::state::{ParseError, ParseResult, ParseState, Parser};

/// Parse an identifier (possibly module-qualified) and return its name
pub fn ident() -> BoxedParser<String> {
    BoxedParser::new(|state: &mut ParseState| {
        if let Some(Token::Ident(_)) = state.peek() {
            return match state.advance() {
                Some(Token::Ident(id)) => Ok(id.value),
                _ => unreachable!(),
            };
        }
        let err = match state.peek() {
            Some(tok) => ParseError::new("unexpected token")
                .expected("identifier")
                .found(tok.describe())
                .at(tok.pos()),
            None => ParseError::new("unexpected end of input").expected("identifier"),
        };
        state.record_error(err.clone());
        Err(err)
    })
}

/// Parse a type variable and return its name without the leading quote
pub fn var() -> BoxedParser<String> {
    BoxedParser::new(|state: &mut ParseState| {
        if let Some(Token::Var(_)) = state.peek() {
            return match state.advance() {
                Some(Token::Var(v)) => Ok(v.value.trim_start_matches('\'').to_string()),
                _ => unreachable!(),
            };
        }
        let err = match state.peek() {
            Some(tok) => ParseError::new("unexpected token")
                .expected("type variable")
                .found(tok.describe())
                .at(tok.pos()),
            None => ParseError::new("unexpected end of input").expected("type variable"),
        };
        state.record_error(err.clone());
        Err(err)
    })
}

/// paren := "(" type ("," type)* ")" [ident]
///
/// A single parenthesized type is just grouping. A comma-separated list
/// must be followed by the constructor it is applied to.
fn paren() -> BoxedParser<TypeExpr> {
    BoxedParser::new(|state: &mut ParseState| {
        let mut elements =
            (expect_lparen() * sep_by1(type_expr(), expect_comma()) - expect_rparen()).parse(state)?;

        if elements.len() == 1 {
            return Ok(elements.remove(0));
        }
        let name = ident().label("type constructor").parse(state)?;
        Ok(TypeExpr::app(TypeExpr::TypeList(elements), name))
    })
}

/// atom := var | ident | paren
fn atom() -> BoxedParser<TypeExpr> {
    let var_expr = var() >> TypeExpr::Var;
    let ident_expr = ident() >> TypeExpr::Ident;
    (var_expr | ident_expr | paren()).label("type")
}

/// app := atom ident*
fn app() -> BoxedParser<TypeExpr> {
    (atom() + many(ident()))
        >> |(head, constructors): (TypeExpr, Vec<String>)| {
            constructors.into_iter().fold(head, TypeExpr::app)
        }
}

/// product := app ("*" app)*
fn product() -> BoxedParser<TypeExpr> {
    chain_left(app(), expect_star(), TypeExpr::product)
}

/// label := ident ":"
fn label() -> BoxedParser<String> {
    ident() - expect_colon()
}

/// domain := "?" label product | "~" label product | label product | product
fn domain() -> BoxedParser<TypeExpr> {
    let optional_param = (expect_question() * label() * product()) >> TypeExpr::optional;
    let tilde_labelled = expect_tilde() * label() * product();
    let labelled = label() * product();
    optional_param | tilde_labelled | labelled | product()
}

/// type := domain ("->" type)?
///
/// Every nested `type` counts against the state's nesting limit.
pub fn type_expr() -> BoxedParser<TypeExpr> {
    BoxedParser::new(|state: &mut ParseState| {
        state.enter()?;
        let result = arrow(state);
        state.leave();
        result
    })
}

fn arrow(state: &mut ParseState) -> ParseResult<TypeExpr> {
    let domain = domain().parse(state)?;
    match optional(expect_arrow() * type_expr()).parse(state)? {
        Some(codomain) => Ok(TypeExpr::arrow(domain, codomain)),
        None => Ok(domain),
    }
}

/// Parse a complete signature from the token stream.
///
/// Trailing tokens are an error: the furthest recorded failure is reported
/// since it usually names what the parser was looking for.
pub fn parse(state: &mut ParseState) -> Result<TypeExpr, ParseError> {
    match type_expr().parse(state) {
        Ok(_) if state.has_next() => Err(state
            .furthest_error()
            .cloned()
            .unwrap_or_else(|| state.error_here("unexpected token"))),
        Ok(ty) => Ok(ty),
        Err(err) => Err(state.furthest_error().cloned().unwrap_or(err)),
    }
}
