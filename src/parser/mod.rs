mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::{MAX_NESTING_DEPTH, ParseError, ParseResult, ParseState, Parser};

use crate::lexer::Token;
use crate::types::{SyntaxError, TypeExpr};

/// Lex and parse signature text into a type expression.
pub fn parse_type(text: &str) -> Result<TypeExpr, SyntaxError> {
    let tokens = Token::lex(text).map_err(|err| SyntaxError::Lex(err.to_string()))?;
    let mut state = ParseState::new(tokens);
    Ok(parse(&mut state)?)
}
