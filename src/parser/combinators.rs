use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use crate::lexer::Token;

use super::state::{ParseError, ParseResult, ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

/// Type-erased, cheaply clonable parser.
pub struct BoxedParser<T> {
    run: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.run)(state)
    }
}

/// Run `parser`, rewinding the state if it fails.
fn attempt<T>(parser: &BoxedParser<T>, state: &mut ParseState) -> Option<T> {
    let start = state.position();
    match parser.parse(state) {
        Ok(value) => Some(value),
        Err(_) => {
            state.restore(start);
            None
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        Self {
            run: Rc::new(move |state| parser.parse(state)),
        }
    }

    /// `self` followed by `next`, keeping both results.
    pub fn then<U: 'static>(self, next: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |state: &mut ParseState| {
            let first = self.parse(state)?;
            Ok((first, next.parse(state)?))
        })
    }

    /// `self` followed by `next`, keeping only `self`'s result.
    pub fn then_skip<U: 'static>(self, next: BoxedParser<U>) -> BoxedParser<T> {
        (self + next) >> |(kept, _): (T, U)| kept
    }

    /// `self` followed by `next`, keeping only `next`'s result.
    pub fn skip_then<U: 'static>(self, next: BoxedParser<U>) -> BoxedParser<U> {
        (self + next) >> |(_, kept): (T, U)| kept
    }

    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| self.parse(state).map(&f))
    }

    /// Ordered choice. `other` starts from where `self` started; `self`'s
    /// failure stays recorded in the state.
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| match attempt(&self, state) {
            Some(value) => Ok(value),
            None => other.parse(state),
        })
    }

    /// Report a failure of this parser as "expected `name`" at the position
    /// where it started.
    pub fn label(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let start = state.position();
            self.parse(state).map_err(|mut err| {
                err.expected = vec![name.to_string()];
                state.restore(start);
                state.record_error(err.clone());
                err
            })
        })
    }
}

/// `a + b` parses `a` then `b` and yields both.
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.then(rhs)
    }
}

/// `a - b` parses `a` then `b` and yields `a`.
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.then_skip(rhs)
    }
}

/// `a * b` parses `a` then `b` and yields `b`.
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_then(rhs)
    }
}

/// `a | b` tries `a`, then `b`.
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `a >> f` maps the result of `a` through `f`.
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

/// Zero or more repetitions.
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut items = Vec::new();
        while let Some(item) = attempt(&parser, state) {
            items.push(item);
        }
        Ok(items)
    })
}

/// Zero or one occurrence.
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |state: &mut ParseState| Ok(attempt(&parser, state)))
}

/// One or more `item`s separated by `separator`.
pub fn sep_by1<T: 'static, S: 'static>(
    item: BoxedParser<T>,
    separator: BoxedParser<S>,
) -> BoxedParser<Vec<T>> {
    (item.clone() + many(separator * item)) >> |(first, rest): (T, Vec<T>)| {
        let mut items = Vec::with_capacity(rest.len() + 1);
        items.push(first);
        items.extend(rest);
        items
    }
}

/// `operand (operator operand)*`, combined left to right.
pub fn chain_left<T: 'static, O: 'static>(
    operand: BoxedParser<T>,
    operator: BoxedParser<O>,
    combine: fn(T, T) -> T,
) -> BoxedParser<T> {
    (operand.clone() + many(operator * operand))
        >> move |(head, rest): (T, Vec<T>)| rest.into_iter().fold(head, combine)
}

/// A single token satisfying `accepts`, reported as `expected` otherwise.
fn punct(accepts: fn(&Token) -> bool, expected: &'static str) -> BoxedParser<Token> {
    BoxedParser::new(move |state: &mut ParseState| {
        let err = match state.peek() {
            Some(tok) if accepts(tok) => {
                return state
                    .advance()
                    .ok_or_else(|| ParseError::new("unexpected end of input").expected(expected));
            }
            Some(tok) => ParseError::new("unexpected token")
                .expected(expected)
                .found(tok.describe())
                .at(tok.pos()),
            None => ParseError::new("unexpected end of input").expected(expected),
        };
        state.record_error(err.clone());
        Err(err)
    })
}

macro_rules! punctuation {
    ($($name:ident => $variant:ident, $text:literal;)*) => {
        $(
            pub fn $name() -> BoxedParser<Token> {
                punct(|t| matches!(t, Token::$variant(_)), $text)
            }
        )*
    };
}

punctuation! {
    expect_arrow => Arrow, "'->'";
    expect_star => Star, "'*'";
    expect_comma => Comma, "','";
    expect_lparen => LParen, "'('";
    expect_rparen => RParen, "')'";
    expect_question => Question, "'?'";
    expect_tilde => Tilde, "'~'";
    expect_colon => Colon, "':'";
}
