pub mod token;

use nom::branch::alt;
use nom::bytes::complete::{take_till, take_while1};
use nom::character::complete::{alpha1, char, digit1};
use nom::combinator::{cut, map, recognize, value};
use nom::sequence::{preceded, terminated};
use nom::IResult;
use nom_locate::LocatedSpan;
use thiserror::Error;

use crate::compiler::source::{HasSourceLocation, Span};
pub use token::{Token, TokenKind};

pub type Input<'a> = LocatedSpan<&'a str>;
type ParseResult<'a, T> = IResult<Input<'a>, T>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("unterminated string literal starting at position {position}")]
    UnterminatedString { position: usize },
}

impl Error {
    pub fn position(&self) -> usize {
        match self {
            Error::UnexpectedCharacter { position, .. } => *position,
            Error::UnterminatedString { position } => *position,
        }
    }
}

impl HasSourceLocation for Error {
    fn source_location(&self) -> Span {
        match self {
            Error::UnexpectedCharacter {
                character,
                position,
            } => *position..*position + character.len_utf8(),
            Error::UnterminatedString { position } => *position..*position + 1,
        }
    }
}

/// Split `source` into tokens in a single left to right pass.
///
/// Whitespace separates tokens but never produces one. Runs of digits and
/// runs of letters are consumed greedily, so `add2` yields the name `add`
/// followed by the number `2`. The first character that can't start a token
/// aborts the pass.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut input = Input::new(source);
    let mut tokens = Vec::new();

    while let Some(character) = input.fragment().chars().next() {
        match parse_lexeme(input) {
            Ok((rest, Some(token))) => {
                tokens.push(token);
                input = rest;
            }
            Ok((rest, None)) => input = rest,
            // only the string literal commits with `cut`
            Err(nom::Err::Failure(_)) => {
                return Err(Error::UnterminatedString {
                    position: input.location_offset(),
                })
            }
            Err(_) => {
                return Err(Error::UnexpectedCharacter {
                    character,
                    position: input.location_offset(),
                })
            }
        }
    }

    Ok(tokens)
}

fn parse_lexeme<'a>(input: Input<'a>) -> ParseResult<'a, Option<Token>> {
    alt((
        map(parse_open_paren, Some),
        map(parse_close_paren, Some),
        value(None, parse_whitespace),
        map(parse_number, Some),
        map(parse_string, Some),
        map(parse_name, Some),
    ))(input)
}

/// Turns a parser that recognizes the text of a lexeme into one that
/// produces a token of the given `kind`.
fn lexeme<'a, P>(kind: TokenKind, mut parser: P) -> impl FnMut(Input<'a>) -> ParseResult<'a, Token>
where
    P: FnMut(Input<'a>) -> ParseResult<'a, Input<'a>>,
{
    move |input: Input<'a>| {
        let (rest, text) = parser(input)?;
        let span = input.location_offset()..rest.location_offset();
        Ok((rest, Token::new(kind, *text.fragment(), span)))
    }
}

#[inline]
fn parse_open_paren<'a>(input: Input<'a>) -> ParseResult<'a, Token> {
    lexeme(TokenKind::OpenParen, recognize(char('(')))(input)
}

#[inline]
fn parse_close_paren<'a>(input: Input<'a>) -> ParseResult<'a, Token> {
    lexeme(TokenKind::CloseParen, recognize(char(')')))(input)
}

#[inline]
fn parse_whitespace<'a>(input: Input<'a>) -> ParseResult<'a, Input<'a>> {
    take_while1(|c: char| c.is_whitespace())(input)
}

#[inline]
fn parse_number<'a>(input: Input<'a>) -> ParseResult<'a, Token> {
    lexeme(TokenKind::Number, digit1)(input)
}

#[inline]
fn parse_name<'a>(input: Input<'a>) -> ParseResult<'a, Token> {
    lexeme(TokenKind::Name, alpha1)(input)
}

fn parse_string<'a>(input: Input<'a>) -> ParseResult<'a, Token> {
    let (rest, text) = parse_string_contents(input)?;
    let span = input.location_offset()..rest.location_offset();

    Ok((rest, Token::string(*text.fragment(), span)))
}

// Once the opening quote is seen the literal has to be closed.
fn parse_string_contents<'a>(input: Input<'a>) -> ParseResult<'a, Input<'a>> {
    preceded(
        char('"'),
        cut(terminated(take_till(|c: char| c == '"'), char('"'))),
    )(input)
}
