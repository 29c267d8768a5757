use super::ast::{Node, Program};
use super::lexer::{Token, TokenKind};
use crate::compiler::source::{HasSourceLocation, Span};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Expression,
    Token(TokenKind),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Expression => f.write_str("an expression"),
            Expected::Token(TokenKind::Name) => f.write_str("a call name"),
            Expected::Token(kind) => write!(f, "{}", kind),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unexpected {kind} at position {}, expected {expected}", .span.start)]
    UnexpectedToken {
        kind: TokenKind,
        span: Span,
        expected: Expected,
    },
    #[error("unexpected end of input at position {position}, expected {expected}")]
    UnexpectedEndOfInput { position: usize, expected: Expected },
}

impl Error {
    pub fn unexpected_token(token: &Token, expected: Expected) -> Self {
        Error::UnexpectedToken {
            kind: token.kind,
            span: token.source_location(),
            expected,
        }
    }

    pub fn unexpected_end_of_input(position: usize, expected: Expected) -> Self {
        Error::UnexpectedEndOfInput { position, expected }
    }

    /// The kind of the offending token, `None` if the input ended early.
    pub fn token_kind(&self) -> Option<TokenKind> {
        match self {
            Error::UnexpectedToken { kind, .. } => Some(*kind),
            Error::UnexpectedEndOfInput { .. } => None,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Error::UnexpectedToken { span, .. } => span.start,
            Error::UnexpectedEndOfInput { position, .. } => *position,
        }
    }

    pub fn expected(&self) -> Expected {
        match self {
            Error::UnexpectedToken { expected, .. } => *expected,
            Error::UnexpectedEndOfInput { expected, .. } => *expected,
        }
    }
}

impl HasSourceLocation for Error {
    fn source_location(&self) -> Span {
        match self {
            Error::UnexpectedToken { span, .. } => span.clone(),
            Error::UnexpectedEndOfInput { position, .. } => *position..*position,
        }
    }
}

/// Parse a complete token sequence into a `Program`.
///
/// ```text
/// Program    := Expression*
/// Expression := Number | String | Call
/// Call       := '(' name Expression* ')'
/// ```
pub fn parse(tokens: &[Token]) -> Result<Program> {
    Parser::new(tokens).parse_program()
}

/// Recursive descent parser over a borrowed token sequence.
///
/// There is no error recovery: the first violation of the grammar aborts
/// parsing.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    pub fn parse_program(&mut self) -> Result<Program> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.parse_expression()?);
        }

        Ok(Program::new(body))
    }

    pub fn parse_expression(&mut self) -> Result<Node> {
        let token = self.peek_or_fail(Expected::Expression)?;

        match token.kind {
            TokenKind::Number => {
                self.advance();
                Ok(Node::number(token.text.clone()))
            }
            TokenKind::String => {
                self.advance();
                Ok(Node::string(token.text.clone()))
            }
            TokenKind::OpenParen => self.parse_call(),
            _ => Err(Error::unexpected_token(token, Expected::Expression)),
        }
    }

    fn parse_call(&mut self) -> Result<Node> {
        self.expect(TokenKind::OpenParen)?;
        let name = self.expect(TokenKind::Name)?.text.clone();
        let mut params = Vec::new();

        loop {
            let token = self.peek_or_fail(Expected::Token(TokenKind::CloseParen))?;

            if token.is(TokenKind::CloseParen) {
                self.advance();
                break;
            }

            params.push(self.parse_expression()?);
        }

        Ok(Node::call(name, params))
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    #[inline]
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    #[inline]
    fn advance(&mut self) {
        self.current += 1;
    }

    fn peek_or_fail(&self, expected: Expected) -> Result<&'a Token> {
        self.peek()
            .ok_or_else(|| Error::unexpected_end_of_input(self.end_position(), expected))
    }

    /// Consumes the current token if it has the given `kind`.
    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token> {
        let token = self.peek_or_fail(Expected::Token(kind))?;

        if token.is(kind) {
            self.advance();
            Ok(token)
        } else {
            Err(Error::unexpected_token(token, Expected::Token(kind)))
        }
    }

    // Position just past the last token.
    fn end_position(&self) -> usize {
        self.tokens.last().map(|t| t.span.end).unwrap_or(0)
    }
}
