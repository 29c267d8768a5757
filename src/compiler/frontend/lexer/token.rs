use crate::compiler::source::{HasSourceLocation, Span};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Number,
    String,
    Name,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Name => "name",
        };

        f.write_str(name)
    }
}

/// A classified lexeme.
///
/// `text` holds the lexeme without any delimiters, so a string token
/// `"foo"` has the text `foo` while its span still covers both quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new<T: Into<String>>(kind: TokenKind, text: T, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn open_paren(start: usize) -> Self {
        Self::new(TokenKind::OpenParen, "(", start..start + 1)
    }

    pub fn close_paren(start: usize) -> Self {
        Self::new(TokenKind::CloseParen, ")", start..start + 1)
    }

    pub fn number<T: Into<String>>(text: T, span: Span) -> Self {
        Self::new(TokenKind::Number, text, span)
    }

    pub fn string<T: Into<String>>(text: T, span: Span) -> Self {
        Self::new(TokenKind::String, text, span)
    }

    pub fn name<T: Into<String>>(text: T, span: Span) -> Self {
        Self::new(TokenKind::Name, text, span)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl HasSourceLocation for Token {
    fn source_location(&self) -> Span {
        self.span.clone()
    }
}
