pub mod reporting;
use super::frontend::{lexer, parser};
use super::transformer;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] lexer::Error),

    #[error(transparent)]
    Parse(#[from] parser::Error),

    #[error(transparent)]
    Internal(#[from] transformer::Error),
}

impl Error {
    /// `true` if the input was at fault, `false` if the compiler is.
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::Lex(_) | Error::Parse(_) => true,
            Error::Internal(_) => false,
        }
    }
}
