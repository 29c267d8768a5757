use super::Error;
use crate::compiler::frontend::{lexer, parser};
use crate::compiler::source::{HasSourceLocation, Source};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::{self, SimpleFile};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{Buffer, ColorChoice, StandardStream};

/// Renders compiler errors as diagnostics pointing into the source.
pub struct ErrorReporter<'a> {
    file: SimpleFile<String, &'a str>,
}

impl<'a> ErrorReporter<'a> {
    pub fn new(source: &'a Source) -> Self {
        Self {
            file: SimpleFile::new(source.origin().to_string(), source.content()),
        }
    }

    pub fn report_error(&self, e: &Error) -> Result<(), files::Error> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = term::Config::default();

        term::emit(&mut writer.lock(), &config, &self.file, &self.diagnostic(e))?;
        Ok(())
    }

    /// Renders the diagnostic for `e` without colors.
    pub fn render(&self, e: &Error) -> Result<String, files::Error> {
        let mut buffer = Buffer::no_color();
        let config = term::Config::default();

        term::emit(&mut buffer, &config, &self.file, &self.diagnostic(e))?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }

    pub fn diagnostic(&self, e: &Error) -> Diagnostic<()> {
        match e {
            Error::Lex(le) => Self::lexer_diagnostic(le),
            Error::Parse(pe) => Self::parser_diagnostic(pe),
            Error::Internal(ie) => Diagnostic::bug()
                .with_message("internal compiler error")
                .with_notes(vec![ie.to_string()]),
        }
    }

    fn lexer_diagnostic(e: &lexer::Error) -> Diagnostic<()> {
        let (code, label) = match e {
            lexer::Error::UnexpectedCharacter { character, .. } => (
                "E001",
                format!("`{}` can't start a token", character.escape_default()),
            ),
            lexer::Error::UnterminatedString { .. } => {
                ("E002", "this string is never closed".to_string())
            }
        };

        Diagnostic::error()
            .with_code(code)
            .with_message("failed to tokenize input")
            .with_labels(vec![
                Label::primary((), e.source_location()).with_message(label)
            ])
    }

    fn parser_diagnostic(e: &parser::Error) -> Diagnostic<()> {
        let (code, label) = match e {
            parser::Error::UnexpectedToken { kind, expected, .. } => {
                ("E010", format!("expected {}, found {}", expected, kind))
            }
            parser::Error::UnexpectedEndOfInput { expected, .. } => {
                ("E011", format!("expected {}", expected))
            }
        };

        Diagnostic::error()
            .with_code(code)
            .with_message("failed to parse input")
            .with_labels(vec![
                Label::primary((), e.source_location()).with_message(label)
            ])
    }
}
