pub mod backend;
pub mod error;
pub mod frontend;
pub mod source;
pub mod transformer;
pub mod traverser;

use backend::{Backend, Target};
use frontend::ast::Program;
use frontend::lexer::Token;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Options that influence a compilation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub target: Target,
}

impl Settings {
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }
}

/// The `Compiler` drives a source string through every stage of the pipeline:
///
/// tokens -> source ast -> target ast -> code
///
/// Each stage is exposed individually so that callers can inspect the
/// intermediate representations. A `Compiler` holds no state besides its
/// settings, so it can be shared freely between compilations.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    settings: Settings,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn compile(&self, source: &str) -> Result<String> {
        let tokens = self.tokenize(source)?;
        let ast = self.parse(&tokens)?;
        let new_ast = self.transform(&ast)?;
        Ok(self.generate(&new_ast))
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>> {
        let tokens = frontend::lexer::tokenize(source)?;
        log::trace!("lexer pass done: {} token(s)", tokens.len());
        Ok(tokens)
    }

    pub fn parse(&self, tokens: &[Token]) -> Result<Program> {
        let ast = frontend::parser::parse(tokens)?;
        log::trace!("parser pass done: {:#?}", ast);
        Ok(ast)
    }

    pub fn transform(&self, ast: &Program) -> Result<backend::ast::Program> {
        let new_ast = transformer::transform(ast)?;
        log::trace!("transformer pass done: {:#?}", new_ast);
        Ok(new_ast)
    }

    pub fn generate(&self, ast: &backend::ast::Program) -> String {
        let code = Backend::new(self.settings.target).pass(ast);
        log::trace!("backend pass done ({:?})", self.settings.target);
        code
    }
}

/// Compile `source` with the default settings.
pub fn compile(source: &str) -> Result<String> {
    Compiler::new().compile(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_baseline() {
        assert_eq!(compile("(add 2 2)").unwrap(), "add(2, 2);");
    }

    #[test]
    fn test_compile_nested_call_is_an_expression() {
        assert_eq!(
            compile("(add 2 (subtract 4 2))").unwrap(),
            "add(2, subtract(4, 2));"
        );
        assert_eq!(
            compile("(add 2 (subtract (add 2 2) 2))").unwrap(),
            "add(2, subtract(add(2, 2), 2));"
        );
    }

    #[test]
    fn test_compile_arguments_keep_their_order() {
        assert_eq!(compile("(add 1 2 3)").unwrap(), "add(1, 2, 3);");
    }

    #[test]
    fn test_compile_strings() {
        assert_eq!(
            compile(r#"(concat "hello" "world")"#).unwrap(),
            r#"concat("hello", "world");"#
        );
    }

    #[test]
    fn test_compile_multiple_statements() {
        assert_eq!(
            compile("(print 1)\n(print (add 1 2))").unwrap(),
            "print(1);\nprint(add(1, 2));"
        );
    }

    #[test]
    fn test_compile_top_level_literals() {
        assert_eq!(compile(r#"42 "x""#).unwrap(), "42\n\"x\"");
        assert_eq!(compile("").unwrap(), "");
    }

    #[test]
    fn test_compile_propagates_first_failure() {
        assert_matches!(compile("(add 2 @)"), Err(Error::Lex(_)));
        assert_matches!(compile("(add 2 2"), Err(Error::Parse(_)));
        assert_matches!(compile(") (add @"), Err(Error::Lex(_)));
    }

    #[test]
    fn test_compile_with_c_target() {
        let compiler = Compiler::with_settings(Settings::default().with_target(Target::C));

        assert_eq!(
            compiler.compile("(add 2 2)").unwrap(),
            "#include <stdio.h>\n\nint main() {\n  add(2, 2);\n  return 0;\n}"
        );
    }
}
