pub mod ast;
pub mod code_generator;

use code_generator::CodeGenerator;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the generated code is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The generated statements as they are.
    Plain,
    /// The generated statements inside the `main` function of a C program.
    C,
}

impl Default for Target {
    fn default() -> Self {
        Target::Plain
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Plain => f.write_str("plain"),
            Target::C => f.write_str("c"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown target `{0}`, expected one of: plain, c")]
pub struct UnknownTarget(String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Target::Plain),
            "c" => Ok(Target::C),
            _ => Err(UnknownTarget(s.to_string())),
        }
    }
}

pub struct Backend {
    target: Target,
}

impl Backend {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    pub fn pass(&self, ast: &ast::Program) -> String {
        match self.target {
            Target::Plain => code_generator::generate(ast),
            Target::C => Self::wrap_in_c_main(ast),
        }
    }

    // Items are indented one by one so literals spanning lines stay intact.
    fn wrap_in_c_main(ast: &ast::Program) -> String {
        let mut out = String::from("#include <stdio.h>\n\nint main() {\n");

        for node in &ast.body {
            out.push_str("  ");
            out.push_str(&CodeGenerator::generate_node(node));
            out.push('\n');
        }

        out.push_str("  return 0;\n}");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::ast::{Node, Program};
    use super::*;

    #[test]
    fn test_plain_target() {
        let program = Program::new(vec![Node::statement(Node::call("f", vec![]))]);

        assert_eq!(Backend::new(Target::Plain).pass(&program), "f();");
    }

    #[test]
    fn test_c_target_indents_every_statement() {
        let program = Program::new(vec![
            Node::statement(Node::call("f", vec![])),
            Node::statement(Node::call("g", vec![Node::number("1")])),
        ]);

        assert_eq!(
            Backend::new(Target::C).pass(&program),
            "#include <stdio.h>\n\nint main() {\n  f();\n  g(1);\n  return 0;\n}"
        );
        assert_eq!(
            Backend::new(Target::C).pass(&Program::default()),
            "#include <stdio.h>\n\nint main() {\n  return 0;\n}"
        );
    }

    #[test]
    fn test_c_target_keeps_multi_line_strings_intact() {
        let program = Program::new(vec![
            Node::statement(Node::call("puts", vec![Node::string("a\r\nb")])),
            Node::statement(Node::call("puts", vec![Node::string("c\nd")])),
        ]);

        assert_eq!(
            Backend::new(Target::C).pass(&program),
            "#include <stdio.h>\n\nint main() {\n  puts(\"a\r\nb\");\n  puts(\"c\nd\");\n  return 0;\n}"
        );
    }

    #[test]
    fn test_target_from_str() {
        assert_eq!("plain".parse::<Target>(), Ok(Target::Plain));
        assert_eq!("C".parse::<Target>(), Ok(Target::C));
        assert_matches!("js".parse::<Target>(), Err(UnknownTarget(_)));
    }
}
