//! Generate call-expression code from the target AST.
//!
//! The output follows fixed templates only: statements are terminated with
//! `;`, arguments are separated by `, ` and top level items by a newline.
use super::ast::{CallExpression, Node, Program};

const STATEMENT_TERMINATOR: char = ';';
const ARGUMENT_SEPARATOR: &str = ", ";
const ITEM_SEPARATOR: char = '\n';

pub fn generate(program: &Program) -> String {
    CodeGenerator::generate(program)
}

pub struct CodeGenerator {
    source: String,
}

impl CodeGenerator {
    fn new() -> Self {
        Self {
            source: String::new(),
        }
    }

    pub fn generate(program: &Program) -> String {
        let mut generator = Self::new();
        generator.emit_program(program);
        generator.source
    }

    /// Generate the code for a single node.
    pub fn generate_node(node: &Node) -> String {
        let mut generator = Self::new();
        generator.emit(node);
        generator.source
    }

    fn emit_program(&mut self, program: &Program) {
        for (i, node) in program.body.iter().enumerate() {
            if i > 0 {
                self.source.push(ITEM_SEPARATOR);
            }
            self.emit(node);
        }
    }

    fn emit(&mut self, node: &Node) {
        match node {
            Node::ExpressionStatement(statement) => {
                self.emit(&statement.expression);
                self.source.push(STATEMENT_TERMINATOR);
            }
            Node::CallExpression(call) => self.emit_call(call),
            Node::Identifier(identifier) => self.source.push_str(&identifier.name),
            Node::NumberLiteral(number) => self.source.push_str(&number.value),
            Node::StringLiteral(string) => {
                self.source.push('"');
                self.source.push_str(&string.value);
                self.source.push('"');
            }
        }
    }

    fn emit_call(&mut self, call: &CallExpression) {
        self.source.push_str(&call.callee.name);
        self.source.push('(');
        for (i, argument) in call.arguments.iter().enumerate() {
            if i > 0 {
                self.source.push_str(ARGUMENT_SEPARATOR);
            }
            self.emit(argument);
        }
        self.source.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_leaves() {
        assert_eq!(CodeGenerator::generate_node(&Node::identifier("add")), "add");
        assert_eq!(CodeGenerator::generate_node(&Node::number("42")), "42");
        assert_eq!(
            CodeGenerator::generate_node(&Node::string("hello")),
            "\"hello\""
        );
    }

    #[test]
    fn test_generate_call() {
        assert_eq!(
            CodeGenerator::generate_node(&Node::call(
                "add",
                vec![Node::number("1"), Node::number("2"), Node::number("3")]
            )),
            "add(1, 2, 3)"
        );
        assert_eq!(
            CodeGenerator::generate_node(&Node::call("now", vec![])),
            "now()"
        );
    }

    #[test]
    fn test_generate_statement() {
        assert_eq!(
            CodeGenerator::generate_node(&Node::statement(Node::call(
                "add",
                vec![
                    Node::number("2"),
                    Node::call("subtract", vec![Node::number("4"), Node::number("2")])
                ]
            ))),
            "add(2, subtract(4, 2));"
        );
    }

    #[test]
    fn test_generate_program() {
        let program = Program::new(vec![
            Node::statement(Node::call("print", vec![Node::string("a")])),
            Node::number("1"),
            Node::statement(Node::call("print", vec![Node::string("b")])),
        ]);

        assert_eq!(generate(&program), "print(\"a\");\n1\nprint(\"b\");");
        assert_eq!(generate(&Program::default()), "");
    }
}
