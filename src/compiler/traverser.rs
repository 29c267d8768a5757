//! Depth first traversal of the source AST.
//!
//! The traverser only walks the tree. Everything that should happen while
//! walking lives in a [`Visitor`], which gets an `enter_*` call before a
//! node's children are visited and an `exit_*` call afterwards.

use super::frontend::ast::{CallExpression, Node, NumberLiteral, Program, StringLiteral};

/// The node that directly contains the node being visited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parent<'ast> {
    Program(&'ast Program),
    Call(&'ast CallExpression),
}

impl<'ast> Parent<'ast> {
    pub fn is_call(&self) -> bool {
        matches!(self, Parent::Call(_))
    }
}

/// Callbacks invoked by [`traverse`].
///
/// Every callback defaults to doing nothing, so implementors only provide the
/// ones they care about. The first callback that fails aborts the traversal.
pub trait Visitor<'ast> {
    type Error;

    fn enter_program(&mut self, _program: &'ast Program) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_program(&mut self, _program: &'ast Program) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_call(
        &mut self,
        _call: &'ast CallExpression,
        _parent: Parent<'ast>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_call(
        &mut self,
        _call: &'ast CallExpression,
        _parent: Parent<'ast>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_number(
        &mut self,
        _number: &'ast NumberLiteral,
        _parent: Parent<'ast>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_number(
        &mut self,
        _number: &'ast NumberLiteral,
        _parent: Parent<'ast>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_string(
        &mut self,
        _string: &'ast StringLiteral,
        _parent: Parent<'ast>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_string(
        &mut self,
        _string: &'ast StringLiteral,
        _parent: Parent<'ast>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub fn traverse<'ast, V: Visitor<'ast>>(
    program: &'ast Program,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.enter_program(program)?;
    traverse_nodes(&program.body, Parent::Program(program), visitor)?;
    visitor.exit_program(program)
}

pub fn traverse_node<'ast, V: Visitor<'ast>>(
    node: &'ast Node,
    parent: Parent<'ast>,
    visitor: &mut V,
) -> Result<(), V::Error> {
    match node {
        Node::CallExpression(call) => {
            visitor.enter_call(call, parent)?;
            traverse_nodes(&call.params, Parent::Call(call), visitor)?;
            visitor.exit_call(call, parent)
        }
        Node::NumberLiteral(number) => {
            visitor.enter_number(number, parent)?;
            visitor.exit_number(number, parent)
        }
        Node::StringLiteral(string) => {
            visitor.enter_string(string, parent)?;
            visitor.exit_string(string, parent)
        }
    }
}

#[inline]
fn traverse_nodes<'ast, V: Visitor<'ast>>(
    nodes: &'ast [Node],
    parent: Parent<'ast>,
    visitor: &mut V,
) -> Result<(), V::Error> {
    for node in nodes {
        traverse_node(node, parent, visitor)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every callback as a line of text.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    fn describe(parent: Parent<'_>) -> String {
        match parent {
            Parent::Program(_) => "program".to_string(),
            Parent::Call(call) => call.name.clone(),
        }
    }

    impl<'ast> Visitor<'ast> for Recorder {
        type Error = ();

        fn enter_program(&mut self, _program: &'ast Program) -> Result<(), ()> {
            self.events.push("enter program".to_string());
            Ok(())
        }

        fn exit_program(&mut self, _program: &'ast Program) -> Result<(), ()> {
            self.events.push("exit program".to_string());
            Ok(())
        }

        fn enter_call(&mut self, call: &'ast CallExpression, parent: Parent<'ast>) -> Result<(), ()> {
            self.events
                .push(format!("enter {} in {}", call.name, describe(parent)));
            Ok(())
        }

        fn exit_call(&mut self, call: &'ast CallExpression, parent: Parent<'ast>) -> Result<(), ()> {
            self.events
                .push(format!("exit {} in {}", call.name, describe(parent)));
            Ok(())
        }

        fn enter_number(&mut self, number: &'ast NumberLiteral, parent: Parent<'ast>) -> Result<(), ()> {
            self.events
                .push(format!("enter {} in {}", number.value, describe(parent)));
            Ok(())
        }

        fn exit_number(&mut self, number: &'ast NumberLiteral, parent: Parent<'ast>) -> Result<(), ()> {
            self.events
                .push(format!("exit {} in {}", number.value, describe(parent)));
            Ok(())
        }

        fn enter_string(&mut self, string: &'ast StringLiteral, parent: Parent<'ast>) -> Result<(), ()> {
            self.events
                .push(format!("enter {:?} in {}", string.value, describe(parent)));
            Ok(())
        }
    }

    #[test]
    fn test_traverse_enters_before_and_exits_after_children() {
        let program = Program::new(vec![
            Node::call(
                "add",
                vec![
                    Node::number("2"),
                    Node::call("subtract", vec![Node::number("4"), Node::string("s")]),
                ],
            ),
            Node::number("7"),
        ]);
        let mut recorder = Recorder::default();

        traverse(&program, &mut recorder).unwrap();

        assert_eq!(
            recorder.events,
            vec![
                "enter program",
                "enter add in program",
                "enter 2 in add",
                "exit 2 in add",
                "enter subtract in add",
                "enter 4 in subtract",
                "exit 4 in subtract",
                "enter \"s\" in subtract",
                "exit subtract in add",
                "exit add in program",
                "enter 7 in program",
                "exit 7 in program",
                "exit program",
            ]
        );
    }

    #[test]
    fn test_traverse_stops_at_first_failure() {
        struct FailOnNumber(usize);

        impl<'ast> Visitor<'ast> for FailOnNumber {
            type Error = String;

            fn enter_number(&mut self, number: &'ast NumberLiteral, _parent: Parent<'ast>) -> Result<(), String> {
                self.0 += 1;
                Err(number.value.clone())
            }
        }

        let program = Program::new(vec![Node::number("1"), Node::number("2")]);
        let mut visitor = FailOnNumber(0);

        assert_eq!(traverse(&program, &mut visitor), Err("1".to_string()));
        assert_eq!(visitor.0, 1);
    }

    #[test]
    fn test_parent_is_call() {
        let program = Program::default();
        let call = CallExpression {
            name: "f".to_string(),
            params: vec![],
        };

        assert!(!Parent::Program(&program).is_call());
        assert!(Parent::Call(&call).is_call());
    }
}
