//! Lowers the source AST into the target AST.
//!
//! The transformation is a single traversal of the source tree. Calls are
//! renamed into `callee(arguments)` form, and a call becomes a terminated
//! statement unless it is itself the argument of another call.

use super::backend::ast as target;
use super::frontend::ast::{CallExpression, NumberLiteral, Program, StringLiteral};
use super::traverser::{traverse, Parent, Visitor};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("TransformerBug: call `{0}` exited without being entered")]
    UnbalancedExit(String),
    #[error("TransformerBug: {0} call(s) still open after the traversal")]
    UnclosedCalls(usize),
}

pub fn transform(program: &Program) -> Result<target::Program> {
    let mut transformer = Transformer::new();
    traverse(program, &mut transformer)?;
    transformer.finish()
}

/// A call whose arguments are still being collected.
#[derive(Debug)]
struct OpenCall {
    call: target::CallExpression,
    is_statement: bool,
}

/// Builds the target program while the source program is traversed.
///
/// The innermost open call's argument list is where transformed children
/// go. Without an open call they go straight into the program body.
#[derive(Debug, Default)]
pub struct Transformer {
    program: target::Program,
    open_calls: Vec<OpenCall>,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Result<target::Program> {
        if self.open_calls.is_empty() {
            Ok(self.program)
        } else {
            Err(Error::UnclosedCalls(self.open_calls.len()))
        }
    }

    fn destination(&mut self) -> &mut Vec<target::Node> {
        match self.open_calls.last_mut() {
            Some(open) => &mut open.call.arguments,
            None => &mut self.program.body,
        }
    }
}

impl<'ast> Visitor<'ast> for Transformer {
    type Error = Error;

    fn enter_call(&mut self, call: &'ast CallExpression, parent: Parent<'ast>) -> Result<()> {
        self.open_calls.push(OpenCall {
            call: target::CallExpression::new(target::Identifier::new(call.name.as_str()), vec![]),
            is_statement: !parent.is_call(),
        });
        Ok(())
    }

    fn exit_call(&mut self, call: &'ast CallExpression, _parent: Parent<'ast>) -> Result<()> {
        let open = self
            .open_calls
            .pop()
            .ok_or_else(|| Error::UnbalancedExit(call.name.clone()))?;

        let expression = target::Node::CallExpression(open.call);
        let node = if open.is_statement {
            target::Node::statement(expression)
        } else {
            expression
        };

        self.destination().push(node);
        Ok(())
    }

    fn enter_number(&mut self, number: &'ast NumberLiteral, _parent: Parent<'ast>) -> Result<()> {
        self.destination()
            .push(target::Node::number(number.value.as_str()));
        Ok(())
    }

    fn enter_string(&mut self, string: &'ast StringLiteral, _parent: Parent<'ast>) -> Result<()> {
        self.destination()
            .push(target::Node::string(string.value.as_str()));
        Ok(())
    }
}
