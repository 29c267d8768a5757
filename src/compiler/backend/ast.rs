/// The call-expression representation that code is generated from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    ExpressionStatement(ExpressionStatement),
    CallExpression(CallExpression),
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

impl Node {
    pub fn statement(expression: Node) -> Node {
        Node::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        })
    }

    pub fn call<N: Into<String>>(callee: N, arguments: Vec<Node>) -> Node {
        Node::CallExpression(CallExpression::new(Identifier::new(callee), arguments))
    }

    pub fn identifier<N: Into<String>>(name: N) -> Node {
        Node::Identifier(Identifier::new(name))
    }

    pub fn number<V: Into<String>>(value: V) -> Node {
        Node::NumberLiteral(NumberLiteral {
            value: value.into(),
        })
    }

    pub fn string<V: Into<String>>(value: V) -> Node {
        Node::StringLiteral(StringLiteral {
            value: value.into(),
        })
    }
}

/// A call rendered as a terminated statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Node>,
}

impl CallExpression {
    pub fn new(callee: Identifier, arguments: Vec<Node>) -> Self {
        Self { callee, arguments }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}
