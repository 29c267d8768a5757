/// The parsed representation of a source program.
///
/// Every node is owned by its parent, so the tree is fully resolved once the
/// parser returns it.
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
    CallExpression(CallExpression),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

impl Node {
    pub fn call<N: Into<String>>(name: N, params: Vec<Node>) -> Node {
        Node::CallExpression(CallExpression {
            name: name.into(),
            params,
        })
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

/// `(name param*)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub name: String,
    pub params: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}
