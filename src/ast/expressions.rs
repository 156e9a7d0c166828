use std::fmt::Display;

use super::ast::Node;

/// Variable Expression
/// A reference to a named variable. Also the only valid assignment target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

/// Binary operators, in the order of the grammar levels that produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    /// Maps additive operator text (`+`, `-`) to its operator.
    pub fn additive(text: &str) -> Option<Self> {
        match text {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Sub),
            _ => None,
        }
    }

    /// Maps multiplicative operator text (`*`, `/`) to its operator.
    pub fn multiplicative(text: &str) -> Option<Self> {
        match text {
            "*" => Some(BinaryOperator::Mul),
            "/" => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "Addition Node",
            BinaryOperator::Sub => "Subtraction Node",
            BinaryOperator::Mul => "Multiplication Node",
            BinaryOperator::Div => "Division Node",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Expression
/// Both operands are owned by the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOp {
    pub op: BinaryOperator,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Assignment
/// Binds the value of an expression to a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: Variable,
    pub value: Box<Node>,
}
