use std::fmt::{Display, Write};

use super::expressions::{Assignment, BinaryOp, BinaryOperator, Variable};

/// AST Node
///
/// Every node owns its children, so a tree is always acyclic and no node
/// has two parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    IntegerLiteral(i64),
    Variable(Variable),
    BinaryOp(BinaryOp),
    Assignment(Assignment),
}

impl Node {
    pub fn integer(value: i64) -> Self {
        Node::IntegerLiteral(value)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable(Variable::new(name))
    }

    pub fn binary(op: BinaryOperator, left: Node, right: Node) -> Self {
        Node::BinaryOp(BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn assignment(target: Variable, value: Node) -> Self {
        Node::Assignment(Assignment {
            target,
            value: Box::new(value),
        })
    }

    /// Builds an assignment from an arbitrary target node.
    ///
    /// # Panics
    ///
    /// Panics when `target` is not a `Node::Variable`. Callers holding user input
    /// should check the target first and report a parse error instead.
    pub fn assign(target: Node, value: Node) -> Self {
        match target {
            Node::Variable(variable) => Node::assignment(variable, value),
            other => panic!(
                "invalid node: assignment target must be a variable, got `{}`",
                other
            ),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Variable(_))
    }

    /// Renders the tree one node per line, children indented two spaces deeper
    /// than their parent.
    pub fn to_tree_string(&self) -> String {
        let mut output = String::new();
        // Writing to a String cannot fail
        let _ = self.write_tree(&mut output, 0);
        output
    }

    fn write_tree(&self, output: &mut impl Write, indentation: usize) -> std::fmt::Result {
        let pad = " ".repeat(indentation);

        match self {
            Node::IntegerLiteral(value) => writeln!(output, "{}Integer Node: {}", pad, value),
            Node::Variable(variable) => writeln!(output, "{}Variable Node: {}", pad, variable.name),
            Node::BinaryOp(binary) => {
                writeln!(output, "{}{}", pad, binary.op.label())?;
                binary.left.write_tree(output, indentation + 2)?;
                binary.right.write_tree(output, indentation + 2)
            }
            Node::Assignment(assignment) => {
                writeln!(output, "{}Assignment Node", pad)?;
                writeln!(output, "{}  Variable Node: {}", pad, assignment.target.name)?;
                assignment.value.write_tree(output, indentation + 2)
            }
        }
    }
}

/// Fully parenthesised infix form, e.g. `((1 - 2) - 3)`.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::IntegerLiteral(value) => write!(f, "{}", value),
            Node::Variable(variable) => write!(f, "{}", variable.name),
            Node::BinaryOp(binary) => {
                write!(f, "({} {} {})", binary.left, binary.op, binary.right)
            }
            Node::Assignment(assignment) => {
                write!(f, "{} = {}", assignment.target.name, assignment.value)
            }
        }
    }
}

/// The statements of a whole source file, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn to_tree_string(&self) -> String {
        self.body.iter().map(Node::to_tree_string).collect()
    }
}
