use super::{
    ast::{Node, Program},
    expressions::{BinaryOperator, Variable},
};

#[test]
fn test_tree_string_indents_children() {
    let node = Node::binary(
        BinaryOperator::Add,
        Node::integer(1),
        Node::binary(BinaryOperator::Mul, Node::variable("x"), Node::integer(3)),
    );

    assert_eq!(
        node.to_tree_string(),
        "Addition Node\n  Integer Node: 1\n  Multiplication Node\n    Variable Node: x\n    Integer Node: 3\n"
    );
}

#[test]
fn test_tree_string_assignment() {
    let node = Node::assignment(
        Variable::new("total"),
        Node::binary(BinaryOperator::Div, Node::integer(10), Node::integer(2)),
    );

    assert_eq!(
        node.to_tree_string(),
        "Assignment Node\n  Variable Node: total\n  Division Node\n    Integer Node: 10\n    Integer Node: 2\n"
    );
}

#[test]
fn test_display_is_fully_parenthesised() {
    let node = Node::binary(
        BinaryOperator::Sub,
        Node::binary(BinaryOperator::Sub, Node::integer(1), Node::integer(2)),
        Node::integer(3),
    );

    assert_eq!(node.to_string(), "((1 - 2) - 3)");
    assert_eq!(
        Node::assignment(Variable::new("x"), node).to_string(),
        "x = ((1 - 2) - 3)"
    );
}

#[test]
fn test_assign_accepts_variable_target() {
    let node = Node::assign(Node::variable("x"), Node::integer(5));

    assert!(Node::variable("x").is_variable());
    assert!(!node.is_variable());
    assert_eq!(node, Node::assignment(Variable::new("x"), Node::integer(5)));
}

#[test]
#[should_panic(expected = "invalid node")]
fn test_assign_rejects_non_variable_target() {
    Node::assign(Node::integer(5), Node::variable("x"));
}

#[test]
fn test_operator_lookup() {
    assert_eq!(BinaryOperator::additive("+"), Some(BinaryOperator::Add));
    assert_eq!(BinaryOperator::additive("-"), Some(BinaryOperator::Sub));
    assert_eq!(BinaryOperator::additive("*"), None);
    assert_eq!(BinaryOperator::multiplicative("*"), Some(BinaryOperator::Mul));
    assert_eq!(BinaryOperator::multiplicative("/"), Some(BinaryOperator::Div));
    assert_eq!(BinaryOperator::multiplicative("//"), None);
}

#[test]
fn test_program_tree_string() {
    let program = Program {
        body: vec![Node::integer(1), Node::variable("y")],
    };

    assert_eq!(program.len(), 2);
    assert!(!program.is_empty());
    assert_eq!(program.to_tree_string(), "Integer Node: 1\nVariable Node: y\n");
}

#[test]
fn test_nodes_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Node>();
    assert_send_sync::<Program>();
}
