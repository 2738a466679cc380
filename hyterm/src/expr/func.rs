//! Free-function builders for expression trees.
//!
//! Every builder accepts anything convertible into a [`Node`], so typed literals can be
//! passed directly: `and(true, less_than(1i64, 2i64))`.
use crate::expr::Node;
use crate::expr::variant::BinaryOp;

#[inline]
pub fn number(value: i64) -> Node {
    Node::number(value)
}

#[inline]
pub fn boolean(value: bool) -> Node {
    Node::boolean(value)
}

#[inline]
pub fn add(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    Node::binary(BinaryOp::Add, left.into(), right.into())
}

#[inline]
pub fn subtract(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    Node::binary(BinaryOp::Subtract, left.into(), right.into())
}

#[inline]
pub fn less_than(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    Node::binary(BinaryOp::LessThan, left.into(), right.into())
}

#[inline]
pub fn greater_than(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    Node::binary(BinaryOp::GreaterThan, left.into(), right.into())
}

#[inline]
pub fn and(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    Node::binary(BinaryOp::And, left.into(), right.into())
}

#[inline]
pub fn or(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    Node::binary(BinaryOp::Or, left.into(), right.into())
}

/// `if condition then when_true else when_false`.
#[inline]
pub fn branch(
    condition: impl Into<Node>,
    when_true: impl Into<Node>,
    when_false: impl Into<Node>,
) -> Node {
    Node::branch(condition.into(), when_true.into(), when_false.into())
}
