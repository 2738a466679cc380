//! Expression trees: the closed set of node variants and their owning wrapper.
//!
//! Role
//! - [`Expr`] is the variant itself; [`Node`] pairs it with the type slot written by
//!   [`infer_types`](crate::types::infer_types).
//! - Children are owned through `Box<Node>`. Rewriting replaces a whole node in its owning
//!   slot; a node's variant is never changed in place.
//! - Builders in [`func`] and the operator sugar below construct trees ergonomically.
//!
//! Equality semantics
//! - [`Node`] compares and hashes by structure only. Type annotations are ignored, so a
//!   reduced tree can be compared against a freshly built one regardless of whether
//!   inference has run on either.
//!
//! Example
//! ```
//! use hyterm::expr::func::*;
//! use hyterm::expr::{NodeType, variant::Literal};
//!
//! let expr = branch(less_than(number(1), number(2)), number(10) - number(3), number(0));
//! assert_eq!(expr.node_type(), NodeType::If);
//! assert_eq!(expr.size(), 8);
//! assert_eq!(expr.depth(), 3);
//! assert_eq!(number(4).literal(), Some(Literal::Number(4)));
//! ```
pub mod func;
pub mod pretty;
pub mod variant;

use std::hash::{Hash, Hasher};

use strum::{Display, EnumDiscriminants, EnumIs, EnumIter, IntoStaticStr};

use crate::expr::variant::{BinaryOp, Literal, LiteralKind};
use crate::types::ValueType;

/// Outer constructor of an expression node.
///
/// The derived [`NodeType`] discriminant names each variant without borrowing its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumDiscriminants)]
#[strum_discriminants(derive(Hash, EnumIter, IntoStaticStr, Display))]
#[strum_discriminants(name(NodeType))]
#[strum_discriminants(vis(pub))]
pub enum Expr {
    // Literals
    Number(i64),
    Boolean(bool),

    // Binary operators
    Add(Box<Node>, Box<Node>),
    Subtract(Box<Node>, Box<Node>),
    LessThan(Box<Node>, Box<Node>),
    GreaterThan(Box<Node>, Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),

    // Conditional
    If {
        condition: Box<Node>,
        when_true: Box<Node>,
        when_false: Box<Node>,
    },
}

/// A node of an expression tree: its constructor plus the inferred type slot.
///
/// `ty` starts as [`ValueType::Unknown`] and is only ever written by the type pass.
#[derive(Debug, Clone)]
pub struct Node {
    pub expr: Expr,
    pub ty: ValueType,
}

impl Node {
    /// Wrap an expression with an unresolved type slot.
    #[inline]
    pub fn new(expr: Expr) -> Self {
        Self {
            expr,
            ty: ValueType::Unknown,
        }
    }

    #[inline]
    pub fn number(value: i64) -> Self {
        Self::new(Expr::Number(value))
    }

    #[inline]
    pub fn boolean(value: bool) -> Self {
        Self::new(Expr::Boolean(value))
    }

    /// Build the node for `left op right`.
    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        Self::new(match op {
            BinaryOp::Add => Expr::Add(left, right),
            BinaryOp::Subtract => Expr::Subtract(left, right),
            BinaryOp::LessThan => Expr::LessThan(left, right),
            BinaryOp::GreaterThan => Expr::GreaterThan(left, right),
            BinaryOp::And => Expr::And(left, right),
            BinaryOp::Or => Expr::Or(left, right),
        })
    }

    /// Build `if condition then when_true else when_false`.
    pub fn branch(condition: Node, when_true: Node, when_false: Node) -> Self {
        Self::new(Expr::If {
            condition: Box::new(condition),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        })
    }

    /// Variant tag of this node.
    #[inline]
    pub fn node_type(&self) -> NodeType {
        NodeType::from(&self.expr)
    }

    /// The value held by a literal node, `None` for every other variant.
    #[inline]
    pub fn literal(&self) -> Option<Literal> {
        match self.expr {
            Expr::Number(n) => Some(Literal::Number(n)),
            Expr::Boolean(b) => Some(Literal::Boolean(b)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self.expr, Expr::Number(_) | Expr::Boolean(_))
    }

    /// Whether this node is a literal of the given kind.
    #[inline]
    pub fn is_literal_of(&self, kind: LiteralKind) -> bool {
        self.literal().is_some_and(|lit| lit.kind() == kind)
    }

    /// Split a binary-operator node into its operator and operands.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Node, &Node)> {
        let (op, left, right) = match &self.expr {
            Expr::Add(l, r) => (BinaryOp::Add, l, r),
            Expr::Subtract(l, r) => (BinaryOp::Subtract, l, r),
            Expr::LessThan(l, r) => (BinaryOp::LessThan, l, r),
            Expr::GreaterThan(l, r) => (BinaryOp::GreaterThan, l, r),
            Expr::And(l, r) => (BinaryOp::And, l, r),
            Expr::Or(l, r) => (BinaryOp::Or, l, r),
            Expr::Number(_) | Expr::Boolean(_) | Expr::If { .. } => return None,
        };
        Some((op, left.as_ref(), right.as_ref()))
    }

    /// Mutable counterpart of [`Node::as_binary`], used by rules that rewrite an operand.
    pub fn as_binary_mut(&mut self) -> Option<(BinaryOp, &mut Node, &mut Node)> {
        let (op, left, right) = match &mut self.expr {
            Expr::Add(l, r) => (BinaryOp::Add, l, r),
            Expr::Subtract(l, r) => (BinaryOp::Subtract, l, r),
            Expr::LessThan(l, r) => (BinaryOp::LessThan, l, r),
            Expr::GreaterThan(l, r) => (BinaryOp::GreaterThan, l, r),
            Expr::And(l, r) => (BinaryOp::And, l, r),
            Expr::Or(l, r) => (BinaryOp::Or, l, r),
            Expr::Number(_) | Expr::Boolean(_) | Expr::If { .. } => return None,
        };
        Some((op, left.as_mut(), right.as_mut()))
    }

    /// Iterate over the direct children, left to right (condition first for `If`).
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let (a, b, c): (Option<&Node>, Option<&Node>, Option<&Node>) = match &self.expr {
            Expr::Number(_) | Expr::Boolean(_) => (None, None, None),
            Expr::Add(l, r)
            | Expr::Subtract(l, r)
            | Expr::LessThan(l, r)
            | Expr::GreaterThan(l, r)
            | Expr::And(l, r)
            | Expr::Or(l, r) => (Some(l.as_ref()), Some(r.as_ref()), None),
            Expr::If {
                condition,
                when_true,
                when_false,
            } => (
                Some(condition.as_ref()),
                Some(when_true.as_ref()),
                Some(when_false.as_ref()),
            ),
        };
        a.into_iter().chain(b).chain(c)
    }

    /// Mutable counterpart of [`Node::children`].
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        let (a, b, c): (Option<&mut Node>, Option<&mut Node>, Option<&mut Node>) =
            match &mut self.expr {
                Expr::Number(_) | Expr::Boolean(_) => (None, None, None),
                Expr::Add(l, r)
                | Expr::Subtract(l, r)
                | Expr::LessThan(l, r)
                | Expr::GreaterThan(l, r)
                | Expr::And(l, r)
                | Expr::Or(l, r) => (Some(l.as_mut()), Some(r.as_mut()), None),
                Expr::If {
                    condition,
                    when_true,
                    when_false,
                } => (
                    Some(condition.as_mut()),
                    Some(when_true.as_mut()),
                    Some(when_false.as_mut()),
                ),
            };
        a.into_iter().chain(b).chain(c)
    }

    /// Number of nodes in the tree rooted here.
    pub fn size(&self) -> usize {
        1 + self.children().map(Node::size).sum::<usize>()
    }

    /// Nesting depth; a lone literal has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().map(Node::depth).max().unwrap_or(0)
    }

    /// Reset every type slot in the tree to [`ValueType::Unknown`].
    pub fn clear_types(&mut self) {
        self.ty = ValueType::Unknown;
        for child in self.children_mut() {
            child.clear_types();
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.expr == other.expr
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.expr.hash(state);
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        Node::new(expr)
    }
}

impl From<Literal> for Node {
    fn from(value: Literal) -> Self {
        match value {
            Literal::Number(n) => Node::number(n),
            Literal::Boolean(b) => Node::boolean(b),
        }
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::number(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::boolean(value)
    }
}

// Operator sugar: `a + b`, `a - b`, `a & b`, `a | b` build the matching nodes.
macro_rules! impl_binary_sugar {
    ($trait:ident, $method:ident, $op:expr) => {
        impl std::ops::$trait for Node {
            type Output = Node;

            #[inline]
            fn $method(self, rhs: Node) -> Node {
                Node::binary($op, self, rhs)
            }
        }
    };
}

impl_binary_sugar!(Add, add, BinaryOp::Add);
impl_binary_sugar!(Sub, sub, BinaryOp::Subtract);
impl_binary_sugar!(BitAnd, bitand, BinaryOp::And);
impl_binary_sugar!(BitOr, bitor, BinaryOp::Or);
