//! Static type inference over expression trees.
//!
//! [`infer_types`] walks a tree once, post-order, and writes the [`Node::ty`] slot of every
//! node it can resolve. Nodes that cannot be typed keep [`ValueType::Unknown`]; no error is
//! raised. [`check_types`] layers an explicit [`TypeError`] on top for callers that want one.
//!
//! Example
//! ```
//! use hyterm::expr::func::*;
//! use hyterm::types::{ValueType, infer_types};
//!
//! let mut expr = branch(boolean(true), number(1), number(2));
//! assert_eq!(infer_types(&mut expr), ValueType::Number);
//!
//! let mut mismatched = add(boolean(true), number(2));
//! assert_eq!(infer_types(&mut mismatched), ValueType::Unknown);
//! ```
use log::trace;
use strum::{Display, EnumIs};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};
use crate::expr::variant::{BinaryOp, LiteralKind};
use crate::expr::{Expr, Node};

/// Static type of an expression, or `Unknown` when it could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIs, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueType {
    Number,
    Boolean,
    #[default]
    Unknown,
}

impl From<LiteralKind> for ValueType {
    fn from(kind: LiteralKind) -> Self {
        match kind {
            LiteralKind::Number => ValueType::Number,
            LiteralKind::Boolean => ValueType::Boolean,
        }
    }
}

/// Infer and record the type of every node reachable from `node`; returns the root's type.
///
/// Already-resolved nodes are skipped together with their subtrees, so the pass is
/// idempotent and can be re-run on partially annotated trees.
pub fn infer_types(node: &mut Node) -> ValueType {
    if !node.ty.is_unknown() {
        return node.ty;
    }

    let inferred = match &mut node.expr {
        Expr::Number(_) => ValueType::Number,
        Expr::Boolean(_) => ValueType::Boolean,
        Expr::Add(l, r) => infer_binary(BinaryOp::Add, l, r),
        Expr::Subtract(l, r) => infer_binary(BinaryOp::Subtract, l, r),
        Expr::LessThan(l, r) => infer_binary(BinaryOp::LessThan, l, r),
        Expr::GreaterThan(l, r) => infer_binary(BinaryOp::GreaterThan, l, r),
        Expr::And(l, r) => infer_binary(BinaryOp::And, l, r),
        Expr::Or(l, r) => infer_binary(BinaryOp::Or, l, r),
        Expr::If {
            condition,
            when_true,
            when_false,
        } => {
            let condition = infer_types(condition);
            let when_true = infer_types(when_true);
            let when_false = infer_types(when_false);

            // Two unresolved branches stay unresolved.
            if condition == ValueType::Boolean && when_true == when_false {
                when_true
            } else {
                ValueType::Unknown
            }
        }
    };

    if inferred.is_unknown() {
        trace!("left {} node untyped", node.node_type());
    }
    node.ty = inferred;
    inferred
}

fn infer_binary(op: BinaryOp, left: &mut Node, right: &mut Node) -> ValueType {
    let lhs = infer_types(left);
    let rhs = infer_types(right);

    let operand = ValueType::from(op.operand_kind());
    if lhs == operand && rhs == operand {
        op.result_kind().into()
    } else {
        ValueType::Unknown
    }
}

/// Like [`infer_types`], but reports an unresolved root as an error.
///
/// The error names the deepest unresolved node on the leftmost unresolved path, which is
/// where the mismatch was introduced: all of its children resolved, yet it did not.
pub fn check_types(node: &mut Node) -> TypeResult<ValueType> {
    match infer_types(node) {
        ValueType::Unknown => {
            let mut culprit = &*node;
            let mut depth = 0;
            while let Some(child) = culprit.children().find(|c| c.ty.is_unknown()) {
                culprit = child;
                depth += 1;
            }
            Err(TypeError::Unresolved {
                node: culprit.node_type(),
                depth,
            })
        }
        ty => Ok(ty),
    }
}
