//! Operator and literal descriptors shared by the rewrite rules and the type pass.
use std::fmt;

use strum::{Display, EnumIs, EnumIter, EnumTryAs, IntoStaticStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two kinds of irreducible values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, EnumIter, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiteralKind {
    Number,
    Boolean,
}

/// An irreducible value, extracted from a literal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    Number(i64),
    Boolean(bool),
}

impl Literal {
    #[inline]
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::Number(_) => LiteralKind::Number,
            Literal::Boolean(_) => LiteralKind::Boolean,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Number(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

/// The six binary operators of the language.
///
/// Each operator expects both operands to be of a single [`LiteralKind`] (see
/// [`BinaryOp::operand_kind`]) and produces a value of [`BinaryOp::result_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Subtract,
    LessThan,
    GreaterThan,
    And,
    Or,
}

impl BinaryOp {
    /// Kind both operands must have for the operator to combine them.
    #[inline]
    pub const fn operand_kind(self) -> LiteralKind {
        match self {
            BinaryOp::Add | BinaryOp::Subtract | BinaryOp::LessThan | BinaryOp::GreaterThan => {
                LiteralKind::Number
            }
            BinaryOp::And | BinaryOp::Or => LiteralKind::Boolean,
        }
    }

    /// Kind of the value produced by combining two operands.
    #[inline]
    pub const fn result_kind(self) -> LiteralKind {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => LiteralKind::Number,
            BinaryOp::LessThan | BinaryOp::GreaterThan | BinaryOp::And | BinaryOp::Or => {
                LiteralKind::Boolean
            }
        }
    }

    /// Surface symbol used by the pretty-printer.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Combine two literal operands, or `None` when either operand has the wrong kind.
    ///
    /// Arithmetic wraps on overflow so that combination is total.
    pub fn apply(self, lhs: Literal, rhs: Literal) -> Option<Literal> {
        use Literal::*;

        let result = match (self, lhs, rhs) {
            (BinaryOp::Add, Number(a), Number(b)) => Number(a.wrapping_add(b)),
            (BinaryOp::Subtract, Number(a), Number(b)) => Number(a.wrapping_sub(b)),
            (BinaryOp::LessThan, Number(a), Number(b)) => Boolean(a < b),
            (BinaryOp::GreaterThan, Number(a), Number(b)) => Boolean(a > b),
            (BinaryOp::And, Boolean(a), Boolean(b)) => Boolean(a && b),
            (BinaryOp::Or, Boolean(a), Boolean(b)) => Boolean(a || b),
            _ => return None,
        };
        debug_assert_eq!(result.kind(), self.result_kind());
        Some(result)
    }
}
