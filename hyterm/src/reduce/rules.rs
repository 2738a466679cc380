//! The reduction rules.
//!
//! Three families are instantiated once per [`BinaryOp`]:
//! - [`CombineLiterals`]: both operands are literals of the operator's operand kind, so the
//!   node is replaced by the computed literal.
//! - [`ReduceLeft`]: the left operand is not yet such a literal, so it is reduced.
//! - [`ReduceRight`]: the left operand is a literal but the right one is not, so the right one
//!   is reduced.
//!
//! Two more rules handle conditionals: [`ReduceCondition`] and [`SelectBranch`].
//!
//! The preconditions are mutually exclusive for a given node, which is what lets the dispatch
//! strategy try them in a fixed order within one iteration.
use std::fmt;

use crate::expr::variant::{BinaryOp, Literal, LiteralKind};
use crate::expr::{Expr, Node};
use crate::reduce::{ReductionRule, RightOperandGuard, SubtreeReducer};

/// Replace `left op right` by its value when both operands are literals of the right kind.
///
/// Never matches on mismatched operands: such a node is permanently irreducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombineLiterals {
    op: BinaryOp,
}

impl CombineLiterals {
    pub fn new(op: BinaryOp) -> Self {
        Self { op }
    }
}

impl ReductionRule for CombineLiterals {
    fn try_reduce(&self, slot: &mut Node, _reducer: &dyn SubtreeReducer) -> bool {
        let Some((op, left, right)) = slot.as_binary() else {
            return false;
        };
        if op != self.op {
            return false;
        }

        let (Some(lhs), Some(rhs)) = (left.literal(), right.literal()) else {
            return false;
        };
        match op.apply(lhs, rhs) {
            Some(value) => {
                *slot = Node::from(value);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for CombineLiterals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "combine-literals({})", self.op)
    }
}

/// Reduce the left operand of `op` while it is not a literal of the operand kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceLeft {
    op: BinaryOp,
}

impl ReduceLeft {
    pub fn new(op: BinaryOp) -> Self {
        Self { op }
    }
}

impl ReductionRule for ReduceLeft {
    fn try_reduce(&self, slot: &mut Node, reducer: &dyn SubtreeReducer) -> bool {
        let Some((op, left, _)) = slot.as_binary_mut() else {
            return false;
        };
        if op != self.op || left.is_literal_of(op.operand_kind()) {
            return false;
        }

        // A literal of the wrong kind reduces to itself, which reports no change.
        reducer.reduce_subtree(left)
    }
}

impl fmt::Display for ReduceLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reduce-left({})", self.op)
    }
}

/// Reduce the right operand of `op` once the left one is a literal.
///
/// Which literal kind counts as "reduced" on both sides is chosen by the
/// [`RightOperandGuard`]; see its documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceRight {
    op: BinaryOp,
    guard: RightOperandGuard,
}

impl ReduceRight {
    pub fn new(op: BinaryOp, guard: RightOperandGuard) -> Self {
        Self { op, guard }
    }

    /// Literal kind this instance treats as already reduced.
    pub fn guard_kind(&self) -> LiteralKind {
        match self.guard {
            RightOperandGuard::OperandKind => self.op.operand_kind(),
            RightOperandGuard::NumberLiteral => LiteralKind::Number,
        }
    }
}

impl ReductionRule for ReduceRight {
    fn try_reduce(&self, slot: &mut Node, reducer: &dyn SubtreeReducer) -> bool {
        let kind = self.guard_kind();
        let Some((op, left, right)) = slot.as_binary_mut() else {
            return false;
        };
        if op != self.op || !left.is_literal_of(kind) || right.is_literal_of(kind) {
            return false;
        }

        reducer.reduce_subtree(right)
    }
}

impl fmt::Display for ReduceRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reduce-right({})", self.op)
    }
}

/// Reduce the condition of an `If` while it is not a boolean literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceCondition;

impl ReductionRule for ReduceCondition {
    fn try_reduce(&self, slot: &mut Node, reducer: &dyn SubtreeReducer) -> bool {
        match &mut slot.expr {
            Expr::If { condition, .. } if !condition.is_literal_of(LiteralKind::Boolean) => {
                reducer.reduce_subtree(condition)
            }
            _ => false,
        }
    }
}

impl fmt::Display for ReduceCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("reduce-condition")
    }
}

/// Replace an `If` with a boolean-literal condition by the selected branch.
///
/// The other branch is dropped without ever being reduced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectBranch;

impl ReductionRule for SelectBranch {
    fn try_reduce(&self, slot: &mut Node, _reducer: &dyn SubtreeReducer) -> bool {
        let Expr::If { condition, .. } = &slot.expr else {
            return false;
        };
        let Some(Literal::Boolean(value)) = condition.literal() else {
            return false;
        };

        // Take ownership of the `If` so the chosen branch can be moved out of its box.
        let taken = std::mem::replace(slot, Node::boolean(value));
        if let Expr::If {
            when_true,
            when_false,
            ..
        } = taken.expr
        {
            *slot = if value { *when_true } else { *when_false };
        }
        true
    }
}

impl fmt::Display for SelectBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("select-branch")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::expr::func::*;

    /// Records calls and reduces nothing.
    #[derive(Default)]
    struct Spy {
        calls: Cell<usize>,
    }

    impl SubtreeReducer for Spy {
        fn reduce_subtree(&self, _node: &mut Node) -> bool {
            self.calls.set(self.calls.get() + 1);
            true
        }
    }

    #[test]
    fn combine_ignores_other_operators() {
        let mut node = subtract(number(5), number(2));
        assert!(!CombineLiterals::new(BinaryOp::Add).try_reduce(&mut node, &Spy::default()));
        assert!(CombineLiterals::new(BinaryOp::Subtract).try_reduce(&mut node, &Spy::default()));
        assert_eq!(node, number(3));
    }

    #[test]
    fn combine_never_matches_mismatched_operands() {
        let mut node = add(boolean(true), number(1));
        let before = node.clone();
        assert!(!CombineLiterals::new(BinaryOp::Add).try_reduce(&mut node, &Spy::default()));
        assert_eq!(node, before);
    }

    #[test]
    fn left_rule_delegates_only_for_non_literal_left() {
        let spy = Spy::default();
        let rule = ReduceLeft::new(BinaryOp::Add);

        let mut reduced_left = add(number(1), add(number(2), number(3)));
        assert!(!rule.try_reduce(&mut reduced_left, &spy));

        let mut pending_left = add(add(number(1), number(2)), number(3));
        assert!(rule.try_reduce(&mut pending_left, &spy));
        assert_eq!(spy.calls.get(), 1);
    }

    #[test]
    fn right_rule_waits_for_left_literal() {
        let spy = Spy::default();
        let rule = ReduceRight::new(BinaryOp::Or, RightOperandGuard::OperandKind);

        let mut pending_left = or(or(boolean(false), boolean(true)), or(boolean(true), boolean(true)));
        assert!(!rule.try_reduce(&mut pending_left, &spy));

        let mut pending_right = or(boolean(false), or(boolean(true), boolean(true)));
        assert!(rule.try_reduce(&mut pending_right, &spy));
        assert_eq!(spy.calls.get(), 1);
    }

    #[test]
    fn numeric_guard_skips_boolean_left_operand() {
        let spy = Spy::default();
        let rule = ReduceRight::new(BinaryOp::And, RightOperandGuard::NumberLiteral);
        assert_eq!(rule.guard_kind(), LiteralKind::Number);

        let mut node = and(boolean(true), and(boolean(true), boolean(false)));
        assert!(!rule.try_reduce(&mut node, &spy));
        assert_eq!(spy.calls.get(), 0);
    }

    #[test]
    fn select_branch_discards_unchosen_branch() {
        let mut node = branch(boolean(false), add(number(1), number(1)), number(7));
        assert!(SelectBranch.try_reduce(&mut node, &Spy::default()));
        assert_eq!(node, number(7));

        let mut pending = branch(less_than(number(1), number(2)), number(1), number(2));
        assert!(!SelectBranch.try_reduce(&mut pending, &Spy::default()));
    }

    #[test]
    fn condition_rule_ignores_literal_conditions() {
        let spy = Spy::default();
        let mut node = branch(boolean(true), number(1), number(2));
        assert!(!ReduceCondition.try_reduce(&mut node, &spy));

        let mut pending = branch(less_than(number(1), number(2)), number(1), number(2));
        assert!(ReduceCondition.try_reduce(&mut pending, &spy));
        assert_eq!(spy.calls.get(), 1);
    }
}
