use log::trace;

use crate::expr::variant::BinaryOp;
use crate::expr::{Node, NodeType};
use crate::reduce::rules::{CombineLiterals, ReduceCondition, ReduceLeft, ReduceRight, SelectBranch};
use crate::reduce::{Reducer, ReductionRule, RightOperandGuard, SubtreeReducer};

/// The three rules of one binary operator, tried in a fixed order.
#[derive(Debug, Clone, Copy)]
struct OperatorRules {
    left: ReduceLeft,
    right: ReduceRight,
    combine: CombineLiterals,
}

impl OperatorRules {
    fn new(op: BinaryOp, guard: RightOperandGuard) -> Self {
        Self {
            left: ReduceLeft::new(op),
            right: ReduceRight::new(op, guard),
            combine: CombineLiterals::new(op),
        }
    }

    /// Try left, then right, then combine; every rule is attempted.
    fn step(&self, slot: &mut Node, reducer: &dyn SubtreeReducer) -> bool {
        let left = self.left.try_reduce(slot, reducer);
        let right = self.right.try_reduce(slot, reducer);
        let combine = self.combine.try_reduce(slot, reducer);
        left | right | combine
    }
}

/// Strategy that switches on the root variant and applies only the rules relevant to it.
///
/// Binary operators try left-operand reduction, right-operand reduction, then literal
/// combination; `If` tries condition reduction then branch selection; literals are left as
/// they are. The loop repeats until an iteration changes nothing. On well-formed trees this
/// reaches the same normal form as [`ExhaustiveReducer`](super::ExhaustiveReducer).
#[derive(Debug, Clone, Copy)]
pub struct DispatchReducer {
    add: OperatorRules,
    subtract: OperatorRules,
    less_than: OperatorRules,
    greater_than: OperatorRules,
    and: OperatorRules,
    or: OperatorRules,
    condition: ReduceCondition,
    select: SelectBranch,
}

impl DispatchReducer {
    pub fn new() -> Self {
        Self::with_guard(RightOperandGuard::default())
    }

    pub fn with_guard(guard: RightOperandGuard) -> Self {
        Self {
            add: OperatorRules::new(BinaryOp::Add, guard),
            subtract: OperatorRules::new(BinaryOp::Subtract, guard),
            less_than: OperatorRules::new(BinaryOp::LessThan, guard),
            greater_than: OperatorRules::new(BinaryOp::GreaterThan, guard),
            and: OperatorRules::new(BinaryOp::And, guard),
            or: OperatorRules::new(BinaryOp::Or, guard),
            condition: ReduceCondition,
            select: SelectBranch,
        }
    }
}

impl Default for DispatchReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubtreeReducer for DispatchReducer {
    fn reduce_subtree(&self, node: &mut Node) -> bool {
        let mut changed = false;
        loop {
            let node_type = node.node_type();
            let fired = match node_type {
                NodeType::Number | NodeType::Boolean => false,
                NodeType::Add => self.add.step(node, self),
                NodeType::Subtract => self.subtract.step(node, self),
                NodeType::LessThan => self.less_than.step(node, self),
                NodeType::GreaterThan => self.greater_than.step(node, self),
                NodeType::And => self.and.step(node, self),
                NodeType::Or => self.or.step(node, self),
                NodeType::If => {
                    let condition = self.condition.try_reduce(node, self);
                    let select = self.select.try_reduce(node, self);
                    condition | select
                }
            };

            if !fired {
                return changed;
            }
            trace!("{node_type} step fired, node is now {}", node.node_type());
            changed = true;
        }
    }
}

impl Reducer for DispatchReducer {
    fn name(&self) -> &'static str {
        "dispatch"
    }
}
