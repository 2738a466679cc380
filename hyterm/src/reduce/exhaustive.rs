use std::fmt;

use log::trace;
use strum::IntoEnumIterator;

use crate::expr::Node;
use crate::expr::variant::BinaryOp;
use crate::reduce::rules::{CombineLiterals, ReduceCondition, ReduceLeft, ReduceRight, SelectBranch};
use crate::reduce::{Reducer, ReductionRule, RightOperandGuard, SubtreeReducer};

/// Strategy that keeps every rule in one ordered list.
///
/// Algorithm: scan the list against the root in registration order; as soon as one rule
/// fires, restart from the top. Stop after a full pass in which nothing fired. Subtrees are
/// reduced recursively with the same scan.
///
/// Registration order: the six literal-combining rules, the six left-operand rules, the six
/// right-operand rules (each family in [`BinaryOp`] order), then the condition rule and the
/// branch-selection rule.
pub struct ExhaustiveReducer {
    rules: Vec<Box<dyn ReductionRule>>,
}

impl ExhaustiveReducer {
    pub fn new() -> Self {
        Self::with_guard(RightOperandGuard::default())
    }

    pub fn with_guard(guard: RightOperandGuard) -> Self {
        let mut rules: Vec<Box<dyn ReductionRule>> = Vec::with_capacity(20);
        for op in BinaryOp::iter() {
            rules.push(Box::new(CombineLiterals::new(op)));
        }
        for op in BinaryOp::iter() {
            rules.push(Box::new(ReduceLeft::new(op)));
        }
        for op in BinaryOp::iter() {
            rules.push(Box::new(ReduceRight::new(op, guard)));
        }
        rules.push(Box::new(ReduceCondition));
        rules.push(Box::new(SelectBranch));

        Self { rules }
    }

    /// Registered rules, in scan order.
    pub fn rules(&self) -> impl Iterator<Item = &dyn ReductionRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }
}

impl Default for ExhaustiveReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExhaustiveReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.to_string()))
            .finish()
    }
}

impl SubtreeReducer for ExhaustiveReducer {
    fn reduce_subtree(&self, node: &mut Node) -> bool {
        let mut changed = false;
        'scan: loop {
            for rule in &self.rules {
                if rule.try_reduce(node, self) {
                    trace!("{rule} fired, node is now {}", node.node_type());
                    changed = true;
                    continue 'scan;
                }
            }
            return changed;
        }
    }
}

impl Reducer for ExhaustiveReducer {
    fn name(&self) -> &'static str {
        "exhaustive"
    }
}
