//! Term rewriting: reduction rules and the strategies that drive them to a fixed point.
//!
//! Role
//! - A [`ReductionRule`] inspects one node slot and either rewrites it or leaves it alone.
//!   Rules that need to normalize a subtree first receive a [`SubtreeReducer`] capability at
//!   call time instead of holding a reference to the strategy that owns them.
//! - A [`Reducer`] (strategy) applies its rules until none fires. Two interchangeable
//!   strategies are provided:
//!   - [`ExhaustiveReducer`]: tries an ordered list of every rule, restarting from the top
//!     whenever one fires.
//!   - [`DispatchReducer`]: matches on the root variant and only tries the rules relevant to it.
//!
//! Both strategies reach the same normal form on every well-formed tree. An ill-formed tree
//! (an operand of the wrong type somewhere) stops changing with a non-literal root; the plain
//! [`Reducer::reduce`] API leaves that for the caller to detect, [`Reducer::normalize`]
//! reports it as a [`ReduceError`].
//!
//! Termination
//! - Every rule that reports a change either replaces a node by a strictly smaller one or
//!   rewrote something inside a strict subtree, so the tree size decreases with every
//!   reported change.
//!
//! Example
//! ```
//! use hyterm::expr::func::*;
//! use hyterm::expr::variant::Literal;
//! use hyterm::reduce::{DispatchReducer, ExhaustiveReducer, Reducer};
//!
//! let build = || add(add(number(1), number(2)), add(number(3), number(4)));
//!
//! let mut a = build();
//! let mut b = build();
//! ExhaustiveReducer::new().reduce(&mut a);
//! DispatchReducer::new().reduce(&mut b);
//! assert_eq!(a, b);
//! assert_eq!(a.literal(), Some(Literal::Number(10)));
//! ```
mod config;
mod dispatch;
mod exhaustive;
pub mod rules;

use std::fmt;

use log::debug;

pub use config::*;
pub use dispatch::*;
pub use exhaustive::*;

use crate::error::{ReduceError, ReduceResult};
use crate::expr::Node;
use crate::expr::variant::Literal;

/// Capability to reduce a subtree to its fixed point.
///
/// Returns `true` iff at least one rewrite happened inside `node`.
pub trait SubtreeReducer {
    fn reduce_subtree(&self, node: &mut Node) -> bool;
}

/// A single pattern-match-and-rewrite step over one node slot.
///
/// Contract
/// - Return `true` iff the rule rewrote `slot` or something below it; on `false` the slot
///   must be left untouched.
/// - Literal nodes never match.
pub trait ReductionRule: fmt::Display + Send + Sync {
    fn try_reduce(&self, slot: &mut Node, reducer: &dyn SubtreeReducer) -> bool;
}

/// A strategy driving reduction rules to a fixed point over a whole tree.
pub trait Reducer: SubtreeReducer + Send + Sync {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Reduce `node` in place until no rule applies. Returns whether anything changed.
    ///
    /// The resulting node is a literal unless the expression is ill-formed.
    fn reduce(&self, node: &mut Node) -> bool {
        let changed = self.reduce_subtree(node);
        debug!(
            "{} reduction finished on a {} node (changed: {}, stuck: {})",
            self.name(),
            node.node_type(),
            changed,
            !node.is_literal()
        );
        changed
    }

    /// Reduce `node` and return its value, or [`ReduceError::Stuck`] when the fixed point is
    /// not a literal. The tree is left at its fixed point either way.
    fn normalize(&self, node: &mut Node) -> ReduceResult<Literal> {
        self.reduce(node);
        node.literal().ok_or_else(|| ReduceError::Stuck {
            residual: node.node_type(),
        })
    }
}

/// Reduce `tree` to a fixed point with the chosen strategy. Returns whether anything changed.
#[inline]
pub fn reduce(tree: &mut Node, reducer: &dyn Reducer) -> bool {
    reducer.reduce(tree)
}
