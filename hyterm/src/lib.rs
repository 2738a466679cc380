//! Hyterm: normalization and type inference for a small typed expression language.
//!
//! The language has integer and boolean literals, `+`, `-`, `<`, `>`, `&&`, `||` and
//! `if .. then .. else ..`. Trees are owned [`Node`](expr::Node) values; nothing is parsed.
//!
//! Two independent passes operate on a tree:
//!  - Reduction ([`reduce`]): rewrite rules applied to a fixed point by one of two
//!    interchangeable strategies. A well-formed tree ends up as a single literal; an ill-formed
//!    one (mismatched operand types) stops changing with a non-literal root.
//!  - Type inference ([`types`]): a post-order walk annotating each node with `Number`,
//!    `Boolean` or `Unknown`.
//!
//! Neither pass raises errors by default; the checked variants
//! ([`Reducer::normalize`](reduce::Reducer::normalize), [`types::check_types`]) turn the
//! sentinels into [`error`] values.
//!
//! Example
//! ```
//! use hyterm::prelude::*;
//!
//! let mut expr = branch(
//!     less_than(number(1), number(2)),
//!     add(number(40), number(2)),
//!     number(0),
//! );
//! assert_eq!(infer_types(&mut expr), ValueType::Number);
//!
//! let reducer = DispatchReducer::new();
//! assert_eq!(reducer.normalize(&mut expr), Ok(Literal::Number(42)));
//!
//! let mut stuck = add(boolean(true), number(1));
//! assert!(reducer.normalize(&mut stuck).is_err());
//! assert_eq!(stuck.to_string(), "true + 1");
//! ```

/// Error types of the checked APIs.
pub mod error;
/// Expression trees: node variants, builders, and pretty-printing.
pub mod expr;
/// Reduction rules and strategies.
pub mod reduce;
/// Static type inference.
pub mod types;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `Node`/`Expr` and the free-function builders from `func::*`
    //! - Both strategies, their traits, and the configuration
    //! - Type inference entry points
    //! - Pretty-printing via `PrettyNode`
    pub use crate::expr::{
        Expr, Node, NodeType,
        func::*,
        pretty::PrettyNode,
        variant::{BinaryOp, Literal, LiteralKind},
    };

    pub use crate::reduce::{
        DispatchReducer, ExhaustiveReducer, Reducer, ReducerConfig, RightOperandGuard,
        StrategyKind, reduce,
    };

    pub use crate::types::{ValueType, check_types, infer_types};

    pub use crate::error::{ReduceError, ReduceResult, TypeError, TypeResult};
}
