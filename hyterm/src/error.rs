use strum::{EnumIs, EnumTryAs};
use thiserror::Error;

use crate::expr::NodeType;

/// Failure of the checked reduction API ([`Reducer::normalize`](crate::reduce::Reducer::normalize)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, EnumTryAs, Error)]
pub enum ReduceError {
    /// The fixed point was reached but the root is not a literal.
    #[error(
        "Reduction reached a fixed point on a `{residual}` node that no rule can rewrite. The expression is ill-formed (most likely an operand of the wrong type)."
    )]
    Stuck { residual: NodeType },
}

/// Failure of the checked type API ([`check_types`](crate::types::check_types)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, EnumTryAs, Error)]
pub enum TypeError {
    /// The root could not be typed. `node` is the innermost unresolved node, `depth` levels
    /// below the root.
    #[error(
        "Could not infer a type for the expression. The first untypeable node is a `{node}` at depth {depth}, whose operands do not have the types it requires."
    )]
    Unresolved { node: NodeType, depth: usize },
}

pub type ReduceResult<T> = Result<T, ReduceError>;
pub type TypeResult<T> = Result<T, TypeError>;
