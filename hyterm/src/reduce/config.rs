#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIs, EnumIter};

use crate::reduce::{DispatchReducer, ExhaustiveReducer, Reducer};

/// Which strategy [`ReducerConfig::build`] constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIs, EnumIter, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    /// [`ExhaustiveReducer`]: scan every rule, restart on the first that fires.
    Exhaustive,
    /// [`DispatchReducer`]: match on the node variant and try only its rules.
    #[default]
    Dispatch,
}

/// Literal kind the right-operand rules treat as "already reduced".
///
/// With [`OperandKind`](Self::OperandKind) the rule instantiated for an operator uses that
/// operator's operand kind on both sides (booleans for `And`/`Or`, numbers otherwise), which is
/// what makes every well-typed boolean expression reduce to a literal.
///
/// [`NumberLiteral`](Self::NumberLiteral) reproduces the historical behavior where every
/// right-operand rule, including the ones for `And`/`Or`, checks for number literals. Under
/// that guard an `And`/`Or` whose left operand is already a boolean never reduces its right
/// operand, so e.g. `true && (true || false)` stays stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIs, EnumIter, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RightOperandGuard {
    #[default]
    OperandKind,
    NumberLiteral,
}

/// Configuration for building a reduction strategy.
///
/// ```
/// use hyterm::expr::func::*;
/// use hyterm::reduce::{Reducer, ReducerConfig, StrategyKind};
///
/// let reducer = ReducerConfig::new()
///     .with_strategy(StrategyKind::Exhaustive)
///     .build();
/// let mut expr = or(boolean(false), greater_than(number(3), number(2)));
/// reducer.reduce(&mut expr);
/// assert_eq!(expr, boolean(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReducerConfig {
    pub strategy: StrategyKind,
    pub right_operand_guard: RightOperandGuard,
}

impl ReducerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_right_operand_guard(mut self, guard: RightOperandGuard) -> Self {
        self.right_operand_guard = guard;
        self
    }

    /// Construct the configured strategy.
    pub fn build(&self) -> Box<dyn Reducer> {
        match self.strategy {
            StrategyKind::Exhaustive => {
                Box::new(ExhaustiveReducer::with_guard(self.right_operand_guard))
            }
            StrategyKind::Dispatch => Box::new(DispatchReducer::with_guard(self.right_operand_guard)),
        }
    }
}
