#![allow(dead_code)]

use hyterm::prelude::*;
use rand::Rng;

/// Both strategies with the default configuration, labelled for assertion messages.
pub fn strategies() -> Vec<Box<dyn Reducer>> {
    vec![
        ReducerConfig::new()
            .with_strategy(StrategyKind::Exhaustive)
            .build(),
        ReducerConfig::new()
            .with_strategy(StrategyKind::Dispatch)
            .build(),
    ]
}

/// Reference evaluator used to check reduction results. `None` for ill-typed trees.
pub fn evaluate(node: &Node) -> Option<Literal> {
    match &node.expr {
        Expr::Number(n) => Some(Literal::Number(*n)),
        Expr::Boolean(b) => Some(Literal::Boolean(*b)),
        Expr::If {
            condition,
            when_true,
            when_false,
        } => match evaluate(condition)? {
            Literal::Boolean(true) => evaluate(when_true),
            Literal::Boolean(false) => evaluate(when_false),
            Literal::Number(_) => None,
        },
        _ => {
            let (op, left, right) = node.as_binary()?;
            op.apply(evaluate(left)?, evaluate(right)?)
        }
    }
}

/// Random well-typed tree producing a value of `kind`.
pub fn well_typed(kind: LiteralKind, budget: usize, rng: &mut impl Rng) -> Node {
    if budget == 0 || rng.random_bool(0.2) {
        return match kind {
            LiteralKind::Number => number(rng.random_range(-50..=50)),
            LiteralKind::Boolean => boolean(rng.random_bool(0.5)),
        };
    }

    if rng.random_bool(0.15) {
        let condition = well_typed(LiteralKind::Boolean, budget - 1, rng);
        let when_true = well_typed(kind, budget - 1, rng);
        let when_false = well_typed(kind, budget - 1, rng);
        return branch(condition, when_true, when_false);
    }

    let candidates: Vec<BinaryOp> = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::LessThan,
        BinaryOp::GreaterThan,
        BinaryOp::And,
        BinaryOp::Or,
    ]
    .into_iter()
    .filter(|op| op.result_kind() == kind)
    .collect();
    let op = candidates[rng.random_range(0..candidates.len())];

    let left = well_typed(op.operand_kind(), budget - 1, rng);
    let right = well_typed(op.operand_kind(), budget - 1, rng);
    Node::binary(op, left, right)
}

/// Random tree with no typing discipline at all.
pub fn arbitrary(budget: usize, rng: &mut impl Rng) -> Node {
    if budget == 0 || rng.random_bool(0.2) {
        return if rng.random_bool(0.5) {
            number(rng.random_range(-50..=50))
        } else {
            boolean(rng.random_bool(0.5))
        };
    }

    match rng.random_range(0..7) {
        0 => add(arbitrary(budget - 1, rng), arbitrary(budget - 1, rng)),
        1 => subtract(arbitrary(budget - 1, rng), arbitrary(budget - 1, rng)),
        2 => less_than(arbitrary(budget - 1, rng), arbitrary(budget - 1, rng)),
        3 => greater_than(arbitrary(budget - 1, rng), arbitrary(budget - 1, rng)),
        4 => and(arbitrary(budget - 1, rng), arbitrary(budget - 1, rng)),
        5 => or(arbitrary(budget - 1, rng), arbitrary(budget - 1, rng)),
        _ => branch(
            arbitrary(budget - 1, rng),
            arbitrary(budget - 1, rng),
            arbitrary(budget - 1, rng),
        ),
    }
}

/// Type slots of every node, in pre-order.
pub fn type_annotations(node: &Node) -> Vec<ValueType> {
    let mut out = vec![node.ty];
    for child in node.children() {
        out.extend(type_annotations(child));
    }
    out
}
