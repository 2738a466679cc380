mod common;

use common::{arbitrary, evaluate, well_typed};
use hyterm::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn strategies_agree_on_well_typed_trees() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    let exhaustive = ExhaustiveReducer::new();
    let dispatch = DispatchReducer::new();

    for round in 0..300 {
        let kind = if round % 2 == 0 {
            LiteralKind::Number
        } else {
            LiteralKind::Boolean
        };
        let original = well_typed(kind, 6, &mut rng);
        let expected = evaluate(&original).map(Node::from);

        let mut a = original.clone();
        let mut b = original.clone();
        exhaustive.reduce(&mut a);
        dispatch.reduce(&mut b);

        assert_eq!(a, b, "strategies disagree on {original}");
        assert_eq!(Some(a), expected, "wrong value for {original}");
    }
}

#[test]
fn strategies_agree_on_arbitrary_trees() {
    // Preconditions of the rules are mutually exclusive, so even stuck terms end in the same
    // place under both strategies.
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    let exhaustive = ExhaustiveReducer::new();
    let dispatch = DispatchReducer::new();

    for _ in 0..300 {
        let original = arbitrary(5, &mut rng);

        let mut a = original.clone();
        let mut b = original.clone();
        let changed_a = exhaustive.reduce(&mut a);
        let changed_b = dispatch.reduce(&mut b);

        assert_eq!(a, b, "strategies disagree on {original}");
        assert_eq!(changed_a, changed_b);
    }
}

#[test]
fn well_typed_trees_reduce_to_a_literal_of_their_type() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for _ in 0..300 {
        let mut original = arbitrary(4, &mut rng);
        let ty = infer_types(&mut original);
        if ty.is_unknown() {
            continue;
        }

        for reducer in common::strategies() {
            let mut node = original.clone();
            let value = reducer
                .normalize(&mut node)
                .unwrap_or_else(|e| panic!("{original} is typed {ty} but got stuck: {e}"));
            assert_eq!(ValueType::from(value.kind()), ty);
        }
    }
}

#[test]
fn numeric_guard_agrees_on_arithmetic() {
    // Both guards coincide on operators whose operands are numbers.
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let legacy = ReducerConfig::new()
        .with_right_operand_guard(RightOperandGuard::NumberLiteral)
        .build();
    let default = DispatchReducer::new();

    for _ in 0..100 {
        let original = well_typed(LiteralKind::Number, 5, &mut rng);
        let mut a = original.clone();
        let mut b = original.clone();
        legacy.reduce(&mut a);
        default.reduce(&mut b);
        if !contains_boolean_operator(&original) {
            assert_eq!(a, b, "guards disagree on {original}");
        }
    }
}

fn contains_boolean_operator(node: &Node) -> bool {
    matches!(node.node_type(), NodeType::And | NodeType::Or)
        || node.children().any(contains_boolean_operator)
}
