use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use hyterm::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn build_skewed_sum(len: i64) -> Node {
    // 0 + 1 + 2 + ... + len, nested to the left
    (1..=len).fold(number(0), |acc, i| add(acc, number(i)))
}

fn build_complex_expr(kind: LiteralKind) -> Node {
    // Build a medium-sized well-typed expression. Use randomness seeded for determinism.
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);

    fn next_create(kind: LiteralKind, budget: usize, rng: &mut impl Rng) -> Node {
        if budget == 0 || rng.random_bool(0.1) {
            return match kind {
                LiteralKind::Number => number(rng.random_range(-100..=100)),
                LiteralKind::Boolean => boolean(rng.random_bool(0.5)),
            };
        }

        if rng.random_bool(0.1) {
            let condition = next_create(LiteralKind::Boolean, budget - 1, rng);
            let when_true = next_create(kind, budget - 1, rng);
            let when_false = next_create(kind, budget - 1, rng);
            return branch(condition, when_true, when_false);
        }

        let op = match (kind, rng.random_range(0..2)) {
            (LiteralKind::Number, 0) => BinaryOp::Add,
            (LiteralKind::Number, _) => BinaryOp::Subtract,
            (LiteralKind::Boolean, 0) => match rng.random_range(0..4) {
                0 => BinaryOp::LessThan,
                1 => BinaryOp::GreaterThan,
                2 => BinaryOp::And,
                _ => BinaryOp::Or,
            },
            (LiteralKind::Boolean, _) => BinaryOp::And,
        };
        let left = next_create(op.operand_kind(), budget - 1, rng);
        let right = next_create(op.operand_kind(), budget - 1, rng);
        Node::binary(op, left, right)
    }

    next_create(kind, 12, &mut rng)
}

fn bench_reduce(c: &mut Criterion) {
    let inputs = [
        ("skewed", build_skewed_sum(500)),
        ("number", build_complex_expr(LiteralKind::Number)),
        ("boolean", build_complex_expr(LiteralKind::Boolean)),
    ];

    for strategy in [StrategyKind::Exhaustive, StrategyKind::Dispatch] {
        let reducer = ReducerConfig::new().with_strategy(strategy).build();

        for (label, expr) in &inputs {
            c.bench_function(&format!("reduce_{}_{label}", reducer.name()), |b| {
                b.iter_batched(
                    || expr.clone(),
                    |mut node| {
                        reducer.reduce(&mut node);
                        black_box(node)
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
}

fn bench_infer_types(c: &mut Criterion) {
    let expr = build_complex_expr(LiteralKind::Number);

    c.bench_function("infer_types_complex", |b| {
        b.iter_batched(
            || expr.clone(),
            |mut node| black_box(infer_types(&mut node)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_pretty(c: &mut Criterion) {
    let expr = build_complex_expr(LiteralKind::Boolean);

    c.bench_function("pretty_string_complex", |b| {
        b.iter(|| black_box(expr.pretty_string()))
    });
}

criterion_group!(benches, bench_reduce, bench_infer_types, bench_pretty);
criterion_main!(benches);
