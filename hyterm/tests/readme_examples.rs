use hyterm::prelude::*;

#[test]
fn readme_example_compiles_and_behaves() {
    let mut expr = branch(
        less_than(number(1), number(2)),
        add(number(40), number(2)),
        number(0),
    );
    assert_eq!(infer_types(&mut expr), ValueType::Number);

    let reducer = ReducerConfig::new()
        .with_strategy(StrategyKind::Exhaustive)
        .build();
    assert_eq!(reducer.normalize(&mut expr), Ok(Literal::Number(42)));
}

#[test]
fn lib_rs_doc_example_stuck_term() {
    let reducer = DispatchReducer::new();
    let mut stuck = add(boolean(true), number(1));
    assert_eq!(
        reducer.normalize(&mut stuck),
        Err(ReduceError::Stuck {
            residual: NodeType::Add
        })
    );
    assert_eq!(stuck.to_string(), "true + 1");
}
