use stepsort::algorithm::{Algorithm, ALGORITHMS};
use stepsort::array::ArrayError;
use stepsort::engine::{Engine, EngineError};

#[test]
fn construction_rejects_zero_size() {
    assert_eq!(
        Engine::new(0).err(),
        Some(EngineError::Array(ArrayError::InvalidSize))
    );
    assert_eq!(
        Engine::new_with_seed(0, 9).err(),
        Some(EngineError::Array(ArrayError::InvalidSize))
    );
}

#[test]
fn construction_fills_the_identity_sequence() {
    let engine = Engine::new(6).unwrap();
    assert_eq!(engine.snapshot(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(engine.len(), 6);
    assert!(!engine.is_empty());
}

#[test]
fn randomize_yields_length_n_permutations() {
    let mut engine = Engine::new_with_seed(32, 4).unwrap();
    engine.randomize();
    let first = engine.snapshot();
    assert_eq!(first.len(), 32);

    engine.randomize();
    let second = engine.snapshot();
    assert_eq!(second.len(), 32);
    // Two draws from a 32! space; a collision would mean the RNG is broken.
    assert_ne!(first, second);

    let mut sorted = second;
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=32).collect::<Vec<i32>>());
}

#[test]
fn load_replaces_contents_and_rejects_empty() {
    let mut engine = Engine::new(3).unwrap();
    engine.load(&[7, -2, 7, 0]).unwrap();
    assert_eq!(engine.snapshot(), vec![7, -2, 7, 0]);
    assert_eq!(engine.len(), 4);

    let before = engine.snapshot();
    assert_eq!(
        engine.load(&[]).err(),
        Some(EngineError::Array(ArrayError::InvalidInput))
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn mode_dispatch_is_total_over_all_kinds() {
    for algorithm in ALGORITHMS {
        let mut engine = Engine::new_with_seed(8, 2).unwrap();
        engine.randomize();
        engine.select_algorithm(algorithm);
        assert_eq!(engine.algorithm(), algorithm);

        if algorithm.is_stepped() {
            assert_eq!(engine.run().err(), Some(EngineError::NotRunnable(algorithm)));
            let mut guard = 0;
            while !engine.step().unwrap() {
                guard += 1;
                assert!(guard < 10_000, "{} failed to terminate", algorithm);
            }
        } else {
            assert_eq!(engine.step().err(), Some(EngineError::NotSteppable(algorithm)));
            engine.run().unwrap();
        }
        assert_eq!(engine.snapshot(), (1..=8).collect::<Vec<i32>>());
    }
}

#[test]
fn rejected_calls_leave_state_untouched() {
    let mut engine = Engine::new_with_seed(8, 6).unwrap();
    engine.randomize();
    engine.select_algorithm(Algorithm::Shell);
    let values = engine.snapshot();

    assert!(engine.step().is_err());
    assert_eq!(engine.snapshot(), values);
    assert_eq!(engine.comparisons(), 0);
    assert_eq!(engine.swaps(), 0);
}

#[test]
fn reset_stats_only_touches_counters() {
    let mut engine = Engine::new(5).unwrap();
    engine.load(&[5, 4, 3, 2, 1]).unwrap();
    engine.select_algorithm(Algorithm::Merge);
    engine.run().unwrap();
    assert!(engine.comparisons() > 0);
    assert!(engine.swaps() > 0);

    let values = engine.snapshot();
    engine.reset_stats();
    assert_eq!(engine.comparisons(), 0);
    assert_eq!(engine.swaps(), 0);
    assert_eq!(engine.snapshot(), values);
}

#[test]
fn counters_accumulate_until_explicitly_reset() {
    let mut engine = Engine::new_with_seed(16, 8).unwrap();
    engine.select_algorithm(Algorithm::Quick);
    engine.randomize();
    engine.run().unwrap();
    let after_first = engine.comparisons();
    assert!(after_first > 0);

    // No implicit reset between runs: the second run adds to the totals.
    engine.randomize();
    engine.run().unwrap();
    assert!(engine.comparisons() > after_first);
}

#[test]
fn full_scenario_matches_reference_counts() {
    let mut engine = Engine::new(5).unwrap();
    engine.load(&[5, 3, 8, 1, 9]).unwrap();
    engine.select_algorithm(Algorithm::Bubble);
    while !engine.step().unwrap() {}
    assert_eq!(engine.snapshot(), vec![1, 3, 5, 8, 9]);
    assert_eq!(engine.comparisons(), 10);
    assert_eq!(engine.swaps(), 4);

    engine.reset_stats();
    engine.select_algorithm(Algorithm::Heap);
    engine.run().unwrap();
    assert_eq!(engine.snapshot(), vec![1, 3, 5, 8, 9]);
    assert!(engine.comparisons() > 0);
}
