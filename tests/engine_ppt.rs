//! Contract test: one walk across the public API must leave every
//! externally enforceable invariant in the PPT log.

use stepsort::algorithm::Algorithm;
use stepsort::engine::{Engine, EngineError};
use stepsort::harness::StepHarness;
use stepsort::invariant_ppt::{
    clear_invariant_log, contract_test, ARRAY_LEGALITY, ARRAY_REJECTS_INVALID, CURSOR_IN_BOUNDS,
    ENGINE_REJECTS_MODE, HARNESS_DRIVE_COMPLETE, METRICS_MONOTONIC, PERMUTATION_PRESERVED,
    RANDOMIZE_PRESERVES_LEN, RUN_COMPLETES, SORTED_ON_DONE, STEP_IDEMPOTENT_DONE,
};

#[test]
fn contract_engine_public_api() {
    clear_invariant_log();

    // Constructor legality and rejection.
    let mut engine = Engine::new_with_seed(8, 1).unwrap();
    assert!(Engine::new(0).is_err());

    // Shuffle preserves length.
    engine.randomize();

    // Load legality and rejection.
    engine.load(&[4, 2, 3, 1]).unwrap();
    assert!(engine.load(&[]).is_err());

    // Stepped drive: fresh cursor bounds, sorted on done, idempotent re-step.
    engine.select_algorithm(Algorithm::Insertion);
    while !engine.step().unwrap() {}
    assert!(engine.step().unwrap());

    // Mode mismatches rejected in both directions.
    assert!(matches!(engine.run(), Err(EngineError::NotRunnable(_))));
    engine.select_algorithm(Algorithm::Merge);
    assert!(matches!(engine.step(), Err(EngineError::NotSteppable(_))));

    // Instant run: permutation kept, counters monotonic, result sorted.
    engine.run().unwrap();

    // Harness drive reaches the sorted terminal state.
    let mut harness = StepHarness::new(16, 9, Algorithm::Selection);
    harness.drive_to_completion().unwrap();

    contract_test(
        "engine public API",
        &[
            ARRAY_LEGALITY,
            ARRAY_REJECTS_INVALID,
            RANDOMIZE_PRESERVES_LEN,
            CURSOR_IN_BOUNDS,
            SORTED_ON_DONE,
            PERMUTATION_PRESERVED,
            ENGINE_REJECTS_MODE,
            METRICS_MONOTONIC,
            RUN_COMPLETES,
            STEP_IDEMPOTENT_DONE,
            HARNESS_DRIVE_COMPLETE,
        ],
    );
}
