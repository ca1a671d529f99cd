//! Engine facade: one array, one metrics counter, one active algorithm.
//!
//! The engine is driven entirely by its caller. A stepped algorithm advances
//! one primitive operation per [`Engine::step`] call, so the caller's control
//! loop (an animation frame, a test harness, a manual poll) decides the pace;
//! a run-to-completion algorithm sorts the whole array inside one
//! [`Engine::run`] call. Between calls the engine holds no locks and does no
//! background work.
//!
//! Mode mismatches (stepping a run-to-completion kind, running a stepped
//! kind) are caller bugs and are rejected loudly with an error rather than
//! silently ignored.

// IMPORTANT: step() is the per-frame path. Invariant logging and the O(n)
// sortedness check happen only on its cold edges (rebuild, completion),
// never on the per-primitive route through Cursor::step.

use std::fmt;

use crate::algorithm::Algorithm;
use crate::array::{ArrayError, SortArray};
use crate::cursor::Cursor;
use crate::invariant_ppt::{
    assert_invariant, CURSOR_IN_BOUNDS, CURSOR_STALE_REBUILT, ENGINE_REJECTS_MODE,
    METRICS_MONOTONIC, PERMUTATION_PRESERVED, RUN_COMPLETES, SORTED_ON_DONE,
    STEP_IDEMPOTENT_DONE,
};
use crate::metrics::Metrics;
use crate::sorts;

/// Errors surfaced by the engine facade.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Array construction or load failed.
    Array(ArrayError),
    /// `step()` was called while a run-to-completion algorithm was active.
    NotSteppable(Algorithm),
    /// `run()` was called while a stepped algorithm was active.
    NotRunnable(Algorithm),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Array(e) => write!(f, "array error: {}", e),
            EngineError::NotSteppable(a) => {
                write!(f, "{} sort runs to completion and cannot be stepped", a)
            }
            EngineError::NotRunnable(a) => {
                write!(f, "{} sort is stepped; drive it with step(), not run()", a)
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Array(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArrayError> for EngineError {
    fn from(e: ArrayError) -> Self {
        EngineError::Array(e)
    }
}

/// The sorting engine an external presentation layer drives.
///
/// Owns the array being sorted, the comparison/swap counters, and at most
/// one cursor for the stepped algorithm currently in flight. Exactly one
/// logical thread of control may interact with a given engine; callers that
/// need sharing must serialize access externally.
#[derive(Debug)]
pub struct Engine {
    array: SortArray,
    metrics: Metrics,
    algorithm: Algorithm,
    cursor: Option<Cursor>,
}

impl Engine {
    /// Engine over `size` elements, initialized to the identity sequence
    /// `1..=size` and seeded from entropy.
    ///
    /// Fails with `InvalidSize` when `size` is zero.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        Ok(Self::from_array(SortArray::new(size)?))
    }

    /// Deterministic twin of [`Engine::new`]: every `randomize()` sequence
    /// is reproducible from `seed`.
    pub fn new_with_seed(size: usize, seed: u64) -> Result<Self, EngineError> {
        Ok(Self::from_array(SortArray::new_with_seed(size, seed)?))
    }

    fn from_array(array: SortArray) -> Self {
        Engine {
            array,
            metrics: Metrics::new(),
            algorithm: Algorithm::default(),
            cursor: None,
        }
    }

    /// Shuffle the array into a fresh uniform permutation of `1..=len`.
    ///
    /// Always succeeds. Any stepped cursor is invalidated; metrics are left
    /// alone (counters reset only through [`Engine::reset_stats`]).
    pub fn randomize(&mut self) {
        self.array.randomize();
        self.cursor = None;
    }

    /// Replace the array contents with `values`.
    ///
    /// All-or-nothing: on `InvalidInput` (empty payload) the array, metrics,
    /// and any in-flight cursor are untouched.
    pub fn load(&mut self, values: &[i32]) -> Result<(), EngineError> {
        self.array.load(values)?;
        self.cursor = None;
        Ok(())
    }

    /// Set the active algorithm, discarding any in-flight cursor.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.cursor = None;
    }

    /// Advance the active stepped algorithm by one primitive operation.
    ///
    /// Returns `Ok(true)` once the array is sorted; further calls are
    /// no-ops that keep returning `Ok(true)`. The first call after a reset,
    /// load, or randomize builds a fresh cursor; a cursor left stale by an
    /// intervening mutation is detected by bounds-checking it against the
    /// current array and silently rebuilt rather than ever dereferencing
    /// dead indices.
    ///
    /// Fails with `NotSteppable` when the active algorithm runs to
    /// completion only.
    pub fn step(&mut self) -> Result<bool, EngineError> {
        if !self.algorithm.is_stepped() {
            assert_invariant(
                ENGINE_REJECTS_MODE,
                true,
                "step() rejected for a run-to-completion algorithm",
                Some("engine::step"),
            );
            return Err(EngineError::NotSteppable(self.algorithm));
        }

        let len = self.array.len();
        let mut cursor = match self.cursor.take() {
            Some(c) if c.kind() == self.algorithm && c.in_bounds(len) => c,
            previous => {
                let fresh = Cursor::new(self.algorithm, len)
                    .ok_or(EngineError::NotSteppable(self.algorithm))?;
                if previous.is_some() {
                    assert_invariant(
                        CURSOR_STALE_REBUILT,
                        true,
                        "Stale cursor dropped and rebuilt against the current array",
                        Some("engine::step"),
                    );
                }
                assert_invariant(
                    CURSOR_IN_BOUNDS,
                    fresh.in_bounds(len),
                    "Fresh cursor indices lie inside the array",
                    Some("engine::step"),
                );
                fresh
            }
        };

        if cursor.is_done(len) {
            self.cursor = Some(cursor);
            assert_invariant(
                STEP_IDEMPOTENT_DONE,
                true,
                "Re-step after completion left array and metrics untouched",
                Some("engine::step"),
            );
            return Ok(true);
        }

        let done = cursor.step(self.array.values_mut(), &mut self.metrics);
        self.cursor = Some(cursor);

        if done {
            assert_invariant(
                SORTED_ON_DONE,
                is_sorted(self.array.values()),
                "Stepped run finished with the array sorted ascending",
                Some("engine::step"),
            );
        }
        Ok(done)
    }

    /// Sort the whole array synchronously with the active algorithm.
    ///
    /// Blocks until sorted; comparisons and swaps accumulate into the same
    /// counters the stepped path uses. Fails with `NotRunnable` when the
    /// active algorithm is a stepped kind, which the caller should drive
    /// through [`Engine::step`] instead.
    pub fn run(&mut self) -> Result<(), EngineError> {
        if !self.algorithm.is_run_to_completion() {
            assert_invariant(
                ENGINE_REJECTS_MODE,
                true,
                "run() rejected for a stepped algorithm",
                Some("engine::run"),
            );
            return Err(EngineError::NotRunnable(self.algorithm));
        }

        let counters_before = self.metrics;
        let mut expected: Vec<i32> = self.array.values().to_vec();
        sorts::run(self.algorithm, self.array.values_mut(), &mut self.metrics);

        expected.sort_unstable();
        assert_invariant(
            METRICS_MONOTONIC,
            self.metrics.comparisons() >= counters_before.comparisons()
                && self.metrics.swaps() >= counters_before.swaps(),
            "Counters only moved forward during the run",
            Some("engine::run"),
        );
        assert_invariant(
            PERMUTATION_PRESERVED,
            self.array.values() == expected.as_slice(),
            "Run preserved the multiset of array values",
            Some("engine::run"),
        );
        assert_invariant(
            RUN_COMPLETES,
            is_sorted(self.array.values()),
            "Run left the array sorted ascending",
            Some("engine::run"),
        );
        Ok(())
    }

    /// Zero both counters. The array and any in-flight cursor are untouched.
    pub fn reset_stats(&mut self) {
        self.metrics.reset();
    }

    /// Immutable copy of the current array contents, for rendering.
    pub fn snapshot(&self) -> Vec<i32> {
        self.array.snapshot()
    }

    /// Comparisons recorded since the last [`Engine::reset_stats`].
    pub fn comparisons(&self) -> u64 {
        self.metrics.comparisons()
    }

    /// Swaps recorded since the last [`Engine::reset_stats`].
    pub fn swaps(&self) -> u64 {
        self.metrics.swaps()
    }

    /// The algorithm `step()`/`run()` currently dispatch to.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of elements in the array.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Always false for a constructed engine; paired with [`Engine::len`].
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }
}

fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
