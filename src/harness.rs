//! Step Proof Harness: empirical proofs for stepping guarantees.

use crate::algorithm::Algorithm;
use crate::engine::{Engine, EngineError};
use crate::invariant_ppt::{assert_invariant, HARNESS_DRIVE_COMPLETE};

// Worst case for the stepped kinds is one comparison per inner-loop visit,
// n(n-1)/2 plus pass bookkeeping; double it for slack.
fn step_budget(len: usize) -> u64 {
    let n = len as u64;
    (n * n + n + 1) * 2
}

/// Harness for step proofs: drives an engine the way a UI control loop would.
pub struct StepHarness {
    engine: Engine,
    steps: u64,
}

impl StepHarness {
    /// Harness over a freshly shuffled engine with a fixed seed.
    pub fn new(size: usize, seed: u64, algorithm: Algorithm) -> Self {
        let mut engine = Engine::new_with_seed(size, seed).unwrap();
        engine.randomize();
        engine.select_algorithm(algorithm);
        Self { engine, steps: 0 }
    }

    /// Harness over explicit starting values.
    pub fn with_values(values: &[i32], algorithm: Algorithm) -> Self {
        let mut engine = Engine::new_with_seed(values.len().max(1), 0).unwrap();
        engine.load(values).unwrap();
        engine.select_algorithm(algorithm);
        Self { engine, steps: 0 }
    }

    /// Make up to `max_steps` step calls; true once the sort completed.
    pub fn drive(&mut self, max_steps: u64) -> Result<bool, EngineError> {
        for _ in 0..max_steps {
            self.steps += 1;
            if self.engine.step()? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Step until done; returns the number of calls this drive made.
    ///
    /// Panics if the engine fails to terminate within the step budget, which
    /// would mean a cursor stopped making progress.
    pub fn drive_to_completion(&mut self) -> Result<u64, EngineError> {
        let budget = step_budget(self.engine.len());
        let start = self.steps;
        loop {
            self.steps += 1;
            if self.engine.step()? {
                break;
            }
            if self.steps - start > budget {
                panic!(
                    "{} sort made no progress after {} steps",
                    self.engine.algorithm(),
                    budget
                );
            }
        }
        let snapshot = self.engine.snapshot();
        assert_invariant(
            HARNESS_DRIVE_COMPLETE,
            snapshot.windows(2).all(|w| w[0] <= w[1]),
            "Driven engine reached the sorted terminal state",
            Some("harness"),
        );
        Ok(self.steps - start)
    }

    /// Total step calls made through this harness.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Read access to the engine under test.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Mutable access, for mid-drive loads and algorithm switches.
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}
