//! Array state: the sequence being sorted, plus its shuffle source.

use crate::invariant_ppt::{
    assert_invariant, ARRAY_LEGALITY, ARRAY_REJECTS_INVALID, RANDOMIZE_PRESERVES_LEN,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Errors raised while creating or loading array state.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayError {
    /// Requested size was zero.
    InvalidSize,
    /// Load payload was empty.
    InvalidInput,
}

impl std::fmt::Display for ArrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayError::InvalidSize => write!(f, "array size must be at least 1"),
            ArrayError::InvalidInput => write!(f, "load payload must not be empty"),
        }
    }
}

impl std::error::Error for ArrayError {}

/// The mutable sequence under sort.
///
/// Holds the bar values the caller renders, and the seeded RNG used by
/// [`SortArray::randomize`]. Length is never zero once constructed; replacing
/// the contents (load, randomize) starts a new run from the caller's point of
/// view, so the engine invalidates any stepped cursor when these fire.
#[derive(Debug, Clone)]
pub struct SortArray {
    values: Vec<i32>,
    rng: ChaCha8Rng,
}

impl SortArray {
    /// Create array state holding the identity sequence `1..=size`.
    ///
    /// The RNG is seeded from entropy; use [`SortArray::new_with_seed`] for
    /// reproducible shuffle sequences.
    pub fn new(size: usize) -> Result<Self, ArrayError> {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(size, seed)
    }

    /// Create array state with a specific RNG seed for reproducibility.
    pub fn new_with_seed(size: usize, seed: u64) -> Result<Self, ArrayError> {
        if size == 0 {
            assert_invariant(
                ARRAY_REJECTS_INVALID,
                size == 0,
                "Zero size rejected, no state constructed",
                Some("new"),
            );
            return Err(ArrayError::InvalidSize);
        }
        let values: Vec<i32> = (1..=size).map(|i| i as i32).collect();
        assert_invariant(
            ARRAY_LEGALITY,
            !values.is_empty(),
            "Array populated, length legal",
            Some("new"),
        );
        Ok(Self {
            values,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Refill with a uniform random permutation of `1..=len`.
    ///
    /// Fisher-Yates over a fresh identity sequence, so the result is
    /// independent of whatever the array held before.
    pub fn randomize(&mut self) {
        let len = self.values.len();
        for (i, v) in self.values.iter_mut().enumerate() {
            *v = (i + 1) as i32;
        }
        self.values.shuffle(&mut self.rng);
        assert_invariant(
            RANDOMIZE_PRESERVES_LEN,
            self.values.len() == len,
            "Shuffle left length unchanged",
            Some("randomize"),
        );
    }

    /// Replace contents with exactly `values`.
    ///
    /// All-or-nothing: an empty payload is rejected and the existing contents
    /// stay untouched. Non-numeric input cannot reach this API; the caller's
    /// parser owns that rejection.
    pub fn load(&mut self, values: &[i32]) -> Result<(), ArrayError> {
        if values.is_empty() {
            assert_invariant(
                ARRAY_REJECTS_INVALID,
                values.is_empty(),
                "Empty payload rejected, contents untouched",
                Some("load"),
            );
            return Err(ArrayError::InvalidInput);
        }
        self.values.clear();
        self.values.extend_from_slice(values);
        assert_invariant(
            ARRAY_LEGALITY,
            !self.values.is_empty(),
            "Load replaced contents, length legal",
            Some("load"),
        );
        Ok(())
    }

    /// Immutable copy of the current values, for rendering.
    pub fn snapshot(&self) -> Vec<i32> {
        self.values.clone()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false once constructed; companion to [`SortArray::len`].
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the values for an algorithm engine.
    pub(crate) fn values_mut(&mut self) -> &mut [i32] {
        &mut self.values
    }

    /// Borrow the values read-only.
    pub(crate) fn values(&self) -> &[i32] {
        &self.values
    }
}
