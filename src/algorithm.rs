//! Algorithm kinds and their invocation-mode classification.

use std::str::FromStr;

/// The seven sort algorithms the engine knows.
///
/// Bubble, selection and insertion run in stepped mode (one primitive
/// operation per [`crate::engine::Engine::step`] call); merge, quick, heap
/// and shell run to completion in one [`crate::engine::Engine::run`] call.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Adjacent-exchange sort with shrinking unsorted boundary.
    #[default]
    Bubble,
    /// Minimum-scan sort over the unsorted region.
    Selection,
    /// Neighbor-shift sort building a sorted prefix.
    Insertion,
    /// Top-down stable divide-and-conquer.
    Merge,
    /// Lomuto partition-exchange, last-element pivot.
    Quick,
    /// Max-heap build plus repeated extraction.
    Heap,
    /// Insertion over a halving gap sequence.
    Shell,
}

/// All algorithm kinds, in UI display order.
pub const ALGORITHMS: [Algorithm; 7] = [
    Algorithm::Bubble,
    Algorithm::Selection,
    Algorithm::Insertion,
    Algorithm::Merge,
    Algorithm::Quick,
    Algorithm::Heap,
    Algorithm::Shell,
];

impl Algorithm {
    /// The lowercase wire name used by callers that hold strings.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Shell => "shell",
        }
    }

    /// True for the resumable kinds driven by `step()`.
    pub fn is_stepped(&self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion
        )
    }

    /// True for the kinds driven by a single `run()` call.
    pub fn is_run_to_completion(&self) -> bool {
        !self.is_stepped()
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for names that match none of the seven kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownAlgorithm {
    name: String,
}

impl std::fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown algorithm '{}' (expected one of: bubble, selection, insertion, merge, quick, heap, shell)",
            self.name
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "heap" => Ok(Algorithm::Heap),
            "shell" => Ok(Algorithm::Shell),
            other => Err(UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}
