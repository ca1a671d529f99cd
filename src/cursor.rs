//! Resumable cursors: the stepped sort state machines.
//!
//! Each cursor variant holds exactly the progress state its algorithm needs
//! to resume after the caller's control loop yields: indices, the unsorted
//! boundary, the swapped-this-pass flag. One [`Cursor::step`] call performs
//! one element comparison and at most one swap, then records where it left
//! off; the caller paces the run by deciding when the next call happens.

// IMPORTANT: step() runs once per animation frame. Do not call
// assert_invariant or any PPT logging here, and do not allocate.

use crate::algorithm::Algorithm;
use crate::metrics::Metrics;

/// Saved progress of a stepped sort, one variant per algorithm kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Cursor {
    /// Bubble sort: inner index, unsorted boundary, swap flag for the pass.
    Bubble {
        i: usize,
        boundary: usize,
        swapped: bool,
    },
    /// Selection sort: outer index, scan index, running minimum index.
    Selection { i: usize, j: usize, min_idx: usize },
    /// Insertion sort: outer index, current shift position.
    Insertion { i: usize, j: usize },
}

impl Cursor {
    /// Fresh cursor for `algorithm` over an array of `len` elements.
    ///
    /// Returns `None` for the run-to-completion kinds, which have no cursor.
    pub(crate) fn new(algorithm: Algorithm, len: usize) -> Option<Self> {
        match algorithm {
            Algorithm::Bubble => Some(Cursor::Bubble {
                i: 0,
                boundary: len,
                swapped: false,
            }),
            Algorithm::Selection => Some(Cursor::Selection {
                i: 0,
                j: 1,
                min_idx: 0,
            }),
            Algorithm::Insertion => Some(Cursor::Insertion { i: 1, j: 1 }),
            _ => None,
        }
    }

    /// The algorithm kind this cursor belongs to.
    pub(crate) fn kind(&self) -> Algorithm {
        match self {
            Cursor::Bubble { .. } => Algorithm::Bubble,
            Cursor::Selection { .. } => Algorithm::Selection,
            Cursor::Insertion { .. } => Algorithm::Insertion,
        }
    }

    /// Whether the sorted-ness invariant already holds for the whole array.
    pub(crate) fn is_done(&self, len: usize) -> bool {
        match self {
            Cursor::Bubble { boundary, .. } => *boundary <= 1,
            Cursor::Selection { i, .. } => *i + 1 >= len,
            Cursor::Insertion { i, .. } => *i >= len,
        }
    }

    /// Whether the saved indices still apply to an array of `len` elements.
    ///
    /// A cursor that fails this check is stale (the array shrank underneath
    /// it) and must be rebuilt before stepping; the check is what keeps a
    /// stale cursor from ever indexing out of bounds.
    pub(crate) fn in_bounds(&self, len: usize) -> bool {
        match self {
            Cursor::Bubble { i, boundary, .. } => {
                *boundary <= len && (*boundary <= 1 || *i + 1 < *boundary)
            }
            Cursor::Selection { i, j, min_idx } => *i < len && *j <= len && *min_idx < len,
            Cursor::Insertion { i, j } => *i <= len && *j <= *i,
        }
    }

    /// Advance by exactly one primitive operation.
    ///
    /// Performs one comparison and at most one swap against `values`,
    /// recording both in `metrics`, then saves the position reached. Returns
    /// `true` once the array is fully sorted; calling again after that is a
    /// no-op that keeps returning `true`.
    pub(crate) fn step(&mut self, values: &mut [i32], metrics: &mut Metrics) -> bool {
        match self {
            Cursor::Bubble {
                i,
                boundary,
                swapped,
            } => {
                if *boundary <= 1 {
                    return true;
                }
                metrics.record_comparison();
                if values[*i] > values[*i + 1] {
                    values.swap(*i, *i + 1);
                    metrics.record_swap();
                    *swapped = true;
                }
                *i += 1;
                if *i + 1 >= *boundary {
                    // Pass finished: the pass maximum is parked at boundary-1.
                    // A pass with zero swaps means everything left is ordered,
                    // so the boundary collapses instead of shrinking by one.
                    *boundary = if *swapped { *boundary - 1 } else { 1 };
                    *i = 0;
                    *swapped = false;
                }
                *boundary <= 1
            }
            Cursor::Selection { i, j, min_idx } => {
                let len = values.len();
                if *i + 1 >= len {
                    return true;
                }
                metrics.record_comparison();
                if values[*j] < values[*min_idx] {
                    *min_idx = *j;
                }
                *j += 1;
                if *j >= len {
                    // Scan finished: settle the minimum, open the next pass.
                    if *min_idx != *i {
                        values.swap(*i, *min_idx);
                        metrics.record_swap();
                    }
                    *i += 1;
                    *min_idx = *i;
                    *j = *i + 1;
                }
                *i + 1 >= len
            }
            Cursor::Insertion { i, j } => {
                let len = values.len();
                if *i >= len {
                    return true;
                }
                metrics.record_comparison();
                if values[*j - 1] > values[*j] {
                    values.swap(*j - 1, *j);
                    metrics.record_swap();
                    *j -= 1;
                    if *j == 0 {
                        // Element sank to the front; placement is complete.
                        *i += 1;
                        *j = *i;
                    }
                } else {
                    // Left neighbor is no larger; the element is placed.
                    *i += 1;
                    *j = *i;
                }
                *i >= len
            }
        }
    }
}
