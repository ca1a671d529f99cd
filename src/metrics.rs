//! Comparison/swap counters for the active sort run.

// IMPORTANT: record_comparison/record_swap sit on the per-step hot path.
// Keep them branch-free and allocation-free; no PPT logging here.

/// Operation counters for one sort run.
///
/// Counters only ever move forward while a run is in progress; the sole way
/// back to zero is an explicit [`Metrics::reset`]. The engines record, the
/// UI layer only reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    comparisons: u64,
    swaps: u64,
}

impl Metrics {
    /// Create a zeroed counter pair.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both counters to 0.
    pub fn reset(&mut self) {
        self.comparisons = 0;
        self.swaps = 0;
    }

    /// Record one element comparison.
    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Record one element exchange.
    #[inline]
    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    /// Comparisons recorded since the last reset.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Swaps recorded since the last reset.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }
}
