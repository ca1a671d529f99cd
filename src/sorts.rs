//! Instrumented whole-array sorts.
//!
//! Every algorithm the engine knows runs to completion here, recording each
//! element comparison and each element move into the caller's [`Metrics`].
//! The three stepped kinds (bubble, selection, insertion) are implemented to
//! produce move-for-move the same work as their cursors, so an instant run
//! and a step loop over the same input report identical totals.
//!
//! Counting rules, uniform across kinds:
//! - every element-vs-element comparison is one comparison;
//! - every exchange of two distinct positions is one swap;
//! - an element written back to the slot it came from is not a swap.

use crate::algorithm::Algorithm;
use crate::metrics::Metrics;

/// Sort `values` with `algorithm`, recording work into `metrics`.
pub fn run(algorithm: Algorithm, values: &mut [i32], metrics: &mut Metrics) {
    match algorithm {
        Algorithm::Bubble => bubble(values, metrics),
        Algorithm::Selection => selection(values, metrics),
        Algorithm::Insertion => insertion(values, metrics),
        Algorithm::Merge => merge(values, metrics),
        Algorithm::Quick => quick(values, metrics),
        Algorithm::Heap => heap(values, metrics),
        Algorithm::Shell => shell(values, metrics),
    }
}

/// Bubble sort with a shrinking boundary and early exit on a clean pass.
pub fn bubble(values: &mut [i32], metrics: &mut Metrics) {
    let mut boundary = values.len();
    while boundary > 1 {
        let mut swapped = false;
        for i in 0..boundary - 1 {
            metrics.record_comparison();
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                metrics.record_swap();
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        boundary -= 1;
    }
}

/// Selection sort: scan for the minimum, settle it once per pass.
pub fn selection(values: &mut [i32], metrics: &mut Metrics) {
    let len = values.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..len {
            metrics.record_comparison();
            if values[j] < values[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            values.swap(i, min_idx);
            metrics.record_swap();
        }
    }
}

/// Insertion sort, shifting by adjacent swaps so each shift is counted.
pub fn insertion(values: &mut [i32], metrics: &mut Metrics) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 {
            metrics.record_comparison();
            if values[j - 1] > values[j] {
                values.swap(j - 1, j);
                metrics.record_swap();
                j -= 1;
            } else {
                break;
            }
        }
    }
}

/// Top-down merge sort over auxiliary copies of each half.
pub fn merge(values: &mut [i32], metrics: &mut Metrics) {
    let len = values.len();
    if len > 1 {
        merge_range(values, 0, len - 1, metrics);
    }
}

fn merge_range(values: &mut [i32], left: usize, right: usize, metrics: &mut Metrics) {
    if left < right {
        let mid = left + (right - left) / 2;
        merge_range(values, left, mid, metrics);
        merge_range(values, mid + 1, right, metrics);
        merge_halves(values, left, mid, right, metrics);
    }
}

fn merge_halves(values: &mut [i32], left: usize, mid: usize, right: usize, metrics: &mut Metrics) {
    let left_half = values[left..=mid].to_vec();
    let right_half = values[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;
    while i < left_half.len() && j < right_half.len() {
        metrics.record_comparison();
        if left_half[i] <= right_half[j] {
            place(values, k, left + i, left_half[i], metrics);
            i += 1;
        } else {
            place(values, k, mid + 1 + j, right_half[j], metrics);
            j += 1;
        }
        k += 1;
    }
    while i < left_half.len() {
        place(values, k, left + i, left_half[i], metrics);
        i += 1;
        k += 1;
    }
    while j < right_half.len() {
        place(values, k, mid + 1 + j, right_half[j], metrics);
        j += 1;
        k += 1;
    }
}

// Writing an element back where it already sat is not counted as movement.
fn place(values: &mut [i32], dest: usize, origin: usize, value: i32, metrics: &mut Metrics) {
    values[dest] = value;
    if dest != origin {
        metrics.record_swap();
    }
}

/// Quick sort with Lomuto partitioning around the last element.
pub fn quick(values: &mut [i32], metrics: &mut Metrics) {
    let len = values.len();
    if len > 1 {
        quick_range(values, 0, len - 1, metrics);
    }
}

fn quick_range(values: &mut [i32], low: usize, high: usize, metrics: &mut Metrics) {
    if low < high {
        let pivot_idx = partition(values, low, high, metrics);
        // Guard the left recursion: the pivot can land at index zero.
        if pivot_idx > 0 {
            quick_range(values, low, pivot_idx - 1, metrics);
        }
        quick_range(values, pivot_idx + 1, high, metrics);
    }
}

fn partition(values: &mut [i32], low: usize, high: usize, metrics: &mut Metrics) -> usize {
    let pivot = values[high];
    let mut i = low;
    for j in low..high {
        metrics.record_comparison();
        if values[j] < pivot {
            exchange(values, i, j, metrics);
            i += 1;
        }
    }
    exchange(values, i, high, metrics);
    i
}

fn exchange(values: &mut [i32], a: usize, b: usize, metrics: &mut Metrics) {
    if a != b {
        values.swap(a, b);
        metrics.record_swap();
    }
}

/// Heap sort: build a max-heap in place, then repeatedly extract the root.
pub fn heap(values: &mut [i32], metrics: &mut Metrics) {
    let len = values.len();
    for start in (0..len / 2).rev() {
        sift_down(values, start, len, metrics);
    }
    for end in (1..len).rev() {
        values.swap(0, end);
        metrics.record_swap();
        sift_down(values, 0, end, metrics);
    }
}

fn sift_down(values: &mut [i32], root: usize, end: usize, metrics: &mut Metrics) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    if left < end {
        metrics.record_comparison();
        if values[left] > values[largest] {
            largest = left;
        }
    }
    if right < end {
        metrics.record_comparison();
        if values[right] > values[largest] {
            largest = right;
        }
    }
    if largest != root {
        values.swap(root, largest);
        metrics.record_swap();
        sift_down(values, largest, end, metrics);
    }
}

/// Shell sort over halving gaps; the final gap-1 phase is insertion sort.
pub fn shell(values: &mut [i32], metrics: &mut Metrics) {
    let len = values.len();
    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap {
                metrics.record_comparison();
                if values[j - gap] > values[j] {
                    values.swap(j - gap, j);
                    metrics.record_swap();
                    j -= gap;
                } else {
                    break;
                }
            }
        }
        gap /= 2;
    }
}
