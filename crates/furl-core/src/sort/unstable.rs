// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Unstable in-place sorting over a [`SortTarget`](crate::sort::sort_target::SortTarget).
//!
//! The algorithm is an introsort: median-of-three quicksort that hands
//! short ranges to insertion sort and falls back to heapsort when the
//! recursion depth shows the pivots are degenerating. Every step is a
//! position compare or a position swap, so it runs unchanged on plain
//! slices and on projected views.

use crate::sort::sort_target::SortTarget;

/// Ranges at or below this length are insertion sorted.
const MAX_INSERTION: usize = 20;

/// Sorts the target in place.
///
/// The sort is unstable (equal elements may be reordered) and runs in
/// `O(len * log(len))` time worst case without allocating.
///
/// # Examples
///
/// ```rust
/// use furl_core::sort::unstable;
///
/// let mut values = [5, 1, 4, 2, 3];
/// unstable::sort_unstable(&mut values[..]);
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// ```
pub fn sort_unstable<V>(target: &mut V)
where
    V: SortTarget + ?Sized,
{
    let len = target.len();
    if len < 2 {
        return;
    }

    // Twice the depth of a balanced recursion tree before heapsort takes over.
    let limit = 2 * (usize::BITS - len.leading_zeros());
    introsort(target, 0, len, limit);
}

/// Recursive driver over the half-open position range `[lo, hi)`.
///
/// Recurses into the smaller partition and loops on the larger one, which
/// bounds the recursion depth by `log2(len)` independently of `limit`.
fn introsort<V>(target: &mut V, mut lo: usize, mut hi: usize, mut limit: u32)
where
    V: SortTarget + ?Sized,
{
    loop {
        if hi - lo <= MAX_INSERTION {
            insertion_sort(target, lo, hi);
            return;
        }

        if limit == 0 {
            heapsort(target, lo, hi);
            return;
        }
        limit -= 1;

        let pivot = partition(target, lo, hi);
        if pivot - lo < hi - pivot - 1 {
            introsort(target, lo, pivot, limit);
            lo = pivot + 1;
        } else {
            introsort(target, pivot + 1, hi, limit);
            hi = pivot;
        }
    }
}

/// Partitions `[lo, hi)` around a median-of-three pivot and returns the
/// pivot's final position.
///
/// # Invariants
///
/// - `hi - lo >= 3`, so that `lo`, the midpoint, and `hi - 1` are distinct.
fn partition<V>(target: &mut V, lo: usize, hi: usize) -> usize
where
    V: SortTarget + ?Sized,
{
    debug_assert!(
        hi - lo >= 3,
        "called `partition` on a range too short for median-of-three"
    );

    let mid = lo + (hi - lo) / 2;
    let last = hi - 1;

    // Sort the sample at lo, mid, last, then park the median at `last`.
    if target.is_less(mid, lo) {
        target.swap(mid, lo);
    }
    if target.is_less(last, lo) {
        target.swap(last, lo);
    }
    if target.is_less(last, mid) {
        target.swap(last, mid);
    }
    target.swap(mid, last);

    // Lomuto scan against the pivot parked at `last`.
    let mut store = lo;
    for index in lo..last {
        if target.is_less(index, last) {
            target.swap(index, store);
            store += 1;
        }
    }
    target.swap(store, last);
    store
}

/// Insertion sorts the position range `[lo, hi)` by adjacent swaps.
fn insertion_sort<V>(target: &mut V, lo: usize, hi: usize)
where
    V: SortTarget + ?Sized,
{
    for index in (lo + 1)..hi {
        let mut current = index;
        while current > lo && target.is_less(current, current - 1) {
            target.swap(current, current - 1);
            current -= 1;
        }
    }
}

/// Heapsorts the position range `[lo, hi)`.
///
/// Used as the depth-limit fallback; `O(n * log(n))` worst case with no
/// recursion.
fn heapsort<V>(target: &mut V, lo: usize, hi: usize)
where
    V: SortTarget + ?Sized,
{
    let len = hi - lo;

    // Build a max-heap over the range.
    for root in (0..len / 2).rev() {
        sift_down(target, lo, root, len);
    }

    // Repeatedly move the maximum behind the shrinking heap.
    for end in (1..len).rev() {
        target.swap(lo, lo + end);
        sift_down(target, lo, 0, end);
    }
}

/// Restores the max-heap property for `root` within the first `len`
/// positions of the heap based at `lo`.
fn sift_down<V>(target: &mut V, lo: usize, mut root: usize, len: usize)
where
    V: SortTarget + ?Sized,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            return;
        }
        if child + 1 < len && target.is_less(lo + child, lo + child + 1) {
            child += 1;
        }
        if !target.is_less(lo + root, lo + child) {
            return;
        }
        target.swap(lo + root, lo + child);
        root = child;
    }
}
