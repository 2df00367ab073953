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

use crate::{index::LogicalIndex, projection::projection::Projection};
use std::iter::FusedIterator;

/// A double-ended, exact-size iterator reading a slice through a
/// projection in logical order.
///
/// Yields `&base[projection(0)], &base[projection(1)], ...` over the full
/// logical range `[0, base.len())`. Each step applies the projection once;
/// advancing from either end and skipping with `nth` are O(1).
///
/// The projection must map the logical range bijectively onto the slice's
/// index range; an out-of-range physical index panics at the access that
/// reaches it.
///
/// # Examples
///
/// ```rust
/// use furl_core::projection::fold::FoldedInterleave;
/// use furl_core::view::iter::ProjectedIter;
///
/// let base = [0, 9, 1, 8, 2, 7, 3, 6, 4, 5];
/// let folded: Vec<i32> = ProjectedIter::new(&base, FoldedInterleave::new(10))
///     .copied()
///     .collect();
/// assert_eq!(folded, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub struct ProjectedIter<'a, T, P> {
    base: &'a [T],
    projection: P,
    front: usize,
    back: usize,
}

impl<'a, T, P> ProjectedIter<'a, T, P>
where
    P: Projection,
{
    /// Creates an iterator over the whole logical range of `base`.
    #[inline]
    pub fn new(base: &'a [T], projection: P) -> Self {
        let back = base.len();
        Self {
            base,
            projection,
            front: 0,
            back,
        }
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        self.back - self.front
    }

    #[inline(always)]
    fn project(&self, index: usize) -> &'a T {
        let physical = self.projection.apply(LogicalIndex::new(index));
        &self.base[physical.get()]
    }
}

impl<'a, T, P> Iterator for ProjectedIter<'a, T, P>
where
    P: Projection,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.project(self.front);
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining() {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining()
    }
}

impl<T, P> DoubleEndedIterator for ProjectedIter<'_, T, P>
where
    P: Projection,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.project(self.back))
    }
}

impl<T, P> ExactSizeIterator for ProjectedIter<'_, T, P>
where
    P: Projection,
{
    #[inline]
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<T, P> FusedIterator for ProjectedIter<'_, T, P> where P: Projection {}

impl<T, P> Clone for ProjectedIter<'_, T, P>
where
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            projection: self.projection.clone(),
            front: self.front,
            back: self.back,
        }
    }
}

impl<T, P> std::fmt::Debug for ProjectedIter<'_, T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProjectedIter({}..{})", self.front, self.back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{fold::FoldedInterleave, identity::Identity, reverse::Reverse};

    #[test]
    fn test_identity_order() {
        let base = [1, 2, 3, 4];
        let collected: Vec<i32> = ProjectedIter::new(&base, Identity).copied().collect();
        assert_eq!(collected, [1, 2, 3, 4]);
    }

    #[test]
    fn test_folded_order() {
        let base = [0, 9, 1, 8, 2, 7, 3, 6, 4, 5];
        let collected: Vec<i32> = ProjectedIter::new(&base, FoldedInterleave::new(10))
            .copied()
            .collect();
        assert_eq!(collected, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_reversed_order() {
        let base = [1, 2, 3];
        let collected: Vec<i32> = ProjectedIter::new(&base, Reverse::new(3)).copied().collect();
        assert_eq!(collected, [3, 2, 1]);
    }

    #[test]
    fn test_double_ended() {
        let base = [10, 20, 30, 40];
        let mut iter = ProjectedIter::new(&base, Identity);

        assert_eq!(iter.next(), Some(&10));
        assert_eq!(iter.next_back(), Some(&40));
        assert_eq!(iter.next(), Some(&20));
        assert_eq!(iter.next_back(), Some(&30));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_rev_matches_reversed_collect() {
        let base = [0, 9, 1, 8, 2, 7, 3, 6, 4, 5];
        let forward: Vec<i32> = ProjectedIter::new(&base, FoldedInterleave::new(10))
            .copied()
            .collect();
        let mut backward: Vec<i32> = ProjectedIter::new(&base, FoldedInterleave::new(10))
            .rev()
            .copied()
            .collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_exact_size() {
        let base = [1, 2, 3, 4, 5];
        let mut iter = ProjectedIter::new(&base, Identity);
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.size_hint(), (5, Some(5)));

        iter.next();
        iter.next_back();
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_nth_skips_in_constant_time() {
        let base = [0, 9, 1, 8, 2, 7, 3, 6, 4, 5];
        let mut iter = ProjectedIter::new(&base, FoldedInterleave::new(10));
        assert_eq!(iter.nth(4), Some(&4));
        assert_eq!(iter.next(), Some(&5));

        let mut iter = ProjectedIter::new(&base, FoldedInterleave::new(10));
        assert_eq!(iter.nth(10), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_is_fused() {
        let base: [i32; 0] = [];
        let mut iter = ProjectedIter::new(&base, Identity);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_count_and_clone() {
        let base = [5, 6, 7];
        let iter = ProjectedIter::new(&base, Identity);
        let cloned = iter.clone();
        assert_eq!(iter.count(), 3);
        let collected: Vec<i32> = cloned.copied().collect();
        assert_eq!(collected, [5, 6, 7]);
    }
}
