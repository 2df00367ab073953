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

use crate::{
    index::LogicalIndex,
    projection::projection::Projection,
    view::{cursor::ProjectionCursor, iter::ProjectedIter},
};

/// A shared, read-only view of a slice through a projection.
///
/// Logical index `i` of the view addresses `base[projection(i)]`; the
/// logical domain is always `[0, base.len())`. The view owns its
/// projection by value; to share one across views, borrow it (`&P` is
/// itself a projection).
///
/// For reads to be meaningful the projection must map the logical domain
/// bijectively onto the slice's index range; that is the caller's
/// obligation, and a violating access panics at the slice boundary instead
/// of reading the wrong memory.
///
/// # Examples
///
/// ```rust
/// use furl_core::index::LogicalIndex;
/// use furl_core::projection::fold::FoldedInterleave;
/// use furl_core::view::slice::ProjectedSlice;
///
/// // Physical zig-zag storage, read ascending through the fold.
/// let base = [1, 9, 2, 7, 3];
/// let view = ProjectedSlice::new(&base, FoldedInterleave::new(5));
///
/// assert_eq!(view.to_vec(), [1, 2, 3, 7, 9]);
/// assert!(view.is_sorted());
/// assert_eq!(view[LogicalIndex::new(3)], 7);
/// ```
pub struct ProjectedSlice<'a, T, P> {
    base: &'a [T],
    projection: P,
}

impl<'a, T, P> ProjectedSlice<'a, T, P>
where
    P: Projection,
{
    /// Creates a view of `base` through `projection`.
    #[inline(always)]
    pub fn new(base: &'a [T], projection: P) -> Self {
        Self { base, projection }
    }

    /// Returns the length of the view, identical to the base slice's.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.base.len()
    }

    /// Checks whether the view is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Returns the underlying slice in physical order.
    #[inline(always)]
    pub const fn base(&self) -> &'a [T] {
        self.base
    }

    /// Returns the projection the view reads through.
    #[inline(always)]
    pub const fn projection(&self) -> &P {
        &self.projection
    }

    /// Returns the element at logical `index`, or `None` if `index` lies
    /// beyond the view.
    ///
    /// # Panics
    ///
    /// Panics if the projection maps an in-range `index` outside the slice
    /// (a projection-contract violation, not a range miss).
    #[inline]
    pub fn get(&self, index: LogicalIndex) -> Option<&T> {
        if index.get() >= self.base.len() {
            return None;
        }
        let physical = self.projection.apply(index);
        Some(&self.base[physical.get()])
    }

    /// Returns the element at logical `index` without any bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must lie in `[0, len())` and the projection must map it
    /// into the slice. This function contains `debug_assert!`s to catch
    /// errors during development.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: LogicalIndex) -> &T {
        debug_assert!(
            index.get() < self.base.len(),
            "called `ProjectedSlice::get_unchecked` with index out of bounds: the len is {} but the index is {}",
            self.base.len(),
            index.get()
        );
        let physical = self.projection.apply(index);
        debug_assert!(
            physical.get() < self.base.len(),
            "called `ProjectedSlice::get_unchecked` with a projection mapping outside the slice: the len is {} but the physical index is {}",
            self.base.len(),
            physical.get()
        );
        unsafe { self.base.get_unchecked(physical.get()) }
    }

    /// Returns the first element of the logical order.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.get(LogicalIndex::new(0))
    }

    /// Returns the last element of the logical order.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        if self.base.is_empty() {
            return None;
        }
        self.get(LogicalIndex::new(self.base.len() - 1))
    }

    /// Iterates the view in logical order.
    #[inline]
    pub fn iter(&self) -> ProjectedIter<'_, T, &P> {
        ProjectedIter::new(self.base, &self.projection)
    }

    /// Returns a cursor at logical index 0.
    #[inline]
    pub fn cursor(&self) -> ProjectionCursor<'_, T, P> {
        ProjectionCursor::new(self.base, &self.projection)
    }

    /// Returns the `(begin, end)` cursor pair spanning the whole view,
    /// with `end - begin == len()`.
    #[inline]
    pub fn cursor_pair(&self) -> (ProjectionCursor<'_, T, P>, ProjectionCursor<'_, T, P>) {
        let begin = self.cursor();
        (begin, begin + self.base.len() as isize)
    }

    /// Materializes the logical order into a vector.
    #[inline]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Checks whether the logical order is sorted under `compare`, where
    /// `compare(a, b)` returns whether `a` may precede `b`.
    pub fn is_sorted_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut iter = self.iter();
        let mut prev = match iter.next() {
            Some(first) => first,
            None => return true,
        };
        for item in iter {
            if !compare(prev, item) {
                return false;
            }
            prev = item;
        }
        true
    }

    /// Checks whether the logical order is non-decreasing.
    #[inline]
    pub fn is_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        self.is_sorted_by(|a, b| a <= b)
    }
}

impl<T, P> std::ops::Index<LogicalIndex> for ProjectedSlice<'_, T, P>
where
    P: Projection,
{
    type Output = T;

    #[inline]
    fn index(&self, index: LogicalIndex) -> &Self::Output {
        assert!(
            index.get() < self.base.len(),
            "called `ProjectedSlice::index` with index out of bounds: the len is {} but the index is {}",
            self.base.len(),
            index.get()
        );
        let physical = self.projection.apply(index);
        &self.base[physical.get()]
    }
}

impl<'a, T, P> IntoIterator for ProjectedSlice<'a, T, P>
where
    P: Projection,
{
    type Item = &'a T;
    type IntoIter = ProjectedIter<'a, T, P>;

    /// Consumes the view, moving its projection into the iterator.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ProjectedIter::new(self.base, self.projection)
    }
}

impl<'a, T, P> IntoIterator for &'a ProjectedSlice<'_, T, P>
where
    P: Projection,
{
    type Item = &'a T;
    type IntoIter = ProjectedIter<'a, T, &'a P>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P> Clone for ProjectedSlice<'_, T, P>
where
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            projection: self.projection.clone(),
        }
    }
}

impl<T, P> Copy for ProjectedSlice<'_, T, P> where P: Copy {}

impl<T, P> std::fmt::Debug for ProjectedSlice<'_, T, P>
where
    T: std::fmt::Debug,
    P: Projection,
{
    /// Renders the logical order, the way the view reads.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{
        fold::FoldedInterleave, identity::Identity, reverse::Reverse, table::PermutationTable,
    };

    fn li(index: usize) -> LogicalIndex {
        LogicalIndex::new(index)
    }

    #[test]
    fn test_reads_in_logical_order() {
        let base = [1, 9, 2, 7, 3];
        let view = ProjectedSlice::new(&base, FoldedInterleave::new(5));
        assert_eq!(view.to_vec(), [1, 2, 3, 7, 9]);
        assert_eq!(view.len(), 5);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_get_checks_logical_range() {
        let base = [10, 20, 30];
        let view = ProjectedSlice::new(&base, Reverse::new(3));
        assert_eq!(view.get(li(0)), Some(&30));
        assert_eq!(view.get(li(2)), Some(&10));
        assert_eq!(view.get(li(3)), None);
    }

    #[test]
    fn test_index_operator() {
        let base = [1, 9, 2, 7, 3];
        let view = ProjectedSlice::new(&base, FoldedInterleave::new(5));
        assert_eq!(view[li(0)], 1);
        assert_eq!(view[li(4)], 9);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics_out_of_range() {
        let base = [1, 2];
        let view = ProjectedSlice::new(&base, Identity);
        let _ = view[li(2)];
    }

    #[test]
    fn test_get_unchecked() {
        let base = [4, 5, 6];
        let view = ProjectedSlice::new(&base, Reverse::new(3));
        // SAFETY: indices 0..3 are in bounds and Reverse(3) is a bijection.
        unsafe {
            assert_eq!(*view.get_unchecked(li(0)), 6);
            assert_eq!(*view.get_unchecked(li(2)), 4);
        }
    }

    #[test]
    fn test_first_and_last() {
        let base = [1, 9, 2, 7, 3];
        let view = ProjectedSlice::new(&base, FoldedInterleave::new(5));
        assert_eq!(view.first(), Some(&1));
        assert_eq!(view.last(), Some(&9));

        let empty: [i32; 0] = [];
        let view = ProjectedSlice::new(&empty, Identity);
        assert_eq!(view.first(), None);
        assert_eq!(view.last(), None);
    }

    #[test]
    fn test_is_sorted_through_fold() {
        // Zig-zag physical storage reads ascending through the fold.
        let base = [1, 9, 2, 7, 3];
        let view = ProjectedSlice::new(&base, FoldedInterleave::new(5));
        assert!(view.is_sorted());

        let view = ProjectedSlice::new(&base, Identity);
        assert!(!view.is_sorted());
    }

    #[test]
    fn test_is_sorted_by_descending() {
        let base = [3, 7, 9, 2, 1];
        let view = ProjectedSlice::new(&base, Reverse::new(5));
        assert!(view.is_sorted_by(|a, b| a <= b));
    }

    #[test]
    fn test_iteration_forms() {
        let base = [5, 6, 7];
        let view = ProjectedSlice::new(&base, Reverse::new(3));

        let by_method: Vec<i32> = view.iter().copied().collect();
        assert_eq!(by_method, [7, 6, 5]);

        let mut by_ref = Vec::new();
        for value in &view {
            by_ref.push(*value);
        }
        assert_eq!(by_ref, [7, 6, 5]);

        let by_value: Vec<i32> = view.into_iter().copied().collect();
        assert_eq!(by_value, [7, 6, 5]);
    }

    #[test]
    fn test_through_table_projection() {
        let base = [3, 7, 1, 9, 2];
        let order = PermutationTable::sorted_order(&base);
        let view = ProjectedSlice::new(&base, order);
        assert_eq!(view.to_vec(), [1, 2, 3, 7, 9]);
        assert!(view.is_sorted());
    }

    #[test]
    fn test_cursor_pair_spans_view() {
        let base = [1, 9, 2, 7, 3];
        let view = ProjectedSlice::new(&base, FoldedInterleave::new(5));
        let (begin, end) = view.cursor_pair();

        assert_eq!(end - begin, 5);
        assert_eq!(*begin.get(), 1);
        assert_eq!(*(end - 1).get(), 9);
    }

    #[test]
    fn test_borrowed_projection() {
        // `&P` is itself a projection, so one map can serve many views.
        let fold = FoldedInterleave::new(5);
        let base = [1, 9, 2, 7, 3];
        let other = [0, 4, 1, 3, 2];

        let first = ProjectedSlice::new(&base, &fold);
        let second = ProjectedSlice::new(&other, &fold);
        assert_eq!(first.to_vec(), [1, 2, 3, 7, 9]);
        assert_eq!(second.to_vec(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_debug_renders_logical_order() {
        let base = [1, 9, 2];
        let view = ProjectedSlice::new(&base, Reverse::new(3));
        assert_eq!(format!("{:?}", view), "[2, 9, 1]");
    }
}
