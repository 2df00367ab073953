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
    sort::{sort_target::SortTarget, unstable},
    view::{iter::ProjectedIter, slice::ProjectedSlice},
};

/// An exclusive view of a slice through a projection.
///
/// Reads work like [`ProjectedSlice`]; in addition the view can write,
/// swap, and sort through the projection. Sorting the view leaves the base
/// slice holding each logically sorted element at its projected physical
/// position, which is how the folded-interleave layout
/// `min, max, second-min, second-max, ...` is produced from ordinary
/// ascending order.
///
/// Mutation is element-at-a-time (`get_mut`, `swap`); there is no mutable
/// iterator. A projection is only caller-promised to be a bijection, and a
/// mapping that aliased two logical positions onto one physical slot would
/// let a mutable iterator hand out two live `&mut` to the same element.
///
/// # Examples
///
/// ```rust
/// use furl_core::projection::fold::FoldedInterleave;
/// use furl_core::view::slice_mut::ProjectedSliceMut;
///
/// let mut values = [3, 7, 1, 9, 2];
/// let mut view = ProjectedSliceMut::new(&mut values, FoldedInterleave::new(5));
/// view.sort_unstable();
/// assert!(view.is_sorted());
///
/// // The base slice now zig-zags: min, max, second-min, second-max, ...
/// assert_eq!(values, [1, 9, 2, 7, 3]);
/// ```
pub struct ProjectedSliceMut<'a, T, P> {
    base: &'a mut [T],
    projection: P,
}

impl<'a, T, P> ProjectedSliceMut<'a, T, P>
where
    P: Projection,
{
    /// Creates an exclusive view of `base` through `projection`.
    #[inline(always)]
    pub fn new(base: &'a mut [T], projection: P) -> Self {
        Self { base, projection }
    }

    /// Returns the length of the view, identical to the base slice's.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Checks whether the view is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Returns the underlying slice in physical order.
    #[inline(always)]
    pub fn base(&self) -> &[T] {
        self.base
    }

    /// Returns the projection the view reads and writes through.
    #[inline(always)]
    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Borrows the view as a read-only one.
    #[inline]
    pub fn as_view(&self) -> ProjectedSlice<'_, T, &P> {
        ProjectedSlice::new(&*self.base, &self.projection)
    }

    /// Iterates the view in logical order.
    #[inline]
    pub fn iter(&self) -> ProjectedIter<'_, T, &P> {
        ProjectedIter::new(&*self.base, &self.projection)
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

    /// Returns a mutable reference to the element at logical `index`, or
    /// `None` if `index` lies beyond the view.
    ///
    /// # Panics
    ///
    /// Panics if the projection maps an in-range `index` outside the slice
    /// (a projection-contract violation, not a range miss).
    #[inline]
    pub fn get_mut(&mut self, index: LogicalIndex) -> Option<&mut T> {
        if index.get() >= self.base.len() {
            return None;
        }
        let physical = self.projection.apply(index);
        Some(&mut self.base[physical.get()])
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
            "called `ProjectedSliceMut::get_unchecked` with index out of bounds: the len is {} but the index is {}",
            self.base.len(),
            index.get()
        );
        let physical = self.projection.apply(index);
        debug_assert!(
            physical.get() < self.base.len(),
            "called `ProjectedSliceMut::get_unchecked` with a projection mapping outside the slice: the len is {} but the physical index is {}",
            self.base.len(),
            physical.get()
        );
        unsafe { self.base.get_unchecked(physical.get()) }
    }

    /// Returns a mutable reference to the element at logical `index`
    /// without any bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must lie in `[0, len())` and the projection must map it
    /// into the slice. This function contains `debug_assert!`s to catch
    /// errors during development.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: LogicalIndex) -> &mut T {
        debug_assert!(
            index.get() < self.base.len(),
            "called `ProjectedSliceMut::get_unchecked_mut` with index out of bounds: the len is {} but the index is {}",
            self.base.len(),
            index.get()
        );
        let physical = self.projection.apply(index);
        debug_assert!(
            physical.get() < self.base.len(),
            "called `ProjectedSliceMut::get_unchecked_mut` with a projection mapping outside the slice: the len is {} but the physical index is {}",
            self.base.len(),
            physical.get()
        );
        unsafe { self.base.get_unchecked_mut(physical.get()) }
    }

    /// Swaps the elements at logical indices `a` and `b` by swapping their
    /// projected physical slots.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` lies beyond the view.
    #[inline]
    pub fn swap(&mut self, a: LogicalIndex, b: LogicalIndex) {
        assert!(
            a.get() < self.base.len() && b.get() < self.base.len(),
            "called `ProjectedSliceMut::swap` with index out of bounds: the len is {} but the indices are {} and {}",
            self.base.len(),
            a.get(),
            b.get()
        );
        let physical_a = self.projection.apply(a);
        let physical_b = self.projection.apply(b);
        self.base.swap(physical_a.get(), physical_b.get());
    }

    /// Reverses the logical order of the view in place.
    pub fn reverse(&mut self) {
        let len = self.base.len();
        for index in 0..len / 2 {
            self.swap(LogicalIndex::new(index), LogicalIndex::new(len - 1 - index));
        }
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
    #[inline]
    pub fn is_sorted_by<F>(&self, compare: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.as_view().is_sorted_by(compare)
    }

    /// Checks whether the logical order is non-decreasing.
    #[inline]
    pub fn is_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        self.as_view().is_sorted()
    }

    /// Sorts the view in place so that its logical order is ascending.
    ///
    /// The sort is unstable and operates entirely through projected swaps,
    /// so the base slice ends up holding the sorted sequence scattered at
    /// the projection's physical positions.
    #[inline]
    pub fn sort_unstable(&mut self)
    where
        T: Ord,
    {
        self.sort_unstable_by(T::cmp);
    }

    /// Sorts the view in place with a comparator function.
    pub fn sort_unstable_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        let mut target = ViewSortTarget {
            base: &mut *self.base,
            projection: &self.projection,
            is_less: |a: &T, b: &T| compare(a, b) == std::cmp::Ordering::Less,
        };
        unstable::sort_unstable(&mut target);
    }

    /// Sorts the view in place with a key extraction function.
    #[inline]
    pub fn sort_unstable_by_key<K, F>(&mut self, mut key: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_unstable_by(|a, b| key(a).cmp(&key(b)));
    }
}

impl<T, P> std::ops::Index<LogicalIndex> for ProjectedSliceMut<'_, T, P>
where
    P: Projection,
{
    type Output = T;

    #[inline]
    fn index(&self, index: LogicalIndex) -> &Self::Output {
        assert!(
            index.get() < self.base.len(),
            "called `ProjectedSliceMut::index` with index out of bounds: the len is {} but the index is {}",
            self.base.len(),
            index.get()
        );
        let physical = self.projection.apply(index);
        &self.base[physical.get()]
    }
}

impl<T, P> std::ops::IndexMut<LogicalIndex> for ProjectedSliceMut<'_, T, P>
where
    P: Projection,
{
    #[inline]
    fn index_mut(&mut self, index: LogicalIndex) -> &mut Self::Output {
        assert!(
            index.get() < self.base.len(),
            "called `ProjectedSliceMut::index_mut` with index out of bounds: the len is {} but the index is {}",
            self.base.len(),
            index.get()
        );
        let physical = self.projection.apply(index);
        &mut self.base[physical.get()]
    }
}

impl<'a, T, P> IntoIterator for &'a ProjectedSliceMut<'_, T, P>
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

impl<T, P> std::fmt::Debug for ProjectedSliceMut<'_, T, P>
where
    T: std::fmt::Debug,
    P: Projection,
{
    /// Renders the logical order, the way the view reads.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Adapter that exposes a projected view to the position sorter.
///
/// Positions are logical indices; compares read through the projection and
/// swaps move the projected physical slots.
struct ViewSortTarget<'s, T, P, F> {
    base: &'s mut [T],
    projection: &'s P,
    is_less: F,
}

impl<T, P, F> SortTarget for ViewSortTarget<'_, T, P, F>
where
    P: Projection,
    F: FnMut(&T, &T) -> bool,
{
    #[inline(always)]
    fn len(&self) -> usize {
        self.base.len()
    }

    #[inline(always)]
    fn is_less(&mut self, a: usize, b: usize) -> bool {
        let physical_a = self.projection.apply(LogicalIndex::new(a));
        let physical_b = self.projection.apply(LogicalIndex::new(b));
        (self.is_less)(&self.base[physical_a.get()], &self.base[physical_b.get()])
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        let physical_a = self.projection.apply(LogicalIndex::new(a));
        let physical_b = self.projection.apply(LogicalIndex::new(b));
        self.base.swap(physical_a.get(), physical_b.get());
    }
}
