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
    index::{LogicalIndex, PhysicalIndex},
    projection::projection::Projection,
};

/// A `Copy` position into a projected reading of a slice, with
/// pointer-style arithmetic in logical index space.
///
/// Where [`ProjectedIter`](crate::view::iter::ProjectedIter) is the
/// Rust-native consumption surface, the cursor serves algorithms phrased in
/// terms of iterator *pairs*: it can be copied freely, shifted by signed
/// offsets, subtracted from a sibling to measure logical distance, and
/// compared. All arithmetic and comparisons touch only the logical index,
/// never the physical position, so distances and orderings are exactly
/// those of the logical walk, which is what partition-style algorithms
/// rely on.
///
/// Two cursors may be compared or subtracted only if they share the same
/// base slice and projection. Debug builds assert this; release builds
/// compare the logical indices anyway, which is well-defined but
/// meaningless across origins.
///
/// # Examples
///
/// ```rust
/// use furl_core::projection::fold::FoldedInterleave;
/// use furl_core::view::cursor::ProjectionCursor;
///
/// let base = [0, 9, 1, 8, 2, 7, 3, 6, 4, 5];
/// let fold = FoldedInterleave::new(10);
/// let begin = ProjectionCursor::new(&base, &fold);
/// let end = begin + base.len() as isize;
///
/// assert_eq!(end - begin, 10);
/// assert_eq!(*begin.get(), 0);
/// assert_eq!(*(begin + 4).get(), 4);
/// assert!(begin < end);
/// ```
pub struct ProjectionCursor<'a, T, P> {
    base: &'a [T],
    projection: &'a P,
    index: isize,
}

impl<'a, T, P> ProjectionCursor<'a, T, P>
where
    P: Projection,
{
    /// Creates a cursor at logical index 0 of `base`.
    #[inline(always)]
    pub fn new(base: &'a [T], projection: &'a P) -> Self {
        Self {
            base,
            projection,
            index: 0,
        }
    }

    /// Returns the logical index relative to the position the cursor was
    /// constructed at. Negative once moved before the origin.
    #[inline(always)]
    pub const fn index(&self) -> isize {
        self.index
    }

    /// Checks whether the cursor currently addresses a readable position,
    /// i.e. its logical index lies in `[0, base.len())`.
    #[inline(always)]
    pub fn in_bounds(&self) -> bool {
        0 <= self.index && (self.index as usize) < self.base.len()
    }

    /// Returns the physical index this cursor addresses.
    ///
    /// # Panics
    ///
    /// Panics if the logical index lies outside `[0, base.len())`.
    #[inline]
    pub fn physical(&self) -> PhysicalIndex {
        assert!(
            self.in_bounds(),
            "called `ProjectionCursor::physical` with index out of bounds: the len is {} but the index is {}",
            self.base.len(),
            self.index
        );
        self.projection.apply(LogicalIndex::new(self.index as usize))
    }

    /// Returns a reference to the element this cursor addresses.
    ///
    /// The reference borrows the underlying slice, not the cursor, so it
    /// outlives any further cursor movement.
    ///
    /// # Panics
    ///
    /// Panics if the logical index lies outside `[0, base.len())`, or if
    /// the projection maps it outside the slice (a projection-contract
    /// violation).
    #[inline]
    pub fn get(&self) -> &'a T {
        assert!(
            self.in_bounds(),
            "called `ProjectionCursor::get` with index out of bounds: the len is {} but the index is {}",
            self.base.len(),
            self.index
        );
        let physical = self.projection.apply(LogicalIndex::new(self.index as usize));
        &self.base[physical.get()]
    }

    /// Returns a reference to the addressed element, or `None` if the
    /// logical index lies outside `[0, base.len())`.
    ///
    /// A projection that maps an in-range logical index outside the slice
    /// still panics; that is a contract violation, not a range miss.
    #[inline]
    pub fn try_get(&self) -> Option<&'a T> {
        if !self.in_bounds() {
            return None;
        }
        let physical = self.projection.apply(LogicalIndex::new(self.index as usize));
        Some(&self.base[physical.get()])
    }
}

impl<T, P> ProjectionCursor<'_, T, P> {
    #[inline(always)]
    fn same_origin(&self, other: &Self) -> bool {
        std::ptr::eq(self.base, other.base) && std::ptr::eq(self.projection, other.projection)
    }
}

impl<T, P> Clone for ProjectionCursor<'_, T, P> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, P> Copy for ProjectionCursor<'_, T, P> {}

impl<T, P> std::fmt::Debug for ProjectionCursor<'_, T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProjectionCursor({})", self.index)
    }
}

impl<T, P> std::ops::Add<isize> for ProjectionCursor<'_, T, P> {
    type Output = Self;

    #[inline(always)]
    fn add(mut self, rhs: isize) -> Self::Output {
        self.index += rhs;
        self
    }
}

impl<T, P> std::ops::AddAssign<isize> for ProjectionCursor<'_, T, P> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: isize) {
        self.index += rhs;
    }
}

impl<T, P> std::ops::Sub<isize> for ProjectionCursor<'_, T, P> {
    type Output = Self;

    #[inline(always)]
    fn sub(mut self, rhs: isize) -> Self::Output {
        self.index -= rhs;
        self
    }
}

impl<T, P> std::ops::SubAssign<isize> for ProjectionCursor<'_, T, P> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: isize) {
        self.index -= rhs;
    }
}

impl<T, P> std::ops::Sub for ProjectionCursor<'_, T, P> {
    type Output = isize;

    /// Logical distance between two cursors of the same origin, not the
    /// distance between their physical targets.
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert!(
            self.same_origin(&rhs),
            "ProjectionCursor: subtracted cursors from different origins"
        );
        self.index - rhs.index
    }
}

impl<T, P> PartialEq for ProjectionCursor<'_, T, P> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            self.same_origin(other),
            "ProjectionCursor: compared cursors from different origins"
        );
        self.index == other.index
    }
}

impl<T, P> Eq for ProjectionCursor<'_, T, P> {}

impl<T, P> PartialOrd for ProjectionCursor<'_, T, P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P> Ord for ProjectionCursor<'_, T, P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        debug_assert!(
            self.same_origin(other),
            "ProjectionCursor: compared cursors from different origins"
        );
        self.index.cmp(&other.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{fold::FoldedInterleave, identity::Identity};

    #[test]
    fn test_reads_through_projection() {
        let base = [0, 9, 1, 8, 2, 7, 3, 6, 4, 5];
        let fold = FoldedInterleave::new(10);
        let begin = ProjectionCursor::new(&base, &fold);

        for k in 0..10 {
            assert_eq!(*(begin + k).get(), k as i32);
        }
    }

    #[test]
    fn test_distance_after_offset() {
        let base = [1, 2, 3, 4, 5, 6, 7, 8];
        let identity = Identity;
        let a = ProjectionCursor::new(&base, &identity) + 3;

        for k in -3..=4 {
            assert_eq!((a + k) - a, k);
        }
    }

    #[test]
    fn test_ordering_follows_logical_index() {
        let base = [5, 1, 4, 2, 3];
        let fold = FoldedInterleave::new(5);
        let begin = ProjectionCursor::new(&base, &fold);
        let end = begin + 5;

        assert!(begin < end);
        assert!(begin <= begin);
        assert!(end > begin + 4);
        assert_eq!(begin + 2, begin + 2);
        assert_ne!(begin, begin + 1);
    }

    #[test]
    fn test_sub_assign_moves_backward() {
        // `-=` must subtract; a cursor advanced by 5 and pulled back by 2
        // sits at logical 3.
        let base = [9, 8, 7, 6, 5, 4];
        let identity = Identity;
        let mut cursor = ProjectionCursor::new(&base, &identity);

        cursor += 5;
        cursor -= 2;
        assert_eq!(cursor.index(), 3);
        assert_eq!(*cursor.get(), 6);

        cursor -= 3;
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_binary_sub_moves_backward() {
        let base = [1, 2, 3];
        let identity = Identity;
        let cursor = ProjectionCursor::new(&base, &identity) + 2;
        assert_eq!((cursor - 2).index(), 0);
    }

    #[test]
    fn test_begin_equals_end_for_empty() {
        let base: [i32; 0] = [];
        let identity = Identity;
        let begin = ProjectionCursor::new(&base, &identity);
        let end = begin + base.len() as isize;

        assert_eq!(begin, end);
        assert_eq!(end - begin, 0);
        assert_eq!(begin.try_get(), None);
    }

    #[test]
    fn test_try_get_guards_logical_range() {
        let base = [10, 20, 30];
        let identity = Identity;
        let cursor = ProjectionCursor::new(&base, &identity);

        assert_eq!(cursor.try_get(), Some(&10));
        assert_eq!((cursor + 2).try_get(), Some(&30));
        assert_eq!((cursor + 3).try_get(), None);
        assert_eq!((cursor - 1).try_get(), None);
    }

    #[test]
    fn test_physical_translates_index() {
        let base = [0; 10];
        let fold = FoldedInterleave::new(10);
        let cursor = ProjectionCursor::new(&base, &fold);

        assert_eq!((cursor + 1).physical(), PhysicalIndex::new(2));
        assert_eq!((cursor + 9).physical(), PhysicalIndex::new(1));
    }

    #[test]
    fn test_copy_leaves_original_in_place() {
        let base = [1, 2, 3];
        let identity = Identity;
        let original = ProjectionCursor::new(&base, &identity);
        let mut copy = original;

        copy += 2;
        assert_eq!(original.index(), 0);
        assert_eq!(copy.index(), 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_panics_out_of_range() {
        let base = [1, 2];
        let identity = Identity;
        let cursor = ProjectionCursor::new(&base, &identity) + 2;
        let _ = cursor.get();
    }

    #[test]
    fn test_in_bounds() {
        let base = [1, 2, 3];
        let identity = Identity;
        let cursor = ProjectionCursor::new(&base, &identity);

        assert!(cursor.in_bounds());
        assert!((cursor + 2).in_bounds());
        assert!(!(cursor + 3).in_bounds());
        assert!(!(cursor - 1).in_bounds());
    }

    #[test]
    fn test_debug_format() {
        let base = [1];
        let identity = Identity;
        let cursor = ProjectionCursor::new(&base, &identity) + 4;
        assert_eq!(format!("{:?}", cursor), "ProjectionCursor(4)");
    }
}
