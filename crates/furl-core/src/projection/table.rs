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
use fixedbitset::FixedBitSet;

/// An explicit projection: logical index `i` maps to the physical index
/// stored at position `i` of the table.
///
/// Unlike closure-backed projections, a `PermutationTable` knows its whole
/// map up front, so the validating constructors can guarantee it is a
/// bijection on `[0, len)`, which in turn makes [`inverse`](Self::inverse)
/// and in-place [`permute`](Self::permute) total operations. This is the
/// type to reach for when the order comes from data (an argsort, a schedule,
/// a shuffle) rather than from a formula.
///
/// # Examples
///
/// ```rust
/// use furl_core::index::LogicalIndex;
/// use furl_core::projection::{projection::Projection, table::PermutationTable};
///
/// let table = PermutationTable::new(vec![2, 0, 1]);
/// assert_eq!(table.apply(LogicalIndex::new(0)).get(), 2);
///
/// // Reading [10, 20, 30] through the table yields [30, 10, 20]; applying
/// // the table in place rearranges the storage the same way.
/// let mut values = [10, 20, 30];
/// table.permute(&mut values);
/// assert_eq!(values, [30, 10, 20]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct PermutationTable {
    table: Box<[usize]>,
}

impl PermutationTable {
    /// Creates a table from an explicit mapping.
    ///
    /// # Panics
    ///
    /// Panics if `table` is not a permutation of `[0, table.len())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::projection::table::PermutationTable;
    ///
    /// let table = PermutationTable::new(vec![1, 2, 0]);
    /// assert_eq!(table.len(), 3);
    /// ```
    #[inline]
    pub fn new(table: Vec<usize>) -> Self {
        assert!(
            is_permutation(&table),
            "PermutationTable: table is not a permutation of its index range"
        );
        Self {
            table: table.into_boxed_slice(),
        }
    }

    /// Creates a table from an explicit mapping if it is valid.
    ///
    /// Returns `None` if `table` is not a permutation of
    /// `[0, table.len())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::projection::table::PermutationTable;
    ///
    /// assert!(PermutationTable::try_new(vec![1, 0]).is_some());
    /// assert!(PermutationTable::try_new(vec![1, 1]).is_none());
    /// assert!(PermutationTable::try_new(vec![0, 7]).is_none());
    /// ```
    #[inline]
    pub fn try_new(table: Vec<usize>) -> Option<Self> {
        if is_permutation(&table) {
            Some(Self {
                table: table.into_boxed_slice(),
            })
        } else {
            None
        }
    }

    /// Creates a table without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `table` is a permutation of
    /// `[0, table.len())`. This function contains a `debug_assert!` to
    /// catch errors during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::projection::table::PermutationTable;
    ///
    /// let table = PermutationTable::new_unchecked(vec![2, 0, 1]);
    /// assert_eq!(table.len(), 3);
    /// ```
    #[inline]
    pub fn new_unchecked(table: Vec<usize>) -> Self {
        debug_assert!(
            is_permutation(&table),
            "PermutationTable: table is not a permutation of its index range"
        );
        Self {
            table: table.into_boxed_slice(),
        }
    }

    /// Creates the identity table of the given length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::projection::table::PermutationTable;
    ///
    /// let identity = PermutationTable::identity(4);
    /// assert!(identity.is_identity());
    /// assert_eq!(identity.as_slice(), [0, 1, 2, 3]);
    /// ```
    #[inline]
    pub fn identity(len: usize) -> Self {
        Self {
            table: (0..len).collect(),
        }
    }

    /// Tabulates an arbitrary projection over `[0, len)`.
    ///
    /// Bridges formula- or closure-backed projections into explicit form,
    /// unlocking [`inverse`](Self::inverse) and [`permute`](Self::permute)
    /// for them.
    ///
    /// # Panics
    ///
    /// Panics if the projection is not a bijection on `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::projection::{fold::FoldedInterleave, table::PermutationTable};
    ///
    /// let table = PermutationTable::from_projection(FoldedInterleave::new(5), 5);
    /// assert_eq!(table.as_slice(), [0, 2, 4, 3, 1]);
    /// ```
    pub fn from_projection<P>(projection: P, len: usize) -> Self
    where
        P: Projection,
    {
        let table: Vec<usize> = (0..len)
            .map(|i| projection.apply(LogicalIndex::new(i)).get())
            .collect();
        Self::new(table)
    }

    /// Builds the table that reads `values` in ascending order: position
    /// `i` of the table holds the physical index of the `i`-th smallest
    /// value.
    ///
    /// Viewing `values` through the returned table yields the sorted
    /// sequence without moving an element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::projection::table::PermutationTable;
    ///
    /// let values = [3, 7, 1, 9, 2];
    /// let order = PermutationTable::sorted_order(&values);
    /// assert_eq!(order.as_slice(), [2, 4, 0, 1, 3]);
    ///
    /// let sorted: Vec<i32> = order.iter().map(|p| values[p.get()]).collect();
    /// assert_eq!(sorted, [1, 2, 3, 7, 9]);
    /// ```
    pub fn sorted_order<T>(values: &[T]) -> Self
    where
        T: Ord,
    {
        Self::sorted_order_by(values, T::cmp)
    }

    /// Builds the table that reads `values` in ascending order according to
    /// `compare`.
    pub fn sorted_order_by<T, F>(values: &[T], mut compare: F) -> Self
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        let mut table: Vec<usize> = (0..values.len()).collect();
        table.sort_unstable_by(|&a, &b| compare(&values[a], &values[b]));
        // Started from the identity, so the result is a permutation.
        Self::new_unchecked(table)
    }

    /// Returns the number of entries in the table.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Checks whether the table is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the physical index for `index`, or `None` if `index` lies
    /// beyond the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::index::{LogicalIndex, PhysicalIndex};
    /// use furl_core::projection::table::PermutationTable;
    ///
    /// let table = PermutationTable::new(vec![1, 0]);
    /// assert_eq!(table.get(LogicalIndex::new(0)), Some(PhysicalIndex::new(1)));
    /// assert_eq!(table.get(LogicalIndex::new(2)), None);
    /// ```
    #[inline]
    pub fn get(&self, index: LogicalIndex) -> Option<PhysicalIndex> {
        self.table.get(index.get()).map(|&p| PhysicalIndex::new(p))
    }

    /// Returns the raw mapping as a slice of physical indices.
    #[inline(always)]
    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }

    /// Iterates the physical indices in logical order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = PhysicalIndex> + '_ {
        self.table.iter().map(|&p| PhysicalIndex::new(p))
    }

    /// Checks whether the table is the identity mapping.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// Returns the inverse table: if `self` maps `i` to `p`, the result
    /// maps `p` back to `i`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::projection::table::PermutationTable;
    ///
    /// let table = PermutationTable::new(vec![2, 0, 1]);
    /// assert_eq!(table.inverse().as_slice(), [1, 2, 0]);
    /// ```
    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0usize; self.table.len()];
        for (logical, &physical) in self.table.iter().enumerate() {
            inverse[physical] = logical;
        }
        // The inverse of a permutation is a permutation.
        Self::new_unchecked(inverse)
    }

    /// Rearranges `values` in place so that position `i` afterwards holds
    /// the element that was at position `self[i]` before: the same reading
    /// a view through this table produces, materialized into the storage
    /// itself.
    ///
    /// Follows the table's cycles with a visited set: O(n) time, one bit
    /// per entry of scratch space, every element moved at most once.
    ///
    /// # Panics
    ///
    /// Panics if `values` and the table differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::projection::table::PermutationTable;
    ///
    /// let mut values = [3, 7, 1, 9, 2];
    /// PermutationTable::sorted_order(&values).permute(&mut values);
    /// assert_eq!(values, [1, 2, 3, 7, 9]);
    /// ```
    pub fn permute<T>(&self, values: &mut [T]) {
        assert_eq!(
            values.len(),
            self.table.len(),
            "PermutationTable::permute: values length {} does not match table length {}",
            values.len(),
            self.table.len()
        );
        let mut visited = FixedBitSet::with_capacity(self.table.len());
        for start in 0..self.table.len() {
            if visited.contains(start) {
                continue;
            }
            // Walk the cycle, pulling each source into the slot before it.
            let mut current = start;
            loop {
                visited.insert(current);
                let source = self.table[current];
                if source == start {
                    break;
                }
                values.swap(current, source);
                current = source;
            }
        }
    }
}

impl Projection for PermutationTable {
    /// Looks `index` up in the table.
    ///
    /// # Panics
    ///
    /// Panics if `index` lies beyond the table.
    #[inline(always)]
    fn apply(&self, index: LogicalIndex) -> PhysicalIndex {
        PhysicalIndex::new(self.table[index.get()])
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PermutationTable").field(&self.table).finish()
    }
}

impl TryFrom<Vec<usize>> for PermutationTable {
    type Error = Vec<usize>;

    /// Validating conversion; hands the vector back on failure.
    fn try_from(table: Vec<usize>) -> Result<Self, Self::Error> {
        if is_permutation(&table) {
            Ok(Self {
                table: table.into_boxed_slice(),
            })
        } else {
            Err(table)
        }
    }
}

impl From<PermutationTable> for Vec<usize> {
    fn from(table: PermutationTable) -> Self {
        table.table.into_vec()
    }
}

impl From<PermutationTable> for Box<[usize]> {
    fn from(table: PermutationTable) -> Self {
        table.table
    }
}

/// Every value in `[0, len)` exactly once.
fn is_permutation(table: &[usize]) -> bool {
    let mut seen = FixedBitSet::with_capacity(table.len());
    for &physical in table {
        if physical >= table.len() || seen.contains(physical) {
            return false;
        }
        seen.insert(physical);
    }
    true
}
