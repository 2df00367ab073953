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
    math::fold::{fold_interleave, unfold_interleave},
    projection::projection::Projection,
};

/// The folded-interleave projection for ranges of length `len`:
/// `p(i) = 2i` while `2i < len`, and `2 * len - 2i - 1` afterwards.
///
/// A bijection on `[0, len)` for every `len >= 0`, including `len = 0`
/// (trivially valid, never invoked) and `len = 1` (maps 0 to itself).
/// Sorting a slice through a view carrying this projection leaves physical
/// storage in the zig-zag order minimum, maximum, second minimum, second
/// maximum, converging at the middle.
///
/// # Examples
///
/// ```rust
/// use furl_core::index::LogicalIndex;
/// use furl_core::projection::{fold::FoldedInterleave, projection::Projection};
///
/// let fold = FoldedInterleave::new(10);
/// let mapped: Vec<usize> = (0..10)
///     .map(|i| fold.apply(LogicalIndex::new(i)).get())
///     .collect();
/// assert_eq!(mapped, [0, 2, 4, 6, 8, 9, 7, 5, 3, 1]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FoldedInterleave {
    len: usize,
}

impl FoldedInterleave {
    /// Creates a folded-interleave projection for ranges of length `len`.
    #[inline(always)]
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Returns the range length this projection was built for.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the projected range is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps a physical index back to the logical index that addresses it,
    /// the exact inverse of [`apply`](Projection::apply).
    ///
    /// The caller must supply `index < len`; this is checked with a
    /// `debug_assert!` only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::index::{LogicalIndex, PhysicalIndex};
    /// use furl_core::projection::{fold::FoldedInterleave, projection::Projection};
    ///
    /// let fold = FoldedInterleave::new(10);
    /// for i in 0..10 {
    ///     let physical = fold.apply(LogicalIndex::new(i));
    ///     assert_eq!(fold.unapply(physical).get(), i);
    /// }
    /// ```
    #[inline(always)]
    pub fn unapply(&self, index: PhysicalIndex) -> LogicalIndex {
        LogicalIndex::new(unfold_interleave(index.get(), self.len))
    }
}

impl Projection for FoldedInterleave {
    /// Maps `i` to `2i` while `2i < len`, and to `2 * len - 2i - 1` after.
    ///
    /// The caller must supply `index < len`; this is checked with a
    /// `debug_assert!` only.
    #[inline(always)]
    fn apply(&self, index: LogicalIndex) -> PhysicalIndex {
        PhysicalIndex::new(fold_interleave(index.get(), self.len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(len: usize) -> Vec<usize> {
        let fold = FoldedInterleave::new(len);
        (0..len)
            .map(|i| fold.apply(LogicalIndex::new(i)).get())
            .collect()
    }

    #[test]
    fn test_fixed_tables() {
        assert_eq!(table(0), []);
        assert_eq!(table(1), [0]);
        assert_eq!(table(2), [0, 1]);
        assert_eq!(table(5), [0, 2, 4, 3, 1]);
        assert_eq!(table(10), [0, 2, 4, 6, 8, 9, 7, 5, 3, 1]);
    }

    #[test]
    fn test_bijection_sweep() {
        for len in 0..=64 {
            let mut image = table(len);
            image.sort_unstable();
            let expected: Vec<usize> = (0..len).collect();
            assert_eq!(image, expected, "not a bijection for len {}", len);
        }
    }

    #[test]
    fn test_unapply_inverts_apply() {
        for len in [0, 1, 2, 5, 14, 15, 64] {
            let fold = FoldedInterleave::new(len);
            for i in 0..len {
                let physical = fold.apply(LogicalIndex::new(i));
                assert_eq!(fold.unapply(physical), LogicalIndex::new(i));
            }
        }
    }

    #[test]
    fn test_matches_closed_form() {
        for len in [1usize, 2, 5, 14, 15] {
            let fold = FoldedInterleave::new(len);
            for i in 0..len {
                let expected = if 2 * i < len { 2 * i } else { 2 * len - 2 * i - 1 };
                assert_eq!(fold.apply(LogicalIndex::new(i)).get(), expected);
            }
        }
    }

    #[test]
    fn test_middle_lands_last_for_odd_lengths() {
        // The fold converges at the middle: for odd lengths the middle
        // logical index is the one the last physical slot traces back to.
        for len in [1usize, 3, 5, 7, 15] {
            let fold = FoldedInterleave::new(len);
            assert_eq!(fold.unapply(PhysicalIndex::new(len - 1)).get(), len / 2);
        }
    }

    #[test]
    fn test_len_and_is_empty() {
        assert_eq!(FoldedInterleave::new(15).len(), 15);
        assert!(FoldedInterleave::new(0).is_empty());
        assert!(!FoldedInterleave::new(1).is_empty());
    }
}
