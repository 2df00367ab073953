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

//! # Folded-Interleave Arithmetic
//!
//! The folded-interleave map sends logical index `i` within a range of
//! length `n` to physical index `2i` while `2i < n`, and to `2n - 2i - 1`
//! afterwards. It is a bijection on `[0, n)` for every `n >= 0`: the front
//! half of the logical range lands on the even physical positions walking
//! forward, the rear half on the odd positions walking backward. Its exact
//! inverse, [`unfold_interleave`], tabulated over `[0, n)` is the fold
//! ordering `0, n-1, 1, n-2, 2, n-3, ...`, which is the range folded back
//! on itself, converging at the middle.
//!
//! Sorting a range *through* the forward map arranges values so that
//! physical storage alternates small and large: position 0 holds the
//! minimum, position 1 the maximum, position 2 the second minimum, and so
//! on toward the middle.
//!
//! Both directions of the map are provided, each in a debug-asserted form
//! and a checked (`Option`) form. The implementations branch on
//! `index < len - index` (equivalent to `2i < n` over the integers) so that
//! no intermediate value ever exceeds `len`; the functions are total and
//! overflow-free for any in-domain index, at any `len` the integer type can
//! represent.

use num_traits::PrimInt;

/// Maps a logical index to its folded-interleave physical index.
///
/// Computes `2i` if `2i < len`, and `2 * len - 2i - 1` otherwise, without
/// ever forming an intermediate larger than `len`.
///
/// The caller must supply `0 <= index < len`; this is checked with a
/// `debug_assert!` only, and an out-of-domain index yields an unspecified
/// (but not undefined) result in release builds. Use
/// [`try_fold_interleave`] when the domain is not known in advance.
///
/// # Examples
///
/// ```rust
/// use furl_core::math::fold::fold_interleave;
///
/// let mapped: Vec<u32> = (0..10).map(|i| fold_interleave(i, 10)).collect();
/// assert_eq!(mapped, [0, 2, 4, 6, 8, 9, 7, 5, 3, 1]);
/// ```
#[inline(always)]
pub fn fold_interleave<T>(index: T, len: T) -> T
where
    T: PrimInt,
{
    debug_assert!(
        index >= T::zero() && index < len,
        "fold_interleave: index must lie in [0, len)"
    );
    // i < n - i is 2i < n, and both branch results stay below n.
    let remaining = len - index;
    if index < remaining {
        index + index
    } else {
        remaining + remaining - T::one()
    }
}

/// Maps a logical index to its folded-interleave physical index, returning
/// `None` if `index` lies outside `[0, len)`.
///
/// # Examples
///
/// ```rust
/// use furl_core::math::fold::try_fold_interleave;
///
/// assert_eq!(try_fold_interleave(9, 10), Some(1));
/// assert_eq!(try_fold_interleave(10, 10), None);
/// assert_eq!(try_fold_interleave(-1, 10), None);
/// ```
#[inline]
pub fn try_fold_interleave<T>(index: T, len: T) -> Option<T>
where
    T: PrimInt,
{
    if index >= T::zero() && index < len {
        Some(fold_interleave(index, len))
    } else {
        None
    }
}

/// Maps a folded-interleave physical index back to its logical index.
///
/// The exact inverse of [`fold_interleave`] on `[0, len)`: an even physical
/// index `p` came from logical `p / 2`, an odd one from
/// `len - (p + 1) / 2`.
///
/// The caller must supply `0 <= index < len`; this is checked with a
/// `debug_assert!` only. Use [`try_unfold_interleave`] when the domain is
/// not known in advance.
///
/// Tabulating the inverse yields the fold ordering itself: position `p` of
/// sorted-through-the-map storage holds the `unfold_interleave(p, len)`-th
/// smallest element.
///
/// # Examples
///
/// ```rust
/// use furl_core::math::fold::{fold_interleave, unfold_interleave};
///
/// let folded: Vec<u32> = (0..10).map(|p| unfold_interleave(p, 10)).collect();
/// assert_eq!(folded, [0, 9, 1, 8, 2, 7, 3, 6, 4, 5]);
///
/// for i in 0..10u32 {
///     assert_eq!(unfold_interleave(fold_interleave(i, 10), 10), i);
/// }
/// ```
#[inline(always)]
pub fn unfold_interleave<T>(index: T, len: T) -> T
where
    T: PrimInt,
{
    debug_assert!(
        index >= T::zero() && index < len,
        "unfold_interleave: index must lie in [0, len)"
    );
    let two = T::one() + T::one();
    if index & T::one() == T::zero() {
        index / two
    } else {
        len - (index + T::one()) / two
    }
}

/// Maps a folded-interleave physical index back to its logical index,
/// returning `None` if `index` lies outside `[0, len)`.
///
/// # Examples
///
/// ```rust
/// use furl_core::math::fold::try_unfold_interleave;
///
/// assert_eq!(try_unfold_interleave(1, 10), Some(9));
/// assert_eq!(try_unfold_interleave(10, 10), None);
/// ```
#[inline]
pub fn try_unfold_interleave<T>(index: T, len: T) -> Option<T>
where
    T: PrimInt,
{
    if index >= T::zero() && index < len {
        Some(unfold_interleave(index, len))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold_table(len: usize) -> Vec<usize> {
        (0..len).map(|i| fold_interleave(i, len)).collect()
    }

    fn unfold_table(len: usize) -> Vec<usize> {
        (0..len).map(|p| unfold_interleave(p, len)).collect()
    }

    #[test]
    fn test_fold_fixed_tables() {
        assert_eq!(fold_table(0), []);
        assert_eq!(fold_table(1), [0]);
        assert_eq!(fold_table(2), [0, 1]);
        assert_eq!(fold_table(5), [0, 2, 4, 3, 1]);
        assert_eq!(fold_table(10), [0, 2, 4, 6, 8, 9, 7, 5, 3, 1]);
    }

    #[test]
    fn test_unfold_fixed_tables() {
        // The inverse tabulated is the fold ordering: low, high, next-low,
        // next-high, converging at the middle.
        assert_eq!(unfold_table(0), []);
        assert_eq!(unfold_table(1), [0]);
        assert_eq!(unfold_table(2), [0, 1]);
        assert_eq!(unfold_table(5), [0, 4, 1, 3, 2]);
        assert_eq!(unfold_table(10), [0, 9, 1, 8, 2, 7, 3, 6, 4, 5]);
    }

    #[test]
    fn test_bijection_sweep() {
        // The image of [0, n) must be a permutation of [0, n) for every n.
        for len in 0..=64 {
            let mut image = fold_table(len);
            image.sort_unstable();
            let expected: Vec<usize> = (0..len).collect();
            assert_eq!(image, expected, "not a bijection for len {}", len);
        }
    }

    #[test]
    fn test_inverse_laws() {
        for len in 0..=64u64 {
            for i in 0..len {
                assert_eq!(unfold_interleave(fold_interleave(i, len), len), i);
                assert_eq!(fold_interleave(unfold_interleave(i, len), len), i);
            }
        }
    }

    #[test]
    fn test_signed_widths() {
        let mapped: Vec<i32> = (0..5).map(|i| fold_interleave(i, 5)).collect();
        assert_eq!(mapped, [0, 2, 4, 3, 1]);

        let unmapped: Vec<i64> = (0..10).map(|p| unfold_interleave(p, 10)).collect();
        assert_eq!(unmapped, [0, 9, 1, 8, 2, 7, 3, 6, 4, 5]);
    }

    #[test]
    fn test_no_overflow_at_type_maximum() {
        // Exhaustive over u8: every length the type can represent, every
        // in-domain index, no wrap in either direction.
        for len in 0..=u8::MAX {
            for i in 0..len {
                let p = fold_interleave(i, len);
                assert!(p < len);
                assert_eq!(unfold_interleave(p, len), i);
            }
        }
    }

    #[test]
    fn test_try_forms_validate_domain() {
        assert_eq!(try_fold_interleave(0, 10), Some(0));
        assert_eq!(try_fold_interleave(9, 10), Some(1));
        assert_eq!(try_fold_interleave(10, 10), None);
        assert_eq!(try_fold_interleave(0, 0), None);
        assert_eq!(try_fold_interleave(-3i32, 10), None);

        assert_eq!(try_unfold_interleave(5, 10), Some(7));
        assert_eq!(try_unfold_interleave(11, 10), None);
        assert_eq!(try_unfold_interleave(-1i64, 10), None);
    }

    #[test]
    fn test_halves_land_on_even_and_odd() {
        let len = 12u32;
        for i in 0..len {
            let p = fold_interleave(i, len);
            if i + i < len {
                assert_eq!(p % 2, 0, "front half must land on even positions");
            } else {
                assert_eq!(p % 2, 1, "rear half must land on odd positions");
            }
        }
    }
}
