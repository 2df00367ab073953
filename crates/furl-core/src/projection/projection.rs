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
    projection::compose::Composed,
};

/// A pure map from logical to physical index space.
///
/// Implementors must behave as mathematical functions: `apply` takes
/// `&self`, must not observe or mutate external state, and must return the
/// same output for the same input every time it is called. Any projection
/// that is `Sync` can therefore be shared freely between threads reading
/// the same slice.
///
/// For a view of length `n` to read correctly, the projection restricted to
/// logical `[0, n)` must be a bijection onto physical `[0, n)`. That is a
/// caller obligation; violations are caught (as panics) only when an
/// out-of-bounds physical index reaches the slice.
///
/// # Examples
///
/// ```rust
/// use furl_core::index::{LogicalIndex, PhysicalIndex};
/// use furl_core::projection::projection::Projection;
///
/// struct SwapPairs;
///
/// impl Projection for SwapPairs {
///     fn apply(&self, index: LogicalIndex) -> PhysicalIndex {
///         PhysicalIndex::new(index.get() ^ 1)
///     }
/// }
///
/// assert_eq!(SwapPairs.apply(LogicalIndex::new(4)).get(), 5);
/// assert_eq!(SwapPairs.apply(LogicalIndex::new(5)).get(), 4);
/// ```
pub trait Projection {
    /// Maps a logical index to the physical index it addresses.
    fn apply(&self, index: LogicalIndex) -> PhysicalIndex;

    /// Chains `self` with `next`: the returned projection applies `self`
    /// first and feeds its physical output, re-read as a logical index,
    /// into `next`.
    ///
    /// This is how layered views compose: the inner map's physical space
    /// is the outer map's logical space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::index::LogicalIndex;
    /// use furl_core::projection::projection::Projection;
    /// use furl_core::projection::reverse::Reverse;
    ///
    /// // Reversing twice is the identity.
    /// let twice = Reverse::new(8).then(Reverse::new(8));
    /// for i in 0..8 {
    ///     assert_eq!(twice.apply(LogicalIndex::new(i)).get(), i);
    /// }
    /// ```
    #[inline]
    fn then<Q>(self, next: Q) -> Composed<Self, Q>
    where
        Self: Sized,
        Q: Projection,
    {
        Composed::new(self, next)
    }
}

impl<P> Projection for &P
where
    P: Projection + ?Sized,
{
    #[inline(always)]
    fn apply(&self, index: LogicalIndex) -> PhysicalIndex {
        (**self).apply(index)
    }
}

impl<P> Projection for Box<P>
where
    P: Projection + ?Sized,
{
    #[inline(always)]
    fn apply(&self, index: LogicalIndex) -> PhysicalIndex {
        (**self).apply(index)
    }
}
