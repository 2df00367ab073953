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

/// Two projections run in sequence, the result of
/// [`Projection::then`](crate::projection::projection::Projection::then).
///
/// `Composed<A, B>` applies `A` first; its physical output is re-read as
/// the logical input of `B`. This is exactly what stacking one view on top
/// of another does, flattened into a single map so nested views cost one
/// struct instead of one indirection per layer. Composition of bijections
/// is a bijection, so stacking valid projections stays valid.
///
/// # Examples
///
/// ```rust
/// use furl_core::index::LogicalIndex;
/// use furl_core::projection::{
///     fold::FoldedInterleave, projection::Projection, reverse::Reverse,
/// };
///
/// // Fold, then read the folded layout back to front.
/// let projection = FoldedInterleave::new(5).then(Reverse::new(5));
/// let mapped: Vec<usize> = (0..5)
///     .map(|i| projection.apply(LogicalIndex::new(i)).get())
///     .collect();
/// assert_eq!(mapped, [4, 2, 0, 1, 3]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Composed<A, B> {
    first: A,
    second: B,
}

impl<A, B> Composed<A, B>
where
    A: Projection,
    B: Projection,
{
    /// Creates the composition applying `first`, then `second`.
    #[inline(always)]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the projection applied first.
    #[inline(always)]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns the projection applied second.
    #[inline(always)]
    pub const fn second(&self) -> &B {
        &self.second
    }
}

impl<A, B> Projection for Composed<A, B>
where
    A: Projection,
    B: Projection,
{
    #[inline(always)]
    fn apply(&self, index: LogicalIndex) -> PhysicalIndex {
        let inner = self.first.apply(index);
        self.second.apply(LogicalIndex::new(inner.get()))
    }
}
