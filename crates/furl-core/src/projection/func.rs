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

/// A projection backed by an arbitrary `Fn(usize) -> usize`, the escape
/// hatch for one-off maps that do not deserve a named type.
///
/// Built with [`from_fn`]. The closure is held by value; it must be a pure
/// function of its argument (see [`Projection`]), and it must map
/// `[0, len)` bijectively onto itself for whatever view length it is used
/// with. That obligation stays with the caller.
///
/// # Examples
///
/// ```rust
/// use furl_core::index::LogicalIndex;
/// use furl_core::projection::{func, projection::Projection};
///
/// // Rotate a range of length 6 left by two positions.
/// let rotate = func::from_fn(|i| (i + 2) % 6);
/// assert_eq!(rotate.apply(LogicalIndex::new(0)).get(), 2);
/// assert_eq!(rotate.apply(LogicalIndex::new(5)).get(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct FnProjection<F> {
    func: F,
}

/// Wraps a `Fn(usize) -> usize` into a [`Projection`].
#[inline(always)]
pub fn from_fn<F>(func: F) -> FnProjection<F>
where
    F: Fn(usize) -> usize,
{
    FnProjection { func }
}

impl<F> Projection for FnProjection<F>
where
    F: Fn(usize) -> usize,
{
    #[inline(always)]
    fn apply(&self, index: LogicalIndex) -> PhysicalIndex {
        PhysicalIndex::new((self.func)(index.get()))
    }
}

impl<F> std::fmt::Debug for FnProjection<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FnProjection(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_closure() {
        let shift = from_fn(|i| i + 3);
        assert_eq!(shift.apply(LogicalIndex::new(0)).get(), 3);
        assert_eq!(shift.apply(LogicalIndex::new(7)).get(), 10);
    }

    #[test]
    fn test_capturing_closure() {
        let len = 8;
        let rotate = from_fn(move |i| (i + 1) % len);
        assert_eq!(rotate.apply(LogicalIndex::new(7)).get(), 0);
    }

    #[test]
    fn test_debug_is_opaque() {
        let projection = from_fn(|i| i);
        assert_eq!(format!("{:?}", projection), "FnProjection(..)");
    }
}
