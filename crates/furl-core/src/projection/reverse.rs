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

/// The projection that reads a range of length `len` back to front:
/// `p(i) = len - 1 - i`.
///
/// Its own inverse: composing `Reverse` with itself yields the identity
/// map over the same length.
///
/// # Examples
///
/// ```rust
/// use furl_core::index::LogicalIndex;
/// use furl_core::projection::{projection::Projection, reverse::Reverse};
///
/// let reverse = Reverse::new(4);
/// let mapped: Vec<usize> = (0..4)
///     .map(|i| reverse.apply(LogicalIndex::new(i)).get())
///     .collect();
/// assert_eq!(mapped, [3, 2, 1, 0]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Reverse {
    len: usize,
}

impl Reverse {
    /// Creates a reversing projection for ranges of length `len`.
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
}

impl Projection for Reverse {
    /// Maps `i` to `len - 1 - i`.
    ///
    /// The caller must supply `index < len`; this is checked with a
    /// `debug_assert!` only.
    #[inline(always)]
    fn apply(&self, index: LogicalIndex) -> PhysicalIndex {
        debug_assert!(
            index.get() < self.len,
            "called `Reverse::apply` with index out of bounds: the len is {} but the index is {}",
            self.len,
            index.get()
        );
        PhysicalIndex::new(self.len - 1 - index.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverses_range() {
        let reverse = Reverse::new(5);
        let mapped: Vec<usize> = (0..5)
            .map(|i| reverse.apply(LogicalIndex::new(i)).get())
            .collect();
        assert_eq!(mapped, [4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_self_inverse() {
        let len = 9;
        let twice = Reverse::new(len).then(Reverse::new(len));
        for i in 0..len {
            assert_eq!(twice.apply(LogicalIndex::new(i)).get(), i);
        }
    }

    #[test]
    fn test_len_and_is_empty() {
        assert_eq!(Reverse::new(3).len(), 3);
        assert!(!Reverse::new(3).is_empty());
        assert!(Reverse::new(0).is_empty());
    }
}
