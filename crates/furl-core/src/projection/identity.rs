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

/// The projection that maps every logical index to the physical index of
/// the same value: `p(i) = i`.
///
/// A view through `Identity` reads its slice in natural order; useful as a
/// neutral element for composition and as a baseline in benchmarks.
///
/// # Examples
///
/// ```rust
/// use furl_core::index::LogicalIndex;
/// use furl_core::projection::{identity::Identity, projection::Projection};
///
/// assert_eq!(Identity.apply(LogicalIndex::new(7)).get(), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Identity;

impl Projection for Identity {
    #[inline(always)]
    fn apply(&self, index: LogicalIndex) -> PhysicalIndex {
        PhysicalIndex::new(index.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_itself() {
        for i in 0..32 {
            assert_eq!(Identity.apply(LogicalIndex::new(i)).get(), i);
        }
    }
}
