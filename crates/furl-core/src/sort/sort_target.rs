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

/// A sortable sequence addressed purely by position.
///
/// The sorting algorithms never touch elements; they ask the target to
/// compare two positions and to swap two positions. Any container that can
/// answer those two questions for positions in `[0, len())` can be sorted,
/// including views whose positions are scattered across memory.
///
/// `is_less` takes `&mut self` so that implementations carrying a stateful
/// comparator (an `FnMut` closure) can satisfy the contract.
pub trait SortTarget {
    /// Returns the number of sortable positions.
    fn len(&self) -> usize;

    /// Checks whether the element at position `a` orders strictly before
    /// the element at position `b`.
    fn is_less(&mut self, a: usize, b: usize) -> bool;

    /// Swaps the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Checks whether the target has no sortable positions.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> SortTarget for [T]
where
    T: Ord,
{
    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn is_less(&mut self, a: usize, b: usize) -> bool {
        self[a] < self[b]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_target_reports_length() {
        let mut values = [3, 1, 2];
        let target: &mut [i32] = &mut values;
        assert_eq!(SortTarget::len(target), 3);
        assert!(!target.is_empty());
    }

    #[test]
    fn test_slice_target_compares_positions() {
        let mut values = [3, 1, 2];
        let target: &mut [i32] = &mut values;
        assert!(target.is_less(1, 0));
        assert!(!target.is_less(0, 1));
        assert!(!target.is_less(1, 1));
    }

    #[test]
    fn test_slice_target_swaps_positions() {
        let mut values = [3, 1, 2];
        let target: &mut [i32] = &mut values;
        SortTarget::swap(target, 0, 2);
        assert_eq!(values, [2, 1, 3]);
    }

    #[test]
    fn test_empty_slice_target() {
        let mut values: [i32; 0] = [];
        let target: &mut [i32] = &mut values;
        assert_eq!(SortTarget::len(target), 0);
        assert!(target.is_empty());
    }
}
