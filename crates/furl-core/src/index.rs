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

//! # Logical and Physical Indices (Zero-Cost)
//!
//! Transparent wrappers around `usize` that keep the two index spaces of a
//! projection apart: `LogicalIndex` is the position an algorithm believes it
//! addresses, `PhysicalIndex` is the actual offset into the underlying
//! slice. A projection is exactly a map from the former to the latter.
//!
//! ## Motivation
//!
//! Code that remaps indices juggles both spaces in the same few lines, and a
//! raw `usize` gives the compiler no way to catch a logical index handed to
//! a physical access (or vice versa). Encoding the space in the type makes
//! that mix-up a type error while compiling down to a plain `usize`.
//!
//! ## Highlights
//!
//! - `new`, `get`, and `is_zero` are `const` and free of runtime overhead.
//! - `Display`/`Debug` render as `LogicalIndex(3)` / `PhysicalIndex(3)`.
//! - Offset arithmetic (`+`, `-`) with `usize` plus assignment variants.
//! - Conversions: `From<usize>` and back.
//!
//! ## Usage
//!
//! ```rust
//! use furl_core::index::{LogicalIndex, PhysicalIndex};
//!
//! let logical = LogicalIndex::new(3);
//! assert_eq!(logical.get(), 3);
//! assert_eq!((logical + 2).get(), 5);
//! assert_eq!(format!("{}", PhysicalIndex::new(7)), "PhysicalIndex(7)");
//! ```

macro_rules! define_index {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(usize);

        impl $name {
            /// Creates a new index from a raw `usize`.
            #[inline(always)]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the underlying `usize`.
            #[inline(always)]
            pub const fn get(&self) -> usize {
                self.0
            }

            /// Checks whether the index is zero.
            #[inline(always)]
            pub const fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<usize> for $name {
            #[inline(always)]
            fn from(index: usize) -> Self {
                Self::new(index)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(index: $name) -> Self {
                index.0
            }
        }

        impl std::ops::Add<usize> for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: usize) -> Self::Output {
                Self::new(self.0 + rhs)
            }
        }

        impl std::ops::AddAssign<usize> for $name {
            #[inline(always)]
            fn add_assign(&mut self, rhs: usize) {
                self.0 += rhs;
            }
        }

        impl std::ops::Sub<usize> for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: usize) -> Self::Output {
                Self::new(self.0 - rhs)
            }
        }

        impl std::ops::SubAssign<usize> for $name {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: usize) {
                self.0 -= rhs;
            }
        }
    };
}

define_index!(
    /// A position in the logical index space: the order an algorithm walks.
    ///
    /// Projections consume logical indices and produce [`PhysicalIndex`]
    /// values; views are indexed logically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::index::LogicalIndex;
    ///
    /// let index = LogicalIndex::new(5);
    /// assert_eq!(index.get(), 5);
    /// assert!(!index.is_zero());
    /// ```
    LogicalIndex
);

define_index!(
    /// A position in the physical index space: the actual slice offset.
    ///
    /// Produced by projections; only physical indices ever reach the
    /// underlying storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furl_core::index::PhysicalIndex;
    ///
    /// let index = PhysicalIndex::new(0);
    /// assert!(index.is_zero());
    /// ```
    PhysicalIndex
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let logical = LogicalIndex::new(10);
        assert_eq!(logical.get(), 10);

        let physical = PhysicalIndex::new(3);
        assert_eq!(physical.get(), 3);
    }

    #[test]
    fn test_is_zero() {
        assert!(LogicalIndex::new(0).is_zero());
        assert!(!LogicalIndex::new(1).is_zero());
        assert!(PhysicalIndex::default().is_zero());
    }

    #[test]
    fn test_conversions() {
        // From usize
        let logical: LogicalIndex = 42.into();
        assert_eq!(logical.get(), 42);

        // Into usize
        let raw: usize = logical.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_debug_and_display() {
        let logical = LogicalIndex::new(7);
        assert_eq!(format!("{}", logical), "LogicalIndex(7)");
        assert_eq!(format!("{:?}", logical), "LogicalIndex(7)");

        let physical = PhysicalIndex::new(9);
        assert_eq!(format!("{}", physical), "PhysicalIndex(9)");
        assert_eq!(format!("{:?}", physical), "PhysicalIndex(9)");
    }

    #[test]
    fn test_arithmetic_ops() {
        let index = LogicalIndex::new(10);
        assert_eq!((index + 5).get(), 15);
        assert_eq!((index - 5).get(), 5);
    }

    #[test]
    fn test_assignment_ops() {
        let mut index = PhysicalIndex::new(10);

        index += 5;
        assert_eq!(index.get(), 15);

        index -= 10;
        assert_eq!(index.get(), 5);
    }

    #[test]
    fn test_ordering() {
        assert!(LogicalIndex::new(1) < LogicalIndex::new(2));
        assert_eq!(LogicalIndex::new(4), LogicalIndex::new(4));
    }
}
