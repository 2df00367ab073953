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

//! # Projected Views
//!
//! The reading and writing surface over a slice seen through a projection.
//! A view never copies or moves elements: every access translates a logical
//! index through the projection into a physical slice offset on demand, in
//! constant time and constant space.
//!
//! ## Submodules
//!
//! - `slice`: `ProjectedSlice`, the shared (read-only) view.
//! - `slice_mut`: `ProjectedSliceMut`, the exclusive view with single-slot
//!   mutation, swapping, reversal, and in-place unstable sorting in logical
//!   order.
//! - `iter`: `ProjectedIter`, the double-ended, exact-size iterator over a
//!   projected reading.
//! - `cursor`: `ProjectionCursor`, a `Copy` position with pointer-style
//!   arithmetic and comparisons in logical index space, for algorithms that
//!   want iterator pairs rather than Rust iterators.
//!
//! ## Motivation
//!
//! Splitting the surface this way keeps each piece honest about aliasing:
//! shared views and cursors may coexist freely, while every mutation goes
//! through one exclusive borrow. Handing out coexisting mutable references
//! through an unvalidated projection would be unsound, since two logical
//! indices may collide on one physical slot, so no mutable iterator is
//! offered; the algorithms that would want one (sorting, reversal, bulk
//! permuting) are provided directly instead.

pub mod cursor;
pub mod iter;
pub mod slice;
pub mod slice_mut;
