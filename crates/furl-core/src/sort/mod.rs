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

//! # Position Sorting
//!
//! Sorting expressed over positions instead of over a slice of elements.
//! The algorithms here only ever compare two positions and swap two
//! positions, which is exactly the surface a projected view can offer:
//! elements cannot be moved out of it, because logical neighbors are not
//! physical neighbors.
//!
//! ## Submodules
//!
//! - `sort_target`: The `SortTarget` contract (length, compare, swap)
//!   that sortable containers implement.
//! - `unstable`: An in-place introsort over any `SortTarget`.
//!
//! ## Motivation
//!
//! The standard library sorts need contiguous `&mut [T]` and may move
//! elements through temporaries. A view that scatters logical indices
//! across the base slice cannot hand out such a buffer, so the sort is
//! restated in terms the view can satisfy. Plain slices implement the
//! same contract, which keeps the algorithms testable against
//! `slice::sort_unstable` directly.

pub mod sort_target;
pub mod unstable;
