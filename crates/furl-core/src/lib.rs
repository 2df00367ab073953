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

//! # Furl Core
//!
//! Zero-cost projection views over slices: a logical index space is
//! re-mapped onto the physical index space of an underlying slice through a
//! caller-supplied projection, so that generic read and sort code can treat
//! the slice *as if* it were permuted without allocating or moving a single
//! element. The flagship projection is the folded interleave, which folds a
//! range back on itself so that sorting through it lays values out in the
//! zig-zag order `min, max, second-min, second-max, ...`.
//!
//! ## Modules
//!
//! - `index`: Strongly typed `LogicalIndex`/`PhysicalIndex` newtypes that
//!   keep the two index spaces apart at compile time.
//! - `math`: Folded-interleave index arithmetic as checked and unchecked
//!   free functions, generic over primitive integers.
//! - `projection`: The `Projection` trait plus concrete maps: identity,
//!   reversal, folded interleave, closures, composition, and validated
//!   explicit permutation tables.
//! - `view`: Shared and exclusive projected slice views, a `Copy` read
//!   cursor with pointer-style arithmetic, and a double-ended projected
//!   iterator.
//! - `sort`: An in-place unstable sort written against a minimal
//!   random-access contract, so it can sort plain slices and projected
//!   views alike.
//!
//! ## Purpose
//!
//! Reordering data is often needed only at the boundary of an algorithm:
//! the algorithm wants one order, the storage wants another. These
//! primitives let both sides keep their preferred order while paying only
//! an index transformation per access, with all contracts either enforced
//! by the type system or checked at the slice boundary.
//!
//! Refer to each module for detailed APIs and examples.

pub mod index;
pub mod math;
pub mod projection;
pub mod sort;
pub mod view;
