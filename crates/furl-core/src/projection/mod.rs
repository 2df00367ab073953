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

//! # Projections
//!
//! A projection is a pure map from [`LogicalIndex`](crate::index::LogicalIndex)
//! to [`PhysicalIndex`](crate::index::PhysicalIndex): the single seam through
//! which a view re-interprets the order of its underlying slice. For reads to
//! be meaningful the map must be a bijection on `[0, len)` of the viewed
//! slice; the library never validates that for arbitrary projections (only
//! `PermutationTable` construction does, because it is handed the whole map
//! up front).
//!
//! ## Submodules
//!
//! - `projection`: The `Projection` trait itself, with blanket
//!   implementations for references and boxes and a `then` combinator.
//! - `identity`: The do-nothing map `p(i) = i`.
//! - `reverse`: The reversing map `p(i) = len - 1 - i`.
//! - `fold`: The folded-interleave map over [`math::fold`](crate::math::fold).
//! - `func`: Adapter turning any `Fn(usize) -> usize` into a projection.
//! - `compose`: Sequential composition of two projections.
//! - `table`: Explicit, validated permutation tables with inversion and
//!   in-place application.
//!
//! ## Motivation
//!
//! Keeping the map a first-class value (rather than a closure parameter on
//! every call) lets views own or borrow it, lets compositions nest without
//! allocation, and gives frequently needed maps (identity, reversal,
//! folding, argsort tables) named, tested implementations.

pub mod compose;
pub mod fold;
pub mod func;
pub mod identity;
pub mod projection;
pub mod reverse;
pub mod table;
