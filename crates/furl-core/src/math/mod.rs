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

//! # Index Math
//!
//! Pure index arithmetic underlying the concrete projections, expressed as
//! free functions generic over primitive integers so the formulas can be
//! used (and exhaustively tested) independently of any view machinery.
//!
//! ## Submodules
//!
//! - `fold`: The folded-interleave bijection on `[0, len)` together with
//!   its exact inverse, in both debug-asserted and checked (`Option`)
//!   forms. The inverse tabulates the fold ordering
//!   `0, len-1, 1, len-2, ...`.
//!
//! ## Motivation
//!
//! Keeping the raw formulas separate from the `Projection` implementations
//! lets callers that only need the arithmetic (offset tables, tests,
//! benches) avoid the view layer entirely, and lets the formulas be stated
//! once for every integer width.
//!
//! Refer to the `fold` module for detailed APIs and examples.

pub mod fold;
