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

//! # Folded-Interleave Demo
//!
//! Sorts a series of vectors through a folded-interleave projection and
//! prints the physical layout next to the logical view after each sort.
//! The rounds cover every length from 1 to 15, then random refills at a
//! fixed odd length, then at a fixed even length.

use furl_core::projection::fold::FoldedInterleave;
use furl_core::view::slice_mut::ProjectedSliceMut;
use rand::{Rng, seq::SliceRandom};

/// Joins the values of a row with commas.
fn format_row(values: &[i32]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sorts `values` through the folded-interleave projection and prints the
/// slice before, after, and as the logical view.
fn sort_and_report(values: &mut [i32]) {
    println!("Before:      {}", format_row(values));

    let len = values.len();
    let mut view = ProjectedSliceMut::new(values, FoldedInterleave::new(len));
    view.sort_unstable();
    let folded = view.to_vec();

    println!("After:       {}", format_row(values));
    println!("Folded view: {}", format_row(&folded));
    println!();
}

fn main() {
    let mut rng = rand::rng();
    let mut values: Vec<i32> = Vec::new();

    // Incrementing ranges in shuffled order, growing one element per round.
    for next in 0..15 {
        values.push(next);
        values.shuffle(&mut rng);
        sort_and_report(&mut values);
    }

    // Random values at the full odd length.
    for _ in 0..10 {
        for value in values.iter_mut() {
            *value = rng.random_range(0..100);
        }
        values.shuffle(&mut rng);
        sort_and_report(&mut values);
    }

    // One element shorter, so the even length is exercised as well.
    values.pop();
    for _ in 0..10 {
        for value in values.iter_mut() {
            *value = rng.random_range(0..100);
        }
        values.shuffle(&mut rng);
        sort_and_report(&mut values);
    }
}
