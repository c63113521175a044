// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Coordinate checks, and the ternary macro that the boundary rules
//! lean on.

/// My ternary expression handler.  Rust's ifs are already
/// expressions, but the edge (literally) cases of seam carving read
/// much better as a table of one-liners than as the five-line blocks
/// `cargo fmt` turns them into.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

/// True iff `0 <= x < width` and `0 <= y < height`.
///
/// Takes signed coordinates so that callers can ask about `x - 1` at
/// the left edge without underflowing first.
#[inline]
pub fn is_valid(x: isize, y: isize, width: usize, height: usize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
}
