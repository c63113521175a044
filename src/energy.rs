// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given the pixel grid, build the compacted view of what is left of
//! the image, then give every pixel in it an energy: the magnitude of
//! the centered color gradient across all three channels.  Neighbors
//! that fall off the edge of the view count as black; they are not
//! mirrored or clamped.
//!
//! The view is rebuilt from scratch for every seam.  Nothing here
//! survives from one seam to the next.

use crate::grid::{Orientation, Pixel, PixelGrid};
use crate::twodmap::{Lattice, TwoDimensionalMap};
use image::Rgb;
use itertools::{iproduct, izip};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Build the dense view of every pixel no seam has taken yet.
///
/// Vertical seams always come first.  So a column of the view is
/// "the c-th pixel of every storage row that survived the vertical
/// seams", read top to bottom with the pixels horizontal seams took
/// skipped.  With no horizontal seams taken this is just each storage
/// row with the gaps closed; with no vertical seams taken it is each
/// storage column with the gaps closed.
pub fn compact(grid: &PixelGrid) -> TwoDimensionalMap<Pixel> {
    let (width, height) = grid.current_dimensions();
    let storage_height = grid.height();

    // Storage indices, one row per storage row, of the pixels the
    // vertical seams left alone.
    let mut lanes: TwoDimensionalMap<usize> = TwoDimensionalMap::new(width, storage_height);
    for (row, chunk) in grid.pixels().chunks(grid.width().max(1)).enumerate() {
        let survivors = chunk
            .iter()
            .enumerate()
            .filter(|(_, p)| p.removed_by != Some(Orientation::Vertical))
            .map(|(col, _)| row * grid.width() + col);
        let mut count = 0;
        for (x, index) in survivors.enumerate() {
            lanes[(x, row)] = index;
            count += 1;
        }
        debug_assert_eq!(count, width, "row {} has the wrong number of survivors", row);
    }

    let mut view = TwoDimensionalMap::new(width, height);
    for x in 0..width {
        let column = (0..storage_height)
            .map(|row| &grid.pixels()[lanes[(x, row)]])
            .filter(|p| p.removed_by != Some(Orientation::Horizontal));
        let mut count = 0;
        for (y, pixel) in column.enumerate() {
            view[(x, y)] = *pixel;
            count += 1;
        }
        debug_assert_eq!(count, height, "column {} has the wrong number of survivors", x);
    }
    view
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and sums them up:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
//
#[inline]
fn squared_delta(next: &Rgb<u8>, prev: &Rgb<u8>) -> f64 {
    izip!(next.0.iter(), prev.0.iter())
        .map(|(n, p)| {
            let d = f64::from(*n) - f64::from(*p);
            d * d
        })
        .sum()
}

fn color_at<L: Lattice<Item = Pixel>>(view: &L, x: isize, y: isize) -> Rgb<u8> {
    view.get(x, y).map_or(BLACK, |p| p.color)
}

/// The energy of the pixel at (x, y) of a compacted view:
///
/// ```text
/// e(x,y) = sqrt(|Δx|² + |Δy|²)
/// ```
///
/// where Δx compares (x+1, y) against (x−1, y) and Δy compares
/// (x, y+1) against (x, y−1).
pub fn pixel_energy<L: Lattice<Item = Pixel>>(view: &L, x: usize, y: usize) -> f64 {
    let (x, y) = (x as isize, y as isize);
    let dx = squared_delta(&color_at(view, x + 1, y), &color_at(view, x - 1, y));
    let dy = squared_delta(&color_at(view, x, y + 1), &color_at(view, x, y - 1));
    (dx + dy).sqrt()
}

/// Fill in the energy of every pixel of a compacted view.
pub fn compute_energy(view: &mut TwoDimensionalMap<Pixel>) {
    let (width, height) = view.dimensions();
    let energies: Vec<f64> = {
        let view: &TwoDimensionalMap<Pixel> = view;
        iproduct!(0..height, 0..width)
            .map(|(y, x)| pixel_energy(view, x, y))
            .collect()
    };
    for (i, e) in energies.into_iter().enumerate() {
        view[(i % width, i / width)].energy = e;
    }
}

/// A convenience wrapper: the compacted, energy-annotated view of what
/// is left of the grid.
pub fn energy_view(grid: &PixelGrid) -> TwoDimensionalMap<Pixel> {
    let mut view = compact(grid);
    compute_energy(&mut view);
    view
}
