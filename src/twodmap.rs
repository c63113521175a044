// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dense two-dimensional store behind every transient product of
//! a carve: the compacted view of the pixel grid, and the seam cost
//! table built from it.

use crate::coords::is_valid;
use std::ops::{Index, IndexMut};

/// Read-only, (x, y)-addressed access to a rectangular field.  Both
/// the seam search and the energy gradient are written against this,
/// so that a horizontal search can run over a transposed view of the
/// same data without copying it.
pub trait Lattice {
    /// What lives in each cell.
    type Item;

    /// (width, height)
    fn dimensions(&self) -> (usize, usize);

    /// The cell at (x, y).  Panics if out of range.
    fn at(&self, x: usize, y: usize) -> &Self::Item;

    /// The cell at (x, y), or None if the coordinate falls outside
    /// the field.
    fn get(&self, x: isize, y: isize) -> Option<&Self::Item> {
        let (width, height) = self.dimensions();
        if is_valid(x, y, width, height) {
            Some(self.at(x as usize, y as usize))
        } else {
            None
        }
    }
}

/// An addressable two-dimensional field containing one of several
/// possible objects during processing: a pixel record for the
/// compacted view, or a cost + back pointer for the seam table.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: usize,
    height: usize,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to the content type's
    /// default.
    pub fn new(width: usize, height: usize) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width * height],
        }
    }

    /// Wrap an existing row-major vector.  Returns None if the vector
    /// is not exactly `width * height` long.
    pub fn from_vec(width: usize, height: usize, cells: Vec<P>) -> Option<Self> {
        if cells.len() != width * height {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// The cells, row-major.
    pub fn cells(&self) -> &[P] {
        &self.cells
    }
}

impl<P: Default + Copy> Lattice for TwoDimensionalMap<P> {
    type Item = P;

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn at(&self, x: usize, y: usize) -> &P {
        &self[(x, y)]
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (usize, usize)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
