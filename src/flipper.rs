// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lattice dimensional flipper
//!
//! A proxy over any `Lattice` that maps the width to the original
//! height, and vice versa, as well as every x to y and vice versa.
//!
//! A horizontal seam is a vertical seam through the flipped field, so
//! the seam search only has to be written once.  The column-major
//! neighbors (i−1, j−1), (i, j−1), (i+1, j−1) become the row-major
//! left, top and right, in that order, and the tie rule carries over
//! unchanged.

use crate::twodmap::Lattice;

pub struct Flipper<'a, L: Lattice> {
    pub lattice: &'a L,
}

impl<'a, L: Lattice> Flipper<'a, L> {
    pub fn new(lattice: &'a L) -> Self {
        Flipper { lattice }
    }
}

impl<'a, L: Lattice> Lattice for Flipper<'a, L> {
    type Item = L::Item;

    fn dimensions(&self) -> (usize, usize) {
        let (x, y) = self.lattice.dimensions();
        (y, x)
    }

    fn at(&self, x: usize, y: usize) -> &L::Item {
        self.lattice.at(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    #[test]
    fn flipped_coordinates_swap() {
        let map = TwoDimensionalMap::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        let flipped = Flipper::new(&map);
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(*flipped.at(1, 0), 3);
        assert_eq!(*flipped.at(0, 2), 2);
        assert_eq!(flipped.get(2, 0), None);
    }
}
