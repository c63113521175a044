// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main driver
//!
//! Removes seams one at a time: rebuild the compacted view, compute
//! its energy, find the cheapest seam, and flag the absolute pixels
//! under it as removed.  Every vertical seam is taken before the first
//! horizontal one.  The order changes the result (a vertical seam
//! changes which pixels are neighbors for every later horizontal
//! gradient) and it is not configurable.

use crate::cq;
use crate::energy::{compact, energy_view};
use crate::error::CarveError;
use crate::grid::{Orientation, PixelGrid};
use crate::seamfinder::ImageSeams;
use crate::twodmap::Lattice;
use image::{ImageBuffer, RgbImage};
use log::{debug, info};

/// Remove one seam from the grid.
///
/// Fails if the current view is already one pixel across in the
/// carving direction, or if a vertical seam is asked for after a
/// horizontal one.  On failure the grid is untouched.
pub fn carve_seam(grid: &mut PixelGrid, orientation: Orientation) -> Result<(), CarveError> {
    let (width, height) = grid.current_dimensions();
    let vertical = orientation == Orientation::Vertical;
    let across = cq!(vertical, width, height);
    if across <= 1 || width == 0 || height == 0 {
        return Err(CarveError::DegenerateGrid {
            width,
            height,
            axis: orientation,
        });
    }
    if vertical && grid.horizontal_removed() > 0 {
        return Err(CarveError::SeamOrder);
    }

    let view = energy_view(grid);
    let seam = cq!(vertical, view.vertical_seam(), view.horizontal_seam());

    // The path holds one coordinate per line across the seam; the
    // view cell under it knows where that pixel lives in storage.
    for (i, &j) in seam.path.iter().enumerate() {
        let pixel = cq!(vertical, view.at(j, i), view.at(i, j));
        grid.remove(pixel.absolute_col, pixel.absolute_row, orientation);
    }
    grid.count_seam(orientation);

    let (width, height) = grid.current_dimensions();
    debug!(
        "removed {} seam, cost {:.3}, now {}x{}",
        orientation, seam.cost, width, height
    );
    Ok(())
}

/// What is left of the grid, as an image.
pub fn reduced_image(grid: &PixelGrid) -> RgbImage {
    let view = compact(grid);
    let (width, height) = view.dimensions();
    ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        view[(x as usize, y as usize)].color
    })
}

// Counts are checked against what is left of the grid, so a session
// that has already carved is held to its current size.
fn check_request(grid: &PixelGrid, vertical: usize, horizontal: usize) -> Result<(), CarveError> {
    let (width, height) = grid.current_dimensions();
    let requests = [
        (Orientation::Vertical, vertical, width),
        (Orientation::Horizontal, horizontal, height),
    ];

    if width == 0 || height == 0 {
        if let Some((axis, _, _)) = requests.iter().find(|(_, count, _)| *count > 0) {
            return Err(CarveError::DegenerateGrid {
                width,
                height,
                axis: *axis,
            });
        }
    }

    for &(axis, requested, available) in requests.iter() {
        if requested > available {
            return Err(CarveError::InvalidRequest {
                axis,
                requested,
                available,
            });
        }
    }

    // Taking every pixel along an axis means carving a one-pixel view
    // further, which has no seam to find.
    for &(axis, requested, available) in requests.iter() {
        if requested > 0 && requested == available {
            return Err(CarveError::DegenerateGrid {
                width,
                height,
                axis,
            });
        }
    }

    if vertical > 0 && grid.horizontal_removed() > 0 {
        return Err(CarveError::SeamOrder);
    }
    Ok(())
}

/// Carve `vertical` seams, then `horizontal` seams, out of the grid.
/// Returns the reduced image, `(W - vertical) x (H - horizontal)` where
/// W x H is the grid's current size, and the same-size seam map.
///
/// The counts are checked before anything is removed; a bad request
/// leaves the grid untouched.  Vertical seams cannot be asked of a grid
/// that has already lost a horizontal one.
pub fn carve(
    grid: &mut PixelGrid,
    vertical: usize,
    horizontal: usize,
) -> Result<(RgbImage, RgbImage), CarveError> {
    check_request(grid, vertical, horizontal)?;
    info!(
        "carving {} vertical and {} horizontal seams from {}x{}",
        vertical,
        horizontal,
        grid.current_dimensions().0,
        grid.current_dimensions().1
    );

    for _ in 0..vertical {
        carve_seam(grid, Orientation::Vertical)?;
    }
    for _ in 0..horizontal {
        carve_seam(grid, Orientation::Horizontal)?;
    }

    let reduced = reduced_image(grid);
    info!("carved down to {}x{}", reduced.width(), reduced.height());
    Ok((reduced, grid.annotate()))
}

/// A struct for holding the image to be carved for the length of a
/// session.
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &RgbImage) -> Self {
        SeamCarver {
            grid: PixelGrid::load(image),
        }
    }

    /// Given a count of columns and rows to take out, repeatedly carve
    /// seams out of the image.
    pub fn carve(
        &mut self,
        vertical: usize,
        horizontal: usize,
    ) -> Result<(RgbImage, RgbImage), CarveError> {
        carve(&mut self.grid, vertical, horizontal)
    }

    /// The grid being carved, with every seam removed so far.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Ends the session and hands back the grid.
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }
}
