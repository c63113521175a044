// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid: the one long-lived object of a carving session.
//!
//! Storage is a flat, row-major vector of pixel records that never
//! moves or shrinks.  Carving a seam only flips removal flags; the
//! smaller image is recovered on demand by skipping flagged pixels
//! (see `energy::compact`).  Every record carries its own absolute
//! row and column, which is the only way back into storage once a
//! compacted view no longer lines up with it.

use image::{ImageBuffer, Rgb, RgbImage};
use itertools::iproduct;
use num_traits::{clamp, NumCast};
use std::fmt;

/// Color used for removed pixels in the annotated seam map.
pub const SEAM_HIGHLIGHT: Rgb<u8> = Rgb([255, 0, 0]);

/// Which way a seam runs.  A vertical seam has one pixel per row and
/// makes the image narrower; a horizontal seam has one pixel per
/// column and makes it shorter.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// One grid cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pixel {
    pub color: Rgb<u8>,
    /// Only meaningful inside a compacted view that has been through
    /// `energy::compute_energy`.
    pub energy: f64,
    /// Set once, by the seam that took this pixel.  Never cleared.
    pub removed_by: Option<Orientation>,
    pub absolute_row: usize,
    pub absolute_col: usize,
}

impl Pixel {
    pub fn is_removed(&self) -> bool {
        self.removed_by.is_some()
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel {
            color: Rgb([0, 0, 0]),
            energy: 0.0,
            removed_by: None,
            absolute_row: 0,
            absolute_col: 0,
        }
    }
}

/// Perceptual grayscale used only to give removed seams contrast in
/// the annotated map: floor(0.3R + 0.59G + 0.11B).
pub fn luminance(color: &Rgb<u8>) -> u8 {
    let [r, g, b] = color.0;
    let channel = <f64 as From<u8>>::from;
    let l: f64 = 0.3 * channel(r) + 0.59 * channel(g) + 0.11 * channel(b);
    NumCast::from(clamp(l.floor(), 0.0, 255.0)).unwrap_or(u8::MAX)
}

#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
    vertical_removed: usize,
    horizontal_removed: usize,
}

impl PixelGrid {
    /// Build a grid from a color buffer.  Absolute coordinates come
    /// from storage position; nothing is removed.
    pub fn load(image: &RgbImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let pixels = iproduct!(0..height, 0..width)
            .map(|(row, col)| Pixel {
                color: *image.get_pixel(col as u32, row as u32),
                absolute_row: row,
                absolute_col: col,
                ..Pixel::default()
            })
            .collect();
        PixelGrid {
            width,
            height,
            pixels,
            vertical_removed: 0,
            horizontal_removed: 0,
        }
    }

    /// Original width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Original height.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn vertical_removed(&self) -> usize {
        self.vertical_removed
    }

    pub fn horizontal_removed(&self) -> usize {
        self.horizontal_removed
    }

    /// Dimensions of the image the grid currently represents, after
    /// every seam removed so far.
    pub fn current_dimensions(&self) -> (usize, usize) {
        (
            self.width - self.vertical_removed,
            self.height - self.horizontal_removed,
        )
    }

    /// How many pixels any seam has taken.
    pub fn removed_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_removed()).count()
    }

    fn get_index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    /// The pixel at an absolute storage position.
    pub fn pixel(&self, col: usize, row: usize) -> &Pixel {
        &self.pixels[self.get_index(col, row)]
    }

    pub fn is_removed(&self, col: usize, row: usize) -> bool {
        self.pixel(col, row).is_removed()
    }

    /// Storage, row-major.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Flag the pixel at an absolute position as taken by a seam.
    pub(crate) fn remove(&mut self, col: usize, row: usize, orientation: Orientation) {
        let index = self.get_index(col, row);
        let pixel = &mut self.pixels[index];
        debug_assert!(!pixel.is_removed(), "pixel ({}, {}) removed twice", col, row);
        pixel.removed_by = Some(orientation);
    }

    /// Record that one more seam has been taken along an axis.
    pub(crate) fn count_seam(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Vertical => self.vertical_removed += 1,
            Orientation::Horizontal => self.horizontal_removed += 1,
        }
    }

    /// The same-size seam map: removed pixels in the highlight color,
    /// everything else in grayscale.
    pub fn annotate(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            let pixel = self.pixel(x as usize, y as usize);
            if pixel.is_removed() {
                SEAM_HIGHLIGHT
            } else {
                let l = luminance(&pixel.color);
                Rgb([l, l, l])
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> RgbImage {
        ImageBuffer::from_raw(
            2,
            2,
            vec![10, 20, 30, 255, 0, 0, 0, 255, 0, 0, 0, 255],
        )
        .unwrap()
    }

    #[test]
    fn load_records_absolute_positions() {
        let grid = PixelGrid::load(&two_by_two());
        assert_eq!((grid.width(), grid.height()), (2, 2));
        let p = grid.pixel(1, 0);
        assert_eq!(p.color, Rgb([255, 0, 0]));
        assert_eq!((p.absolute_col, p.absolute_row), (1, 0));
        let p = grid.pixel(0, 1);
        assert_eq!((p.absolute_col, p.absolute_row), (0, 1));
        assert_eq!(grid.removed_count(), 0);
        assert_eq!(grid.current_dimensions(), (2, 2));
    }

    #[test]
    fn luminance_floors() {
        assert_eq!(luminance(&Rgb([0, 0, 0])), 0);
        assert_eq!(luminance(&Rgb([255, 0, 0])), 76);
        assert_eq!(luminance(&Rgb([0, 0, 100])), 11);
        assert_eq!(luminance(&Rgb([10, 20, 30])), 18);
    }

    #[test]
    fn annotate_marks_removed_pixels() {
        let mut grid = PixelGrid::load(&two_by_two());
        grid.remove(0, 1, Orientation::Vertical);
        let map = grid.annotate();
        assert_eq!(map.dimensions(), (2, 2));
        assert_eq!(*map.get_pixel(0, 1), SEAM_HIGHLIGHT);
        assert_eq!(*map.get_pixel(1, 0), Rgb([76, 76, 76]));
        assert_eq!(*map.get_pixel(0, 0), Rgb([18, 18, 18]));
        assert!(grid.is_removed(0, 1));
        assert_eq!(grid.removed_count(), 1);
    }
}
