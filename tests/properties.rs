// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use image::{ImageBuffer, Rgb, RgbImage};
use proptest::prelude::*;
use rgbseam::{carve, PixelGrid, SeamCarver};

fn image_strategy() -> impl Strategy<Value = RgbImage> {
    (1u32..8, 1u32..8).prop_flat_map(|(width, height)| {
        prop::collection::vec(any::<[u8; 3]>(), (width * height) as usize).prop_map(move |data| {
            ImageBuffer::from_fn(width, height, |x, y| Rgb(data[(y * width + x) as usize]))
        })
    })
}

proptest! {
    #[test]
    fn reduced_dimensions_follow_the_counts(
        (image, vertical, horizontal) in image_strategy().prop_flat_map(|image| {
            let (w, h) = (image.width() as usize, image.height() as usize);
            (Just(image), 0..w, 0..h)
        })
    ) {
        let mut grid = PixelGrid::load(&image);
        let (reduced, seams) = carve(&mut grid, vertical, horizontal).unwrap();
        prop_assert_eq!(
            reduced.dimensions(),
            ((image.width() as usize - vertical) as u32, (image.height() as usize - horizontal) as u32)
        );
        prop_assert_eq!(seams.dimensions(), image.dimensions());
        prop_assert_eq!(
            grid.removed_count(),
            vertical * image.height() as usize + horizontal * (image.width() as usize - vertical)
        );
    }

    #[test]
    fn carving_twice_gives_the_same_answer(
        (image, vertical, horizontal) in image_strategy().prop_flat_map(|image| {
            let (w, h) = (image.width() as usize, image.height() as usize);
            (Just(image), 0..w, 0..h)
        })
    ) {
        let first = SeamCarver::new(&image).carve(vertical, horizontal).unwrap();
        let second = SeamCarver::new(&image).carve(vertical, horizontal).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn survivors_keep_their_colors(image in image_strategy()) {
        let vertical = image.width() as usize / 2;
        let horizontal = image.height() as usize / 2;
        let mut carver = SeamCarver::new(&image);
        let (reduced, _) = carver.carve(vertical, horizontal).unwrap();
        let mut survivors: Vec<[u8; 3]> = carver
            .grid()
            .pixels()
            .iter()
            .filter(|p| !p.is_removed())
            .map(|p| p.color.0)
            .collect();
        let mut kept: Vec<[u8; 3]> = reduced.pixels().map(|p| p.0).collect();
        survivors.sort();
        kept.sort();
        prop_assert_eq!(survivors, kept);
    }
}
