// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use image::{ImageBuffer, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_sample(dir: &Path, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join("in.png");
    let image: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 29 % 256) as u8, (y * 41 % 256) as u8, ((x + y) * 13 % 256) as u8])
    });
    image.save(&path).unwrap();
    path
}

#[test]
fn carves_and_writes_both_images() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 12, 9);
    let output = dir.path().join("out.png");
    let seams = dir.path().join("seams.png");

    Command::cargo_bin("rgbseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(["--columns", "4", "--rows", "2", "--seams"])
        .arg(&seams)
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb8();
    assert_eq!(carved.dimensions(), (8, 7));
    let map = image::open(&seams).unwrap().to_rgb8();
    assert_eq!(map.dimensions(), (12, 9));
    let red = map.pixels().filter(|p| **p == Rgb([255, 0, 0])).count();
    assert_eq!(red, 4 * 9 + 2 * 8);
}

#[test]
fn defaults_to_no_seams() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 5, 4);
    let output = dir.path().join("out.png");

    Command::cargo_bin("rgbseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let original = image::open(&input).unwrap().to_rgb8();
    let carved = image::open(&output).unwrap().to_rgb8();
    assert_eq!(original, carved);
}

#[test]
fn refuses_to_carve_more_than_the_image_has() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 5, 4);
    let output = dir.path().join("out.png");

    Command::cargo_bin("rgbseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(["-c", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("9 vertical seams requested"));

    assert!(!output.exists());
}

#[test]
fn reports_unreadable_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nothing-here.png");
    let output = dir.path().join("out.png");

    Command::cargo_bin("rgbseam")
        .unwrap()
        .arg(&missing)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing-here.png"));
}
