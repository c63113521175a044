// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use rgbseam::{CarveError, SeamCarver};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[macro_use]
extern crate clap;

use clap::{App, Arg};
use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Carve(#[from] CarveError),

    #[error("{}: {}", .path.display(), .source)]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}

struct Options {
    input: PathBuf,
    output: PathBuf,
    seams: Option<PathBuf>,
    columns: usize,
    rows: usize,
}

fn options() -> Options {
    let matches = App::new("rgbseam")
        .version(crate_version!())
        .about("Shrink an image by carving out its least interesting seams")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("columns")
                .short("c")
                .long("columns")
                .takes_value(true)
                .default_value("0")
                .help("Number of vertical seams to remove"),
        )
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .takes_value(true)
                .default_value("0")
                .help("Number of horizontal seams to remove"),
        )
        .arg(
            Arg::with_name("seams")
                .short("s")
                .long("seams")
                .takes_value(true)
                .help("Also write a copy of the original with the removed seams marked"),
        )
        .get_matches();

    Options {
        input: PathBuf::from(matches.value_of("input").unwrap_or_default()),
        output: PathBuf::from(matches.value_of("output").unwrap_or_default()),
        seams: matches.value_of("seams").map(PathBuf::from),
        columns: value_t!(matches, "columns", usize).unwrap_or_else(|e| e.exit()),
        rows: value_t!(matches, "rows", usize).unwrap_or_else(|e| e.exit()),
    }
}

fn save(image: &image::RgbImage, path: &Path) -> Result<(), CliError> {
    image.save(path).map_err(|source| CliError::Image {
        path: path.to_path_buf(),
        source,
    })
}

fn run(options: &Options) -> Result<(), CliError> {
    let started = Instant::now();
    let image = image::open(&options.input)
        .map_err(|source| CliError::Image {
            path: options.input.clone(),
            source,
        })?
        .to_rgb8();

    let (carved, seams) = SeamCarver::new(&image).carve(options.columns, options.rows)?;

    save(&carved, &options.output)?;
    if let Some(path) = &options.seams {
        save(&seams, path)?;
    }
    info!("total time: {} ms", started.elapsed().as_millis());
    Ok(())
}

fn main() {
    env_logger::init();
    let options = options();
    if let Err(e) = run(&options) {
        eprintln!("rgbseam: {}", e);
        process::exit(1);
    }
}
