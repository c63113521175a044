// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image reduction by seam carving.
//!
//! Load an RGB image into a `PixelGrid`, then ask `carve` for some
//! number of vertical and horizontal seams.  Back come the reduced
//! image and a same-size map of which pixels were taken.

pub mod coords;
pub use coords::is_valid;

pub mod error;
pub use error::CarveError;

pub mod grid;
pub use grid::{Orientation, Pixel, PixelGrid};

pub mod twodmap;
pub mod flipper;

pub mod energy;
pub use energy::{compact, compute_energy, energy_view};

pub mod seamfinder;
pub use seamfinder::{ImageSeams, Seam, SeamTableEntry};

pub mod seamcarver;
pub use seamcarver::{carve, carve_seam, SeamCarver};
