// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! What can go wrong when asking for a carve.  Everything past
//! validation is total arithmetic and cannot fail.

use crate::grid::Orientation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarveError {
    /// More seams were requested than the original image has pixels
    /// along that axis.
    #[error("{requested} {axis} seams requested, but the image only has {available} to give")]
    InvalidRequest {
        axis: Orientation,
        requested: usize,
        available: usize,
    },

    /// The grid is empty, or is already one pixel across in the
    /// carving direction and was asked for more.
    #[error("cannot carve a {axis} seam from a {width}x{height} image")]
    DegenerateGrid {
        width: usize,
        height: usize,
        axis: Orientation,
    },

    /// Vertical seams must all be removed before the first horizontal
    /// one.
    #[error("vertical seams cannot be carved after horizontal seams")]
    SeamOrder,
}
