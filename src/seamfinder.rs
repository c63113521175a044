// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy-annotated view.
//!
//! The cost table is built top to bottom: every cell in the first row
//! costs its own energy, and every later cell costs its own energy
//! plus the cheapest of the three cells above it that exist.  The
//! cheapest cell in the bottom row ends the seam, and the back
//! pointers walk it back up to the top.
//!
//! Horizontal seams are vertical seams through a `Flipper`.

use crate::flipper::Flipper;
use crate::grid::Pixel;
use crate::twodmap::{Lattice, TwoDimensionalMap};
use std::cmp::Ordering;

/// Which of the three cells in the row above a cell's cost came
/// from.  Declared in tie-break order: when two candidates cost
/// exactly the same, the one declared first wins.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Left,
    Top,
    Right,
}

impl Step {
    const ALL: [Step; 3] = [Step::Left, Step::Top, Step::Right];

    pub fn offset(self) -> isize {
        match self {
            Step::Left => -1,
            Step::Top => 0,
            Step::Right => 1,
        }
    }
}

/// One cell of the cost table.  `parent` is None in the first row.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct SeamTableEntry {
    pub cost: f64,
    pub parent: Option<Step>,
}

/// A seam, as the x coordinate of the chosen cell in every row of the
/// view it was found in, top to bottom, with its total energy.
#[derive(Debug, Clone, PartialEq)]
pub struct Seam {
    pub path: Vec<usize>,
    pub cost: f64,
}

// NaN cannot occur (energies are square roots of sums of squares),
// so treating unordered pairs as equal only keeps the scan total.
fn cheaper(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Build the cost table for a vertical seam.  A predecessor that falls
/// outside the view costs infinity, so it can never be chosen.
pub fn seam_costs<L: Lattice<Item = Pixel>>(view: &L) -> TwoDimensionalMap<SeamTableEntry> {
    let (width, height) = view.dimensions();
    let mut table: TwoDimensionalMap<SeamTableEntry> = TwoDimensionalMap::new(width, height);
    if height == 0 {
        return table;
    }

    // Populate the first row with their native energies.
    for x in 0..width {
        table[(x, 0)] = SeamTableEntry {
            cost: view.at(x, 0).energy,
            parent: None,
        };
    }

    for y in 1..height {
        for x in 0..width {
            let energy = view.at(x, y).energy;
            let (cost, step) = Step::ALL
                .iter()
                .map(|step| {
                    let above = table.get(x as isize + step.offset(), y as isize - 1);
                    (above.map_or(f64::INFINITY, |a| energy + a.cost), *step)
                })
                .min_by(|a, b| cheaper(a.0, b.0))
                .unwrap_or((f64::INFINITY, Step::Top));
            table[(x, y)] = SeamTableEntry {
                cost,
                parent: Some(step),
            };
        }
    }
    table
}

/// Find the cheapest vertical seam through a view.  An empty view has
/// an empty seam.
pub fn find_seam<L: Lattice<Item = Pixel>>(view: &L) -> Seam {
    let table = seam_costs(view);
    let (width, height) = table.dimensions();
    if width == 0 || height == 0 {
        return Seam {
            path: Vec::new(),
            cost: 0.0,
        };
    }

    // The first of the cheapest cells in the bottom row.
    let mut seam_col = (0..width)
        .min_by(|a, b| cheaper(table[(*a, height - 1)].cost, table[(*b, height - 1)].cost))
        .unwrap_or(0);
    let cost = table[(seam_col, height - 1)].cost;

    // Working backwards, collect the x coordinate in every row, then
    // reverse so the path reads top to bottom.
    let path = (0..height)
        .rev()
        .fold(Vec::<usize>::with_capacity(height), |mut acc, y| {
            acc.push(seam_col);
            if let Some(step) = table[(seam_col, y)].parent {
                seam_col = (seam_col as isize + step.offset()) as usize;
            }
            acc
        })
        .into_iter()
        .rev()
        .collect();

    Seam { path, cost }
}

/// How seams come out of an energy-annotated view.
pub trait ImageSeams {
    /// The cheapest seam with one pixel per row: the x coordinate for
    /// each y.
    fn vertical_seam(&self) -> Seam;

    /// The cheapest seam with one pixel per column: the y coordinate
    /// for each x.
    fn horizontal_seam(&self) -> Seam;
}

impl ImageSeams for TwoDimensionalMap<Pixel> {
    fn vertical_seam(&self) -> Seam {
        find_seam(self)
    }

    fn horizontal_seam(&self) -> Seam {
        find_seam(&Flipper::new(self))
    }
}
