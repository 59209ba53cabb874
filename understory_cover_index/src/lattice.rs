// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square lattice mapping from planar coordinates to integer cells.

use crate::types::Point3;

/// Integer coordinates of a lattice cell: `(column, row)`.
pub type CellKey = (i64, i64);

/// A square lattice with a fixed cell width and origin offset.
///
/// Coordinates are mapped to integer cell indices by floor-division of
/// `(x - origin_x) / cell` and `(y - origin_y) / cell`. Every cell is the
/// half-open square `[c, c + cell)` on both axes, so a point on a shared edge
/// belongs to the cell whose lower edge it lies on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lattice {
    cell: f64,
    origin_x: f64,
    origin_y: f64,
}

impl Lattice {
    /// Create a lattice anchored at the origin.
    pub fn new(cell: f64) -> Self {
        Self::with_origin(cell, 0.0, 0.0)
    }

    /// Create a lattice with an explicit origin offset.
    pub fn with_origin(cell: f64, origin_x: f64, origin_y: f64) -> Self {
        debug_assert!(cell > 0.0, "cell width must be positive");
        Self {
            cell,
            origin_x,
            origin_y,
        }
    }

    /// Cell width.
    pub fn cell(&self) -> f64 {
        self.cell
    }

    /// Floor a float to `i64` without relying on `std`.
    ///
    /// Values outside the `i64` range saturate to `i64::MIN`/`i64::MAX`; NaN maps to `0`.
    /// Saturated keys no longer identify the cell around the value, so callers keep
    /// `|v|` well inside the `i64` range.
    #[inline]
    pub fn floor_to_i64(v: f64) -> i64 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Saturating float-to-int casts are the intended cell mapping."
        )]
        let i = v as i64;
        if (i as f64) > v { i.saturating_sub(1) } else { i }
    }

    /// The cell containing the planar projection of `p`.
    pub fn key_for(&self, p: Point3) -> CellKey {
        (
            Self::floor_to_i64((p.x - self.origin_x) / self.cell),
            Self::floor_to_i64((p.y - self.origin_y) / self.cell),
        )
    }

    /// Lower-left corner of a cell.
    pub fn cell_origin(&self, key: CellKey) -> (f64, f64) {
        (
            self.origin_x + key.0 as f64 * self.cell,
            self.origin_y + key.1 as f64 * self.cell,
        )
    }

    /// Center of a cell, lifted to height `z`.
    pub fn cell_center(&self, key: CellKey, z: f64) -> Point3 {
        let (x0, y0) = self.cell_origin(key);
        let half = 0.5 * self.cell;
        Point3::new(x0 + half, y0 + half, z)
    }

    /// Position of `p` inside its cell, each axis normalized to `[0, 1)`.
    pub fn local_fraction(&self, key: CellKey, p: Point3) -> (f64, f64) {
        let (x0, y0) = self.cell_origin(key);
        ((p.x - x0) / self.cell, (p.y - y0) / self.cell)
    }
}
