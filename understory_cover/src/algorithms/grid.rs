// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid cover: greedy placement on a hashed square lattice.
//!
//! The plane is split into square cells of width `√2·r`, so a disk of radius `r` on a
//! cell's center contains the whole cell. Sites are visited in input order. The first
//! site landing in an empty cell places a disk on that cell's center, unless one of the
//! four axis-adjacent cells already has a disk that reaches the site.
//!
//! A site is only ever skipped after an exact `≤ r²` test against a disk that was actually
//! placed. When rounding far from the origin leaves a site just outside its cell's center
//! disk, the site itself becomes that cell's disk instead.
//!
//! Runs in `O(n)` expected time.

use std::collections::HashMap;

use log::{debug, trace};
use understory_cover_index::{CellKey, Lattice, Point3, disk_contains};

use super::NUMERIC_GUARD;
use crate::types::{DiskCenter, Site};

/// Cover `sites` with disks of `radius` centered on lattice cells.
pub fn cover(sites: &[Site], radius: f64, height: f64) -> Vec<DiskCenter> {
    let lattice = Lattice::new(core::f64::consts::SQRT_2 * radius * (1.0 - NUMERIC_GUARD));
    // The disk placed for each occupied cell.
    let mut occupied: HashMap<CellKey, DiskCenter> = HashMap::with_capacity(sites.len());
    let mut out = Vec::new();

    for &p in sites {
        let key = lattice.key_for(p);
        let own = occupied.get(&key).copied();
        if own.is_some_and(|d| disk_contains(d, radius, p))
            || covered_by_neighbor(&lattice, &occupied, key, p, radius)
        {
            continue;
        }
        if own.is_some() {
            trace!("site ({}, {}) missed its cell disk by rounding", p.x, p.y);
            out.push(p.with_z(height));
            continue;
        }
        let center = lattice.cell_center(key, height);
        let disk = if disk_contains(center, radius, p) {
            center
        } else {
            trace!("cell center misses site ({}, {}) by rounding", p.x, p.y);
            p.with_z(height)
        };
        occupied.insert(key, disk);
        out.push(disk);
    }

    debug!(
        "grid cover: {} sites, {} disks, {} cells",
        sites.len(),
        out.len(),
        occupied.len()
    );
    out
}

/// Whether a disk already placed in an axis-adjacent cell contains `p`.
///
/// A neighbor is only consulted when `p` lies in the half of its cell facing that
/// neighbor; from the far half the neighbor's center is more than one cell width,
/// and so more than `r`, away.
fn covered_by_neighbor(
    lattice: &Lattice,
    occupied: &HashMap<CellKey, DiskCenter>,
    (col, row): CellKey,
    p: Point3,
    radius: f64,
) -> bool {
    let (fx, fy) = lattice.local_fraction((col, row), p);
    let candidates = [
        (fx >= 0.5, (col.saturating_add(1), row)),
        (fx <= 0.5, (col.saturating_sub(1), row)),
        (fy <= 0.5, (col, row.saturating_sub(1))),
        (fy >= 0.5, (col, row.saturating_add(1))),
    ];
    candidates.into_iter().any(|(facing, neighbor)| {
        facing
            && occupied
                .get(&neighbor)
                .is_some_and(|d| disk_contains(*d, radius, p))
    })
}
