// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Covering algorithms.
//!
//! - `grid`: hashed `√2·r` lattice; a disk per newly touched cell unless an
//!   axis-adjacent disk already covers the site.
//! - `sweep`: sites in x-order; a disk on every site no active disk covers.
//! - `strip`: `√3·r` vertical strips at six phase offsets; per-strip interval
//!   covering on the strip axis; the phase with the fewest disks wins.
//!
//! Every function here takes the sites, the radius, and the height to give generated
//! centers, and returns centers in generation order. Inputs are assumed validated:
//! finite coordinates and a finite positive radius. Coverage is planar.

pub mod grid;
pub mod strip;
pub mod sweep;

use crate::types::{Algorithm, DiskCenter, Site};

/// Relative amount by which lattice cells and strip chords are shrunk so that
/// rounding never places a covered site a hair beyond `r`.
pub(crate) const NUMERIC_GUARD: f64 = 1e-9;

impl Algorithm {
    /// Run this algorithm over `sites`, producing centers at height `height`.
    pub fn cover(self, sites: &[Site], radius: f64, height: f64) -> Vec<DiskCenter> {
        match self {
            Self::GridCover => grid::cover(sites, radius, height),
            Self::SweepCover => sweep::cover(sites, radius, height),
            Self::StripCover => strip::cover(sites, radius, height),
        }
    }
}

/// Order `sites` by x (stable, so equal x keeps input order).
pub(crate) fn sorted_by_x(sites: &[Site]) -> Vec<Site> {
    let mut sorted = sites.to_vec();
    sorted.sort_by(|a, b| understory_cover_index::cmp_f64(a.x, b.x));
    sorted
}
