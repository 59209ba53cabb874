// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep cover: greedy placement on uncovered sites in x-order.
//!
//! Sites are sorted by x and swept left to right. The active window holds the disks
//! placed within `r` behind the sweep line; a site is skipped if some active disk
//! contains it, and otherwise becomes the center of a new disk.
//!
//! Placed centers are non-decreasing in x, so eviction is a single tail pointer.

use log::debug;
use understory_cover_index::{BTreeWindow, Window};

use super::sorted_by_x;
use crate::types::{DiskCenter, Site};

/// Cover `sites` using the default [`BTreeWindow`].
pub fn cover(sites: &[Site], radius: f64, height: f64) -> Vec<DiskCenter> {
    cover_with::<BTreeWindow>(sites, radius, height)
}

/// Cover `sites` using an explicit active-window implementation.
///
/// Every [`Window`] produces the same centers; only the query cost differs.
pub fn cover_with<W: Window + Default>(sites: &[Site], radius: f64, height: f64) -> Vec<DiskCenter> {
    let sorted = sorted_by_x(sites);
    let mut window = W::default();
    let mut placed: Vec<Site> = Vec::new();
    let mut tail = 0;
    let mut peak = 0;

    for p in sorted {
        while tail < placed.len() && p.x - placed[tail].x > radius {
            window.remove(tail);
            tail += 1;
        }
        if window.find_within(p, radius).is_some() {
            continue;
        }
        window.insert(placed.len(), p);
        placed.push(p);
        peak = peak.max(window.len());
    }

    debug!(
        "sweep cover: {} sites, {} disks, peak window {}",
        sites.len(),
        placed.len(),
        peak
    );
    placed.into_iter().map(|p| p.with_z(height)).collect()
}
