// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-window abstraction used by sweep-line covering.

use crate::types::Point3;

/// A dynamic set of disk centers supporting "is anything within `r` of this point" queries.
///
/// Sweep covers keep only the centers whose x lies within `r` of the sweep line; the
/// window does not evict on its own, callers remove slots as the sweep advances.
pub trait Window {
    /// Insert a center under `slot`. Slots are caller-assigned and unique while alive.
    fn insert(&mut self, slot: usize, center: Point3);

    /// Remove the center stored under `slot`. Unknown slots are ignored.
    fn remove(&mut self, slot: usize);

    /// Remove every center.
    fn clear(&mut self);

    /// Number of live centers.
    fn len(&self) -> usize;

    /// Whether the window holds no centers.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return some slot whose center lies within planar distance `radius` of `p`.
    fn find_within(&self, p: Point3, radius: f64) -> Option<usize>;
}
