// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cover results: produced disk centers, combined bounds, and cyclic traversal.

use kurbo::{Circle, Rect};
use understory_cover_index::{Aabb3D, Point3, disk_contains};

use crate::error::{CoverError, Result, check_extent, check_radius};
use crate::sites::{PositionSource, SiteSet};
use crate::types::{DiskCenter, Site};
use crate::util::{aabb_to_rect, planar};

/// Position in the cyclic traversal of a [`CoverResult`].
///
/// Cursors are plain values: reading through one never mutates the result, and the
/// caller decides which cursor to keep. A cursor remembers how many disks existed
/// when it was issued; if disks were appended since, traversal restarts at the first
/// disk.
///
/// ```
/// use understory_cover::{CoverResult, Cursor, Point3, SiteSet};
///
/// let sites = SiteSet::from_points([(0.0, 0.0, 0.0)]).unwrap();
/// let mut cover = CoverResult::for_sites(&sites, 1.0).unwrap();
/// cover.push(Point3::new(0.0, 0.0, 1.2));
/// cover.push(Point3::new(5.0, 0.0, 1.2));
///
/// let (a, cursor) = cover.next_after(Cursor::START).unwrap();
/// let (b, cursor) = cover.next_after(cursor).unwrap();
/// let (c, _) = cover.next_after(cursor).unwrap();
/// assert_eq!((a.x, b.x, c.x), (0.0, 5.0, 0.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: usize,
    seen_len: usize,
}

impl Cursor {
    /// A cursor positioned on the first disk.
    pub const START: Self = Self {
        pos: 0,
        seen_len: 0,
    };

    /// Index of the disk this cursor will return next, if still valid.
    pub const fn position(self) -> usize {
        self.pos
    }
}

/// Ordered disk centers produced by a covering algorithm.
///
/// Disks are stored in generation order. The result also tracks the cover radius, the
/// number of input sites, and a bounding box that starts as the sites' box and grows
/// by `±r` on every axis around each added center.
#[derive(Clone, Debug)]
pub struct CoverResult {
    disks: Vec<DiskCenter>,
    radius: f64,
    bounds: Aabb3D,
    sites_count: usize,
}

impl CoverResult {
    /// Create an empty result for covering `sites` with disks of `radius`.
    pub fn for_sites(sites: &SiteSet, radius: f64) -> Result<Self> {
        check_radius(radius)?;
        let bounds = sites.bounds().ok_or(CoverError::EmptySites)?;
        check_extent(&bounds, radius)?;
        Ok(Self {
            disks: Vec::new(),
            radius,
            bounds,
            sites_count: sites.len(),
        })
    }

    /// Append a disk center and grow the bounds around it.
    ///
    /// Outstanding cursors restart from the first disk afterwards.
    pub fn push(&mut self, center: DiskCenter) {
        self.bounds = self.bounds.including_inflated(center, self.radius);
        self.disks.push(center);
    }

    /// The disk centers, in generation order.
    pub fn disks(&self) -> &[DiskCenter] {
        &self.disks
    }

    /// Number of disks.
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Whether no disk has been added.
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Number of sites this cover was computed for.
    pub fn sites_count(&self) -> usize {
        self.sites_count
    }

    /// Disk radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Bounding box of all sites and every disk's `±r` extent.
    pub fn bounds(&self) -> Aabb3D {
        self.bounds
    }

    /// Planar projection of [`bounds`](Self::bounds).
    pub fn planar_bounds(&self) -> Rect {
        aabb_to_rect(&self.bounds)
    }

    /// Average number of sites per disk. `0.0` for an empty result.
    pub fn sites_per_disk(&self) -> f64 {
        if self.disks.is_empty() {
            0.0
        } else {
            self.sites_count as f64 / self.disks.len() as f64
        }
    }

    /// Return the disk at `cursor` and the cursor for the one after it, wrapping
    /// around after the last disk. `None` only when the result is empty.
    pub fn next_after(&self, cursor: Cursor) -> Option<(DiskCenter, Cursor)> {
        let len = self.disks.len();
        if len == 0 {
            return None;
        }
        let pos = if cursor.seen_len == len { cursor.pos } else { 0 };
        let next = Cursor {
            pos: (pos + 1) % len,
            seen_len: len,
        };
        Some((self.disks[pos], next))
    }

    /// An endless iterator cycling through the disks from the first.
    ///
    /// Yields nothing if the result is empty.
    pub fn cycle(&self) -> Cycle<'_> {
        Cycle {
            result: self,
            cursor: Cursor::START,
        }
    }

    /// Whether some disk covers `p` (planar distance at most `r`).
    pub fn covers(&self, p: Site) -> bool {
        self.disks.iter().any(|d| disk_contains(*d, self.radius, p))
    }

    /// Sites not covered by any disk. Empty for every result this crate computes.
    pub fn uncovered<'a>(&'a self, sites: &'a [Site]) -> impl Iterator<Item = &'a Site> + 'a {
        sites.iter().filter(|s| !self.covers(**s))
    }

    /// The disks as planar kurbo circles.
    pub fn circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.disks
            .iter()
            .map(|d| Circle::new(planar(*d), self.radius))
    }
}

impl PositionSource for CoverResult {
    fn positions(&self) -> Vec<Point3> {
        self.disks.clone()
    }
}

/// Endless cyclic iterator over a [`CoverResult`]; see [`CoverResult::cycle`].
#[derive(Clone, Debug)]
pub struct Cycle<'a> {
    result: &'a CoverResult,
    cursor: Cursor,
}

impl Cycle<'_> {
    /// The cursor for the next disk this iterator will yield.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl Iterator for Cycle<'_> {
    type Item = DiskCenter;

    fn next(&mut self) -> Option<DiskCenter> {
        let (disk, cursor) = self.result.next_after(self.cursor)?;
        self.cursor = cursor;
        Some(disk)
    }
}
