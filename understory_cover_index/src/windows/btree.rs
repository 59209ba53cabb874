// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Balanced-tree window ordered by y.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::types::{Point3, cmp_f64, squared_distance_2d};
use crate::window::Window;

/// `f64` with a total order so it can key a `BTreeSet`.
#[derive(Copy, Clone, Debug)]
struct YKey(f64);

impl PartialEq for YKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for YKey {}

impl PartialOrd for YKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YKey {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_f64(self.0, other.0)
    }
}

/// Window keeping centers in a y-ordered balanced tree.
///
/// Insert and remove are `O(log n)`. A query visits only the centers whose y lies
/// within `radius` of the query, nearest-in-y first on each side, and returns on the
/// first center inside the disk.
#[derive(Clone, Default)]
pub struct BTreeWindow {
    entries: Vec<Option<Point3>>,
    order: BTreeSet<(YKey, usize)>,
}

impl Debug for BTreeWindow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BTreeWindow")
            .field("total_slots", &self.entries.len())
            .field("alive", &self.order.len())
            .finish_non_exhaustive()
    }
}

impl Window for BTreeWindow {
    fn insert(&mut self, slot: usize, center: Point3) {
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        if let Some(old) = self.entries[slot].replace(center) {
            self.order.remove(&(YKey(old.y), slot));
        }
        self.order.insert((YKey(center.y), slot));
    }

    fn remove(&mut self, slot: usize) {
        if let Some(old) = self.entries.get_mut(slot).and_then(Option::take) {
            self.order.remove(&(YKey(old.y), slot));
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn find_within(&self, p: Point3, radius: f64) -> Option<usize> {
        let r2 = radius * radius;
        let pivot = (YKey(p.y), 0_usize);
        let covers = |slot: usize| {
            self.entries[slot].is_some_and(|c| squared_distance_2d(c, p) <= r2)
        };

        // Successors (including equal y), then predecessors, each nearest first.
        for &(YKey(y), slot) in self.order.range(pivot..) {
            if y - p.y > radius {
                break;
            }
            if covers(slot) {
                return Some(slot);
            }
        }
        for &(YKey(y), slot) in self.order.range(..pivot).rev() {
            if p.y - y > radius {
                break;
            }
            if covers(slot) {
                return Some(slot);
            }
        }
        None
    }
}
