// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector window with linear scans. Small and simple; good for tiny sweeps and as a reference.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{Point3, squared_distance_2d};
use crate::window::Window;

/// Flat vector window with linear scans.
#[derive(Clone, Default)]
pub struct FlatWindow {
    entries: Vec<Option<Point3>>,
    alive: usize,
}

impl Debug for FlatWindow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatWindow")
            .field("total_slots", &self.entries.len())
            .field("alive", &self.alive)
            .finish_non_exhaustive()
    }
}

impl Window for FlatWindow {
    fn insert(&mut self, slot: usize, center: Point3) {
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        if self.entries[slot].replace(center).is_none() {
            self.alive += 1;
        }
    }

    fn remove(&mut self, slot: usize) {
        if let Some(e) = self.entries.get_mut(slot)
            && e.take().is_some()
        {
            self.alive -= 1;
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.alive = 0;
    }

    fn len(&self) -> usize {
        self.alive
    }

    fn find_within(&self, p: Point3, radius: f64) -> Option<usize> {
        let r2 = radius * radius;
        self.entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.is_some_and(|c| squared_distance_2d(c, p) <= r2))
            .map(|(slot, _)| slot)
    }
}
