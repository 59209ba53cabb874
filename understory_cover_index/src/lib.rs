// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cover_index --heading-base-level=0

//! Understory Cover Index: geometry primitives and sweep windows for unit disk covering.
//!
//! This crate holds the small, dependency-free pieces that the covering algorithms in
//! `understory_cover` are built from.
//!
//! - [`Point3`] and [`Aabb3D`]: points carrying a height, and componentwise bounds tracking.
//! - [`squared_distance`] and [`squared_distance_2d`]: `f64` squared distances. Coverage is
//!   always decided in the plane by comparing [`squared_distance_2d`] against `r²`.
//! - [`Lattice`]: floor-based mapping from coordinates to integer square cells.
//! - [`Window`]: a dynamic set of disk centers answering "is anything within `r`?",
//!   with a linear [`FlatWindow`] and a y-ordered [`BTreeWindow`].
//!
//! # Example
//!
//! ```rust
//! use understory_cover_index::{BTreeWindow, Point3, Window};
//!
//! let mut window = BTreeWindow::default();
//! window.insert(0, Point3::new(0.0, 0.0, 1.2));
//! window.insert(1, Point3::new(0.0, 5.0, 1.2));
//!
//! // Height is ignored: only the planar distance counts.
//! assert_eq!(window.find_within(Point3::new(0.6, 0.0, 40.0), 1.0), Some(0));
//! assert_eq!(window.find_within(Point3::new(0.0, 2.5, 0.0), 1.0), None);
//!
//! // Sweeps evict centers that fall behind.
//! window.remove(0);
//! assert_eq!(window.len(), 1);
//! ```
//!
//! ## Choosing a window
//!
//! - `FlatWindow`: linear scan over every live center. Fine for a handful of centers and
//!   useful as a reference when validating other windows.
//! - `BTreeWindow`: `O(log n)` updates; queries touch only centers within the radius in y.
//!   This is what sweep covering uses by default.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for coordinates. Ordering uses [`f64::total_cmp`], so a NaN
//! cannot corrupt a tree, but it will never be reported as covered.

#![no_std]

extern crate alloc;

pub mod lattice;
pub mod types;
pub mod window;
pub mod windows;

pub use lattice::{CellKey, Lattice};
pub use types::{Aabb3D, Point3, cmp_f64, disk_contains, squared_distance, squared_distance_2d};
pub use window::Window;
pub use windows::{BTreeWindow, FlatWindow};
