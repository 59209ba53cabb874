// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for covering: sites, disk centers, algorithm selection, and configuration.

use core::fmt;

use log::warn;
use understory_cover_index::Point3;

/// An input point that must be covered. `z` is carried but never compared.
pub type Site = Point3;

/// The center of a produced disk. `z` is the configured default height.
pub type DiskCenter = Point3;

/// Height given to generated disk centers unless configured otherwise.
pub const DEFAULT_HEIGHT: f64 = 1.2;

/// Which approximation algorithm computes the cover.
///
/// | Variant | Time | Disk centers |
/// |---|---|---|
/// | [`GridCover`](Self::GridCover) | `O(n)` expected | centers of a `√2·r` lattice |
/// | [`SweepCover`](Self::SweepCover) | `O(n log n)` | on uncovered sites |
/// | [`StripCover`](Self::StripCover) | `O(n log n)`, six passes | on axes of `√3·r` strips |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Hashed-lattice greedy cover. Fastest, loosest.
    #[default]
    GridCover,
    /// X-sorted sweep with a y-ordered active window.
    SweepCover,
    /// Six-offset vertical strip decomposition with per-strip interval covering.
    StripCover,
}

impl Algorithm {
    /// Every algorithm, in selector-index order.
    pub const ALL: [Self; 3] = [Self::GridCover, Self::SweepCover, Self::StripCover];

    /// Select by integer index (`0`, `1`, `2` in [`ALL`](Self::ALL) order).
    ///
    /// Unknown values fall back to the default algorithm.
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_else(|| {
                warn!("unknown cover algorithm index {index}, using {}", Self::default());
                Self::default()
            })
    }

    /// Select by name, ignoring ASCII case.
    ///
    /// Accepts the canonical names from [`name`](Self::name) and the common aliases
    /// `fast`/`lattice`, `blms`/`sweep-line`, and `ll`/`strips`. Unknown names fall back
    /// to the default algorithm.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        let eq = |s: &str| name.eq_ignore_ascii_case(s);
        if eq("grid") || eq("fast") || eq("lattice") {
            Self::GridCover
        } else if eq("sweep") || eq("blms") || eq("sweep-line") {
            Self::SweepCover
        } else if eq("strip") || eq("strips") || eq("ll") {
            Self::StripCover
        } else {
            warn!("unknown cover algorithm {name:?}, using {}", Self::default());
            Self::default()
        }
    }

    /// Canonical short name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::GridCover => "grid",
            Self::SweepCover => "sweep",
            Self::StripCover => "strip",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Engine configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoverConfig {
    /// Height (`z`) assigned to every generated disk center.
    pub default_height: f64,
    /// Algorithm used by [`CoverEngine::cover_sites`](crate::CoverEngine::cover_sites).
    pub algorithm: Algorithm,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            default_height: DEFAULT_HEIGHT,
            algorithm: Algorithm::default(),
        }
    }
}

impl CoverConfig {
    /// This configuration with a different algorithm.
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// This configuration with a different disk height.
    pub const fn with_default_height(mut self, default_height: f64) -> Self {
        self.default_height = default_height;
        self
    }
}

bitflags::bitflags! {
    /// Layers drawn by diagnostics rendering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RenderLayers: u8 {
        /// Input sites as small dots.
        const SITES   = 0b0000_0001;
        /// Disk outlines of radius `r`.
        const DISKS   = 0b0000_0010;
        /// Disk centers as crosses.
        const CENTERS = 0b0000_0100;
        /// Combined bounding box of sites and disks.
        const BOUNDS  = 0b0000_1000;
    }
}

impl Default for RenderLayers {
    fn default() -> Self {
        Self::SITES | Self::DISKS
    }
}
