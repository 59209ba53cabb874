// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the covering engine.

use thiserror::Error;
use understory_cover_index::Aabb3D;

/// Errors that can occur while preparing or computing a cover.
///
/// Numerically degenerate geometry is never reported here: the algorithms recover
/// locally. Unknown algorithm selectors fall back to the default instead of failing.
#[derive(Debug, Error)]
pub enum CoverError {
    /// The site set is empty, so there is nothing to cover.
    #[error("no sites to cover")]
    EmptySites,

    /// A site has a NaN or infinite coordinate.
    #[error("site {index} has a non-finite coordinate")]
    NonFiniteSite {
        /// Position of the offending site in the input sequence.
        index: usize,
    },

    /// The cover radius is not a finite positive number.
    #[error("cover radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    /// Some site lies so far from the origin, measured in cover radii, that lattice and
    /// strip indices no longer identify the cells around it.
    #[error("sites reach {extent}, more than 2^52 times the cover radius {radius}")]
    ExtentTooLarge {
        /// Largest absolute planar coordinate over all sites.
        extent: f64,
        /// The requested cover radius.
        radius: f64,
    },

    /// Writing diagnostics failed. Never produced by cover computation itself.
    #[cfg(feature = "svg")]
    #[error("failed to write diagnostics")]
    Render(#[from] std::io::Error),
}

impl CoverError {
    /// Whether this error rejects the caller's input (sites or radius).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptySites
                | Self::NonFiniteSite { .. }
                | Self::InvalidRadius(_)
                | Self::ExtentTooLarge { .. }
        )
    }
}

/// Result alias used throughout this crate.
pub type Result<T, E = CoverError> = core::result::Result<T, E>;

pub(crate) fn check_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(CoverError::InvalidRadius(radius))
    }
}

/// Largest supported ratio between a planar coordinate and the cover radius.
pub(crate) const MAX_EXTENT_RATIO: f64 = 4_503_599_627_370_496.0;

pub(crate) fn check_extent(bounds: &Aabb3D, radius: f64) -> Result<()> {
    let extent = [bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y]
        .into_iter()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if extent / radius <= MAX_EXTENT_RATIO {
        Ok(())
    } else {
        Err(CoverError::ExtentTooLarge { extent, radius })
    }
}
