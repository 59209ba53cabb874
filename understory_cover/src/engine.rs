// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The covering engine: owns the sites, runs the selected algorithm, and hands out centers.

use log::debug;
use understory_cover_index::Point3;

use crate::error::Result;
use crate::result::{CoverResult, Cursor};
use crate::sites::{PositionSource, SiteSet};
use crate::types::{Algorithm, CoverConfig, DiskCenter};

/// Compute a cover of `sites` with disks of `radius`, as configured.
///
/// Fails if `sites` is empty or `radius` is not finite and positive.
pub fn cover(sites: &SiteSet, radius: f64, config: &CoverConfig) -> Result<CoverResult> {
    let mut result = CoverResult::for_sites(sites, radius)?;
    for center in config
        .algorithm
        .cover(sites.sites(), radius, config.default_height)
    {
        result.push(center);
    }
    debug!(
        "{} cover of {} sites at r = {radius}: {} disks",
        config.algorithm,
        sites.len(),
        result.len()
    );
    Ok(result)
}

/// Stateful front end: populate sites, pick an algorithm, cover, then consume centers.
///
/// ```
/// use understory_cover::{Algorithm, CoverConfig, CoverEngine};
///
/// let mut engine = CoverEngine::new(CoverConfig::default().with_algorithm(Algorithm::SweepCover));
/// engine.set_sites([(0.0, 0.0, 0.0), (100.0, 100.0, 0.0)]).unwrap();
/// let cover = engine.cover_sites(1.0).unwrap();
/// assert_eq!(cover.len(), 2);
///
/// // Placements are handed out round-robin.
/// let first = engine.next_position().unwrap();
/// engine.next_position();
/// assert_eq!(engine.next_position(), Some(first));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CoverEngine {
    config: CoverConfig,
    sites: SiteSet,
    result: Option<CoverResult>,
    cursor: Cursor,
}

impl CoverEngine {
    /// Create an engine with no sites.
    pub fn new(config: CoverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CoverConfig {
        &self.config
    }

    /// Select the algorithm used by the next [`cover_sites`](Self::cover_sites).
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    /// Replace the sites. A previous cover is discarded only on success.
    pub fn set_sites<I, P>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point3>,
    {
        self.sites.set_sites(points)?;
        self.reset_result();
        Ok(())
    }

    /// Replace the sites with the positions of `source`.
    pub fn set_sites_from<S: PositionSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        self.set_sites(source.positions())
    }

    /// The current sites.
    pub fn sites(&self) -> &SiteSet {
        &self.sites
    }

    /// Run the configured algorithm and keep its result.
    pub fn cover_sites(&mut self, radius: f64) -> Result<&CoverResult> {
        let result = cover(&self.sites, radius, &self.config)?;
        self.cursor = Cursor::START;
        Ok(&*self.result.insert(result))
    }

    /// The last computed cover, if any.
    pub fn result(&self) -> Option<&CoverResult> {
        self.result.as_ref()
    }

    /// The next disk center, cycling through the last cover.
    ///
    /// `None` before the first cover is computed.
    pub fn next_position(&mut self) -> Option<DiskCenter> {
        let (center, cursor) = self.result.as_ref()?.next_after(self.cursor)?;
        self.cursor = cursor;
        Some(center)
    }

    /// Number of disks in the last cover, `0` before one is computed.
    pub fn len(&self) -> usize {
        self.result.as_ref().map_or(0, CoverResult::len)
    }

    /// Whether no cover with disks is available.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of sites currently held.
    pub fn sites_count(&self) -> usize {
        self.sites.len()
    }

    fn reset_result(&mut self) {
        self.result = None;
        self.cursor = Cursor::START;
    }
}
