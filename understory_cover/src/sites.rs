// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site repository and position sources.

use kurbo::Rect;
use understory_cover_index::{Aabb3D, Point3};

use crate::error::{CoverError, Result};
use crate::types::Site;
use crate::util::aabb_to_rect;

/// Anything that can hand out a list of positions.
///
/// Site producers (simulations, file loaders, generators) implement this to feed a
/// [`SiteSet`]; a [`CoverResult`](crate::CoverResult) implements it too, so disk centers
/// can be consumed as placements.
pub trait PositionSource {
    /// All positions, in a stable order.
    fn positions(&self) -> Vec<Point3>;
}

impl PositionSource for [Point3] {
    fn positions(&self) -> Vec<Point3> {
        self.to_vec()
    }
}

impl PositionSource for Vec<Point3> {
    fn positions(&self) -> Vec<Point3> {
        self.clone()
    }
}

/// A plain list of positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListPositionSource {
    positions: Vec<Point3>,
}

impl ListPositionSource {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position.
    pub fn add(&mut self, p: impl Into<Point3>) {
        self.positions.push(p.into());
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no positions are stored.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<P: Into<Point3>> FromIterator<P> for ListPositionSource {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl PositionSource for ListPositionSource {
    fn positions(&self) -> Vec<Point3> {
        self.positions.clone()
    }
}

/// The ordered set of sites to cover, with its exact bounding box.
///
/// Insertion order is preserved so covers are deterministic. The box is always the
/// componentwise min/max over every stored site, and is `None` only while empty.
#[derive(Clone, Debug, Default)]
pub struct SiteSet {
    sites: Vec<Site>,
    bounds: Option<Aabb3D>,
}

impl SiteSet {
    /// Create an empty site set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a site set from points. Fails on empty or non-finite input.
    pub fn from_points<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point3>,
    {
        let mut set = Self::new();
        set.set_sites(points)?;
        Ok(set)
    }

    /// Build a site set from a position source.
    pub fn from_source<S: PositionSource + ?Sized>(source: &S) -> Result<Self> {
        Self::from_points(source.positions())
    }

    /// Replace every site and recompute the bounding box from scratch.
    ///
    /// On error the previous contents are kept.
    pub fn set_sites<I, P>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point3>,
    {
        let sites: Vec<Site> = points.into_iter().map(Into::into).collect();
        if let Some(index) = sites.iter().position(|p| !p.is_finite()) {
            return Err(CoverError::NonFiniteSite { index });
        }
        let bounds = Aabb3D::from_points(sites.iter().copied()).ok_or(CoverError::EmptySites)?;
        self.sites = sites;
        self.bounds = Some(bounds);
        Ok(())
    }

    /// Append one site, growing the bounding box.
    pub fn push(&mut self, site: impl Into<Point3>) -> Result<()> {
        let site = site.into();
        if !site.is_finite() {
            return Err(CoverError::NonFiniteSite {
                index: self.sites.len(),
            });
        }
        self.bounds = Some(match self.bounds {
            Some(b) => b.including(site),
            None => Aabb3D::from_point(site),
        });
        self.sites.push(site);
        Ok(())
    }

    /// The sites, in insertion order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether there are no sites.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Bounding box of all sites, or `None` when empty.
    pub fn bounds(&self) -> Option<Aabb3D> {
        self.bounds
    }

    /// Bounding rectangle of the sites' planar projections.
    pub fn planar_bounds(&self) -> Option<Rect> {
        self.bounds.as_ref().map(aabb_to_rect)
    }
}

impl PositionSource for SiteSet {
    fn positions(&self) -> Vec<Point3> {
        self.sites.clone()
    }
}
