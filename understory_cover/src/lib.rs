// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cover --heading-base-level=0

//! Understory Cover: approximate unit disk cover.
//!
//! Given a finite set of sites and a radius `r`, compute a small set of disk centers such
//! that every site lies within planar distance `r` of some center. Finding the minimum
//! number of disks is NP-hard; this crate ships three polynomial approximations with
//! different speed and quality trade-offs.
//!
//! - [`Algorithm::GridCover`]: hashed `√2·r` lattice, `O(n)` expected. Fastest.
//! - [`Algorithm::SweepCover`]: x-sorted sweep with a y-ordered active window, `O(n log n)`.
//!   Centers land on actual sites, which pays off on clustered input.
//! - [`Algorithm::StripCover`]: `√3·r` vertical strips at six offsets, each strip solved as
//!   an interval cover, `O(n log n)`. Usually the fewest disks on scattered input.
//!
//! The pieces:
//!
//! - [`SiteSet`]: the sites to cover with their exact bounding box.
//! - [`CoverConfig`]: algorithm choice and the height given to generated centers.
//! - [`cover`] and [`CoverEngine`]: run an algorithm, one-shot or statefully.
//! - [`CoverResult`]: disk centers in generation order, the combined bounds of sites and
//!   disks, and cyclic traversal through explicit [`Cursor`] values.
//! - [`PositionSource`]: the capability interface for site producers and placement consumers.
//!
//! Coordinates carry a height `z` that is passed through but never compared: coverage is a
//! planar property.
//!
//! # Example
//!
//! ```rust
//! use understory_cover::{Algorithm, CoverConfig, SiteSet, cover};
//!
//! let sites = SiteSet::from_points([
//!     (0.0, 0.0, 0.0),
//!     (0.4, 0.3, 0.0),
//!     (7.0, 1.0, 0.0),
//! ])
//! .unwrap();
//!
//! for algorithm in Algorithm::ALL {
//!     let config = CoverConfig::default().with_algorithm(algorithm);
//!     let result = cover(&sites, 1.0, &config).unwrap();
//!     assert!(sites.sites().iter().all(|s| result.covers(*s)));
//!     assert!(result.len() <= sites.len());
//! }
//! ```
//!
//! ## Choosing an algorithm
//!
//! Prefer `GridCover` when throughput matters more than disk count, `StripCover` when disk
//! count matters most, and `SweepCover` for tightly clustered sites. Each algorithm is also
//! callable directly through [`algorithms`], which takes plain site slices.
//!
//! ## Features
//!
//! - `svg`: render sites, disks, centers, and bounds to an SVG document for inspection.
//!
//! ## Logging
//!
//! Runs are reported through the [`log`] facade: a `debug` summary per run, `trace` detail
//! for strip phases, and a `warn` when an algorithm selector is not recognized. No logger is
//! installed by this crate.

pub mod algorithms;
mod engine;
mod error;
#[cfg(feature = "svg")]
pub mod render;
mod result;
mod sites;
mod types;
mod util;

pub use engine::{CoverEngine, cover};
pub use error::{CoverError, Result};
pub use result::{CoverResult, Cursor, Cycle};
pub use sites::{ListPositionSource, PositionSource, SiteSet};
pub use types::{Algorithm, CoverConfig, DEFAULT_HEIGHT, DiskCenter, RenderLayers, Site};
pub use understory_cover_index::{Aabb3D, Point3};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn uniform_sites(seed: u64, n: usize, extent: f64) -> Vec<Point3> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                Point3::new(
                    rng.random_range(-extent..extent),
                    rng.random_range(-extent..extent),
                    rng.random_range(0.0..3.0),
                )
            })
            .collect()
    }

    fn clustered_sites(seed: u64, clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point3> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out = Vec::with_capacity(clusters * per_cluster);
        for _ in 0..clusters {
            let cx = rng.random_range(0.0..100.0);
            let cy = rng.random_range(0.0..100.0);
            for _ in 0..per_cluster {
                out.push(Point3::new(
                    cx + rng.random_range(-spread..spread),
                    cy + rng.random_range(-spread..spread),
                    0.0,
                ));
            }
        }
        out
    }

    fn run(algorithm: Algorithm, sites: &[Point3], radius: f64) -> CoverResult {
        let set = SiteSet::from_points(sites.iter().copied()).unwrap();
        cover(&set, radius, &CoverConfig::default().with_algorithm(algorithm)).unwrap()
    }

    #[test]
    fn every_site_is_covered_across_scales() {
        for (seed, radius) in [(1, 0.01), (2, 1.0), (3, 37.0), (4, 1000.0)] {
            for density in [2.0, 8.0, 30.0] {
                let sites = uniform_sites(seed, 400, density * radius);
                for algorithm in Algorithm::ALL {
                    let result = run(algorithm, &sites, radius);
                    let missing = result.uncovered(&sites).count();
                    assert_eq!(missing, 0, "{algorithm} left {missing} sites uncovered at r = {radius}");
                }
            }
        }
    }

    #[test]
    fn every_site_is_covered_far_from_origin() {
        for (seed, base, radius) in [(21, 1e6, 0.01), (22, 1e4, 0.001), (23, -3e5, 0.002)] {
            let sites: Vec<Point3> = uniform_sites(seed, 1500, 15.0 * radius)
                .into_iter()
                .map(|p| Point3::new(base + p.x, base - p.y, p.z))
                .collect();
            for algorithm in Algorithm::ALL {
                let result = run(algorithm, &sites, radius);
                let missing = result.uncovered(&sites).count();
                assert_eq!(missing, 0, "{algorithm} left {missing} sites uncovered at {base}");
                assert!(result.len() <= sites.len());
            }
        }
    }

    #[test]
    fn disk_count_is_between_one_and_n() {
        for (seed, n) in (0..10).zip((1..).step_by(13)) {
            let sites = uniform_sites(seed, n, 5.0);
            for algorithm in Algorithm::ALL {
                let k = run(algorithm, &sites, 0.7).len();
                assert!((1..=sites.len()).contains(&k), "{algorithm}: {k} disks for {} sites", sites.len());
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let sites = clustered_sites(9, 10, 20, 2.0);
        for algorithm in Algorithm::ALL {
            let a = run(algorithm, &sites, 1.5);
            let b = run(algorithm, &sites, 1.5);
            assert_eq!(a.disks(), b.disks(), "{algorithm} is not deterministic");
        }
    }

    #[test]
    fn heights_come_from_config() {
        let sites = SiteSet::from_points(uniform_sites(5, 50, 4.0)).unwrap();
        for algorithm in Algorithm::ALL {
            let config = CoverConfig::default()
                .with_algorithm(algorithm)
                .with_default_height(30.0);
            let result = cover(&sites, 1.0, &config).unwrap();
            assert!(result.disks().iter().all(|d| d.z == 30.0));
            assert!(result.bounds().contains_box(&sites.bounds().unwrap()));
        }
    }

    #[test]
    fn strip_cover_wins_on_uniform_scatter() {
        let mut totals = [0_usize; 3];
        for seed in 0..20 {
            let sites = uniform_sites(seed, 300, 8.0);
            for (total, algorithm) in totals.iter_mut().zip(Algorithm::ALL) {
                *total += run(algorithm, &sites, 1.0).len();
            }
        }
        let [grid, sweep, strip] = totals;
        assert!(strip <= sweep, "strip {strip} vs sweep {sweep}");
        assert!(strip <= grid, "strip {strip} vs grid {grid}");
    }

    #[test]
    fn sweep_cover_beats_grid_on_tight_clusters() {
        let mut grid = 0;
        let mut sweep = 0;
        for seed in 0..20 {
            let sites = clustered_sites(seed, 25, 12, 0.25);
            grid += run(Algorithm::GridCover, &sites, 1.0).len();
            sweep += run(Algorithm::SweepCover, &sites, 1.0).len();
        }
        assert!(sweep <= grid, "sweep {sweep} vs grid {grid}");
    }

    #[test]
    fn collinear_sites_order_the_algorithms() {
        let sites: Vec<Point3> = (0..200)
            .map(|i| Point3::new(0.5 * f64::from(i), 0.0, 0.0))
            .collect();
        let [grid, sweep, strip] = Algorithm::ALL.map(|a| run(a, &sites, 1.0).len());
        assert!(strip <= sweep && sweep <= grid, "strip {strip}, sweep {sweep}, grid {grid}");
        // Sweep places a disk on every third site.
        assert_eq!(sweep, 67);
    }
}
