// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strip cover: vertical strips of width `√3·r`, each solved as an interval cover.
//!
//! Inside a strip every disk center is placed on the strip's center line (its axis).
//! A site at horizontal offset `dx` from the axis is covered by any axis center whose y
//! lies in `[y - h, y + h]` with `h = √(r² - dx²)`; since `|dx| ≤ √3·r / 2`, every such
//! chord is at least `r` long. Covering a strip is then the classic minimum stabbing of
//! those y-intervals, solved greedily.
//!
//! Chords are shrunk by a few ulps of the coordinates involved, and every stabbing point is
//! checked against its group with the exact `≤ r²` test. A site that rounding still leaves
//! outside gets a disk of its own, so no phase ever emits more disks than sites.
//!
//! The whole decomposition is repeated for [`PHASES`] strip offsets spread over one
//! strip width, and the smallest cover wins.

use core::cmp::Ordering;
use core::ops::Range;

use log::{debug, trace};
use understory_cover_index::{Lattice, Point3, cmp_f64, disk_contains};

use super::{NUMERIC_GUARD, sorted_by_x};
use crate::types::{DiskCenter, Site};

/// Number of strip offsets tried.
pub const PHASES: usize = 6;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Cover `sites` with disks centered on strip axes, keeping the best phase.
pub fn cover(sites: &[Site], radius: f64, height: f64) -> Vec<DiskCenter> {
    let sorted = sorted_by_x(sites);
    let width = SQRT_3 * radius;

    let mut best: Option<(usize, Vec<DiskCenter>)> = None;
    for phase in 0..PHASES {
        let disks = cover_phase(&sorted, radius, strips_for_phase(width, phase), height);
        trace!("strip cover phase {phase}: {} disks", disks.len());
        // Strictly fewer, so ties keep the earliest phase.
        if best.as_ref().is_none_or(|(_, b)| disks.len() < b.len()) {
            best = Some((phase, disks));
        }
    }

    let (phase, disks) = best.unwrap_or_default();
    debug!(
        "strip cover: {} sites, {} disks, phase {phase}",
        sites.len(),
        disks.len()
    );
    disks
}

fn strips_for_phase(width: f64, phase: usize) -> Lattice {
    let offset = phase as f64 * width / PHASES as f64;
    Lattice::with_origin(width, offset, 0.0)
}

/// Cover x-sorted sites with one strip decomposition.
///
/// Strips are the columns of `strips`; rows are ignored.
fn cover_phase(sorted: &[Site], radius: f64, strips: Lattice, height: f64) -> Vec<DiskCenter> {
    let mut out = Vec::new();
    let mut chords = Vec::new();
    let mut rest = sorted;
    while let Some(first) = rest.first() {
        let column = strips.key_for(*first).0;
        let len = rest
            .iter()
            .position(|p| strips.key_for(*p).0 != column)
            .unwrap_or(rest.len());
        let (strip, tail) = rest.split_at(len);
        rest = tail;

        let axis = strips.cell_origin((column, 0)).0 + 0.5 * strips.cell();
        chords.clear();
        chords.extend(strip.iter().map(|p| chord(*p, axis, radius)));
        for (y, group) in stab(&mut chords) {
            let center = Point3::new(axis, y, height);
            let group = &chords[group];
            if group.iter().any(|c| disk_contains(center, radius, c.site)) {
                out.push(center);
            }
            for c in group.iter().filter(|c| !disk_contains(center, radius, c.site)) {
                trace!("axis disk misses site ({}, {}) by rounding", c.site.x, c.site.y);
                out.push(c.site.with_z(height));
            }
        }
    }
    out
}

/// The y-interval of axis points covering one site.
#[derive(Copy, Clone, Debug)]
struct Chord {
    lo: f64,
    hi: f64,
    site: Site,
}

/// The chord of axis points within `radius` of `p`, shrunk to absorb rounding.
fn chord(p: Site, axis: f64, radius: f64) -> Chord {
    let dx = p.x - axis;
    let radicand = radius * radius - dx * dx;
    if radicand < 0.0 {
        trace!("site ({}, {}) lies outside its strip by rounding", p.x, p.y);
    }
    // Rounding of `p.y ± half` and of the stabbing point grows with the coordinates.
    let slack = 4.0 * f64::EPSILON * p.y.abs().max(axis.abs()).max(radius);
    let half = (radicand.max(0.0).sqrt() * (1.0 - NUMERIC_GUARD) - slack).max(0.0);
    Chord {
        lo: p.y - half,
        hi: p.y + half,
        site: p,
    }
}

/// Greedy minimum stabbing set for closed chords.
///
/// Chords are sorted by descending upper end; each group keeps the running intersection
/// and is stabbed at its lower end. Returns the stabbing points with the index range of
/// their group in the sorted chords.
fn stab(chords: &mut [Chord]) -> Vec<(f64, Range<usize>)> {
    chords.sort_by(|a, b| match cmp_f64(b.hi, a.hi) {
        Ordering::Equal => cmp_f64(b.lo, a.lo),
        o => o,
    });
    let mut groups = Vec::new();
    let mut start = 0;
    while let Some(first) = chords.get(start) {
        let mut lo = first.lo;
        let mut end = start + 1;
        while let Some(c) = chords.get(end) {
            if c.hi < lo {
                break;
            }
            lo = lo.max(c.lo);
            end += 1;
        }
        groups.push((lo, start..end));
        start = end;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn spans(spans: &[(f64, f64)]) -> Vec<Chord> {
        spans
            .iter()
            .map(|&(lo, hi)| Chord {
                lo,
                hi,
                site: Point3::ORIGIN,
            })
            .collect()
    }

    #[test]
    fn collinear_cluster_takes_one_disk() {
        let sites: Vec<Site> = (0..5)
            .map(|i| Point3::new(0.1 * f64::from(i), 0.0, 0.0))
            .collect();
        let disks = cover(&sites, 1.0, 1.2);
        assert_eq!(disks.len(), 1);
        assert_eq!(disks[0].z, 1.2);
        assert!(sites.iter().all(|s| disk_contains(disks[0], 1.0, *s)));
    }

    #[test]
    fn clusters_across_a_strip_edge_use_a_later_phase() {
        // Two tight clusters on either side of the phase-0 boundary at x = √3.
        let sites: Vec<Site> = [-0.05, -0.04, 0.04, 0.05]
            .into_iter()
            .flat_map(|dx| [0.0, 0.02].map(|y| Point3::new(SQRT_3 + dx, y, 0.0)))
            .collect();
        let sorted = sorted_by_x(&sites);
        assert_eq!(cover_phase(&sorted, 1.0, strips_for_phase(SQRT_3, 0), 0.0).len(), 2);
        assert_eq!(cover_phase(&sorted, 1.0, strips_for_phase(SQRT_3, 1), 0.0).len(), 1);
        assert_eq!(cover_phase(&sorted, 1.0, strips_for_phase(SQRT_3, 2), 0.0).len(), 1);

        let disks = cover(&sites, 1.0, 0.0);
        assert_eq!(disks.len(), 1);
        // Phases 1 to 5 all need one disk; the earliest one's axis is at 2√3/3.
        assert_abs_diff_eq!(disks[0].x, 2.0 * SQRT_3 / 3.0, epsilon = 1e-12);
        assert!(sites.iter().all(|s| disk_contains(disks[0], 1.0, *s)));
    }

    #[test]
    fn stabbing_is_minimal_for_chained_intervals() {
        let mut chords = spans(&[(0.0, 2.0), (1.0, 3.0), (2.5, 4.0), (5.0, 6.0)]);
        let groups = stab(&mut chords);
        assert_eq!(groups, [(5.0, 0..1), (2.5, 1..3), (0.0, 3..4)]);
    }

    #[test]
    fn stabbing_touching_intervals_shares_a_point() {
        let mut chords = spans(&[(0.0, 1.0), (1.0, 2.0)]);
        assert_eq!(stab(&mut chords), [(1.0, 0..2)]);
    }

    #[test]
    fn centers_lie_on_strip_axes() {
        let sites = [Point3::new(0.1, 0.0, 0.0), Point3::new(10.0, 3.0, 0.0)];
        for d in cover(&sites, 1.0, 0.0) {
            let phase_units = (d.x / (SQRT_3 / PHASES as f64)).rem_euclid(PHASES as f64);
            let nearest = phase_units.round();
            assert!((phase_units - nearest).abs() < 1e-9, "{d:?} is off-axis");
        }
    }

    #[test]
    fn chord_spans_at_least_radius() {
        let c = chord(Point3::new(0.0, 2.0, 0.0), SQRT_3 / 2.0, 1.0);
        assert!(c.hi - c.lo >= 1.0 - 1e-6);
        assert!(((c.lo + c.hi) / 2.0 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn far_from_origin_every_site_is_covered() {
        for (seed, base, radius, n) in [(3, 1e6, 0.01, 2000), (4, 1e4, 0.001, 5000)] {
            let mut rng = StdRng::seed_from_u64(seed);
            let sites: Vec<Site> = (0..n)
                .map(|_| {
                    Point3::new(
                        base + rng.random_range(0.0..30.0 * radius),
                        base + rng.random_range(0.0..30.0 * radius),
                        0.0,
                    )
                })
                .collect();
            let disks = cover(&sites, radius, 0.0);
            assert!(disks.len() <= sites.len());
            let missing = sites
                .iter()
                .filter(|s| !disks.iter().any(|d| disk_contains(*d, radius, **s)))
                .count();
            assert_eq!(missing, 0, "{missing} sites uncovered at base {base}, r = {radius}");
        }
    }
}
