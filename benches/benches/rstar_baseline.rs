// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;
use understory_cover::{Algorithm, Point3};

fn gen_uniform_sites(count: usize, extent: f64) -> Vec<Point3> {
    let mut rng = StdRng::seed_from_u64(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            Point3::new(
                rng.random_range(0.0..extent),
                rng.random_range(0.0..extent),
                0.0,
            )
        })
        .collect()
}

/// Greedy cover in x-order that keeps every placed center in an R-tree.
///
/// Places the same disks as the sweep cover; there is no eviction.
fn rstar_greedy_cover(sites: &[Point3], radius: f64) -> usize {
    let mut sorted = sites.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    let mut tree: RTree<[f64; 2]> = RTree::new();
    let r2 = radius * radius;
    for p in sorted {
        let q = [p.x, p.y];
        if tree.locate_within_distance(q, r2).next().is_none() {
            tree.insert(q);
        }
    }
    tree.size()
}

fn bench_rstar_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_baseline");
    for &n in &[1_000usize, 10_000] {
        let sites = gen_uniform_sites(n, (n as f64).sqrt() * 3.0);
        group.throughput(Throughput::Elements(n as u64));

        let expected = Algorithm::SweepCover.cover(&sites, 1.0, 0.0).len();
        assert_eq!(rstar_greedy_cover(&sites, 1.0), expected, "baselines diverged");

        group.bench_function(format!("understory_sweep_n{n}"), |b| {
            b.iter(|| black_box(Algorithm::SweepCover.cover(&sites, 1.0, 0.0).len()));
        });
        group.bench_function(format!("rstar_greedy_n{n}"), |b| {
            b.iter(|| black_box(rstar_greedy_cover(&sites, 1.0)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_baseline);
criterion_main!(benches);
