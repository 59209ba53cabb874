// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_cover::algorithms::sweep;
use understory_cover::{Algorithm, DEFAULT_HEIGHT, Point3};
use understory_cover_index::{BTreeWindow, FlatWindow};

fn gen_uniform_sites(count: usize, extent: f64) -> Vec<Point3> {
    let mut rng = StdRng::seed_from_u64(0xCAFE_F00D_DEAD_BEEF);
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

fn gen_clustered_sites(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point3> {
    let mut rng = StdRng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = rng.random_range(0.0..2000.0);
        let cy = rng.random_range(0.0..2000.0);
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

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("cover_algorithms");
    let inputs = [
        ("uniform_1k", gen_uniform_sites(1_000, 100.0)),
        ("uniform_10k", gen_uniform_sites(10_000, 300.0)),
        ("clustered_10k", gen_clustered_sites(100, 100, 4.0)),
    ];
    for (label, sites) in &inputs {
        group.throughput(Throughput::Elements(sites.len() as u64));
        for algorithm in Algorithm::ALL {
            group.bench_function(format!("{algorithm}_{label}"), |b| {
                b.iter(|| black_box(algorithm.cover(sites, 1.0, DEFAULT_HEIGHT).len()));
            });
        }
    }
    group.finish();
}

fn bench_sweep_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_windows");
    // A large radius keeps many centers active at once.
    for &radius in &[1.0, 10.0] {
        let sites = gen_uniform_sites(5_000, 200.0);
        group.throughput(Throughput::Elements(sites.len() as u64));
        group.bench_function(format!("flat_r{radius}"), |b| {
            b.iter(|| black_box(sweep::cover_with::<FlatWindow>(&sites, radius, 0.0).len()));
        });
        group.bench_function(format!("btree_r{radius}"), |b| {
            b.iter(|| black_box(sweep::cover_with::<BTreeWindow>(&sites, radius, 0.0).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_sweep_windows);
criterion_main!(benches);
