// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gateway placement.
//!
//! Scatter end devices over a square area, choose gateway positions so that every device is
//! within radio range of one, and hand the gateways out one at a time to whatever installs
//! them.
//!
//! Run:
//! - `cargo run -p understory_cover_demos --example gateway_placement`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_cover::{
    Algorithm, CoverConfig, CoverEngine, ListPositionSource, Point3, PositionSource,
};

const AREA: f64 = 6_000.0;
const DEVICES: usize = 2_000;
const RANGE: f64 = 500.0;
const GATEWAY_HEIGHT: f64 = 15.0;

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let devices: ListPositionSource = (0..DEVICES)
        .map(|_| {
            Point3::new(
                rng.random_range(0.0..AREA),
                rng.random_range(0.0..AREA),
                1.2,
            )
        })
        .collect();

    let config = CoverConfig::default().with_default_height(GATEWAY_HEIGHT);
    let mut engine = CoverEngine::new(config);
    engine.set_sites_from(&devices).unwrap();

    let mut best: Option<(Algorithm, usize)> = None;
    for algorithm in Algorithm::ALL {
        engine.set_algorithm(algorithm);
        let gateways = engine.cover_sites(RANGE).unwrap().len();
        println!("{algorithm}: {gateways} gateways for {} devices", engine.sites_count());
        if best.is_none_or(|(_, n)| gateways < n) {
            best = Some((algorithm, gateways));
        }
    }

    let Some((algorithm, gateways)) = best else {
        return;
    };
    engine.set_algorithm(algorithm);
    engine.cover_sites(RANGE).unwrap();
    println!("installing {gateways} gateways from {algorithm}:");
    for i in 0..gateways.min(5) {
        if let Some(p) = engine.next_position() {
            println!("  gateway {i} at ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z);
        }
    }

    let placements = engine.result().map(PositionSource::positions).unwrap_or_default();
    assert_eq!(placements.len(), gateways);
}
