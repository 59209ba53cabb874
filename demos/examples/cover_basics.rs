// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cover basics.
//!
//! Cover a handful of sites with each algorithm, then walk the disks cyclically.
//!
//! Run:
//! - `cargo run -p understory_cover_demos --example cover_basics`

use understory_cover::{Algorithm, CoverConfig, CoverEngine, Cursor};

fn main() {
    let sites = [
        (0.0, 0.0, 0.0),
        (0.6, 0.2, 0.0),
        (1.1, -0.4, 0.0),
        (4.0, 4.0, 0.0),
        (4.3, 3.5, 0.0),
        (9.0, 0.5, 0.0),
    ];

    let mut engine = CoverEngine::new(CoverConfig::default());
    engine.set_sites(sites).unwrap();

    for algorithm in Algorithm::ALL {
        engine.set_algorithm(algorithm);
        let cover = engine.cover_sites(1.0).unwrap();
        println!(
            "{algorithm}: {} disks for {} sites ({:.2} sites per disk)",
            cover.len(),
            cover.sites_count(),
            cover.sites_per_disk()
        );
        for d in cover.disks() {
            println!("  center ({:.3}, {:.3}, {:.1})", d.x, d.y, d.z);
        }
        assert!(sites.iter().all(|&s| cover.covers(s.into())));
    }

    // Cursors are plain values; the result is never mutated by reading.
    let cover = engine.result().unwrap();
    let mut cursor = Cursor::START;
    for step in 0..cover.len() + 1 {
        let (d, next) = cover.next_after(cursor).unwrap();
        println!("step {step}: ({:.3}, {:.3})", d.x, d.y);
        cursor = next;
    }
    println!("bounds: {:?}", cover.planar_bounds());
}
