// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a cover to SVG.
//!
//! Writes one file per algorithm into the system temp directory.
//!
//! Run:
//! - `cargo run -p understory_cover_demos --example render_svg`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_cover::render::save_svg;
use understory_cover::{Algorithm, CoverConfig, Point3, RenderLayers, SiteSet, cover};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sites = SiteSet::from_points((0..150).map(|_| {
        Point3::new(
            rng.random_range(0.0..12.0),
            rng.random_range(0.0..8.0),
            0.0,
        )
    }))
    .unwrap();

    for algorithm in Algorithm::ALL {
        let result = cover(&sites, 1.0, &CoverConfig::default().with_algorithm(algorithm)).unwrap();
        let path = std::env::temp_dir().join(format!("cover_{algorithm}.svg"));
        match save_svg(&path, sites.sites(), &result, RenderLayers::all()) {
            Ok(()) => println!("{algorithm}: {} disks -> {}", result.len(), path.display()),
            Err(e) => eprintln!("{algorithm}: could not write {}: {e}", path.display()),
        }
    }
}
