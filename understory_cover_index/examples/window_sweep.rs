// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Cover Index: map points to lattice cells and query a sweep window.

use understory_cover_index::{BTreeWindow, Lattice, Point3, Window};

fn main() {
    let lattice = Lattice::new(core::f64::consts::SQRT_2);
    let p = Point3::new(2.3, -0.4, 0.0);
    let key = lattice.key_for(p);
    println!("{p:?} is in cell {key:?}, centered at {:?}", lattice.cell_center(key, 1.2));

    // Sweep a row of points, keeping only centers within r of the sweep line.
    let radius = 1.0;
    let mut window = BTreeWindow::default();
    let mut placed: Vec<Point3> = Vec::new();
    let mut tail = 0;
    for i in 0..10 {
        let p = Point3::new(0.7 * f64::from(i), if i % 2 == 0 { 0.0 } else { 0.8 }, 0.0);
        while tail < placed.len() && p.x - placed[tail].x > radius {
            window.remove(tail);
            tail += 1;
        }
        if window.find_within(p, radius).is_none() {
            window.insert(placed.len(), p);
            placed.push(p);
        }
    }
    println!("placed {} centers, {} still active", placed.len(), window.len());
}
