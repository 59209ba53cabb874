// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between cover primitives and kurbo's planar types.

use kurbo::{Point, Rect};
use understory_cover_index::{Aabb3D, Point3};

/// Project a point onto the xy-plane.
pub(crate) fn planar(p: Point3) -> Point {
    Point::new(p.x, p.y)
}

/// Project a 3D box onto the xy-plane.
pub(crate) fn aabb_to_rect(a: &Aabb3D) -> Rect {
    Rect::new(a.min.x, a.min.y, a.max.x, a.max.y)
}
