// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;

/// A point in 3D space.
///
/// Covering only looks at `x` and `y`; `z` is carried through as a placement attribute
/// (for example device or antenna height).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate (height).
    pub z: f64,
}

impl Point3 {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Return a copy of this point with `z` replaced.
    pub const fn with_z(self, z: f64) -> Self {
        Self {
            x: self.x,
            y: self.y,
            z,
        }
    }

    /// Whether all three coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for (f64, f64, f64) {
    fn from(p: Point3) -> Self {
        (p.x, p.y, p.z)
    }
}

/// Squared Euclidean distance between two points in 3D.
#[inline]
pub fn squared_distance(a: Point3, b: Point3) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    dx * dx + dy * dy + dz * dz
}

/// Squared Euclidean distance between the projections of two points onto the xy-plane.
///
/// This is the distance every covering algorithm compares against `r²`.
#[inline]
pub fn squared_distance_2d(a: Point3, b: Point3) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Whether `p` lies inside the closed disk of radius `radius` around `center` (planar).
#[inline]
pub fn disk_contains(center: Point3, radius: f64, p: Point3) -> bool {
    squared_distance_2d(center, p) <= radius * radius
}

/// Axis-aligned bounding box in 3D.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3D {
    /// Componentwise minimum corner.
    pub min: Point3,
    /// Componentwise maximum corner.
    pub max: Point3,
}

impl Aabb3D {
    /// Create a new AABB from min/max corners.
    pub const fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// A degenerate box containing exactly one point.
    pub const fn from_point(p: Point3) -> Self {
        Self { min: p, max: p }
    }

    /// The tightest box containing every point, or `None` if there are none.
    pub fn from_points<I: IntoIterator<Item = Point3>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        Some(it.fold(Self::from_point(first), |acc, p| acc.including(p)))
    }

    /// Return this box grown to include `p`.
    pub fn including(self, p: Point3) -> Self {
        self.including_inflated(p, 0.0)
    }

    /// Return this box grown to include the cube of half-width `radius` around `p`.
    pub fn including_inflated(self, p: Point3, radius: f64) -> Self {
        Self {
            min: Point3::new(
                min_t(self.min.x, p.x - radius),
                min_t(self.min.y, p.y - radius),
                min_t(self.min.z, p.z - radius),
            ),
            max: Point3::new(
                max_t(self.max.x, p.x + radius),
                max_t(self.max.y, p.y + radius),
                max_t(self.max.z, p.z + radius),
            ),
        }
    }

    /// Whether the box contains the point (closed on all faces).
    pub fn contains(&self, p: Point3) -> bool {
        le(self.min.x, p.x)
            && le(self.min.y, p.y)
            && le(self.min.z, p.z)
            && le(p.x, self.max.x)
            && le(p.y, self.max.y)
            && le(p.z, self.max.z)
    }

    /// Whether `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }
}

/// Total order on `f64` used for sorting coordinates. NaNs sort last.
#[inline]
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_distance_ignores_height() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 100.0);
        assert_eq!(squared_distance_2d(a, b), 25.0);
        assert_eq!(squared_distance(a, b), 10_025.0);
        assert!(disk_contains(a, 5.0, b));
        assert!(!disk_contains(a, 4.99, b));
    }

    #[test]
    fn bounds_are_componentwise_min_max() {
        let pts = [
            Point3::new(1.0, -2.0, 0.5),
            Point3::new(-3.0, 4.0, 0.0),
            Point3::new(2.0, 0.0, -1.0),
        ];
        let b = Aabb3D::from_points(pts).unwrap();
        assert_eq!(b.min, Point3::new(-3.0, -2.0, -1.0));
        assert_eq!(b.max, Point3::new(2.0, 4.0, 0.5));
        assert!(pts.iter().all(|p| b.contains(*p)));
        assert!(Aabb3D::from_points(core::iter::empty()).is_none());
    }

    #[test]
    fn inflated_include_grows_every_axis() {
        let b = Aabb3D::from_point(Point3::ORIGIN)
            .including_inflated(Point3::new(5.0, 0.0, 1.5), 2.0);
        assert_eq!(b.min, Point3::new(0.0, -2.0, -0.5));
        assert_eq!(b.max, Point3::new(7.0, 2.0, 3.5));
        let inner = Aabb3D::new(Point3::new(3.0, -2.0, -0.5), Point3::new(7.0, 2.0, 3.5));
        assert!(b.contains_box(&inner));
    }
}
