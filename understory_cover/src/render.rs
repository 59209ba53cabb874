// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG diagnostics for covers.
//!
//! The drawing is fitted to a fixed square canvas of [`CANVAS`] user units with y pointing
//! up, so covers at any scale render at a comparable size. Rendering only reads the cover;
//! a failed write never touches it.

use std::path::Path;

use kurbo::{Affine, BezPath, Point, Vec2};
use log::debug;
use svg::Document;
use svg::node::element::{Circle, Group, Path as PathElement, Rectangle};

use crate::error::Result;
use crate::result::CoverResult;
use crate::types::{RenderLayers, Site};
use crate::util::planar;

/// Side length of the square drawing canvas.
pub const CANVAS: f64 = 100.0;

const MARGIN: f64 = 2.0;
const SITE_RADIUS: f64 = 0.4;
const CROSS_HALF: f64 = 0.8;
const STROKE: f64 = 0.2;

/// Map cover coordinates onto the canvas: fit the cover bounds inside the margins and flip y.
fn canvas_transform(cover: &CoverResult) -> Affine {
    let bounds = cover.planar_bounds();
    let extent = bounds.width().max(bounds.height());
    let scale = if extent > 0.0 {
        (CANVAS - 2.0 * MARGIN) / extent
    } else {
        1.0
    };
    let flip_y = Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, CANVAS]);
    flip_y
        * Affine::translate(Vec2::new(MARGIN, MARGIN))
        * Affine::scale(scale)
        * Affine::translate(-bounds.origin().to_vec2())
}

/// Render `sites` and `cover` as an SVG document.
pub fn to_svg(sites: &[Site], cover: &CoverResult, layers: RenderLayers) -> Document {
    let transform = canvas_transform(cover);
    let to_canvas = |p: Site| transform * planar(p);
    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, CANVAS, CANVAS))
        .set("width", CANVAS)
        .set("height", CANVAS);

    if layers.contains(RenderLayers::BOUNDS) {
        let r = transform.transform_rect_bbox(cover.planar_bounds());
        document = document.add(
            Rectangle::new()
                .set("x", r.x0)
                .set("y", r.y0)
                .set("width", r.width())
                .set("height", r.height())
                .set("fill", "none")
                .set("stroke", "#888888")
                .set("stroke-width", STROKE)
                .set("stroke-dasharray", "1,1"),
        );
    }

    if layers.contains(RenderLayers::DISKS) {
        // Uniform scale, so disks stay circles.
        let radius = cover.radius() * transform.as_coeffs()[0].abs();
        let mut group = Group::new()
            .set("fill", "#3366cc")
            .set("fill-opacity", 0.15)
            .set("stroke", "#3366cc")
            .set("stroke-width", STROKE);
        for d in cover.disks() {
            let c = to_canvas(*d);
            group = group.add(Circle::new().set("cx", c.x).set("cy", c.y).set("r", radius));
        }
        document = document.add(group);
    }

    if layers.contains(RenderLayers::CENTERS) && !cover.is_empty() {
        let mut crosses = BezPath::new();
        for d in cover.disks() {
            let c = to_canvas(*d);
            crosses.move_to(c - Vec2::new(CROSS_HALF, CROSS_HALF));
            crosses.line_to(c + Vec2::new(CROSS_HALF, CROSS_HALF));
            crosses.move_to(c + Vec2::new(-CROSS_HALF, CROSS_HALF));
            crosses.line_to(c + Vec2::new(CROSS_HALF, -CROSS_HALF));
        }
        document = document.add(
            PathElement::new()
                .set("d", crosses.to_svg())
                .set("stroke", "#cc3333")
                .set("stroke-width", STROKE),
        );
    }

    if layers.contains(RenderLayers::SITES) {
        let mut group = Group::new().set("fill", "#222222");
        for s in sites {
            let Point { x, y } = to_canvas(*s);
            group = group.add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", SITE_RADIUS),
            );
        }
        document = document.add(group);
    }

    document
}

/// Render and write an SVG file.
pub fn save_svg(
    path: impl AsRef<Path>,
    sites: &[Site],
    cover: &CoverResult,
    layers: RenderLayers,
) -> Result<()> {
    let path = path.as_ref();
    svg::save(path, &to_svg(sites, cover, layers))?;
    debug!("wrote cover diagnostics to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::SiteSet;
    use crate::{CoverConfig, cover};

    fn sample() -> (SiteSet, CoverResult) {
        let sites = SiteSet::from_points([(0.0, 0.0, 0.0), (30.0, 10.0, 0.0), (12.0, 40.0, 0.0)])
            .unwrap();
        let result = cover(&sites, 5.0, &CoverConfig::default()).unwrap();
        (sites, result)
    }

    #[test]
    fn layers_control_elements() {
        let (sites, result) = sample();
        let all = to_svg(sites.sites(), &result, RenderLayers::all()).to_string();
        assert_eq!(all.matches("<circle").count(), sites.len() + result.len());
        assert!(all.contains("<rect"));
        assert!(all.contains("<path"));

        let only_sites = to_svg(sites.sites(), &result, RenderLayers::SITES).to_string();
        assert_eq!(only_sites.matches("<circle").count(), sites.len());
        assert!(!only_sites.contains("<rect"));
    }

    #[test]
    fn drawing_fits_the_canvas() {
        let (_, result) = sample();
        let t = canvas_transform(&result);
        let r = t.transform_rect_bbox(result.planar_bounds());
        assert!(r.x0 >= MARGIN - 1e-9 && r.y0 >= MARGIN - 1e-9);
        assert!(r.x1 <= CANVAS - MARGIN + 1e-9 && r.y1 <= CANVAS - MARGIN + 1e-9);
        // y is flipped: the lowest site ends up lowest on the page.
        let low = t * Point::new(0.0, 0.0);
        let high = t * Point::new(12.0, 40.0);
        assert!(low.y > high.y);
    }

    #[test]
    fn writes_files() {
        let (sites, result) = sample();
        let path = std::env::temp_dir().join("understory_cover_render_test.svg");
        save_svg(&path, sites.sites(), &result, RenderLayers::default()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("viewBox"));
        let _ = std::fs::remove_file(&path);
    }
}
