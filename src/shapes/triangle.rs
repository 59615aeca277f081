//! Equilateral triangle, optionally with rounded corners.

use glam::dvec2;

use crate::errors::ShapeError;
use crate::geometry::{Path, PathBuilder};

use super::{
    Anchor, ShapeGenerator, Travel, Viewport, check_non_negative, check_positive, defaults,
    finish,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleParams {
    /// Side length as a fraction of the viewport's shorter side.
    pub size: f64,
    /// Corner radius in path units, clamped to the inscribed circle.
    pub corner_radius: f64,
    pub rounded: bool,
}

impl Default for TriangleParams {
    fn default() -> Self {
        Self {
            size: defaults::TRIANGLE_SIZE,
            corner_radius: defaults::TRIANGLE_CORNER_RADIUS,
            rounded: true,
        }
    }
}

impl TriangleParams {
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }
}

impl ShapeGenerator for TriangleParams {
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        viewport.validate()?;
        let side = check_positive("size", self.size)? * viewport.min_side();
        let height = side * 3f64.sqrt() / 2.0;

        let c = viewport.center();
        let bottom = c.y + height / 2.0;
        let start = dvec2(c.x, bottom);
        let bottom_left = dvec2(c.x - side / 2.0, bottom);
        let apex = dvec2(c.x, c.y - height / 2.0);
        let bottom_right = dvec2(c.x + side / 2.0, bottom);

        let mut builder = PathBuilder::new();
        if self.rounded {
            // A 60° corner's tangent points sit r·√3 from the vertex; keep
            // them within half a side.
            let inradius = side / (2.0 * 3f64.sqrt());
            let radius = check_non_negative("corner_radius", self.corner_radius)?.min(inradius);
            builder.move_to(start);
            builder.arc_to_tangent(bottom_left, apex, radius);
            builder.arc_to_tangent(apex, bottom_right, radius);
            builder.arc_to_tangent(bottom_right, start, radius);
            builder.close();
        } else {
            builder.polyline(&[start, bottom_left, apex, bottom_right], true);
        }
        finish(self.name(), builder)
    }

    fn anchor(&self) -> Anchor {
        Anchor::HALF
    }

    fn travel(&self) -> Travel {
        Travel::Clockwise
    }

    fn name(&self) -> &'static str {
        "triangle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn sharp_triangle_perimeter_is_three_sides() {
        let path = TriangleParams::default()
            .with_rounded(false)
            .with_size(0.5)
            .build(&Viewport::new(200.0, 200.0))
            .unwrap();
        assert!((path.total_length() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn anchor_lands_on_the_apex() {
        let viewport = Viewport::new(200.0, 200.0);
        let params = TriangleParams::default().with_rounded(false);
        let path = params.build(&viewport).unwrap();
        let top = path.point_at_percent(params.anchor().fraction()).unwrap();
        let height = 160.0 * 3f64.sqrt() / 2.0;
        assert!((top.position - dvec2(100.0, 100.0 - height / 2.0)).length() < 1e-9);
    }

    #[test]
    fn rounding_trades_corners_for_arcs() {
        let r = 10.0;
        let path = TriangleParams::default()
            .with_size(0.5)
            .with_corner_radius(r)
            .build(&Viewport::new(200.0, 200.0))
            .unwrap();
        // Each 60° corner cuts 2·r·√3 of edge and adds a 120° arc.
        let expected = 300.0 - 6.0 * r * 3f64.sqrt() + 2.0 * PI * r;
        assert!((path.total_length() - expected).abs() < 0.05);
    }

    #[test]
    fn rounded_with_zero_radius_matches_sharp() {
        let viewport = Viewport::new(120.0, 90.0);
        let rounded = TriangleParams::default()
            .with_corner_radius(0.0)
            .build(&viewport)
            .unwrap();
        let sharp = TriangleParams::default()
            .with_rounded(false)
            .build(&viewport)
            .unwrap();
        assert!((rounded.total_length() - sharp.total_length()).abs() < 1e-9);
    }
}
