//! Rectangles with optional rounded corners.

use glam::dvec2;

use crate::errors::ShapeError;
use crate::geometry::{Path, PathBuilder};

use super::{
    Anchor, ShapeGenerator, Travel, Viewport, check_non_negative, check_positive, defaults,
    finish,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleParams {
    pub width_fraction: f64,
    pub height_fraction: f64,
    /// Corner radius in path units, clamped to half the shorter side.
    pub corner_radius: f64,
}

impl Default for RectangleParams {
    fn default() -> Self {
        Self {
            width_fraction: defaults::RECT_WIDTH,
            height_fraction: defaults::RECT_HEIGHT,
            corner_radius: defaults::RECT_CORNER_RADIUS,
        }
    }
}

impl RectangleParams {
    pub fn with_size(mut self, width_fraction: f64, height_fraction: f64) -> Self {
        self.width_fraction = width_fraction;
        self.height_fraction = height_fraction;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }
}

impl ShapeGenerator for RectangleParams {
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        viewport.validate()?;
        let w = check_positive("width_fraction", self.width_fraction)? * viewport.width;
        let h = check_positive("height_fraction", self.height_fraction)? * viewport.height;
        let radius = check_non_negative("corner_radius", self.corner_radius)?.min(w.min(h) / 2.0);

        let c = viewport.center();
        let (left, right) = (c.x - w / 2.0, c.x + w / 2.0);
        let (top, bottom) = (c.y - h / 2.0, c.y + h / 2.0);
        let start = dvec2(c.x, bottom);

        // Bottom edge leftward, then clockwise round the corners back to the start.
        let mut builder = PathBuilder::new();
        builder.move_to(start);
        builder.arc_to_tangent(dvec2(left, bottom), dvec2(left, top), radius);
        builder.arc_to_tangent(dvec2(left, top), dvec2(right, top), radius);
        builder.arc_to_tangent(dvec2(right, top), dvec2(right, bottom), radius);
        builder.arc_to_tangent(dvec2(right, bottom), start, radius);
        builder.close();
        finish(self.name(), builder)
    }

    fn anchor(&self) -> Anchor {
        Anchor::HALF
    }

    fn travel(&self) -> Travel {
        Travel::Clockwise
    }

    fn name(&self) -> &'static str {
        "rectangle"
    }
}
