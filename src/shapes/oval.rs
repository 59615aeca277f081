//! Circles and ellipses.

use glam::dvec2;

use crate::errors::ShapeError;
use crate::geometry::{Path, PathBuilder};

use super::{
    Anchor, ShapeGenerator, Travel, Viewport, check_positive, defaults, finish,
};

/// A circle whose diameter is a fraction of the viewport's shorter side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleParams {
    pub diameter: f64,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            diameter: defaults::CIRCLE_DIAMETER,
        }
    }
}

impl CircleParams {
    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }
}

impl ShapeGenerator for CircleParams {
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        viewport.validate()?;
        let d = check_positive("diameter", self.diameter)? * viewport.min_side();
        oval(self.name(), viewport, d, d)
    }

    fn anchor(&self) -> Anchor {
        Anchor::THREE_QUARTERS
    }

    fn travel(&self) -> Travel {
        Travel::Clockwise
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}

/// An ellipse sized as fractions of the viewport's width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseParams {
    pub width_fraction: f64,
    pub height_fraction: f64,
}

impl Default for EllipseParams {
    fn default() -> Self {
        Self {
            width_fraction: defaults::ELLIPSE_WIDTH,
            height_fraction: defaults::ELLIPSE_HEIGHT,
        }
    }
}

impl EllipseParams {
    pub fn with_size(mut self, width_fraction: f64, height_fraction: f64) -> Self {
        self.width_fraction = width_fraction;
        self.height_fraction = height_fraction;
        self
    }
}

impl ShapeGenerator for EllipseParams {
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        viewport.validate()?;
        let w = check_positive("width_fraction", self.width_fraction)? * viewport.width;
        let h = check_positive("height_fraction", self.height_fraction)? * viewport.height;
        oval(self.name(), viewport, w, h)
    }

    fn anchor(&self) -> Anchor {
        Anchor::THREE_QUARTERS
    }

    fn travel(&self) -> Travel {
        Travel::Clockwise
    }

    fn name(&self) -> &'static str {
        "ellipse"
    }
}

fn oval(name: &'static str, viewport: &Viewport, width: f64, height: f64) -> Result<Path, ShapeError> {
    let c = viewport.center();
    let half = dvec2(width, height) / 2.0;
    let mut builder = PathBuilder::new();
    builder.ellipse_in_rect(c - half, c + half);
    finish(name, builder)
}
