//! Shape generators
//!
//! Each shape family is a parameter struct that knows how to:
//! - Build its outline as a [`Path`] centred in a [`Viewport`]
//! - Report where its visual "top" lies along that path (its [`Anchor`])
//! - Report which way increasing distance travels on screen ([`Travel`])
//!
//! [`ShapeKind`] wraps every family; the trait methods are dispatched by
//! `enum_dispatch`, so a new variant without a `ShapeGenerator` impl does
//! not compile.

pub mod defaults;

mod freeform;
mod heart;
mod infinity;
mod line;
mod oval;
mod polygon;
mod rectangle;
mod spiral;
mod triangle;

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use crate::errors::ShapeError;
use crate::geometry::{Path, PathBuilder};
use crate::types::{NumericError, Point, finite, non_negative, positive};

pub use freeform::FreeformParams;
pub use heart::HeartParams;
pub use infinity::InfinityParams;
pub use line::{LineOrientation, LineParams};
pub use oval::{CircleParams, EllipseParams};
pub use polygon::{PolygonParams, StarParams};
pub use rectangle::RectangleParams;
pub use spiral::SpiralParams;
pub use triangle::TriangleParams;

// ============================================================================
// Viewport, anchors, travel
// ============================================================================

/// The drawing area shapes are centred in. Origin top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject zero, negative and non-finite sizes.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if positive(self.width).is_err() || positive(self.height).is_err() {
            return Err(ShapeError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn center(&self) -> Point {
        dvec2(self.width / 2.0, self.height / 2.0)
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// A position along a path in eighths of its length.
///
/// Shapes use it to say where their visual top lies, e.g. a circle that
/// starts at its rightmost point and runs clockwise has its top at 6/8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Anchor(u8);

impl Anchor {
    pub const START: Anchor = Anchor(0);
    pub const QUARTER: Anchor = Anchor(2);
    pub const HALF: Anchor = Anchor(4);
    pub const THREE_QUARTERS: Anchor = Anchor(6);

    /// Anchor at `index` eighths, taken modulo 8.
    pub fn new(index: i32) -> Self {
        Anchor(index.rem_euclid(8) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Fraction of the path length, in `[0, 1)`.
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 8.0
    }

    /// Move by `eighths`, wrapping around.
    pub fn rotate(self, eighths: i32) -> Self {
        Anchor::new(i32::from(self.0) + eighths)
    }

    /// Reflect across the start: `8 - index`, modulo 8.
    pub fn mirror(self) -> Self {
        Anchor::new(8 - i32::from(self.0))
    }
}

/// On-screen direction in which distance along a shape's path increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Travel {
    Clockwise,
    CounterClockwise,
    /// Open paths: from the first point toward the last.
    Forward,
}

// ============================================================================
// Generator trait and dispatch
// ============================================================================

/// Common behavior for all shape families
#[enum_dispatch]
pub trait ShapeGenerator {
    /// Build the outline, centred in `viewport`.
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError>;

    /// Where the shape's visual top lies along its path.
    fn anchor(&self) -> Anchor;

    fn travel(&self) -> Travel;

    /// Short lowercase name, used in diagnostics and logs.
    fn name(&self) -> &'static str;
}

/// Every supported shape family.
#[enum_dispatch(ShapeGenerator)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Circle(CircleParams),
    Ellipse(EllipseParams),
    Rectangle(RectangleParams),
    Polygon(PolygonParams),
    Star(StarParams),
    Triangle(TriangleParams),
    Heart(HeartParams),
    Infinity(InfinityParams),
    Spiral(SpiralParams),
    Freeform(FreeformParams),
    Line(LineParams),
}

impl Default for ShapeKind {
    fn default() -> Self {
        ShapeKind::Circle(CircleParams::default())
    }
}

// ============================================================================
// Helpers shared by the generators
// ============================================================================

fn check(
    field: &'static str,
    value: f64,
    rule: fn(f64) -> Result<f64, NumericError>,
) -> Result<f64, ShapeError> {
    rule(value).map_err(|err| ShapeError::parameter(field, value, err))
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    check(field, value, finite)
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    check(field, value, non_negative)
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    check(field, value, positive)
}

/// Build the path and reject outlines with no length.
pub(crate) fn finish(shape: &'static str, builder: PathBuilder) -> Result<Path, ShapeError> {
    let path = builder.build()?;
    let length = path.total_length();
    if !(length > 0.0 && length.is_finite()) {
        return Err(ShapeError::Degenerate { shape });
    }
    crate::log::debug!(
        shape,
        length,
        segments = path.segments().len(),
        "built shape path"
    );
    Ok(path)
}
