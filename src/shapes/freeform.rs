//! User-drawn outlines from a stored point list.

use glam::dvec2;

use crate::errors::ShapeError;
use crate::geometry::{Path, PathBuilder, chaikin};
use crate::types::{Point, is_finite_point};

use super::{Anchor, ShapeGenerator, Travel, Viewport, defaults, finish};

/// A drawn outline. Points are normalized: `(0, 0)` is the viewport's
/// top-left corner and `(1, 1)` its bottom-right.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeformParams {
    pub points: Vec<Point>,
    pub closed: bool,
    pub smoothing_iterations: u8,
}

impl Default for FreeformParams {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            closed: true,
            smoothing_iterations: defaults::FREEFORM_SMOOTHING,
        }
    }
}

impl FreeformParams {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_smoothing(mut self, iterations: u8) -> Self {
        self.smoothing_iterations = iterations;
        self
    }

    /// Twice the signed area in normalized space; positive is clockwise on
    /// screen (y grows downward).
    fn signed_area(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum()
    }
}

impl ShapeGenerator for FreeformParams {
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        viewport.validate()?;
        let needed = if self.closed { 3 } else { 2 };
        if self.points.len() < needed {
            return Err(ShapeError::TooFewPoints {
                needed,
                got: self.points.len(),
            });
        }
        if self.smoothing_iterations > defaults::MAX_FREEFORM_SMOOTHING {
            return Err(ShapeError::InvalidParameter {
                field: "smoothing_iterations",
                value: f64::from(self.smoothing_iterations),
                reason: format!("more than {} passes", defaults::MAX_FREEFORM_SMOOTHING),
            });
        }
        if let Some(bad) = self.points.iter().find(|p| !is_finite_point(**p)) {
            let value = if bad.x.is_finite() { bad.y } else { bad.x };
            return Err(ShapeError::InvalidParameter {
                field: "points",
                value,
                reason: "coordinates must be finite".into(),
            });
        }

        let scale = dvec2(viewport.width, viewport.height);
        let mapped: Vec<Point> = self.points.iter().map(|p| *p * scale).collect();
        let smoothed = chaikin(&mapped, self.closed, self.smoothing_iterations);

        let mut builder = PathBuilder::new();
        builder.polyline(&smoothed, self.closed);
        finish(self.name(), builder)
    }

    fn anchor(&self) -> Anchor {
        Anchor::HALF
    }

    fn travel(&self) -> Travel {
        if !self.closed {
            Travel::Forward
        } else if self.signed_area() < 0.0 {
            Travel::CounterClockwise
        } else {
            Travel::Clockwise
        }
    }

    fn name(&self) -> &'static str {
        "freeform"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            dvec2(0.25, 0.25),
            dvec2(0.75, 0.25),
            dvec2(0.75, 0.75),
            dvec2(0.25, 0.75),
        ]
    }

    #[test]
    fn unsmoothed_points_map_into_the_viewport() {
        let path = FreeformParams::new(square())
            .with_smoothing(0)
            .build(&Viewport::new(200.0, 100.0))
            .unwrap();
        assert_eq!(path.segments()[0].end_point(), Some(dvec2(50.0, 25.0)));
        assert_eq!(path.total_length(), 2.0 * (100.0 + 50.0));
    }

    #[test]
    fn smoothing_shortens_a_closed_outline() {
        let viewport = Viewport::new(100.0, 100.0);
        let sharp = FreeformParams::new(square()).with_smoothing(0).build(&viewport).unwrap();
        let smooth = FreeformParams::new(square()).with_smoothing(3).build(&viewport).unwrap();
        assert!(smooth.total_length() < sharp.total_length());
        assert!(smooth.is_closed());
    }

    #[test]
    fn open_curves_need_two_points() {
        let viewport = Viewport::new(100.0, 100.0);
        let err = FreeformParams::new(vec![dvec2(0.5, 0.5)])
            .with_closed(false)
            .build(&viewport)
            .unwrap_err();
        assert_eq!(err, ShapeError::TooFewPoints { needed: 2, got: 1 });

        let line = FreeformParams::new(vec![dvec2(0.0, 0.5), dvec2(1.0, 0.5)])
            .with_closed(false)
            .build(&viewport)
            .unwrap();
        assert_eq!(line.total_length(), 100.0);
    }

    #[test]
    fn smoothing_passes_are_capped() {
        let viewport = Viewport::new(100.0, 100.0);
        let triangle = vec![dvec2(0.2, 0.8), dvec2(0.5, 0.2), dvec2(0.8, 0.8)];

        let most = FreeformParams::new(triangle.clone())
            .with_smoothing(defaults::MAX_FREEFORM_SMOOTHING)
            .build(&viewport)
            .unwrap();
        // Three points doubled eight times, plus the move and the close.
        assert_eq!(most.segments().len(), 3 * 256 + 1);

        for passes in [defaults::MAX_FREEFORM_SMOOTHING + 1, 30, u8::MAX] {
            let err = FreeformParams::new(triangle.clone())
                .with_smoothing(passes)
                .build(&viewport)
                .unwrap_err();
            assert!(matches!(
                err,
                ShapeError::InvalidParameter {
                    field: "smoothing_iterations",
                    ..
                }
            ));
        }
    }

    #[test]
    fn closed_curves_need_three_points() {
        let err = FreeformParams::new(vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0)])
            .build(&Viewport::new(100.0, 100.0))
            .unwrap_err();
        assert_eq!(err, ShapeError::TooFewPoints { needed: 3, got: 2 });
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let mut points = square();
        points[2].y = f64::NAN;
        let err = FreeformParams::new(points)
            .build(&Viewport::new(100.0, 100.0))
            .unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter { field: "points", .. }));
    }

    #[test]
    fn travel_follows_winding() {
        assert_eq!(FreeformParams::new(square()).travel(), Travel::Clockwise);
        let mut reversed = square();
        reversed.reverse();
        assert_eq!(FreeformParams::new(reversed).travel(), Travel::CounterClockwise);
        assert_eq!(
            FreeformParams::new(square()).with_closed(false).travel(),
            Travel::Forward
        );
    }
}
