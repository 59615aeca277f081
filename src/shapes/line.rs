//! Straight line through the viewport centre.

use glam::dvec2;

use crate::errors::ShapeError;
use crate::geometry::{Path, PathBuilder};

use super::{Anchor, ShapeGenerator, Travel, Viewport, check_positive, defaults, finish};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineOrientation {
    #[default]
    Horizontal,
    Vertical,
    /// Bottom-left to top-right.
    DiagonalUp,
    /// Top-left to bottom-right.
    DiagonalDown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParams {
    /// Fraction of the viewport extent along the line's direction.
    pub length_fraction: f64,
    pub orientation: LineOrientation,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            length_fraction: defaults::LINE_LENGTH,
            orientation: LineOrientation::default(),
        }
    }
}

impl LineParams {
    pub fn with_length(mut self, length_fraction: f64) -> Self {
        self.length_fraction = length_fraction;
        self
    }

    pub fn with_orientation(mut self, orientation: LineOrientation) -> Self {
        self.orientation = orientation;
        self
    }
}

impl ShapeGenerator for LineParams {
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        viewport.validate()?;
        let f = check_positive("length_fraction", self.length_fraction)?;
        let half = match self.orientation {
            LineOrientation::Horizontal => dvec2(viewport.width, 0.0),
            LineOrientation::Vertical => dvec2(0.0, viewport.height),
            LineOrientation::DiagonalUp => dvec2(viewport.width, -viewport.height),
            LineOrientation::DiagonalDown => dvec2(viewport.width, viewport.height),
        } * (f / 2.0);

        let c = viewport.center();
        let mut builder = PathBuilder::new();
        builder.move_to(c - half);
        builder.line_to(c + half);
        finish(self.name(), builder)
    }

    fn anchor(&self) -> Anchor {
        Anchor::HALF
    }

    fn travel(&self) -> Travel {
        Travel::Forward
    }

    fn name(&self) -> &'static str {
        "line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_runs_left_to_right() {
        let path = LineParams::default().build(&Viewport::new(200.0, 100.0)).unwrap();
        assert_eq!(path.total_length(), 160.0);
        assert_eq!(path.point_at_distance(0.0).unwrap().position, dvec2(20.0, 50.0));
    }

    #[test]
    fn vertical_runs_top_to_bottom() {
        let path = LineParams::default()
            .with_orientation(LineOrientation::Vertical)
            .with_length(0.5)
            .build(&Viewport::new(200.0, 100.0))
            .unwrap();
        assert_eq!(path.total_length(), 50.0);
        assert_eq!(path.point_at_distance(0.0).unwrap().position, dvec2(100.0, 25.0));
    }

    #[test]
    fn diagonals_follow_the_viewport_corners() {
        let viewport = Viewport::new(300.0, 400.0);
        let up = LineParams::default()
            .with_orientation(LineOrientation::DiagonalUp)
            .with_length(1.0)
            .build(&viewport)
            .unwrap();
        assert_eq!(up.total_length(), 500.0);
        assert_eq!(up.point_at_distance(0.0).unwrap().position, dvec2(0.0, 400.0));

        let down = LineParams::default()
            .with_orientation(LineOrientation::DiagonalDown)
            .with_length(1.0)
            .build(&viewport)
            .unwrap();
        assert_eq!(down.point_at_distance(0.0).unwrap().position, dvec2(0.0, 0.0));
    }
}
