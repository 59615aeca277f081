//! Regular polygons and stars.

use std::f64::consts::{PI, TAU};

use crate::errors::ShapeError;
use crate::geometry::{Path, PathBuilder};
use crate::types::{Point, polar};

use super::{
    Anchor, ShapeGenerator, Travel, Viewport, check_finite, check_positive, defaults, finish,
};

/// A regular n-gon inscribed in a circle of `size` × the shorter side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonParams {
    pub sides: u32,
    /// Angle of vertex 0, radians; the default puts it at the top.
    pub rotation: f64,
    pub size: f64,
}

impl Default for PolygonParams {
    fn default() -> Self {
        Self {
            sides: defaults::POLYGON_SIDES,
            rotation: defaults::POLYGON_ROTATION,
            size: defaults::POLYGON_SIZE,
        }
    }
}

impl PolygonParams {
    pub fn hexagon() -> Self {
        Self::default().with_sides(6)
    }

    pub fn octagon() -> Self {
        Self::default().with_sides(8)
    }

    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Vertex positions, clockwise on screen from vertex 0.
    pub fn vertices(&self, viewport: &Viewport) -> Result<Vec<Point>, ShapeError> {
        viewport.validate()?;
        if self.sides < 3 {
            return Err(ShapeError::InvalidParameter {
                field: "sides",
                value: f64::from(self.sides),
                reason: "a polygon needs at least 3 sides".into(),
            });
        }
        let rotation = check_finite("rotation", self.rotation)?;
        let radius = check_positive("size", self.size)? * viewport.min_side() / 2.0;
        let c = viewport.center();
        let n = f64::from(self.sides);
        Ok((0..self.sides)
            .map(|i| polar(c, radius, rotation + TAU * f64::from(i) / n))
            .collect())
    }
}

impl ShapeGenerator for PolygonParams {
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        let vertices = self.vertices(viewport)?;
        let mut builder = PathBuilder::new();
        builder.polyline(&vertices, true);
        finish(self.name(), builder)
    }

    fn anchor(&self) -> Anchor {
        Anchor::START
    }

    fn travel(&self) -> Travel {
        Travel::Clockwise
    }

    fn name(&self) -> &'static str {
        "polygon"
    }
}

/// A star with `points` tips, alternating outer and inner vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarParams {
    pub points: u32,
    /// Inner radius as a fraction of the outer one, in `(0, 1)`.
    pub inner_ratio: f64,
    pub rotation: f64,
    pub size: f64,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            points: defaults::STAR_POINTS,
            inner_ratio: defaults::STAR_INNER_RATIO,
            rotation: defaults::POLYGON_ROTATION,
            size: defaults::STAR_SIZE,
        }
    }
}

impl StarParams {
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn with_inner_ratio(mut self, inner_ratio: f64) -> Self {
        self.inner_ratio = inner_ratio;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

impl ShapeGenerator for StarParams {
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        viewport.validate()?;
        if self.points < 2 {
            return Err(ShapeError::InvalidParameter {
                field: "points",
                value: f64::from(self.points),
                reason: "a star needs at least 2 points".into(),
            });
        }
        let ratio = check_positive("inner_ratio", self.inner_ratio)?;
        if ratio >= 1.0 {
            return Err(ShapeError::InvalidParameter {
                field: "inner_ratio",
                value: ratio,
                reason: "must be below 1".into(),
            });
        }
        let rotation = check_finite("rotation", self.rotation)?;
        let outer = check_positive("size", self.size)? * viewport.min_side() / 2.0;
        let inner = outer * ratio;

        let c = viewport.center();
        let step = PI / f64::from(self.points);
        let vertices: Vec<Point> = (0..self.points * 2)
            .map(|i| {
                let r = if i % 2 == 0 { outer } else { inner };
                polar(c, r, rotation + step * f64::from(i))
            })
            .collect();

        let mut builder = PathBuilder::new();
        builder.polyline(&vertices, true);
        finish(self.name(), builder)
    }

    fn anchor(&self) -> Anchor {
        Anchor::START
    }

    fn travel(&self) -> Travel {
        Travel::Clockwise
    }

    fn name(&self) -> &'static str {
        "star"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn default_polygon_starts_at_the_top() {
        let viewport = Viewport::new(200.0, 200.0);
        let vertices = PolygonParams::default().vertices(&viewport).unwrap();
        assert_eq!(vertices.len(), 5);
        assert!((vertices[0] - dvec2(100.0, 20.0)).length() < 1e-9);
        // Vertex 1 is to the right of vertex 0: clockwise on screen.
        assert!(vertices[1].x > vertices[0].x);
    }

    #[test]
    fn hexagon_perimeter_is_six_radii() {
        let path = PolygonParams::hexagon()
            .with_size(1.0)
            .build(&Viewport::new(100.0, 100.0))
            .unwrap();
        assert!((path.total_length() - 300.0).abs() < 1e-9);
        assert_eq!(path.segments().len(), 7);
    }

    #[test]
    fn too_few_sides_is_rejected() {
        let err = PolygonParams::default()
            .with_sides(2)
            .build(&Viewport::new(100.0, 100.0))
            .unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter { field: "sides", .. }));
    }

    #[test]
    fn star_alternates_radii() {
        let viewport = Viewport::new(100.0, 100.0);
        let path = StarParams::default().with_size(1.0).build(&viewport).unwrap();
        // Move, ten edges, close.
        assert_eq!(path.segments().len(), 11);
        let c = viewport.center();
        let tip = path.segments()[0].end_point().unwrap();
        let valley = path.segments()[1].end_point().unwrap();
        assert!((tip.distance(c) - 50.0).abs() < 1e-9);
        assert!((valley.distance(c) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn star_ratio_must_be_inside_unit_interval() {
        let viewport = Viewport::new(100.0, 100.0);
        for ratio in [0.0, 1.0, 1.5, f64::NAN] {
            let err = StarParams::default()
                .with_inner_ratio(ratio)
                .build(&viewport)
                .unwrap_err();
            assert!(matches!(
                err,
                ShapeError::InvalidParameter { field: "inner_ratio", .. }
            ));
        }
    }
}
