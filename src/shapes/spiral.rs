//! Archimedean spiral `r(θ) = a + bθ`, drawn as a chain of quadratic curves.
//!
//! Between two consecutive samples the quadratic's control point is where
//! the spiral's tangent lines at both samples meet, so consecutive pieces
//! share a tangent and the outline is smooth. When those tangents are
//! parallel there is no control point; that step falls back to a straight
//! line and is counted in the build report.

use std::f64::consts::TAU;

use glam::{DVec2, dvec2};

use crate::errors::ShapeError;
use crate::geometry::{Intersection, Path, PathBuilder, line_intersection};
use crate::types::{Point, is_finite_point};

use super::{
    Anchor, ShapeGenerator, Travel, Viewport, check_finite, check_non_negative, defaults,
    finish,
};

/// A remainder smaller than this fraction of a step is folded into the
/// previous step instead of becoming a sliver.
const SLIVER_FRACTION: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    /// Radius at θ = 0, as a fraction of half the viewport's shorter side.
    pub start_radius: f64,
    /// Radial distance between successive turns, same units.
    pub loop_gap: f64,
    pub start_theta: f64,
    pub end_theta: f64,
    /// Sampling step in radians. Its sign must move from start toward end.
    pub theta_step: f64,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            start_radius: defaults::SPIRAL_START_RADIUS,
            loop_gap: defaults::SPIRAL_LOOP_GAP,
            start_theta: defaults::SPIRAL_START_THETA,
            end_theta: defaults::SPIRAL_END_THETA,
            theta_step: defaults::SPIRAL_THETA_STEP,
        }
    }
}

impl SpiralParams {
    pub fn with_start_radius(mut self, start_radius: f64) -> Self {
        self.start_radius = start_radius;
        self
    }

    pub fn with_loop_gap(mut self, loop_gap: f64) -> Self {
        self.loop_gap = loop_gap;
        self
    }

    pub fn with_theta_range(mut self, start_theta: f64, end_theta: f64) -> Self {
        self.start_theta = start_theta;
        self.end_theta = end_theta;
        self
    }

    pub fn with_theta_step(mut self, theta_step: f64) -> Self {
        self.theta_step = theta_step;
        self
    }

    /// Number of samples after the first, validating the angle range.
    fn step_count(&self) -> Result<usize, ShapeError> {
        let step = check_finite("theta_step", self.theta_step)?;
        if step == 0.0 {
            return Err(ShapeError::ZeroThetaStep);
        }
        let start = check_finite("start_theta", self.start_theta)?;
        let end = check_finite("end_theta", self.end_theta)?;
        let span = end - start;
        if span == 0.0 {
            return Err(ShapeError::InvalidParameter {
                field: "end_theta",
                value: end,
                reason: "equals start_theta".into(),
            });
        }
        if span.signum() != step.signum() {
            return Err(ShapeError::InvalidParameter {
                field: "theta_step",
                value: step,
                reason: "moves away from end_theta".into(),
            });
        }
        let steps = (span / step - SLIVER_FRACTION).ceil().max(1.0);
        if steps > defaults::MAX_SPIRAL_STEPS as f64 {
            return Err(ShapeError::InvalidParameter {
                field: "theta_step",
                value: step,
                reason: format!(
                    "needs {steps} samples, more than {}",
                    defaults::MAX_SPIRAL_STEPS
                ),
            });
        }
        Ok(steps as usize)
    }

    /// Build the path and report how many steps had parallel tangents.
    pub fn build_with_report(&self, viewport: &Viewport) -> Result<(Path, usize), ShapeError> {
        viewport.validate()?;
        let steps = self.step_count()?;
        let scale = viewport.min_side() / 2.0;
        let a = check_non_negative("start_radius", self.start_radius)? * scale;
        let b = check_non_negative("loop_gap", self.loop_gap)? * scale / TAU;

        let spiral = Spiral {
            center: viewport.center(),
            a,
            b,
        };

        let mut builder = PathBuilder::new();
        let mut theta0 = self.start_theta;
        let mut p0 = spiral.point(theta0);
        builder.move_to(p0);

        let mut parallel_joins = 0;
        for i in 1..=steps {
            let theta1 = if i == steps {
                self.end_theta
            } else {
                self.start_theta + self.theta_step * i as f64
            };
            let p1 = spiral.point(theta1);
            let t0 = spiral.tangent(theta0);
            let t1 = spiral.tangent(theta1);

            match line_intersection(p0, p0 + t0, p1, p1 + t1) {
                Intersection::At(control) if is_finite_point(control) => {
                    builder.quad_to(control, p1);
                }
                _ => {
                    crate::log::warn!(theta0, theta1, "spiral tangents are parallel, joining with a line");
                    parallel_joins += 1;
                    builder.line_to(p1);
                }
            }
            theta0 = theta1;
            p0 = p1;
        }

        let path = finish(self.name(), builder)?;
        Ok((path, parallel_joins))
    }
}

impl ShapeGenerator for SpiralParams {
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        self.build_with_report(viewport).map(|(path, _)| path)
    }

    fn anchor(&self) -> Anchor {
        Anchor::HALF
    }

    /// Increasing θ turns clockwise on screen.
    fn travel(&self) -> Travel {
        if self.theta_step < 0.0 {
            Travel::CounterClockwise
        } else {
            Travel::Clockwise
        }
    }

    fn name(&self) -> &'static str {
        "spiral"
    }
}

/// The polar curve in path units.
struct Spiral {
    center: Point,
    a: f64,
    b: f64,
}

impl Spiral {
    fn radius(&self, theta: f64) -> f64 {
        self.a + self.b * theta
    }

    fn point(&self, theta: f64) -> Point {
        self.center + dvec2(theta.cos(), theta.sin()) * self.radius(theta)
    }

    /// d/dθ of [`point`](Self::point).
    fn tangent(&self, theta: f64) -> DVec2 {
        let (sin, cos) = theta.sin_cos();
        dvec2(cos, sin) * self.b + dvec2(-sin, cos) * self.radius(theta)
    }
}
