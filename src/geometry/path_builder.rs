//! Incremental construction of paths.
//!
//! [`PathBuilder`] tracks the pen position and the start of the open subpath,
//! the same two pieces of state the walker keeps, so arcs and tangent joins
//! can connect themselves to whatever was drawn before.
//!
//! # Key Concepts
//!
//! - **Implicit move**: drawing with no current point starts a subpath there.
//! - **Arc joins**: `arc` and `arc_to_tangent` draw a straight line from the
//!   pen to the start of the arc when the two differ.
//! - **Angles**: radians, increasing clockwise on screen (y grows downward).
//!   Circular arcs become cubic Béziers of at most a quarter turn each.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DVec2, dvec2};

use crate::errors::PathError;
use crate::types::{Point, is_finite_point, polar};

use super::path::Path;
use super::segment::PathSegment;

/// Control-point distance for a quarter-circle cubic, as a fraction of the
/// radius.
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Points closer than this are treated as the same pen position.
const JOIN_EPSILON: f64 = 1e-9;

/// Builder for [`Path`]s.
///
/// # Example
///
/// ```
/// use glam::dvec2;
/// use pathtext::geometry::PathBuilder;
///
/// let mut builder = PathBuilder::new();
/// builder.move_to(dvec2(0.0, 0.0));
/// builder.line_to(dvec2(10.0, 0.0));
/// builder.arc_to_tangent(dvec2(20.0, 0.0), dvec2(20.0, 10.0), 5.0);
/// builder.close();
///
/// let path = builder.build().unwrap();
/// assert!(path.total_length() > 0.0);
/// ```
#[derive(Debug, Default, Clone)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,

    /// Pen position; `None` before the first move and after a close.
    current: Option<Point>,

    /// Start of the open subpath, where ClosePath returns to.
    subpath_start: Option<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pen position.
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// Start a new subpath at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.segments.push(PathSegment::MoveTo(p));
        self.current = Some(p);
        self.subpath_start = Some(p);
    }

    /// With no subpath open, drawing to `p` just starts one there.
    /// Returns true when that happened.
    fn ensure_subpath(&mut self, p: Point) -> bool {
        if self.current.is_none() {
            self.move_to(p);
            true
        } else {
            false
        }
    }

    pub fn line_to(&mut self, p: Point) {
        if self.ensure_subpath(p) {
            return;
        }
        self.segments.push(PathSegment::LineTo(p));
        self.current = Some(p);
    }

    pub fn quad_to(&mut self, control: Point, end: Point) {
        if self.ensure_subpath(end) {
            return;
        }
        self.segments.push(PathSegment::QuadCurveTo { control, end });
        self.current = Some(end);
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) {
        if self.ensure_subpath(end) {
            return;
        }
        self.segments.push(PathSegment::CubicCurveTo {
            control1,
            control2,
            end,
        });
        self.current = Some(end);
    }

    /// Close the open subpath. A no-op when nothing is open.
    pub fn close(&mut self) {
        if self.current.is_some() {
            self.segments.push(PathSegment::ClosePath);
        }
        self.current = None;
        self.subpath_start = None;
    }

    /// Line from the pen to `p` unless the pen is already there; starts a
    /// subpath at `p` when nothing is open.
    fn join_to(&mut self, p: Point) {
        match self.current {
            None => self.move_to(p),
            Some(c) if c.distance(p) > JOIN_EPSILON => self.line_to(p),
            Some(_) => {}
        }
    }

    /// Circular arc from `start_angle` to `end_angle`.
    ///
    /// `clockwise` is on-screen clockwise, i.e. increasing angle. The sweep is
    /// taken modulo a full turn in the requested direction, so an arc never
    /// wraps more than once and `arc(c, r, 0.0, TAU, true)` draws a full
    /// circle. A NaN or infinite center, radius or angle is rejected.
    pub fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Result<(), PathError> {
        let inputs_finite = is_finite_point(center)
            && radius.is_finite()
            && start_angle.is_finite()
            && end_angle.is_finite();
        let raw = end_angle - start_angle;
        if !(inputs_finite && raw.is_finite()) {
            return Err(PathError::NonFinite {
                index: self.segments.len(),
            });
        }
        let sweep = if clockwise {
            one_turn(raw)
        } else {
            -one_turn(-raw)
        };
        self.arc_sweep(center, radius, start_angle, sweep);
        Ok(())
    }

    /// Arc of signed `sweep` radians starting at `start_angle`.
    fn arc_sweep(&mut self, center: Point, radius: f64, start_angle: f64, sweep: f64) {
        self.join_to(polar(center, radius, start_angle));
        if sweep == 0.0 || radius <= 0.0 {
            return;
        }

        let pieces = (sweep.abs() / FRAC_PI_2 - 1e-9).ceil().max(1.0) as usize;
        let step = sweep / pieces as f64;
        let k = 4.0 / 3.0 * (step / 4.0).tan() * radius;

        let mut a0 = start_angle;
        for i in 1..=pieces {
            let a1 = if i == pieces {
                start_angle + sweep
            } else {
                start_angle + step * i as f64
            };
            let p0 = polar(center, radius, a0);
            let p3 = polar(center, radius, a1);
            // d/dθ of the circle point, scaled by the control distance.
            let c1 = p0 + dvec2(-a0.sin(), a0.cos()) * k;
            let c2 = p3 - dvec2(-a1.sin(), a1.cos()) * k;
            self.cubic_to(c1, c2, p3);
            a0 = a1;
        }
    }

    /// Rounded corner at `tangent1_end`.
    ///
    /// Draws a line from the pen toward `tangent1_end`, stopping where a
    /// circle of `radius` touches both the incoming leg and the leg
    /// `tangent1_end → tangent2_end`, then the arc around that circle. The
    /// pen ends on the second leg. Collinear legs or a non-positive radius
    /// degrade to a plain corner.
    pub fn arc_to_tangent(&mut self, tangent1_end: Point, tangent2_end: Point, radius: f64) {
        let Some(p0) = self.current else {
            self.move_to(tangent1_end);
            return;
        };

        let legs = (p0 - tangent1_end)
            .try_normalize()
            .zip((tangent2_end - tangent1_end).try_normalize());
        let Some((v1, v2)) = legs else {
            self.line_to(tangent1_end);
            return;
        };

        let opening = v1.dot(v2).clamp(-1.0, 1.0).acos();
        if radius <= 0.0 || opening < 1e-9 || PI - opening < 1e-9 {
            self.line_to(tangent1_end);
            return;
        }

        let half = opening / 2.0;
        let tangent_distance = radius / half.tan();
        let arc_start = tangent1_end + v1 * tangent_distance;
        let arc_end = tangent1_end + v2 * tangent_distance;
        let bisector = (v1 + v2).normalize();
        let center = tangent1_end + bisector * (radius / half.sin());

        let start_angle = angle_of(arc_start - center);
        let end_angle = angle_of(arc_end - center);
        let mut sweep = end_angle - start_angle;
        if sweep > PI {
            sweep -= TAU;
        } else if sweep <= -PI {
            sweep += TAU;
        }

        self.join_to(arc_start);
        self.arc_sweep(center, radius, start_angle, sweep);
    }

    /// Closed ellipse inscribed in the box `min..max`, as four cubic
    /// quadrants starting at the rightmost point and running clockwise.
    pub fn ellipse_in_rect(&mut self, min: Point, max: Point) {
        let c = (min + max) * 0.5;
        let rx = (max.x - min.x) * 0.5;
        let ry = (max.y - min.y) * 0.5;
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);

        self.move_to(dvec2(c.x + rx, c.y));
        self.cubic_to(
            dvec2(c.x + rx, c.y + ky),
            dvec2(c.x + kx, c.y + ry),
            dvec2(c.x, c.y + ry),
        );
        self.cubic_to(
            dvec2(c.x - kx, c.y + ry),
            dvec2(c.x - rx, c.y + ky),
            dvec2(c.x - rx, c.y),
        );
        self.cubic_to(
            dvec2(c.x - rx, c.y - ky),
            dvec2(c.x - kx, c.y - ry),
            dvec2(c.x, c.y - ry),
        );
        self.cubic_to(
            dvec2(c.x + kx, c.y - ry),
            dvec2(c.x + rx, c.y - ky),
            dvec2(c.x + rx, c.y),
        );
        self.close();
    }

    /// Straight edges through `points`, optionally closed.
    pub fn polyline(&mut self, points: &[Point], closed: bool) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(*first);
        for p in rest {
            self.line_to(*p);
        }
        if closed {
            self.close();
        }
    }

    /// Number of segments written so far.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Validate and measure the finished path.
    pub fn build(self) -> Result<Path, PathError> {
        Path::new(self.segments)
    }
}

/// Positive sweep equivalent to `raw` within `[0, TAU]`. A positive whole
/// number of turns is a full turn; zero and negative whole turns are empty.
fn one_turn(raw: f64) -> f64 {
    let sweep = raw.rem_euclid(TAU);
    if sweep >= TAU {
        0.0
    } else if sweep == 0.0 && raw > 0.0 {
        TAU
    } else {
        sweep
    }
}

fn angle_of(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        const EPSILON: f64 = 1e-9;
        assert!(
            (actual - expected).length() < EPSILON,
            "point mismatch: {actual:?} != {expected:?}"
        );
    }

    #[test]
    fn line_without_move_starts_subpath() {
        let mut builder = PathBuilder::new();
        builder.line_to(dvec2(1.0, 2.0));
        builder.line_to(dvec2(4.0, 6.0));
        let path = builder.build().unwrap();
        assert_eq!(path.segments()[0], PathSegment::MoveTo(dvec2(1.0, 2.0)));
        assert_eq!(path.total_length(), 5.0);
    }

    #[test]
    fn close_resets_pen() {
        let mut builder = PathBuilder::new();
        builder.polyline(&[dvec2(0.0, 0.0), dvec2(3.0, 0.0), dvec2(3.0, 4.0)], true);
        assert_eq!(builder.current_point(), None);
        let path = builder.build().unwrap();
        assert!(path.is_closed());
        assert_eq!(path.total_length(), 12.0);
    }

    #[test]
    fn close_with_nothing_open_is_ignored() {
        let mut builder = PathBuilder::new();
        builder.close();
        assert!(builder.is_empty());
    }

    #[test]
    fn full_circle_arc() {
        let mut builder = PathBuilder::new();
        builder.arc(dvec2(0.0, 0.0), 10.0, 0.0, TAU, true).unwrap();
        // Initial move plus four quarter cubics.
        assert_eq!(builder.len(), 5);
        let path = builder.build().unwrap();
        assert!((path.total_length() - TAU * 10.0).abs() < 0.05);
    }

    #[test]
    fn clockwise_arc_from_left_goes_over_the_top() {
        // From the left point, clockwise on screen goes over the top.
        let mut builder = PathBuilder::new();
        builder.arc(dvec2(0.0, 0.0), 10.0, PI, TAU, true).unwrap();
        let path = builder.build().unwrap();
        let mid = path.point_at_percent(0.5).unwrap();
        assert_point_eq(mid.position, dvec2(0.0, -10.0));
    }

    #[test]
    fn counter_clockwise_arc_wraps_the_other_way() {
        let mut builder = PathBuilder::new();
        builder.arc(dvec2(0.0, 0.0), 10.0, PI, TAU, false).unwrap();
        let path = builder.build().unwrap();
        let mid = path.point_at_percent(0.5).unwrap();
        assert_point_eq(mid.position, dvec2(0.0, 10.0));
    }

    #[test]
    fn arc_joins_from_current_point() {
        let mut builder = PathBuilder::new();
        builder.move_to(dvec2(-20.0, 0.0));
        builder.arc(dvec2(0.0, 0.0), 10.0, PI, TAU, true).unwrap();
        let path = builder.build().unwrap();
        assert!(matches!(path.segments()[1], PathSegment::LineTo(_)));
        assert_point_eq(path.segments()[1].end_point().unwrap(), dvec2(-10.0, 0.0));
        assert_eq!(path.segments().len(), 4);
    }

    #[test]
    fn huge_angles_wrap_to_one_turn() {
        let mut builder = PathBuilder::new();
        builder.arc(dvec2(0.0, 0.0), 10.0, 1.0e17, 0.0, true).unwrap();
        // At most a full turn: the move plus four quarter cubics.
        assert!(builder.len() <= 5);
        let path = builder.build().unwrap();
        assert!(path.total_length() <= TAU * 10.0 + 0.05);

        let mut builder = PathBuilder::new();
        builder.arc(dvec2(0.0, 0.0), 10.0, 0.0, -TAU, false).unwrap();
        let path = builder.build().unwrap();
        assert!((path.total_length() - TAU * 10.0).abs() < 0.05);

        let mut builder = PathBuilder::new();
        builder.arc(dvec2(0.0, 0.0), 10.0, 0.0, -TAU, true).unwrap();
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn non_finite_arc_input_is_rejected() {
        let mut builder = PathBuilder::new();
        let err = builder.arc(dvec2(0.0, 0.0), 10.0, f64::NAN, 0.0, true).unwrap_err();
        assert_eq!(err, PathError::NonFinite { index: 0 });
        assert!(builder.is_empty());

        builder.move_to(dvec2(1.0, 1.0));
        assert!(builder.arc(dvec2(0.0, 0.0), f64::INFINITY, 0.0, PI, true).is_err());
        assert!(builder.arc(dvec2(0.0, 0.0), 1.0, 0.0, f64::NEG_INFINITY, false).is_err());
        assert!(builder.arc(dvec2(f64::NAN, 0.0), 1.0, 0.0, PI, true).is_err());
        assert!(builder.arc(dvec2(0.0, 0.0), 1.0, -f64::MAX, f64::MAX, true).is_err());
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn tangent_arc_rounds_a_right_angle() {
        let mut builder = PathBuilder::new();
        builder.move_to(dvec2(0.0, 0.0));
        builder.arc_to_tangent(dvec2(10.0, 0.0), dvec2(10.0, 10.0), 2.0);
        builder.line_to(dvec2(10.0, 10.0));
        let path = builder.build().unwrap();

        // Straight run to x = 8, a quarter circle of radius 2, then down to y = 10.
        assert!(matches!(path.segments()[1], PathSegment::LineTo(_)));
        assert_point_eq(path.segments()[1].end_point().unwrap(), dvec2(8.0, 0.0));
        let expected = 8.0 + PI + 8.0;
        assert!((path.total_length() - expected).abs() < 1e-3);

        let corner = path.point_at_distance(8.0 + PI / 2.0).unwrap();
        let center = dvec2(8.0, 2.0);
        assert!((corner.position.distance(center) - 2.0).abs() < 1e-3);
    }

    #[test]
    fn tangent_arc_with_zero_radius_is_a_corner() {
        let mut builder = PathBuilder::new();
        builder.move_to(dvec2(0.0, 0.0));
        builder.arc_to_tangent(dvec2(10.0, 0.0), dvec2(10.0, 10.0), 0.0);
        let path = builder.build().unwrap();
        assert_eq!(path.segments()[1], PathSegment::LineTo(dvec2(10.0, 0.0)));
    }

    #[test]
    fn tangent_arc_on_collinear_points_is_a_line() {
        let mut builder = PathBuilder::new();
        builder.move_to(dvec2(0.0, 0.0));
        builder.arc_to_tangent(dvec2(5.0, 0.0), dvec2(10.0, 0.0), 3.0);
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn ellipse_starts_right_and_runs_clockwise() {
        let mut builder = PathBuilder::new();
        builder.ellipse_in_rect(dvec2(0.0, 0.0), dvec2(20.0, 10.0));
        let path = builder.build().unwrap();
        assert_eq!(path.segments()[0], PathSegment::MoveTo(dvec2(20.0, 5.0)));
        // A quarter of the way round is the bottom of the ellipse (y-down).
        let quarter = path.segments()[1].end_point().unwrap();
        assert_point_eq(quarter, dvec2(10.0, 10.0));
        assert!(path.is_closed());
    }
}
