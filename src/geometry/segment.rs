//! Segment kinds, arc length and point/tangent sampling.
//!
//! Quadratic and cubic curves have no closed-form arc length, so their length
//! is the sum of chord lengths over [`BEZIER_LENGTH_STEPS`] uniform parameter
//! steps. Positions are always evaluated directly from the Bernstein form;
//! the chord samples are only used for length and for mapping an arc length
//! back to a curve parameter.

use glam::{DVec2, dvec2};

use crate::types::{Point, lerp};

/// Number of chords used to approximate a curve's length.
pub const BEZIER_LENGTH_STEPS: usize = 100;

/// Parameter offset used for the secant fallback when a curve's derivative
/// vanishes.
const SECANT_DT: f64 = 1e-4;

/// One element of a path, as written by a path builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadCurveTo { control: Point, end: Point },
    CubicCurveTo { control1: Point, control2: Point, end: Point },
    ClosePath,
}

impl PathSegment {
    /// Every point stored in the segment, controls included.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (buf, n): ([Point; 3], usize) = match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => ([p, p, p], 1),
            PathSegment::QuadCurveTo { control, end } => ([control, end, end], 2),
            PathSegment::CubicCurveTo {
                control1,
                control2,
                end,
            } => ([control1, control2, end], 3),
            PathSegment::ClosePath => ([DVec2::ZERO; 3], 0),
        };
        buf.into_iter().take(n)
    }

    /// The point the pen rests on after this segment, if it names one.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::QuadCurveTo { end, .. } | PathSegment::CubicCurveTo { end, .. } => {
                Some(end)
            }
            PathSegment::ClosePath => None,
        }
    }
}

/// A drawable segment with its start point resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentGeometry {
    Line {
        from: Point,
        to: Point,
    },
    Quad {
        from: Point,
        control: Point,
        to: Point,
    },
    Cubic {
        from: Point,
        control1: Point,
        control2: Point,
        to: Point,
    },
}

impl SegmentGeometry {
    pub fn start(&self) -> Point {
        match *self {
            SegmentGeometry::Line { from, .. }
            | SegmentGeometry::Quad { from, .. }
            | SegmentGeometry::Cubic { from, .. } => from,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            SegmentGeometry::Line { to, .. }
            | SegmentGeometry::Quad { to, .. }
            | SegmentGeometry::Cubic { to, .. } => to,
        }
    }

    pub fn is_curve(&self) -> bool {
        !matches!(self, SegmentGeometry::Line { .. })
    }

    /// Point at parameter `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        match *self {
            SegmentGeometry::Line { from, to } => lerp(from, to, t),
            SegmentGeometry::Quad { from, control, to } => {
                let u = 1.0 - t;
                from * (u * u) + control * (2.0 * u * t) + to * (t * t)
            }
            SegmentGeometry::Cubic {
                from,
                control1,
                control2,
                to,
            } => {
                let u = 1.0 - t;
                from * (u * u * u)
                    + control1 * (3.0 * u * u * t)
                    + control2 * (3.0 * u * t * t)
                    + to * (t * t * t)
            }
        }
    }

    /// First derivative with respect to `t`.
    pub fn derivative_at(&self, t: f64) -> DVec2 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            SegmentGeometry::Line { from, to } => to - from,
            SegmentGeometry::Quad { from, control, to } => {
                let u = 1.0 - t;
                (control - from) * (2.0 * u) + (to - control) * (2.0 * t)
            }
            SegmentGeometry::Cubic {
                from,
                control1,
                control2,
                to,
            } => {
                let u = 1.0 - t;
                (control1 - from) * (3.0 * u * u)
                    + (control2 - control1) * (6.0 * u * t)
                    + (to - control2) * (3.0 * t * t)
            }
        }
    }

    /// Unit tangent at `t`.
    ///
    /// Falls back to a secant over nearby samples when the derivative
    /// vanishes, then to the chord. A zero-length segment yields +x.
    pub fn tangent_at(&self, t: f64) -> DVec2 {
        let d = self.derivative_at(t);
        if let Some(unit) = d.try_normalize() {
            return unit;
        }
        let lo = (t - SECANT_DT).max(0.0);
        let hi = (t + SECANT_DT).min(1.0);
        if let Some(unit) = (self.point_at(hi) - self.point_at(lo)).try_normalize() {
            return unit;
        }
        (self.end() - self.start()).try_normalize().unwrap_or(DVec2::X)
    }

    /// Direction of travel at `t` as an angle in radians.
    pub fn tangent_angle(&self, t: f64) -> f64 {
        let tan = self.tangent_at(t);
        tan.y.atan2(tan.x)
    }

    /// Unit normal on the visual "up" side of travel (tangent turned −90° on
    /// screen).
    pub fn normal_at(&self, t: f64) -> DVec2 {
        let tan = self.tangent_at(t);
        dvec2(tan.y, -tan.x)
    }

    /// Arc length of the whole segment.
    pub fn length(&self) -> f64 {
        match *self {
            SegmentGeometry::Line { from, to } => from.distance(to),
            _ => {
                let mut total = 0.0;
                let mut prev = self.start();
                for i in 1..=BEZIER_LENGTH_STEPS {
                    let p = self.point_at(i as f64 / BEZIER_LENGTH_STEPS as f64);
                    total += prev.distance(p);
                    prev = p;
                }
                total
            }
        }
    }

    /// Cumulative chord lengths at the `BEZIER_LENGTH_STEPS + 1` uniform
    /// samples; the last entry equals [`length`](Self::length) for curves.
    pub fn chord_table(&self) -> Vec<f64> {
        let mut table = Vec::with_capacity(BEZIER_LENGTH_STEPS + 1);
        table.push(0.0);
        let mut total = 0.0;
        let mut prev = self.start();
        for i in 1..=BEZIER_LENGTH_STEPS {
            let p = self.point_at(i as f64 / BEZIER_LENGTH_STEPS as f64);
            total += prev.distance(p);
            table.push(total);
            prev = p;
        }
        table
    }
}

/// A segment together with the data needed to invert its arc length.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MeasuredSegment {
    pub geometry: SegmentGeometry,
    pub length: f64,
    /// Cumulative chord lengths for curves, empty for lines.
    chords: Vec<f64>,
}

impl MeasuredSegment {
    pub fn new(geometry: SegmentGeometry) -> Self {
        if geometry.is_curve() {
            let chords = geometry.chord_table();
            let length = chords.last().copied().unwrap_or(0.0);
            Self {
                geometry,
                length,
                chords,
            }
        } else {
            Self {
                geometry,
                length: geometry.length(),
                chords: Vec::new(),
            }
        }
    }

    /// Curve parameter at arc length `s` from the segment start.
    pub fn t_at_length(&self, s: f64) -> f64 {
        if self.length <= 0.0 {
            return 0.0;
        }
        let s = s.clamp(0.0, self.length);
        if self.chords.is_empty() {
            return s / self.length;
        }
        // First sample at or beyond `s`; interpolate inside the preceding chord.
        let hi = self.chords.partition_point(|&c| c < s).max(1);
        let lo = hi - 1;
        let span = self.chords[hi] - self.chords[lo];
        let frac = if span > 0.0 {
            (s - self.chords[lo]) / span
        } else {
            0.0
        };
        (lo as f64 + frac) / BEZIER_LENGTH_STEPS as f64
    }
}
