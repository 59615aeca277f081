//! Paths and the path walker.
//!
//! A [`Path`] is validated and measured once, when it is built. Distance
//! queries then binary-search the cached start distances instead of
//! re-measuring every segment.

use glam::DVec2;

use crate::errors::PathError;
use crate::types::{BBox, Point, is_finite_point};

use super::segment::{MeasuredSegment, PathSegment, SegmentGeometry};

/// Relative slack allowed when a query lands a hair past the end of the path.
const END_TOLERANCE: f64 = 1e-9;

/// Position and direction at a point along a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub position: Point,
    /// Direction of travel, radians from +x (clockwise on screen).
    pub tangent_angle: f64,
    /// Unit normal on the visual "up" side of travel.
    pub normal: DVec2,
}

/// A drawable piece of the path with its distance from the path start.
#[derive(Debug, Clone, PartialEq)]
struct Span {
    /// Index of the segment that produced this span.
    segment_index: usize,
    start_distance: f64,
    measured: MeasuredSegment,
}

/// An immutable sequence of path segments with cached arc length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
    spans: Vec<Span>,
    length: f64,
    subpaths: usize,
    closed: bool,
}

impl Path {
    /// Validate and measure a segment list.
    pub fn new(segments: Vec<PathSegment>) -> Result<Path, PathError> {
        let mut spans = Vec::new();
        let mut accumulated = 0.0;
        // Pen position, and the MoveTo point of the open subpath (if any).
        let mut current: Option<Point> = None;
        let mut subpath_start: Option<Point> = None;
        let mut subpaths = 0;
        let mut all_closed = true;

        for (index, segment) in segments.iter().enumerate() {
            if segment.points().any(|p| !is_finite_point(p)) {
                return Err(PathError::NonFinite { index });
            }

            let geometry = match *segment {
                PathSegment::MoveTo(p) => {
                    if subpath_start.is_some() && current.is_some() {
                        // Previous subpath ended without ClosePath.
                        all_closed = false;
                    }
                    current = Some(p);
                    subpath_start = Some(p);
                    subpaths += 1;
                    continue;
                }
                PathSegment::ClosePath => {
                    let (Some(from), Some(to)) = (current, subpath_start) else {
                        return Err(PathError::MissingMoveTo { index });
                    };
                    current = None;
                    subpath_start = None;
                    SegmentGeometry::Line { from, to }
                }
                PathSegment::LineTo(to) => {
                    let from = current.ok_or(PathError::MissingMoveTo { index })?;
                    current = Some(to);
                    SegmentGeometry::Line { from, to }
                }
                PathSegment::QuadCurveTo { control, end } => {
                    let from = current.ok_or(PathError::MissingMoveTo { index })?;
                    current = Some(end);
                    SegmentGeometry::Quad {
                        from,
                        control,
                        to: end,
                    }
                }
                PathSegment::CubicCurveTo {
                    control1,
                    control2,
                    end,
                } => {
                    let from = current.ok_or(PathError::MissingMoveTo { index })?;
                    current = Some(end);
                    SegmentGeometry::Cubic {
                        from,
                        control1,
                        control2,
                        to: end,
                    }
                }
            };

            let measured = MeasuredSegment::new(geometry);
            let length = measured.length;
            spans.push(Span {
                segment_index: index,
                start_distance: accumulated,
                measured,
            });
            accumulated += length;
        }

        if subpath_start.is_some() {
            all_closed = false;
        }

        Ok(Path {
            segments,
            spans,
            length: accumulated,
            subpaths,
            closed: subpaths > 0 && all_closed,
        })
    }

    /// The segments as written.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total arc length of every drawn segment. MoveTo gaps do not count.
    pub fn total_length(&self) -> f64 {
        self.length
    }

    /// Number of subpaths (MoveTo segments).
    pub fn subpath_count(&self) -> usize {
        self.subpaths
    }

    /// True when every subpath ends with ClosePath.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Bounding box of every stored point, control points included.
    ///
    /// Bézier curves lie inside the hull of their control points, so every
    /// point on the path is inside this box.
    pub fn bounding_box(&self) -> BBox {
        BBox::from_points(self.segments.iter().flat_map(|s| s.points()))
    }

    /// Position and tangent at arc length `distance` from the start.
    ///
    /// Returns `None` when the distance is negative, past the end, or the path
    /// has no drawable length. Callers that animate must wrap the distance
    /// into `[0, total_length]` first.
    pub fn point_at_distance(&self, distance: f64) -> Option<PathPoint> {
        if !distance.is_finite() || distance < 0.0 || self.length <= 0.0 {
            return None;
        }
        let slack = END_TOLERANCE * self.length.max(1.0);
        if distance > self.length + slack {
            return None;
        }
        let distance = distance.min(self.length);

        // First span whose end reaches the target; zero-length spans never win.
        let first = self
            .spans
            .partition_point(|s| s.start_distance + s.measured.length < distance);
        let span = self.spans[first..]
            .iter()
            .find(|s| s.measured.length > 0.0)
            .or_else(|| self.spans.iter().rev().find(|s| s.measured.length > 0.0))?;

        let local = distance - span.start_distance;
        let t = span.measured.t_at_length(local);
        let geometry = &span.measured.geometry;
        Some(PathPoint {
            position: geometry.point_at(t),
            tangent_angle: geometry.tangent_angle(t),
            normal: geometry.normal_at(t),
        })
    }

    /// Position and tangent at `percent ∈ [0, 1]` of the total length.
    pub fn point_at_percent(&self, percent: f64) -> Option<PathPoint> {
        if !(0.0..=1.0).contains(&percent) {
            return None;
        }
        self.point_at_distance(percent * self.length)
    }

    /// Index of the segment drawn at `distance`, for debug overlays.
    pub fn segment_index_at(&self, distance: f64) -> Option<usize> {
        if !distance.is_finite() || distance < 0.0 || distance > self.length {
            return None;
        }
        let first = self
            .spans
            .partition_point(|s| s.start_distance + s.measured.length < distance);
        self.spans[first..]
            .iter()
            .find(|s| s.measured.length > 0.0)
            .map(|s| s.segment_index)
    }
}
