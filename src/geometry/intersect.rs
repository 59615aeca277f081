//! Intersection of two infinite lines.

use crate::types::Point;

/// Outcome of intersecting two lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The lines cross at this point.
    At(Point),
    /// The lines are parallel (or one of them is degenerate).
    Parallel,
}

impl Intersection {
    pub fn point(self) -> Option<Point> {
        match self {
            Intersection::At(p) => Some(p),
            Intersection::Parallel => None,
        }
    }
}

/// Intersect the line through `a1`, `a2` with the line through `b1`, `b2`.
///
/// Uses the determinant form. The parallel threshold scales with both
/// direction lengths so it behaves the same at any zoom level.
pub fn line_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Intersection {
    let da = a2 - a1;
    let db = b2 - b1;
    let det = da.perp_dot(db);
    let scale = da.length() * db.length();
    if scale == 0.0 || det.abs() <= 1e-12 * scale {
        return Intersection::Parallel;
    }
    let t = (b1 - a1).perp_dot(db) / det;
    Intersection::At(a1 + da * t)
}
