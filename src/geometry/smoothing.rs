//! Chaikin corner cutting for freeform point lists.

use crate::types::{Point, lerp};

/// Apply `iterations` rounds of Chaikin corner cutting.
///
/// Each edge `(p, q)` is replaced by the points at 1/4 and 3/4 along it.
/// Open polylines keep their first and last points; closed ones wrap around.
/// Fewer than three points are returned unchanged.
pub fn chaikin(points: &[Point], closed: bool, iterations: u8) -> Vec<Point> {
    let mut current = points.to_vec();
    if current.len() < 3 {
        return current;
    }
    for _ in 0..iterations {
        current = chaikin_once(&current, closed);
    }
    current
}

fn chaikin_once(points: &[Point], closed: bool) -> Vec<Point> {
    let n = points.len();
    let mut out = Vec::with_capacity(n * 2 + 2);
    if closed {
        for i in 0..n {
            let p = points[i];
            let q = points[(i + 1) % n];
            out.push(lerp(p, q, 0.25));
            out.push(lerp(p, q, 0.75));
        }
    } else {
        out.push(points[0]);
        for pair in points.windows(2) {
            out.push(lerp(pair[0], pair[1], 0.25));
            out.push(lerp(pair[0], pair[1], 0.75));
        }
        out.push(points[n - 1]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn corner() -> Vec<Point> {
        vec![dvec2(0.0, 0.0), dvec2(4.0, 0.0), dvec2(4.0, 4.0)]
    }

    #[test]
    fn zero_iterations_is_identity() {
        assert_eq!(chaikin(&corner(), false, 0), corner());
    }

    #[test]
    fn open_curve_keeps_endpoints() {
        let out = chaikin(&corner(), false, 1);
        assert_eq!(out.len(), 6);
        assert_eq!(out[0], dvec2(0.0, 0.0));
        assert_eq!(out[1], dvec2(1.0, 0.0));
        assert_eq!(out[2], dvec2(3.0, 0.0));
        assert_eq!(out[3], dvec2(4.0, 1.0));
        assert_eq!(out[4], dvec2(4.0, 3.0));
        assert_eq!(out[5], dvec2(4.0, 4.0));
    }

    #[test]
    fn closed_curve_cuts_every_corner() {
        let out = chaikin(&corner(), true, 1);
        assert_eq!(out.len(), 6);
        assert!(!out.contains(&dvec2(4.0, 0.0)));
        // Closing edge (4,4) -> (0,0) is cut too.
        assert_eq!(out[4], dvec2(3.0, 3.0));
        assert_eq!(out[5], dvec2(1.0, 1.0));
    }

    #[test]
    fn short_inputs_pass_through() {
        let two = vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0)];
        assert_eq!(chaikin(&two, false, 3), two);
    }

    #[test]
    fn iterations_double_the_point_count() {
        let out = chaikin(&corner(), true, 3);
        assert_eq!(out.len(), 3 * 8);
    }
}
