//! Default shape parameters.
//!
//! Fractions are relative to the viewport (or its shorter side, per shape);
//! radii in path units; angles in radians.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_8, PI};

pub const CIRCLE_DIAMETER: f64 = 0.8;

pub const ELLIPSE_WIDTH: f64 = 0.85;
pub const ELLIPSE_HEIGHT: f64 = 0.55;

pub const RECT_WIDTH: f64 = 0.8;
pub const RECT_HEIGHT: f64 = 0.6;
pub const RECT_CORNER_RADIUS: f64 = 0.0;

pub const POLYGON_SIDES: u32 = 5;
pub const POLYGON_SIZE: f64 = 0.8;
/// Vertex 0 at the top.
pub const POLYGON_ROTATION: f64 = -FRAC_PI_2;

pub const STAR_POINTS: u32 = 5;
pub const STAR_INNER_RATIO: f64 = 0.5;
pub const STAR_SIZE: f64 = 0.8;

pub const TRIANGLE_SIZE: f64 = 0.8;
pub const TRIANGLE_CORNER_RADIUS: f64 = 20.0;

pub const HEART_SIZE: f64 = 0.8;

pub const INFINITY_SIZE: f64 = 0.9;

pub const SPIRAL_START_RADIUS: f64 = 0.05;
pub const SPIRAL_LOOP_GAP: f64 = 0.2;
pub const SPIRAL_START_THETA: f64 = 0.0;
/// Three full turns.
pub const SPIRAL_END_THETA: f64 = 6.0 * PI;
pub const SPIRAL_THETA_STEP: f64 = FRAC_PI_8;
/// Upper bound on spiral samples; a tiny step over a huge range is rejected.
pub const MAX_SPIRAL_STEPS: usize = 100_000;

pub const FREEFORM_SMOOTHING: u8 = 2;
/// Each smoothing pass doubles the point count.
pub const MAX_FREEFORM_SMOOTHING: u8 = 8;

pub const LINE_LENGTH: f64 = 0.8;
