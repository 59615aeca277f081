//! Path geometry: segments, measured paths, construction helpers.

pub mod intersect;
pub mod path;
pub mod path_builder;
pub mod segment;
pub mod smoothing;

pub use intersect::{Intersection, line_intersection};
pub use path::{Path, PathPoint};
pub use path_builder::{KAPPA, PathBuilder};
pub use segment::{BEZIER_LENGTH_STEPS, PathSegment, SegmentGeometry};
pub use smoothing::chaikin;
