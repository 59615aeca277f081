//! Infinity loop: two lobes of opposite winding joined by S-curves that
//! cross at the centre.

use std::f64::consts::FRAC_PI_2;

use glam::dvec2;

use crate::errors::ShapeError;
use crate::geometry::{Path, PathBuilder};

use super::{Anchor, ShapeGenerator, Travel, Viewport, check_positive, defaults, finish};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfinityParams {
    /// Fraction of the viewport the loop may fill.
    pub size: f64,
}

impl Default for InfinityParams {
    fn default() -> Self {
        Self {
            size: defaults::INFINITY_SIZE,
        }
    }
}

impl InfinityParams {
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

impl ShapeGenerator for InfinityParams {
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        viewport.validate()?;
        let size = check_positive("size", self.size)?;
        // Overall extent is 5r wide and 2r tall.
        let r = size * (viewport.width / 5.0).min(viewport.height / 2.0);
        let c = viewport.center();
        let right = dvec2(c.x + 1.5 * r, c.y);
        let left = dvec2(c.x - 1.5 * r, c.y);

        let mut builder = PathBuilder::new();
        // Top of the right lobe, clockwise round its outer side to the bottom.
        builder.arc(right, r, -FRAC_PI_2, FRAC_PI_2, true)?;
        // Cross to the top of the left lobe.
        builder.cubic_to(
            dvec2(c.x, c.y + r),
            dvec2(c.x, c.y - r),
            dvec2(left.x, c.y - r),
        );
        // Counter-clockwise round the left lobe's outer side.
        builder.arc(left, r, -FRAC_PI_2, FRAC_PI_2, false)?;
        // Cross back to the start.
        builder.cubic_to(
            dvec2(c.x, c.y + r),
            dvec2(c.x, c.y - r),
            dvec2(right.x, c.y - r),
        );
        builder.close();
        finish(self.name(), builder)
    }

    fn anchor(&self) -> Anchor {
        Anchor::START
    }

    fn travel(&self) -> Travel {
        Travel::Clockwise
    }

    fn name(&self) -> &'static str {
        "infinity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn starts_on_top_of_right_lobe() {
        let path = InfinityParams::default()
            .with_size(1.0)
            .build(&Viewport::new(500.0, 300.0))
            .unwrap();
        // r = min(500 / 5, 300 / 2) = 100.
        let start = path.point_at_distance(0.0).unwrap();
        assert!((start.position - dvec2(400.0, 50.0)).length() < 1e-9);
        assert!(start.tangent_angle.abs() < 1e-9);
    }

    #[test]
    fn loop_crosses_the_centre_twice() {
        let viewport = Viewport::new(500.0, 300.0);
        let path = InfinityParams::default().with_size(1.0).build(&viewport).unwrap();
        let c = viewport.center();
        let crossings = (0..=1000)
            .filter_map(|i| path.point_at_percent(f64::from(i) / 1000.0))
            .filter(|p| p.position.distance(c) < 2.0)
            .count();
        assert!(crossings >= 2);
    }

    #[test]
    fn length_exceeds_both_lobes() {
        let path = InfinityParams::default()
            .with_size(1.0)
            .build(&Viewport::new(500.0, 300.0))
            .unwrap();
        // Two half circles plus two crossings longer than their chords.
        let lobes = 2.0 * PI * 100.0;
        let chord = dvec2(300.0, 200.0).length();
        assert!(path.total_length() > lobes + 2.0 * chord);
        assert!(path.is_closed());
    }
}
