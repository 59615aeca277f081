//! Heart: two half-circle lobes over a pair of cubic flanks.

use std::f64::consts::{PI, TAU};

use glam::dvec2;

use crate::errors::ShapeError;
use crate::geometry::{Path, PathBuilder};

use super::{Anchor, ShapeGenerator, Travel, Viewport, check_positive, defaults, finish};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartParams {
    /// Width and height as a fraction of the viewport's shorter side.
    pub size: f64,
}

impl Default for HeartParams {
    fn default() -> Self {
        Self {
            size: defaults::HEART_SIZE,
        }
    }
}

impl HeartParams {
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

impl ShapeGenerator for HeartParams {
    /// Starts at the bottom point, climbs the left flank, crosses both lobes
    /// and comes back down the right flank.
    fn build(&self, viewport: &Viewport) -> Result<Path, ShapeError> {
        viewport.validate()?;
        let s = check_positive("size", self.size)? * viewport.min_side();
        let r = s / 4.0;
        let c = viewport.center();

        // Lobe centres sit a quarter down from the top; the point is at the bottom.
        let lobe_y = c.y - s / 4.0;
        let left_lobe = dvec2(c.x - r, lobe_y);
        let right_lobe = dvec2(c.x + r, lobe_y);
        let tip = dvec2(c.x, c.y + s / 2.0);

        let mut builder = PathBuilder::new();
        builder.move_to(tip);
        builder.cubic_to(
            dvec2(c.x - 0.6 * r, tip.y - 0.8 * r),
            dvec2(c.x - 2.0 * r, lobe_y + 1.2 * r),
            dvec2(c.x - 2.0 * r, lobe_y),
        );
        builder.arc(left_lobe, r, PI, TAU, true)?;
        builder.arc(right_lobe, r, PI, TAU, true)?;
        builder.cubic_to(
            dvec2(c.x + 2.0 * r, lobe_y + 1.2 * r),
            dvec2(c.x + 0.6 * r, tip.y - 0.8 * r),
            tip,
        );
        builder.close();
        finish(self.name(), builder)
    }

    fn anchor(&self) -> Anchor {
        Anchor::HALF
    }

    fn travel(&self) -> Travel {
        Travel::Clockwise
    }

    fn name(&self) -> &'static str {
        "heart"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PathSegment;

    #[test]
    fn heart_is_closed_and_symmetric() {
        let viewport = Viewport::new(200.0, 200.0);
        let path = HeartParams::default().build(&viewport).unwrap();
        assert!(path.is_closed());
        let bb = path.bounding_box();
        assert!((bb.center().x - 100.0).abs() < 1e-9);
        assert!((bb.width() - 160.0).abs() < 1e-9);
    }

    #[test]
    fn anchor_is_the_dip_between_lobes() {
        let viewport = Viewport::new(200.0, 200.0);
        let params = HeartParams::default();
        let path = params.build(&viewport).unwrap();
        let dip = path.point_at_percent(params.anchor().fraction()).unwrap();
        // Lobe centres at y = 100 - 40.
        assert!((dip.position - dvec2(100.0, 60.0)).length() < 1e-6);
    }

    #[test]
    fn lobes_join_the_flanks_without_gaps() {
        let path = HeartParams::default().build(&Viewport::new(100.0, 100.0)).unwrap();
        // Only curves between the move and the close: no straight joins.
        let lines = path
            .segments()
            .iter()
            .filter(|s| matches!(s, PathSegment::LineTo(_)))
            .count();
        assert_eq!(lines, 0);
    }
}
