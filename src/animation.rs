//! Animation offset driver.
//!
//! Advances a scalar offset once per tick, wrapped into the path's cycle
//! length. The layout engine reads the offset through
//! [`Placement::Animated`](crate::layout::Placement::Animated).

use crate::shapes::Travel;

/// Requested on-screen direction of motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// Sign applied to the velocity so text moves in `direction` on a shape
/// whose path runs in `travel`. Open paths count as clockwise.
pub fn direction_sign(direction: Direction, travel: Travel) -> f64 {
    let path_clockwise = !matches!(travel, Travel::CounterClockwise);
    let want_clockwise = direction == Direction::Clockwise;
    if path_clockwise == want_clockwise { 1.0 } else { -1.0 }
}

/// Offset, direction and speed of a running animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    offset: f64,
    pub direction: Direction,
    /// Path units per tick.
    pub velocity: f64,
    /// Direction of the shape's path; set when the shape changes.
    pub travel: Travel,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(0.0, Direction::Clockwise)
    }
}

impl AnimationState {
    pub fn new(velocity: f64, direction: Direction) -> Self {
        Self {
            offset: 0.0,
            direction,
            velocity,
            travel: Travel::Clockwise,
        }
    }

    pub fn with_travel(mut self, travel: Travel) -> Self {
        self.travel = travel;
        self
    }

    /// Current offset in path units, always in `[0, cycle)`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Advance one tick on a path whose length is `cycle`.
    pub fn tick(&mut self, cycle: f64) -> f64 {
        self.advance(1, cycle)
    }

    /// Advance `ticks` ticks at once.
    ///
    /// A non-positive or non-finite cycle (or velocity) parks the offset at 0.
    pub fn advance(&mut self, ticks: u32, cycle: f64) -> f64 {
        if !(cycle.is_finite() && cycle > 0.0 && self.velocity.is_finite()) {
            self.offset = 0.0;
            return self.offset;
        }
        let step = direction_sign(self.direction, self.travel) * self.velocity;
        let next = (self.offset + step * f64::from(ticks)).rem_euclid(cycle);
        // rem_euclid can round up to exactly `cycle` for tiny negatives.
        self.offset = if next >= cycle { 0.0 } else { next };
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}
