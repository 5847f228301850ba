//! Back-and-forth patrol between birth position and a fixed target

use crate::core::types::Vec2;

/// Perpetual patrol: out to `target`, back to birth, repeat
///
/// Arrival snaps onto the endpoint exactly instead of letting floating
/// error accumulate: once remaining distance fits within one tick's
/// travel, position is set to the endpoint and the heading flips.
#[derive(Debug)]
pub struct Oscillator {
    target: Vec2,
    outbound: bool,
}

impl Oscillator {
    pub fn new(target: Vec2) -> Self {
        Self {
            target,
            outbound: true,
        }
    }

    /// True while heading toward the target, false while heading home
    pub fn is_outbound(&self) -> bool {
        self.outbound
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub(crate) fn step(&mut self, pos: &mut Vec2, birth: Vec2, velocity: f64, dt: f64) {
        let goal = if self.outbound { self.target } else { birth };
        let offset = goal - *pos;
        let distance = offset.length();

        if distance <= velocity * dt {
            // Snap-on-arrival, then reverse.
            *pos = goal;
            self.outbound = !self.outbound;
        } else {
            let ratio = velocity * dt / distance;
            *pos = *pos + offset * ratio;
        }
    }
}
