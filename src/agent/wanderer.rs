//! Random walk with timed direction changes and boundary reflection

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::Vec2;

/// Drifts in a straight line, redrawing its direction when a countdown
/// expires; canvas edges reflect it back inward
///
/// The direction timer and the boundary bounce are independent: a tick
/// may redraw the direction, flip a component against an edge, both,
/// or neither.
#[derive(Debug)]
pub struct Wanderer {
    direction: Vec2,
    time_left: f64,
    interval: f64,
    width: f64,
    height: f64,
    rng: ChaCha8Rng,
}

impl Wanderer {
    /// `width`/`height` are the canvas dimensions the walk is confined to
    pub fn new(interval: f64, width: u16, height: u16, mut rng: ChaCha8Rng) -> Self {
        let direction = random_direction(&mut rng);
        Self {
            direction,
            time_left: interval,
            interval,
            width: width as f64,
            height: height as f64,
            rng,
        }
    }

    /// Current unit direction vector
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub(crate) fn step(&mut self, pos: &mut Vec2, velocity: f64, dt: f64) {
        self.time_left -= dt;
        if self.time_left <= 0.0 {
            self.direction = random_direction(&mut self.rng);
            self.time_left = self.interval;
        }

        pos.x += self.direction.x * velocity * dt;
        pos.y += self.direction.y * velocity * dt;

        // Mirror-bounce: pin to the nearest in-bounds edge and flip the
        // offending component so the next tick heads back inward.
        if pos.x < 0.0 {
            pos.x = 0.0;
            self.direction.x = -self.direction.x;
        }
        if pos.y < 0.0 {
            pos.y = 0.0;
            self.direction.y = -self.direction.y;
        }
        if pos.x >= self.width {
            pos.x = self.width - 1.0;
            self.direction.x = -self.direction.x;
        }
        if pos.y >= self.height {
            pos.y = self.height - 1.0;
            self.direction.y = -self.direction.y;
        }
    }
}

/// Uniform random unit vector, angle over [0, 2pi)
fn random_direction(rng: &mut ChaCha8Rng) -> Vec2 {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    Vec2::new(angle.cos(), angle.sin())
}
