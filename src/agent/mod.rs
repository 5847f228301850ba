//! Simulated agents and their movement behaviors
//!
//! Behaviors are a flat enum, not a trait object: only two exist and new
//! ones slot in as variants without touching worker or render code.

pub mod oscillator;
pub mod wanderer;

pub use oscillator::Oscillator;
pub use wanderer::Wanderer;

use crate::canvas::SharedCanvas;
use crate::core::types::{AgentId, Vec2};

/// Display glyph and color per variant
const OSCILLATOR_GLYPH: char = 'O';
const OSCILLATOR_ATTR: u8 = 11; // bright yellow
const WANDERER_GLYPH: char = 'W';
const WANDERER_ATTR: u8 = 9; // bright red

/// Per-variant movement state
#[derive(Debug)]
pub enum Behavior {
    Oscillator(Oscillator),
    Wanderer(Wanderer),
}

/// One simulated agent: identity, kinematic state, and a behavior
///
/// Mutated only by its own worker's `advance` calls; read by the render
/// thread through `draw`. Never destroyed during a run: `active = false`
/// is the only terminal state, and it makes the agent inert rather than
/// aborting anything.
#[derive(Debug)]
pub struct Agent {
    id: AgentId,
    pos: Vec2,
    birth: Vec2,
    velocity: f64,
    glyph: char,
    attr: u8,
    active: bool,
    behavior: Behavior,
}

impl Agent {
    /// Patrols between its birth position and a fixed target point
    pub fn oscillator(id: AgentId, birth: Vec2, target: Vec2, velocity: f64) -> Self {
        Self {
            id,
            pos: birth,
            birth,
            velocity,
            glyph: OSCILLATOR_GLYPH,
            attr: OSCILLATOR_ATTR,
            active: true,
            behavior: Behavior::Oscillator(Oscillator::new(target)),
        }
    }

    /// Random walk with periodic direction changes and boundary reflection
    pub fn wanderer(id: AgentId, birth: Vec2, velocity: f64, wanderer: Wanderer) -> Self {
        Self {
            id,
            pos: birth,
            birth,
            velocity,
            glyph: WANDERER_GLYPH,
            attr: WANDERER_ATTR,
            active: true,
            behavior: Behavior::Wanderer(wanderer),
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Advance one fixed time step
    ///
    /// Position and mode change purely as a function of current state
    /// and `dt`; an inactive agent does not move.
    pub fn advance(&mut self, dt: f64) {
        if !self.active {
            return;
        }
        match &mut self.behavior {
            Behavior::Oscillator(o) => o.step(&mut self.pos, self.birth, self.velocity, dt),
            Behavior::Wanderer(w) => w.step(&mut self.pos, self.velocity, dt),
        }
    }

    /// Write this agent's glyph into the canvas; no-op when inactive
    pub fn draw(&self, canvas: &SharedCanvas) {
        if !self.active {
            return;
        }
        canvas.set_pixel(self.pos.x as i32, self.pos.y as i32, self.glyph, self.attr);
    }
}
