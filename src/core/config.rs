//! Simulation configuration with documented constants
//!
//! All tunables are collected here with explanations of their purpose
//! and how they interact with each other.

use std::time::Duration;

/// Rectangular sub-region of the canvas used for initial random placement.
///
/// Agents spawn away from the edges so a freshly started run shows motion
/// in both directions before the first boundary contact.
#[derive(Debug, Clone, Copy)]
pub struct SpawnRegion {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpawnRegion {
    /// Proportionally inset region for an arbitrary canvas size
    ///
    /// Keeps an eighth of the width and a fifth of the height clear on
    /// each side; on the default 80x25 canvas this reproduces the
    /// classic x in [10, 70], y in [5, 20] placement band.
    pub fn inset_for(width: u16, height: u16) -> Self {
        let dx = (width / 8) as f64;
        let dy = (height / 5) as f64;
        let max_x = (width as f64 - dx).min((width - 1) as f64);
        let max_y = (height as f64 - dy).min((height - 1) as f64);
        Self {
            min_x: dx.min(max_x),
            min_y: dy.min(max_y),
            max_x,
            max_y,
        }
    }
}

/// Construction-time parameters for one simulation run
///
/// Defaults reproduce the classic 80x25 console demo: five oscillators
/// patrolling to the origin corner and three wanderers drifting with a
/// 7-second direction change.
#[derive(Debug, Clone)]
pub struct SimConfig {
    // === CANVAS ===
    /// Canvas width in cells
    pub width: u16,

    /// Canvas height in cells
    pub height: u16,

    // === POPULATION ===
    /// Number of oscillator agents (patrol between birth and a fixed corner)
    pub oscillator_count: usize,

    /// Number of wanderer agents (random walk with boundary reflection)
    pub wanderer_count: usize,

    /// Oscillator speed in cells per simulated second
    pub oscillator_velocity: f64,

    /// Wanderer speed in cells per simulated second
    pub wanderer_velocity: f64,

    /// Seconds between a wanderer's direction re-randomizations
    ///
    /// At the default (7.0), a wanderer crosses a good fraction of the
    /// canvas between turns, so paths read as deliberate drifts rather
    /// than jitter.
    pub wander_interval: f64,

    /// Where agents are initially placed
    pub spawn_region: SpawnRegion,

    // === TIMING ===
    /// Fixed simulated time step per agent tick, in seconds
    ///
    /// Advancement is tick-quantized: every `advance` receives exactly
    /// this step, never wall-clock elapsed time. Motion stays
    /// deterministic under scheduler jitter.
    pub tick_dt: f64,

    /// Base worker sleep in seconds; each worker sleeps `base / velocity`
    ///
    /// Faster agents tick more often instead of taking bigger steps, so
    /// per-tick displacement stays small relative to the canvas.
    pub base_delay_secs: f64,

    /// Wall-clock pause between render frames
    ///
    /// Also bounds stop-detection latency: the stop source is polled
    /// once per frame.
    pub frame_interval: Duration,

    // === RANDOMNESS ===
    /// Seed for spawn placement and wanderer direction draws
    ///
    /// `None` seeds from entropy; `Some` makes a run reproducible.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,

            oscillator_count: 5,
            wanderer_count: 3,
            oscillator_velocity: 2.0,
            wanderer_velocity: 2.0,
            wander_interval: 7.0,
            spawn_region: SpawnRegion {
                min_x: 10.0,
                min_y: 5.0,
                max_x: 70.0,
                max_y: 20.0,
            },

            tick_dt: 0.1,
            base_delay_secs: 0.1,
            frame_interval: Duration::from_millis(50),

            seed: None,
        }
    }
}

impl SimConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            ));
        }

        if self.oscillator_velocity <= 0.0 || self.wanderer_velocity <= 0.0 {
            return Err("velocities must be positive".into());
        }

        if self.wander_interval <= 0.0 {
            return Err("wander_interval must be positive".into());
        }

        if self.tick_dt <= 0.0 || self.base_delay_secs <= 0.0 {
            return Err("tick_dt and base_delay_secs must be positive".into());
        }

        let r = &self.spawn_region;
        if r.min_x > r.max_x || r.min_y > r.max_y {
            return Err("spawn_region is inverted".into());
        }
        let max_x = (self.width - 1) as f64;
        let max_y = (self.height - 1) as f64;
        if r.min_x < 0.0 || r.min_y < 0.0 || r.max_x > max_x || r.max_y > max_y {
            return Err(format!(
                "spawn_region must lie within [0, {}] x [0, {}]",
                max_x, max_y
            ));
        }

        Ok(())
    }
}
