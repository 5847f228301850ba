//! Simulation lifecycle: agent creation, worker startup, and the join fence

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand_chacha::ChaCha8Rng;

use crate::agent::{Agent, Wanderer};
use crate::canvas::SharedCanvas;
use crate::core::config::SimConfig;
use crate::core::error::{Result, SkitterError};
use crate::core::types::{AgentId, Vec2};
use crate::sim::signal::StopSignal;
use crate::sim::worker::AgentWorker;

/// Oscillators patrol from wherever they spawn to this corner
const PATROL_TARGET: Vec2 = Vec2 { x: 0.0, y: 0.0 };

/// Owns the agent collection, the worker handles, and the stop signal
///
/// Lifecycle: `new` builds the population, `start` spawns one worker per
/// agent, and `request_stop` + `await_all_stopped` is the mandatory fence
/// between "simulation mutating" and "safe to tear down".
pub struct SimulationController {
    config: SimConfig,
    canvas: Arc<SharedCanvas>,
    agents: Vec<Arc<Mutex<Agent>>>,
    signal: StopSignal,
    workers: Vec<JoinHandle<()>>,
}

impl SimulationController {
    /// Validate the config and build the agent population
    ///
    /// Agents spawn at random positions within the configured sub-region;
    /// a `Some` seed makes placement and wanderer direction draws
    /// reproducible.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate().map_err(SkitterError::Config)?;

        let canvas = Arc::new(SharedCanvas::new(config.width, config.height));

        let mut placement = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut agents = Vec::with_capacity(config.oscillator_count + config.wanderer_count);

        for _ in 0..config.oscillator_count {
            let id = AgentId(agents.len());
            let birth = random_spawn(&config, &mut placement);
            agents.push(Arc::new(Mutex::new(Agent::oscillator(
                id,
                birth,
                PATROL_TARGET,
                config.oscillator_velocity,
            ))));
        }

        for _ in 0..config.wanderer_count {
            let id = AgentId(agents.len());
            let birth = random_spawn(&config, &mut placement);
            let rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(id.0 as u64)),
                None => ChaCha8Rng::from_entropy(),
            };
            let wanderer = Wanderer::new(config.wander_interval, config.width, config.height, rng);
            agents.push(Arc::new(Mutex::new(Agent::wanderer(
                id,
                birth,
                config.wanderer_velocity,
                wanderer,
            ))));
        }

        tracing::info!(
            oscillators = config.oscillator_count,
            wanderers = config.wanderer_count,
            width = config.width,
            height = config.height,
            "simulation built"
        );

        Ok(Self {
            config,
            canvas,
            agents,
            signal: StopSignal::new(),
            workers: Vec::new(),
        })
    }

    pub fn canvas(&self) -> Arc<SharedCanvas> {
        Arc::clone(&self.canvas)
    }

    /// Shared handles to every agent slot, in id order
    pub fn agents(&self) -> &[Arc<Mutex<Agent>>] {
        &self.agents
    }

    pub fn signal(&self) -> StopSignal {
        self.signal.clone()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Spawn one worker thread per agent
    pub fn start(&mut self) -> Result<()> {
        if !self.workers.is_empty() {
            return Err(SkitterError::AlreadyStarted);
        }

        for index in 0..self.agents.len() {
            let worker = AgentWorker::new(
                Arc::clone(&self.agents[index]),
                self.signal.clone(),
                self.config.tick_dt,
                self.config.base_delay_secs,
            );
            match worker.spawn() {
                Ok(handle) => self.workers.push(handle),
                Err(err) => {
                    // Partial startup is unwound before the error
                    // surfaces: no worker outlives a failed start.
                    self.request_stop();
                    self.await_all_stopped();
                    return Err(err);
                }
            }
        }

        tracing::info!(workers = self.workers.len(), "workers started");
        Ok(())
    }

    /// Flip the stop signal; workers notice on their next tick
    pub fn request_stop(&self) {
        tracing::info!("stop requested");
        self.signal.request_stop();
    }

    /// Block until every worker has observed the signal and exited
    ///
    /// After this returns, no worker thread touches agents or canvas
    /// again. A worker that panicked is treated as stopped.
    pub fn await_all_stopped(&mut self) {
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                tracing::warn!("a worker panicked before shutdown");
            }
        }
        tracing::info!("all workers stopped");
    }
}

fn random_spawn(config: &SimConfig, rng: &mut StdRng) -> Vec2 {
    let r = &config.spawn_region;
    Vec2::new(
        rng.gen_range(r.min_x..=r.max_x),
        rng.gen_range(r.min_y..=r.max_y),
    )
}
