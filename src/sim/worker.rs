//! One execution unit per agent
//!
//! Each worker owns its agent's tick cadence: advance by the fixed step,
//! then sleep a duration inversely proportional to velocity, so faster
//! agents tick more often. The agent lock is never held across the sleep.

use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::agent::Agent;
use crate::core::error::Result;
use crate::sim::signal::StopSignal;

pub(crate) struct AgentWorker {
    agent: Arc<Mutex<Agent>>,
    signal: StopSignal,
    tick_dt: f64,
    delay: Duration,
}

impl AgentWorker {
    pub fn new(
        agent: Arc<Mutex<Agent>>,
        signal: StopSignal,
        tick_dt: f64,
        base_delay_secs: f64,
    ) -> Self {
        let velocity = agent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .velocity();
        Self {
            agent,
            signal,
            tick_dt,
            delay: Duration::from_secs_f64(base_delay_secs / velocity),
        }
    }

    /// Spawn the worker thread; runs until the stop signal flips
    pub fn spawn(self) -> Result<JoinHandle<()>> {
        let index = self
            .agent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .id()
            .0;
        let handle = thread::Builder::new()
            .name(format!("agent-{index}"))
            .spawn(move || self.run())?;
        Ok(handle)
    }

    fn run(self) {
        tracing::debug!(tick_dt = self.tick_dt, delay_ms = self.delay.as_millis() as u64, "worker running");

        while !self.signal.is_stopped() {
            {
                let mut agent = self.agent.lock().unwrap_or_else(PoisonError::into_inner);
                agent.advance(self.tick_dt);
            }
            thread::sleep(self.delay);
        }

        tracing::debug!("worker observed stop signal, exiting");
    }
}
