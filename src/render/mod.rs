//! Render loop and the interfaces it consumes
//!
//! This module is READ-ONLY with respect to simulation state: it reads
//! agent positions and writes only into the canvas and the external sink.

pub mod terminal;

use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use crate::agent::Agent;
use crate::canvas::SharedCanvas;
use crate::core::error::Result;
use crate::sim::SimulationController;

/// Where frames go: terminal buffer, GUI canvas, or a headless test double
pub trait RenderSink {
    fn clear(&mut self) -> Result<()>;
    fn set_pixel(&mut self, x: u16, y: u16, glyph: char, attr: u8) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

/// External stop condition, polled once per frame
pub trait StopSource {
    fn should_stop(&mut self) -> Result<bool>;
}

/// Single-threaded frame producer
///
/// Each frame: poll the stop source, clear the canvas, draw every agent
/// (drawing runs here, on the render thread, while workers only advance,
/// so a frame needs no agent-to-agent coordination), snapshot, and push
/// the result through the sink. Runs on the caller's thread.
pub struct RenderLoop {
    canvas: Arc<SharedCanvas>,
    agents: Vec<Arc<Mutex<Agent>>>,
    frame_interval: Duration,
}

impl RenderLoop {
    pub fn new(controller: &SimulationController) -> Self {
        Self {
            canvas: controller.canvas(),
            agents: controller.agents().to_vec(),
            frame_interval: controller.config().frame_interval,
        }
    }

    /// Run frames until the stop source fires or the sink fails
    ///
    /// Either way the workers are stopped and joined before this
    /// returns, so teardown is always safe afterwards.
    pub fn run<S: RenderSink, P: StopSource>(
        &self,
        controller: &mut SimulationController,
        sink: &mut S,
        input: &mut P,
    ) -> Result<()> {
        let outcome = self.pump(sink, input);
        controller.request_stop();
        controller.await_all_stopped();
        outcome
    }

    fn pump<S: RenderSink, P: StopSource>(&self, sink: &mut S, input: &mut P) -> Result<()> {
        loop {
            if input.should_stop()? {
                tracing::debug!("stop source fired");
                return Ok(());
            }
            self.render_frame(sink)?;
            thread::sleep(self.frame_interval);
        }
    }

    /// One frame: clear, draw all agents, snapshot, blit to the sink
    pub fn render_frame<S: RenderSink>(&self, sink: &mut S) -> Result<()> {
        self.canvas.clear();
        for agent in &self.agents {
            let agent = agent.lock().unwrap_or_else(PoisonError::into_inner);
            agent.draw(&self.canvas);
        }

        let frame = self.canvas.snapshot();
        sink.clear()?;
        for (x, y, cell) in frame.iter_occupied() {
            sink.set_pixel(x, y, cell.glyph, cell.attr)?;
        }
        sink.present()
    }
}
