//! Skitter - Entry Point
//!
//! Builds the simulation from CLI parameters, spawns the agent workers,
//! and runs the render loop on the main thread until ESC or `q`.

use clap::Parser;

use skitter::core::config::{SimConfig, SpawnRegion};
use skitter::core::error::Result;
use skitter::render::terminal::{KeyStopSource, TerminalSink};
use skitter::render::RenderLoop;
use skitter::sim::SimulationController;

/// Thread-per-agent swarm simulation in the terminal
#[derive(Parser, Debug)]
#[command(name = "skitter")]
#[command(about = "Watch oscillators and wanderers skitter around a shared canvas")]
struct Args {
    /// Canvas width in cells
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Canvas height in cells
    #[arg(long, default_value_t = 25)]
    height: u16,

    /// Number of oscillator agents
    #[arg(long, default_value_t = 5)]
    oscillators: usize,

    /// Number of wanderer agents
    #[arg(long, default_value_t = 3)]
    wanderers: usize,

    /// Agent speed in cells per simulated second
    #[arg(long, default_value_t = 2.0)]
    velocity: f64,

    /// Seconds between wanderer direction changes
    #[arg(long, default_value_t = 7.0)]
    interval: f64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Raw-mode frames and log lines do not mix; logging stays silent
    // unless RUST_LOG asks for it.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = SimConfig {
        width: args.width,
        height: args.height,
        oscillator_count: args.oscillators,
        wanderer_count: args.wanderers,
        oscillator_velocity: args.velocity,
        wanderer_velocity: args.velocity,
        wander_interval: args.interval,
        spawn_region: SpawnRegion::inset_for(args.width, args.height),
        seed: args.seed,
        ..SimConfig::default()
    };

    let mut controller = SimulationController::new(config)?;

    // Acquire the terminal before any worker spawns: a failure here is
    // fatal at startup, with no threads to unwind. The sink owns the
    // terminal state; dropping it restores the screen before the
    // farewell line prints.
    {
        let mut sink = TerminalSink::new()?;
        let mut input = KeyStopSource;
        controller.start()?;
        let render = RenderLoop::new(&controller);
        render.run(&mut controller, &mut sink, &mut input)?;
    }

    println!("Simulation ended.");
    Ok(())
}
