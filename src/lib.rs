//! Skitter - thread-per-agent swarm simulation
//!
//! N agents each run on their own OS thread, advancing a per-variant
//! movement rule at a velocity-scaled cadence, while the render loop
//! snapshots their positions into a shared canvas and presents frames
//! through a pluggable sink. Shutdown is cooperative and leak-free: one
//! stop signal, every worker joined before teardown.

pub mod agent;
pub mod canvas;
pub mod core;
pub mod render;
pub mod sim;
