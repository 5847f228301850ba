pub mod controller;
pub mod signal;
pub mod worker;

pub use controller::SimulationController;
pub use signal::StopSignal;
