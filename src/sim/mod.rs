pub mod config;
pub mod simulator;
pub mod splitter;
pub mod sweep;

pub use config::SimConfig;
pub use simulator::Simulator;
pub use sweep::{Request, SweepPoint, replay, sweep, sweep_parallel};
