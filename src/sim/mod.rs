pub mod batch;
pub mod config;
pub mod integrator;
pub mod record;
pub mod runner;

pub use batch::{run_batch, RunOutcome};
pub use crate::control::Gains;
pub use config::SimConfig;
pub use integrator::{euler_step, rk4_step};
pub use record::{Sample, SimulationRecord};
pub use runner::{run, simulate, simulate_with};
