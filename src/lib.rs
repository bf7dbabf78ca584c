pub mod control;
pub mod dynamics;
pub mod error;
pub mod eval;
pub mod io;
pub mod sim;

pub use control::{Controller, SunTrajectory, TorqueCommand, TrackingPid};
pub use dynamics::{PlantParams, PlantState};
pub use error::ConfigError;
pub use eval::{capture_energy, max_error_after, EnergyComparison, PanelConfig, TrackingSummary};
pub use sim::{run, run_batch, simulate, simulate_with, Gains, Sample, SimConfig, SimulationRecord};
