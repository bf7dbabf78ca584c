pub mod energy;
pub mod performance;

pub use energy::{capture_energy, fixed_panel_energy, EnergyComparison, PanelConfig};
pub use performance::{max_error_after, TrackingSummary};
