use super::energy::capture_energy;
use crate::sim::config::SimConfig;
use crate::sim::record::SimulationRecord;

/// Largest |error| (deg) over samples with `time >= settle_time`.
/// Returns 0.0 when no sample qualifies.
pub fn max_error_after(record: &SimulationRecord, settle_time: f64) -> f64 {
    record
        .after(settle_time)
        .map(|s| s.error.abs())
        .fold(0.0_f64, f64::max)
}

/// Summary of one run against the tracking requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingSummary {
    pub settle_time: f64,
    pub max_error_after_settle: f64,
    pub error_tolerance: f64,
    pub passed: bool,
    pub captured_energy: f64,
    pub saturated_steps: usize,
}

impl TrackingSummary {
    pub fn evaluate(record: &SimulationRecord, config: &SimConfig) -> Self {
        let max_error_after_settle = max_error_after(record, config.settle_time);
        let saturated_steps = record
            .iter()
            .filter(|s| s.torque_commanded.abs() > config.plant.torque_limit)
            .count();

        TrackingSummary {
            settle_time: config.settle_time,
            max_error_after_settle,
            error_tolerance: config.error_tolerance,
            passed: max_error_after_settle <= config.error_tolerance,
            captured_energy: capture_energy(record),
            saturated_steps,
        }
    }
}
