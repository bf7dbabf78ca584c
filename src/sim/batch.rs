use rayon::prelude::*;
use tracing::info;

use super::config::SimConfig;
use super::record::SimulationRecord;
use super::runner::simulate;
use crate::error::ConfigError;
use crate::eval::TrackingSummary;

/// Result of one run inside a batch.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub initial_angle: f64,
    pub record: SimulationRecord,
    pub summary: TrackingSummary,
}

/// Run the same configuration from several initial angles in parallel.
///
/// Each run owns its own plant state and controller. Results come back in
/// the order of `initial_angles`.
pub fn run_batch(
    config: &SimConfig,
    initial_angles: &[f64],
) -> Result<Vec<RunOutcome>, ConfigError> {
    config.validate()?;

    initial_angles
        .par_iter()
        .map(|&initial_angle| -> Result<RunOutcome, ConfigError> {
            let cfg = config.with_initial_angle(initial_angle);
            let record = simulate(&cfg)?;
            let summary = TrackingSummary::evaluate(&record, &cfg);
            info!(
                initial_angle,
                max_error = summary.max_error_after_settle,
                passed = summary.passed,
                "batch run finished"
            );
            Ok(RunOutcome { initial_angle, record, summary })
        })
        .collect()
}
