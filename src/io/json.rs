use std::io::{self, Write};

use crate::eval::{EnergyComparison, TrackingSummary};
use crate::sim::config::SimConfig;

/// Write a run summary (configuration, tracking check, energy) as JSON.
pub fn write_summary<W: Write>(
    writer: &mut W,
    config: &SimConfig,
    summary: &TrackingSummary,
    energy: &EnergyComparison,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"config\": {{")?;
    writeln!(writer, "    \"inertia\": {},", config.plant.inertia)?;
    writeln!(writer, "    \"damping\": {},", config.plant.damping)?;
    writeln!(writer, "    \"torque_limit\": {},", config.plant.torque_limit)?;
    writeln!(writer, "    \"kp\": {},", config.gains.kp)?;
    writeln!(writer, "    \"ki\": {},", config.gains.ki)?;
    writeln!(writer, "    \"kd\": {},", config.gains.kd)?;
    writeln!(writer, "    \"dt\": {},", config.dt)?;
    writeln!(writer, "    \"duration_s\": {},", config.duration)?;
    writeln!(writer, "    \"initial_angle_deg\": {}", config.initial_angle)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"tracking\": {{")?;
    writeln!(writer, "    \"settle_time_s\": {},", summary.settle_time)?;
    writeln!(writer, "    \"max_error_after_settle_deg\": {:.4},", summary.max_error_after_settle)?;
    writeln!(writer, "    \"error_tolerance_deg\": {},", summary.error_tolerance)?;
    writeln!(writer, "    \"passed\": {},", summary.passed)?;
    writeln!(writer, "    \"saturated_steps\": {}", summary.saturated_steps)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"energy\": {{")?;
    writeln!(writer, "    \"tracker\": {:.4},", energy.tracker)?;
    writeln!(writer, "    \"fixed_zero\": {:.4},", energy.fixed_zero)?;
    writeln!(writer, "    \"best_fixed_angle_deg\": {:.1},", energy.best_fixed_angle)?;
    writeln!(writer, "    \"best_fixed\": {:.4},", energy.best_fixed)?;
    writeln!(writer, "    \"ratio_vs_zero\": {},", number(energy.ratio_vs_zero()))?;
    writeln!(writer, "    \"ratio_vs_best\": {}", number(energy.ratio_vs_best()))?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// JSON has no NaN or infinity; those become `null`.
fn number(x: f64) -> String {
    if x.is_finite() {
        format!("{x:.4}")
    } else {
        "null".to_string()
    }
}

/// Write the run summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    config: &SimConfig,
    summary: &TrackingSummary,
    energy: &EnergyComparison,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, config, summary, energy)
}
