use crate::control::pid::Gains;
use crate::control::reference::SunTrajectory;
use crate::dynamics::state::PlantParams;
use crate::error::ConfigError;

// Relative slack when checking that duration / dt is a whole number.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Upper bound on steps in one run; the record is preallocated for all of them.
pub const MAX_STEPS: usize = u32::MAX as usize;

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub plant: PlantParams,
    pub gains: Gains,
    pub dt: f64,              // integration timestep, s
    pub duration: f64,        // trajectory length, s (also the sweep period)
    pub initial_angle: f64,   // deg
    pub settle_time: f64,     // s, error bound applies from here on
    pub error_tolerance: f64, // deg
    pub sweep_amplitude: f64, // deg
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            plant: PlantParams::default(),
            gains: Gains::default(),
            dt: 0.01,         // 100 Hz
            duration: 120.0,
            initial_angle: 0.0,
            settle_time: 10.0,
            error_tolerance: 0.5,
            sweep_amplitude: 45.0,
        }
    }
}

impl SimConfig {
    /// Same configuration started from a different initial angle.
    pub fn with_initial_angle(&self, initial_angle: f64) -> Self {
        Self { initial_angle, ..self.clone() }
    }

    /// Sun trajectory implied by this configuration.
    pub fn reference(&self) -> SunTrajectory {
        SunTrajectory::new(self.sweep_amplitude, self.duration)
    }

    /// Check the configuration and return the number of integration steps.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        let finite = [
            ("inertia", self.plant.inertia),
            ("damping", self.plant.damping),
            ("torque_limit", self.plant.torque_limit),
            ("kp", self.gains.kp),
            ("ki", self.gains.ki),
            ("kd", self.gains.kd),
            ("dt", self.dt),
            ("duration", self.duration),
            ("initial_angle", self.initial_angle),
            ("settle_time", self.settle_time),
            ("error_tolerance", self.error_tolerance),
            ("sweep_amplitude", self.sweep_amplitude),
        ];
        if let Some(&(field, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }

        if self.plant.inertia <= 0.0 {
            return Err(ConfigError::NonPositiveInertia(self.plant.inertia));
        }
        if self.plant.damping < 0.0 {
            return Err(ConfigError::NegativeDamping(self.plant.damping));
        }
        if self.plant.torque_limit <= 0.0 {
            return Err(ConfigError::NonPositiveTorqueLimit(self.plant.torque_limit));
        }
        if self.dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimestep(self.dt));
        }
        if self.duration <= 0.0 {
            return Err(ConfigError::NonPositiveDuration(self.duration));
        }

        step_count(self.duration, self.dt)
    }
}

/// Whole number of `dt` steps in `duration`, or an error if it is fractional.
fn step_count(duration: f64, dt: f64) -> Result<usize, ConfigError> {
    let ratio = duration / dt;
    let steps = ratio.round();
    if steps < 1.0 || (ratio - steps).abs() > STEP_COUNT_TOLERANCE * steps {
        return Err(ConfigError::FractionalStepCount { duration, dt });
    }
    if steps > MAX_STEPS as f64 {
        return Err(ConfigError::TooManySteps { steps, max: MAX_STEPS });
    }
    Ok(steps as usize)
}
