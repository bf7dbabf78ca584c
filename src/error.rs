use thiserror::Error;

/// Rejected simulation configuration. Detected before any stepping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("inertia must be > 0, got {0}")]
    NonPositiveInertia(f64),

    #[error("damping must be >= 0, got {0}")]
    NegativeDamping(f64),

    #[error("torque limit must be > 0, got {0}")]
    NonPositiveTorqueLimit(f64),

    #[error("timestep must be > 0, got {0}")]
    NonPositiveTimestep(f64),

    #[error("duration must be > 0, got {0}")]
    NonPositiveDuration(f64),

    #[error("{steps} steps exceeds the limit of {max} per run")]
    TooManySteps { steps: f64, max: usize },

    #[error("duration {duration} s is not a whole number of {dt} s steps")]
    FractionalStepCount { duration: f64, dt: f64 },
}
