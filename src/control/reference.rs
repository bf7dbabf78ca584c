use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Reference trajectory: sun azimuth as a function of time
// ---------------------------------------------------------------------------

/// Sinusoidal sun azimuth sweep, φ_sun(t) = A·sin(π·t / T).
///
/// Starts at 0, peaks at +A when t = T/2 and returns to 0 at t = T.
/// The formula is evaluated as-is outside [0, T].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTrajectory {
    pub amplitude: f64,       // deg
    pub period: f64,          // s
}

impl SunTrajectory {
    pub fn new(amplitude: f64, period: f64) -> Self {
        Self { amplitude, period }
    }

    /// Sun azimuth at time `t` (deg).
    pub fn angle(&self, t: f64) -> f64 {
        self.amplitude * (PI * t / self.period).sin()
    }

    /// Analytic azimuth rate at time `t` (deg/s).
    pub fn rate(&self, t: f64) -> f64 {
        self.amplitude * (PI / self.period) * (PI * t / self.period).cos()
    }
}

impl Default for SunTrajectory {
    fn default() -> Self {
        Self::new(45.0, 120.0)
    }
}
