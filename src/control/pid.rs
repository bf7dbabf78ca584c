use super::controller::{Controller, TorqueCommand};
use super::reference::SunTrajectory;
use crate::dynamics::state::PlantState;

// ---------------------------------------------------------------------------
// Controller gains
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

impl Gains {
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }
}

impl Default for Gains {
    fn default() -> Self {
        // Tuned to hold 0.5 deg after 10 s from 0, -45 and +45 deg starts
        Self { kp: 16.5, ki: 4.8, kd: 4.2 }
    }
}

// ---------------------------------------------------------------------------
// Tracking PID with torque saturation and clamping anti-windup
// ---------------------------------------------------------------------------

/// PID tracking controller for the azimuth axis.
///
/// The derivative path acts on the measured rate (−Kd·ω), not on the error
/// derivative, so the reference is never differentiated.
///
/// Anti-windup: the integral candidate `integral + error·dt` is committed only
/// when the unclamped command fits inside the torque limit. On saturated
/// steps the accumulator is left untouched.
#[derive(Debug, Clone)]
pub struct TrackingPid {
    pub gains: Gains,
    pub torque_limit: f64,
    pub reference: SunTrajectory,
    integral: f64,
}

impl TrackingPid {
    pub fn new(gains: Gains, torque_limit: f64, reference: SunTrajectory) -> Self {
        Self { gains, torque_limit, reference, integral: 0.0 }
    }

    /// Accumulated ∫error dt (deg·s).
    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn update(&mut self, state: &PlantState, t: f64, dt: f64) -> TorqueCommand {
        let error = self.reference.angle(t) - state.angle;

        let p_term = self.gains.kp * error;
        let candidate = self.integral + error * dt;
        let i_term = self.gains.ki * candidate;
        let d_term = -self.gains.kd * state.omega;

        let commanded = p_term + i_term + d_term;
        let applied = commanded.clamp(-self.torque_limit, self.torque_limit);

        // Freeze decision uses the pre-clamp command
        if commanded.abs() <= self.torque_limit {
            self.integral = candidate;
        }

        TorqueCommand { error, commanded, applied }
    }

    pub fn reset(&mut self) {
        self.integral = 0.0;
    }
}

impl Controller for TrackingPid {
    fn control(&mut self, state: &PlantState, t: f64, dt: f64) -> TorqueCommand {
        self.update(state, t, dt)
    }

    fn reset(&mut self) {
        TrackingPid::reset(self);
    }

    fn name(&self) -> &str {
        "TrackingPid"
    }
}
