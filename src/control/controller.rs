use crate::dynamics::state::PlantState;

/// Output of one controller update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TorqueCommand {
    pub error: f64,           // deg, reference minus plant angle
    pub commanded: f64,       // N·m, before saturation
    pub applied: f64,         // N·m, after saturation
}

impl TorqueCommand {
    pub fn is_saturated(&self) -> bool {
        self.commanded != self.applied
    }
}

/// Trait for tracker controllers.
///
/// `control` is called exactly once per simulation step, in time order.
/// Implementations that integrate the error rely on that.
pub trait Controller {
    /// Compute the axis torque for the current state at time `t`.
    fn control(&mut self, state: &PlantState, t: f64, dt: f64) -> TorqueCommand;

    /// Reset controller internal state (e.g., PID integrators).
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}
