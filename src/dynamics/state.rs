use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Plant state: azimuth angle and rate
// ---------------------------------------------------------------------------

/// Rotational state of the tracker axis.
///
/// Angles are in degrees throughout the crate; the plant equation is applied
/// to those units directly, which is what the default gains are tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlantState {
    pub angle: f64,           // deg
    pub omega: f64,           // deg/s
}

impl PlantState {
    pub fn new(angle: f64, omega: f64) -> Self {
        Self { angle, omega }
    }

    /// State at rest at the given angle.
    pub fn at_rest(angle: f64) -> Self {
        Self { angle, omega: 0.0 }
    }

    /// Pack into the integrator's vector form `[angle, omega]`.
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.angle, self.omega)
    }

    pub fn from_vector(v: &Vector2<f64>) -> Self {
        Self { angle: v.x, omega: v.y }
    }

    /// Rotational kinetic energy ½·I·ω².
    pub fn kinetic_energy(&self, inertia: f64) -> f64 {
        0.5 * inertia * self.omega * self.omega
    }
}

// ---------------------------------------------------------------------------
// Physical parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantParams {
    pub inertia: f64,         // kg·m^2, must be > 0
    pub damping: f64,         // N·m·s, >= 0
    pub torque_limit: f64,    // N·m, actuator saturation
}

impl Default for PlantParams {
    fn default() -> Self {
        Self {
            inertia: 2.0,
            damping: 0.5,
            torque_limit: 20.0,
        }
    }
}
