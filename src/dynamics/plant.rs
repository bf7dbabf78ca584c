use nalgebra::Vector2;

use super::state::{PlantParams, PlantState};

// ---------------------------------------------------------------------------
// Equations of motion (single rotational axis, linear damping)
// ---------------------------------------------------------------------------

/// State derivative of the tracker axis under an applied torque.
///
///   dφ/dt = ω
///   dω/dt = (τ − b·ω) / I
///
/// The torque is used as given. Saturation belongs to the controller.
pub fn derivative(state: &PlantState, torque: f64, params: &PlantParams) -> PlantState {
    PlantState {
        angle: state.omega,
        omega: (torque - params.damping * state.omega) / params.inertia,
    }
}

/// Vector form of [`derivative`], shaped for the generic integrator.
pub fn derivative_vec(x: &Vector2<f64>, torque: f64, params: &PlantParams) -> Vector2<f64> {
    derivative(&PlantState::from_vector(x), torque, params).to_vector()
}
