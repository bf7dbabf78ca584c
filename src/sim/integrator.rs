use nalgebra::SVector;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta integrator
// ---------------------------------------------------------------------------

/// Single RK4 step: advance `x` from `t` to `t + dt`.
///
/// Generic over any fixed-size state and derivative function `f(x, t)`.
/// Inputs that must stay constant over the step (e.g. actuator torque)
/// are captured by the closure.
pub fn rk4_step<const N: usize, F>(x: &SVector<f64, N>, t: f64, dt: f64, f: F) -> SVector<f64, N>
where
    F: Fn(&SVector<f64, N>, f64) -> SVector<f64, N>,
{
    let half = dt * 0.5;
    let k1 = f(x, t);
    let k2 = f(&(x + k1 * half), t + half);
    let k3 = f(&(x + k2 * half), t + half);
    let k4 = f(&(x + k3 * dt), t + dt);

    x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}

/// Explicit Euler step with the same signature as [`rk4_step`].
/// First-order baseline for accuracy comparisons.
pub fn euler_step<const N: usize, F>(x: &SVector<f64, N>, t: f64, dt: f64, f: F) -> SVector<f64, N>
where
    F: Fn(&SVector<f64, N>, f64) -> SVector<f64, N>,
{
    x + f(x, t) * dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::plant::derivative_vec;
    use crate::dynamics::state::{PlantParams, PlantState};
    use nalgebra::Vector2;

    type Stepper = fn(&Vector2<f64>, f64, f64, &dyn Fn(&Vector2<f64>, f64) -> Vector2<f64>) -> Vector2<f64>;

    fn rk4(x: &Vector2<f64>, t: f64, dt: f64, f: &dyn Fn(&Vector2<f64>, f64) -> Vector2<f64>) -> Vector2<f64> {
        rk4_step(x, t, dt, f)
    }

    fn euler(x: &Vector2<f64>, t: f64, dt: f64, f: &dyn Fn(&Vector2<f64>, f64) -> Vector2<f64>) -> Vector2<f64> {
        euler_step(x, t, dt, f)
    }

    fn integrate(step: Stepper, x0: Vector2<f64>, dt: f64, steps: usize, f: &dyn Fn(&Vector2<f64>, f64) -> Vector2<f64>) -> Vector2<f64> {
        let mut x = x0;
        for i in 0..steps {
            x = step(&x, i as f64 * dt, dt, f);
        }
        x
    }

    /// Closed-form plant response under constant torque, b > 0.
    fn plant_exact(p: &PlantParams, torque: f64, x0: &PlantState, t: f64) -> PlantState {
        let w_inf = torque / p.damping;
        let decay = (-p.damping * t / p.inertia).exp();
        PlantState {
            angle: x0.angle + w_inf * t + (x0.omega - w_inf) * (p.inertia / p.damping) * (1.0 - decay),
            omega: w_inf + (x0.omega - w_inf) * decay,
        }
    }

    #[test]
    fn exact_for_cubic_in_time() {
        // dx/dt = 3t^2 -> x = t^3; RK4 reproduces it exactly up to roundoff
        let f = |_x: &SVector<f64, 1>, t: f64| SVector::<f64, 1>::new(3.0 * t * t);
        let mut x = SVector::<f64, 1>::zeros();
        for i in 0..10 {
            x = rk4_step(&x, i as f64 * 0.2, 0.2, f);
        }
        assert!((x[0] - 8.0).abs() < 1e-12, "got {}", x[0]);
    }

    #[test]
    fn undamped_unforced_plant_conserves_energy() {
        let p = PlantParams { inertia: 2.0, damping: 0.0, torque_limit: 20.0 };
        let x0 = PlantState::new(-45.0, 1.7);
        let f = |x: &Vector2<f64>, _t: f64| derivative_vec(x, 0.0, &p);
        let x = PlantState::from_vector(&integrate(rk4, x0.to_vector(), 0.01, 12_000, &f));
        assert_eq!(x.kinetic_energy(p.inertia), x0.kinetic_energy(p.inertia));
        assert!((x.angle - (-45.0 + 1.7 * 120.0)).abs() < 1e-9);
    }

    #[test]
    fn oscillator_energy_rk4_vs_euler() {
        // x'' = -x over 12,000 steps of 0.01 s
        let f = |x: &Vector2<f64>, _t: f64| Vector2::new(x.y, -x.x);
        let x0 = Vector2::new(1.0, 0.0);
        let energy = |x: &Vector2<f64>| 0.5 * (x.x * x.x + x.y * x.y);

        let drift_rk4 = (energy(&integrate(rk4, x0, 0.01, 12_000, &f)) - 0.5).abs();
        let drift_euler = (energy(&integrate(euler, x0, 0.01, 12_000, &f)) - 0.5).abs();

        assert!(drift_rk4 < 1e-8, "RK4 energy drift {drift_rk4}");
        assert!(drift_euler > 0.5, "Euler energy drift {drift_euler}");
    }

    #[test]
    fn halving_dt_shrinks_error_fourth_order() {
        let p = PlantParams::default();
        let x0 = PlantState::new(0.0, 0.0);
        let torque = 5.0;
        let f = |x: &Vector2<f64>, _t: f64| derivative_vec(x, torque, &p);
        let exact = plant_exact(&p, torque, &x0, 4.0);

        let err = |step: Stepper, dt: f64| {
            let n = (4.0 / dt).round() as usize;
            let x = PlantState::from_vector(&integrate(step, x0.to_vector(), dt, n, &f));
            (x.omega - exact.omega).abs()
        };

        let rk4_ratio = err(rk4, 0.4) / err(rk4, 0.2);
        assert!(
            (12.0..20.0).contains(&rk4_ratio),
            "RK4 error ratio {rk4_ratio} should be ~16"
        );

        let euler_ratio = err(euler, 0.4) / err(euler, 0.2);
        assert!(
            (1.5..2.5).contains(&euler_ratio),
            "Euler error ratio {euler_ratio} should be ~2"
        );
    }

    #[test]
    fn rk4_matches_closed_form_plant() {
        let p = PlantParams::default();
        let x0 = PlantState::new(-45.0, 0.0);
        let f = |x: &Vector2<f64>, _t: f64| derivative_vec(x, 20.0, &p);
        let x = PlantState::from_vector(&integrate(rk4, x0.to_vector(), 0.01, 300, &f));
        let exact = plant_exact(&p, 20.0, &x0, 3.0);
        assert!((x.angle - exact.angle).abs() < 1e-9);
        assert!((x.omega - exact.omega).abs() < 1e-9);
    }
}
