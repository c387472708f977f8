use fixstep_core::{Model, State, StepIntegrable};

use super::Stepper;

/// The classical fourth-order Runge-Kutta method.
///
/// ```text
/// k1 = f(t_n,         x_n)
/// k2 = f(t_n + h/2,   x_n + h/2 k1)
/// k3 = f(t_n + h/2,   x_n + h/2 k2)
/// k4 = f(t_n + h,     x_n + h k3)
/// x_{n+1} = x_n + h (k1 + 2 k2 + 2 k3 + k4) / 6
/// ```
///
/// Global error is O(h⁴).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Stepper for Rk4 {
    fn order(&self) -> u32 {
        4
    }

    fn step<M, const D: usize>(&self, model: &M, state: &State<D>, time: f64, h: f64) -> State<D>
    where
        M: Model<D>,
    {
        let half = 0.5 * h;

        let k1 = model.derivatives(state, time);
        let k2 = model.derivatives(&state.step(k1, half), time + half);
        let k3 = model.derivatives(&state.step(k2, half), time + half);
        let k4 = model.derivatives(&state.step(k3, h), time + h);

        state.step((k1 + k2 * 2.0 + k3 * 2.0 + k4) / 6.0, h)
    }
}
