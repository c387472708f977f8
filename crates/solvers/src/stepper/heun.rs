use fixstep_core::{Model, State, StepIntegrable};

use super::Stepper;

/// Heun's method, the explicit trapezoidal predictor-corrector.
///
/// ```text
/// k1 = f(t_n, x_n)
/// k2 = f(t_n + h, x_n + h k1)
/// x_{n+1} = x_n + h (k1 + k2) / 2
/// ```
///
/// Global error is O(h²).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heun;

impl Stepper for Heun {
    fn order(&self) -> u32 {
        2
    }

    fn step<M, const D: usize>(&self, model: &M, state: &State<D>, time: f64, h: f64) -> State<D>
    where
        M: Model<D>,
    {
        let k1 = model.derivatives(state, time);
        let predictor = state.step(k1, h);
        let k2 = model.derivatives(&predictor, time + h);

        state.step((k1 + k2) * 0.5, h)
    }
}
