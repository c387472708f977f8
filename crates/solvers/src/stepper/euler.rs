use fixstep_core::{Model, State, StepIntegrable};

use super::Stepper;

/// The forward Euler method.
///
/// ```text
/// x_{n+1} = x_n + h f(t_n, x_n)
/// ```
///
/// Local truncation error is O(h²), global error O(h).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Stepper for Euler {
    fn order(&self) -> u32 {
        1
    }

    fn step<M, const D: usize>(&self, model: &M, state: &State<D>, time: f64, h: f64) -> State<D>
    where
        M: Model<D>,
    {
        state.step(model.derivatives(state, time), h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::test_utils::{Decay, Rotation, TimeSquared};

    #[test]
    fn single_decay_step() {
        let next = Euler.step(&Decay { k: 2.0 }, &State::scalar(1.0), 0.0, 0.1);

        assert_relative_eq!(next.value(), 0.8);
    }

    #[test]
    fn uses_slope_at_start_of_interval() {
        // f(0) = 0, so Euler cannot see the growth of t² within the step.
        let next = Euler.step(&TimeSquared, &State::scalar(3.0), 0.0, 0.5);
        assert_eq!(next, State::scalar(3.0));

        let next = Euler.step(&TimeSquared, &State::scalar(3.0), 1.0, 0.5);
        assert_relative_eq!(next.value(), 3.5);
    }

    #[test]
    fn components_use_step_n_values() {
        let next = Euler.step(&Rotation, &State::new([1.0, 0.0]), 0.0, 0.5);

        // y uses the old x = 1, not the updated x.
        assert_eq!(next, State::new([1.0, 0.5]));
    }

    #[test]
    fn reports_first_order() {
        assert_eq!(Euler.order(), 1);
    }
}
