//! Small models with known behavior for solver tests.

use fixstep_core::{Derivative, Model, State};

/// Exponential decay: `x' = -k x`.
pub(crate) struct Decay {
    pub(crate) k: f64,
}

impl Model<1> for Decay {
    fn derivatives(&self, state: &State<1>, _time: f64) -> Derivative<1> {
        Derivative::scalar(-self.k * state.value())
    }
}

/// A pure quadrature: `x' = t²`, so `x(t) = x0 + (t³ - t0³) / 3`.
pub(crate) struct TimeSquared;

impl Model<1> for TimeSquared {
    fn derivatives(&self, _state: &State<1>, time: f64) -> Derivative<1> {
        Derivative::scalar(time * time)
    }
}

/// Rotation in the plane: `x' = -y`, `y' = x`.
pub(crate) struct Rotation;

impl Model<2> for Rotation {
    fn derivatives(&self, state: &State<2>, _time: f64) -> Derivative<2> {
        Derivative::new([-state[1], state[0]])
    }
}
