//! Reference scenarios pairing each model with its canonical run.
//!
//! A [`Scenario`] holds everything an integrator needs besides the stepper:
//! the model, the initial state, and the validated [`Config`]. The presets
//! reproduce the reference runs for each model, including the update policy
//! those runs use.

use fixstep_core::{Config, State};

use crate::{Linear2D, Logistic, LotkaVolterra, Sir};

/// A model bound to an initial state and a run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario<M, const D: usize> {
    pub model: M,
    pub initial: State<D>,
    pub config: Config,
}

/// Logistic equation from `x0 = 2` over `[0, 5]` in 1000 steps.
#[must_use]
pub fn logistic() -> Scenario<Logistic, 1> {
    Scenario {
        model: Logistic,
        initial: State::scalar(2.0),
        // Known-good bounds, unwrap is safe
        config: Config::new(0.0, 5.0, 1000).unwrap(),
    }
}

/// Linear system `x' = x - 3y`, `y' = -3x + y` from `(10, 11)` over `[0, 1]`
/// in 100 steps.
#[must_use]
pub fn linear_2d() -> Scenario<Linear2D, 2> {
    Scenario {
        model: Linear2D::default(),
        initial: State::new([10.0, 11.0]),
        // Known-good bounds, unwrap is safe
        config: Config::new(0.0, 1.0, 100).unwrap(),
    }
}

/// Predator-prey system from `(1, 2)` over `[0, 10]` in 1000 steps.
#[must_use]
pub fn lotka_volterra() -> Scenario<LotkaVolterra, 2> {
    Scenario {
        model: LotkaVolterra::default(),
        initial: State::new([1.0, 2.0]),
        // Known-good bounds, unwrap is safe
        config: Config::new(0.0, 10.0, 1000).unwrap(),
    }
}

/// SIR model with `β = 0.1`, `γ = 0.2` from `(1, 0.1, 0)` over `[0, 100]`
/// in 1000 steps, using [`Sir::reference_policy`].
#[must_use]
pub fn sir() -> Scenario<Sir, 3> {
    Scenario {
        model: Sir::default(),
        initial: State::new([1.0, 0.1, 0.0]),
        // Known-good bounds, unwrap is safe
        config: Config::new(0.0, 100.0, 1000)
            .unwrap()
            .with_policy(Sir::reference_policy()),
    }
}
