//! One-step update rules for explicit fixed-step integration.
//!
//! A [`Stepper`] maps `(state, time, h, model)` to the state one step later.
//! Steppers are stateless, so a single value can drive any number of runs.
//!
//! | Stepper   | Evaluations per step | Global error |
//! |-----------|----------------------|--------------|
//! | [`Euler`] | 1                    | O(h)         |
//! | [`Heun`]  | 2                    | O(h²)        |
//! | [`Rk4`]   | 4                    | O(h⁴)        |

mod euler;
mod heun;
mod method;
mod rk4;

pub use euler::Euler;
pub use heun::Heun;
pub use method::{Method, UnknownMethod};
pub use rk4::Rk4;

use fixstep_core::{Model, State};

/// A one-step method for `x' = f(t, x)`.
pub trait Stepper {
    /// Returns the order of the method's global error.
    fn order(&self) -> u32;

    /// Advances `state` at `time` by one step of size `h`.
    ///
    /// The returned state approximates the solution at `time + h`. The input
    /// state is never modified.
    fn step<M, const D: usize>(&self, model: &M, state: &State<D>, time: f64, h: f64) -> State<D>
    where
        M: Model<D>;
}

impl<S: Stepper> Stepper for &S {
    fn order(&self) -> u32 {
        (**self).order()
    }

    fn step<M, const D: usize>(&self, model: &M, state: &State<D>, time: f64, h: f64) -> State<D>
    where
        M: Model<D>,
    {
        (**self).step(model, state, time, h)
    }
}
