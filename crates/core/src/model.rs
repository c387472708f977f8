use crate::{Derivative, ModelError, State};

/// The right-hand side of an ODE system `x' = f(t, x)` with `D` components.
///
/// Models are pure and stateless: the same state and time always produce
/// the same derivative, and evaluation never fails. Parameters that would
/// make the right-hand side undefined are rejected by [`Model::validate`]
/// before integration starts, not while stepping.
pub trait Model<const D: usize> {
    /// Evaluates the derivative of every component at `(time, state)`.
    fn derivatives(&self, state: &State<D>, time: f64) -> Derivative<D>;

    /// Checks the model parameters.
    ///
    /// The default implementation accepts every model. Only implement this
    /// method if your model has parameters that can be invalid.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if a parameter makes the right-hand side
    /// undefined.
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

impl<M, const D: usize> Model<D> for &M
where
    M: Model<D> + ?Sized,
{
    fn derivatives(&self, state: &State<D>, time: f64) -> Derivative<D> {
        (**self).derivatives(state, time)
    }

    fn validate(&self) -> Result<(), ModelError> {
        (**self).validate()
    }
}

/// An exact solution `x(t)` that can be evaluated at any time in its range.
///
/// Closures of the form `Fn(f64) -> State<D>` implement this trait, so an
/// ad hoc solution can be passed wherever one is expected.
pub trait ExactSolution<const D: usize> {
    /// Evaluates the exact solution at `time`.
    fn at(&self, time: f64) -> State<D>;
}

impl<F, const D: usize> ExactSolution<D> for F
where
    F: Fn(f64) -> State<D>,
{
    fn at(&self, time: f64) -> State<D> {
        self(time)
    }
}

/// A model whose initial-value problem has a known closed-form solution.
pub trait ClosedForm<const D: usize>: Model<D> {
    /// The exact solution type.
    type Solution: ExactSolution<D>;

    /// Returns the exact solution through `(t0, initial)`, valid on `[t0, t1]`.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the closed form is undefined for this
    /// initial condition or has a singularity within `[t0, t1]`.
    fn solution(
        &self,
        initial: &State<D>,
        t0: f64,
        t1: f64,
    ) -> Result<Self::Solution, ModelError>;
}
