//! Error evaluation against exact solutions.
//!
//! When a model has a closed-form solution, the error of a numerical
//! trajectory is measured pointwise at every grid time:
//!
//! ```text
//! e_n = |x_n - x(t_n)|
//! ```
//!
//! along with the maximum `max_n e_n` over the run. Comparing that maximum
//! across step counts shows a scheme's order of accuracy; see
//! [`observed_order`].

mod report;

pub use report::ErrorReport;

use fixstep_core::{ClosedForm, Config, ExactSolution, ModelError, State};

use crate::{
    Stepper, Trajectory,
    fixed_step::{self, Error},
};

use report::nan_max;

/// Compares a trajectory with an exact solution at every point.
///
/// This is a pure function of its inputs; NaN differences propagate into
/// the report's maximum.
#[must_use]
pub fn evaluate<E, const D: usize>(trajectory: &Trajectory<D>, exact: &E) -> ErrorReport<D>
where
    E: ExactSolution<D>,
{
    let (exact_states, errors) = trajectory
        .iter()
        .map(|point| {
            let expected = exact.at(point.time);
            (expected, pointwise_error(&point.state, &expected))
        })
        .unzip();

    let report = ErrorReport::new(exact_states, errors);
    log::debug!(
        "max error {:e} at step {} of {}",
        report.max_error(),
        report.worst_step(),
        trajectory.len() - 1,
    );
    report
}

/// Compares a trajectory with its model's closed-form solution.
///
/// The exact solution is taken through the trajectory's first point and
/// must be defined up to its last time.
///
/// # Errors
///
/// Returns a [`ModelError`] if the closed form is undefined for the
/// trajectory's initial point or span.
pub fn evaluate_closed_form<M, const D: usize>(
    model: &M,
    trajectory: &Trajectory<D>,
) -> Result<ErrorReport<D>, ModelError>
where
    M: ClosedForm<D>,
{
    let first = trajectory.first();
    let solution = model.solution(&first.state, first.time, trajectory.last().time)?;
    Ok(evaluate(trajectory, &solution))
}

/// Integrates a model with a closed form and evaluates the result.
///
/// The exact solution is built and checked before integration starts, so an
/// initial condition that makes it undefined is reported without running
/// the loop.
///
/// # Errors
///
/// Returns an error if the configuration or model is invalid, including a
/// closed form that is undefined on `[t0, t1]`.
pub fn solve_and_evaluate<M, S, const D: usize>(
    model: &M,
    stepper: &S,
    config: &Config,
    initial: State<D>,
) -> Result<(Trajectory<D>, ErrorReport<D>), Error>
where
    M: ClosedForm<D>,
    S: Stepper,
{
    let solution = model.solution(&initial, config.t0(), config.t1())?;
    let trajectory = fixed_step::solve_unobserved(model, stepper, config, initial)?.trajectory;
    let report = evaluate(&trajectory, &solution);

    Ok((trajectory, report))
}

/// Estimates the order of accuracy from two maximum errors.
///
/// `refinement` is the ratio of the step sizes, coarse over fine. Halving
/// the step gives `refinement = 2`, and a scheme of order `p` then reduces
/// its error by about `2^p`.
#[must_use]
pub fn observed_order(coarse_error: f64, fine_error: f64, refinement: f64) -> f64 {
    (coarse_error / fine_error).ln() / refinement.ln()
}

/// Returns the largest absolute component difference.
fn pointwise_error<const D: usize>(numerical: &State<D>, exact: &State<D>) -> f64 {
    numerical
        .components()
        .iter()
        .zip(exact.components())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, nan_max)
}
