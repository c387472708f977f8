//! Fixed-step integration driver.
//!
//! This module applies a [`Stepper`] over the grid described by a
//! [`Config`], producing a [`Trajectory`] with one point per grid time:
//!
//! ```text
//! h   = (t1 - t0) / N
//! t_n = t0 + n h
//! x_n = step(x_{n-1}, t_{n-1}, h)       for n = 1..N
//! ```
//!
//! # Update policy
//!
//! Within each step the config's [`UpdatePolicy`] decides which components
//! see already advanced siblings. Each stage of the policy runs the stepper
//! from the partially advanced state and keeps only the stage's components.
//! The default, [`UpdatePolicy::Simultaneous`], is a single stage: every
//! component is computed from the step-`n` values.
//!
//! [`UpdatePolicy`]: fixstep_core::UpdatePolicy
//! [`UpdatePolicy::Simultaneous`]: fixstep_core::UpdatePolicy::Simultaneous
//!
//! # Errors and divergence
//!
//! Only configuration problems are errors, and they are reported before the
//! first step. A scheme that diverges (for example, a step size too large
//! for the problem) produces non-finite states that are kept in the
//! trajectory; see [`Trajectory::first_non_finite`].
//!
//! # Example
//!
//! ```ignore
//! use fixstep_solvers::{Rk4, fixed_step};
//!
//! let config = Config::new(0.0, 5.0, 1000)?;
//! let solution = fixed_step::solve_unobserved(&model, &Rk4, &config, initial)?;
//!
//! for point in &solution.trajectory {
//!     println!("t={}: {:?}", point.time, point.state);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;
mod trajectory;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use trajectory::{Point, Trajectory};

use std::ops::Range;

use fixstep_core::{Config, Model, Observer, State};

use crate::Stepper;

/// Integrates `model` from `initial` over the grid of `config`.
///
/// # Algorithm
///
/// 1. Validate the model parameters, the initial state, and the update
///    policy against the state dimension.
/// 2. Record `(t0, initial)` and emit it to the observer.
/// 3. For each step `n = 1..N`:
///    - Advance the previous state from `t_{n-1}` by `h`, stage by stage.
///    - Record `(t_n, x_n)` and emit it to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 4. Return the solution with the full trajectory.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial point and after each
/// step, and may return [`Action::StopEarly`] to end the run early.
///
/// # Errors
///
/// Returns an error if the model parameters are invalid, the initial state
/// has a non-finite component, or the update policy does not fit a
/// `D`-component state.
pub fn solve<M, S, Obs, const D: usize>(
    model: &M,
    stepper: &S,
    config: &Config,
    initial: State<D>,
    mut observer: Obs,
) -> Result<Solution<D>, Error>
where
    M: Model<D>,
    S: Stepper,
    Obs: Observer<Event<D>, Action>,
{
    model.validate()?;
    if let Some((index, &value)) = initial
        .components()
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
    {
        return Err(Error::NonFiniteInitialState { index, value });
    }
    let stages = config.policy().stages(D)?;

    let h = config.step_size();
    log::debug!(
        "integrating {}-component state over [{}, {}] in {} steps (h = {h}, order {})",
        D,
        config.t0(),
        config.t1(),
        config.steps(),
        stepper.order(),
    );

    let initial = Point::new(config.t0(), initial);
    let mut points = Vec::new();
    if points.try_reserve_exact(config.steps() + 1).is_err() {
        log::debug!("cannot preallocate {} points, growing on demand", config.steps() + 1);
    }
    points.push(initial);

    let event = Event {
        step: 0,
        point: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory: Trajectory::new(points),
            steps: 0,
        });
    }

    let mut current = initial;
    let mut diverged = false;

    for step in 1..=config.steps() {
        let state = advance(model, stepper, &current, h, &stages);
        let next = Point::new(config.time_at(step), state);

        if !diverged && !state.is_finite() {
            diverged = true;
            log::warn!(
                "state became non-finite at step {step} (t = {}); the step size may be too large",
                next.time
            );
        }

        points.push(next);

        let event = Event { step, point: next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("observer stopped integration after step {step}");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory: Trajectory::new(points),
                steps: step,
            });
        }

        current = next;
    }

    log::debug!(
        "completed {} steps, final state {:?}",
        config.steps(),
        current.state.components()
    );
    Ok(Solution {
        status: Status::Complete,
        trajectory: Trajectory::new(points),
        steps: config.steps(),
    })
}

/// Integrates `model` from `initial` over the grid of `config` without
/// observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the configuration is invalid; see [`solve`].
pub fn solve_unobserved<M, S, const D: usize>(
    model: &M,
    stepper: &S,
    config: &Config,
    initial: State<D>,
) -> Result<Solution<D>, Error>
where
    M: Model<D>,
    S: Stepper,
{
    solve(model, stepper, config, initial, ())
}

/// Advances one step, applying the update policy's stages in order.
///
/// A single stage covering every component is exactly one stepper call.
fn advance<M, S, const D: usize>(
    model: &M,
    stepper: &S,
    current: &Point<D>,
    h: f64,
    stages: &[Range<usize>],
) -> State<D>
where
    M: Model<D>,
    S: Stepper,
{
    stages.iter().fold(current.state, |partial, stage| {
        let candidate = stepper.step(model, &partial, current.time, h);
        partial.merge(&candidate, |k| stage.contains(&k))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use fixstep_core::{ConfigError, Derivative, ModelError, UpdatePolicy};

    use crate::{
        Euler, Heun, Rk4,
        test_utils::{Decay, Rotation},
    };

    /// Decay with a rate that must be finite.
    struct CheckedDecay {
        k: f64,
    }

    impl Model<1> for CheckedDecay {
        fn derivatives(&self, state: &State<1>, _time: f64) -> Derivative<1> {
            Derivative::scalar(-self.k * state.value())
        }

        fn validate(&self) -> Result<(), ModelError> {
            ModelError::check_finite("k", self.k)
        }
    }

    #[test]
    fn trajectory_has_one_point_per_grid_time() {
        let config = Config::new(0.0, 1.0, 10).unwrap();

        let solution =
            solve_unobserved(&Decay { k: 1.0 }, &Euler, &config, State::scalar(1.0)).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.trajectory.len(), 11);
        assert_eq!(solution.trajectory.first().time, 0.0);
        assert_eq!(solution.trajectory.last().time, 1.0);
        for (n, time) in solution.trajectory.times().enumerate() {
            assert_eq!(time, config.time_at(n));
        }
    }

    #[test]
    fn euler_decay_is_geometric() {
        let config = Config::new(0.0, 1.0, 4).unwrap();

        let solution =
            solve_unobserved(&Decay { k: 1.0 }, &Euler, &config, State::scalar(1.0)).unwrap();

        // Each step multiplies by (1 - h) = 0.75.
        assert_relative_eq!(solution.trajectory.last().state.value(), 0.75_f64.powi(4));
    }

    #[test]
    fn single_step_run() {
        let config = Config::new(0.0, 0.1, 1).unwrap();

        let solution =
            solve_unobserved(&Decay { k: 2.0 }, &Heun, &config, State::scalar(1.0)).unwrap();

        assert_eq!(solution.trajectory.len(), 2);
        assert_eq!(
            solution.trajectory[1].state,
            Heun.step(&Decay { k: 2.0 }, &State::scalar(1.0), 0.0, 0.1)
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let config = Config::new(0.0, 3.0, 300).unwrap();
        let initial = State::new([1.0, 0.0]);

        let first = solve_unobserved(&Rotation, &Rk4, &config, initial).unwrap();
        let second = solve_unobserved(&Rotation, &Rk4, &config, initial).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn simultaneous_uses_step_n_values() {
        let config = Config::new(0.0, 0.5, 1).unwrap();

        let solution =
            solve_unobserved(&Rotation, &Euler, &config, State::new([1.0, 0.0])).unwrap();

        assert_eq!(solution.trajectory[1].state, State::new([1.0, 0.5]));
    }

    #[test]
    fn sequential_chained_feeds_updated_components_forward() {
        let config = Config::new(0.0, 0.5, 1)
            .unwrap()
            .with_policy(UpdatePolicy::SequentialChained);

        let solution =
            solve_unobserved(&Rotation, &Euler, &config, State::new([0.0, 1.0])).unwrap();

        // x = 0 + 0.5 * (-1) = -0.5, then y = 1 + 0.5 * (-0.5) with the new x.
        assert_eq!(solution.trajectory[1].state, State::new([-0.5, 0.75]));
    }

    #[test]
    fn staged_policy_with_one_stage_matches_simultaneous() {
        let simultaneous = Config::new(0.0, 2.0, 20).unwrap();
        let staged = simultaneous
            .clone()
            .with_policy(UpdatePolicy::Staged(vec![2]));
        let initial = State::new([0.3, -0.4]);

        let a = solve_unobserved(&Rotation, &Heun, &simultaneous, initial).unwrap();
        let b = solve_unobserved(&Rotation, &Heun, &staged, initial).unwrap();

        assert_eq!(a.trajectory, b.trajectory);
    }

    #[test]
    fn observer_sees_every_point() {
        let config = Config::new(0.0, 1.0, 4).unwrap();

        let mut steps = Vec::new();
        let solution = solve(
            &Decay { k: 1.0 },
            &Euler,
            &config,
            State::scalar(1.0),
            |event: &Event<1>| {
                steps.push(event.step);
                None
            },
        )
        .unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn observer_can_stop_early() {
        let config = Config::new(0.0, 1.0, 100).unwrap();

        let observer = |event: &Event<1>| (event.step >= 5).then_some(Action::StopEarly);
        let solution = solve(&Decay { k: 1.0 }, &Euler, &config, State::scalar(1.0), observer)
            .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.trajectory.len(), 6);
    }

    #[test]
    fn huge_step_count_does_not_preallocate() {
        let config = Config::new(0.0, 1.0, usize::MAX / 2).unwrap();

        let observer = |event: &Event<1>| (event.step >= 3).then_some(Action::StopEarly);
        let solution = solve(&Decay { k: 1.0 }, &Heun, &config, State::scalar(1.0), observer)
            .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.trajectory.len(), 4);
    }

    #[test]
    fn divergence_is_recorded_not_rejected() {
        // h k = 10 makes forward Euler amplify by |1 - 10| = 9 each step.
        let config = Config::new(0.0, 1000.0, 1000).unwrap();

        let solution =
            solve_unobserved(&Decay { k: 10.0 }, &Euler, &config, State::scalar(1.0)).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.trajectory.len(), 1001);
        assert!(solution.trajectory.first_non_finite().is_some());
    }

    #[test]
    fn rejects_non_finite_initial_state() {
        let config = Config::new(0.0, 1.0, 10).unwrap();

        let err = solve_unobserved(&Rotation, &Euler, &config, State::new([0.0, f64::NAN]))
            .unwrap_err();

        assert!(matches!(err, Error::NonFiniteInitialState { index: 1, .. }));
    }

    #[test]
    fn rejects_invalid_model_parameters() {
        let config = Config::new(0.0, 1.0, 10).unwrap();

        let err = solve_unobserved(
            &CheckedDecay { k: f64::NAN },
            &Euler,
            &config,
            State::scalar(1.0),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Model(ModelError::NonFiniteParameter { name: "k", .. })
        ));
    }

    #[test]
    fn rejects_policy_that_does_not_fit_state() {
        let config = Config::new(0.0, 1.0, 10)
            .unwrap()
            .with_policy(UpdatePolicy::Staged(vec![1, 2]));

        let err = solve_unobserved(&Rotation, &Euler, &config, State::new([1.0, 0.0]))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidPolicy { dim: 2, .. })
        ));
    }
}
