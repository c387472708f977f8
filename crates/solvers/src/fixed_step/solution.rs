use super::Trajectory;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const D: usize> {
    /// How the integrator terminated.
    pub status: Status,

    /// The computed points, starting with the initial state.
    pub trajectory: Trajectory<D>,

    /// Number of integration steps completed.
    pub steps: usize,
}
