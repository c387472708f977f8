use super::Point;

/// Event emitted by the integrator for each point of the trajectory.
///
/// Step 0 is the initial point before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const D: usize> {
    /// The step number (0 for the initial point).
    pub step: usize,

    /// The point just appended to the trajectory.
    pub point: Point<D>,
}
