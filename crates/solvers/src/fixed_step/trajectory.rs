use std::{ops::Index, slice};

use fixstep_core::State;

/// A state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const D: usize> {
    pub time: f64,
    pub state: State<D>,
}

impl<const D: usize> Point<D> {
    /// Creates a point from a time and state.
    #[must_use]
    pub fn new(time: f64, state: State<D>) -> Self {
        Self { time, state }
    }
}

/// The ordered points produced by one integration run.
///
/// A trajectory always starts with the initial point and its times are
/// ascending. It cannot be modified after the integrator builds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const D: usize> {
    points: Vec<Point<D>>,
}

impl<const D: usize> Trajectory<D> {
    /// Builds a trajectory from a non-empty, time-ascending point list.
    pub(crate) fn new(points: Vec<Point<D>>) -> Self {
        debug_assert!(!points.is_empty(), "trajectory must contain the initial point");
        Self { points }
    }

    /// Returns the number of points, which is one more than the step count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a trajectory holds at least its initial point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the initial point.
    #[must_use]
    pub fn first(&self) -> &Point<D> {
        &self.points[0]
    }

    /// Returns the final point.
    #[must_use]
    pub fn last(&self) -> &Point<D> {
        &self.points[self.points.len() - 1]
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point<D>] {
        &self.points
    }

    /// Returns an iterator over the points in time order.
    pub fn iter(&self) -> slice::Iter<'_, Point<D>> {
        self.points.iter()
    }

    /// Returns the times `t_0, ..., t_N`.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.time)
    }

    /// Returns the values of component `index` along the trajectory.
    ///
    /// # Panics
    ///
    /// Panics while iterating if `index >= D`.
    pub fn component(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(move |point| point.state[index])
    }

    /// Returns the index of the first point with a non-finite component.
    ///
    /// Explicit schemes can diverge when the step is too large for the
    /// problem; this is how a caller detects it.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.points.iter().position(|point| !point.state.is_finite())
    }
}

impl<const D: usize> Index<usize> for Trajectory<D> {
    type Output = Point<D>;

    fn index(&self, index: usize) -> &Point<D> {
        &self.points[index]
    }
}

impl<'a, const D: usize> IntoIterator for &'a Trajectory<D> {
    type Item = &'a Point<D>;
    type IntoIter = slice::Iter<'a, Point<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
