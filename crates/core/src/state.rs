use std::{
    array,
    ops::{Add, Div, Index, Mul},
};

/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets a stepper advance the type by
/// `derivative * delta`, where the derivative is taken with respect to
/// `Delta`. For ODE integration `Delta` is the time increment `h`.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

/// The state of an ODE system with `D` components.
///
/// States are plain values: every integration step produces a new one and
/// a stored state is never modified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<const D: usize>([f64; D]);

/// The rate of change of a [`State`] with `D` components.
///
/// Derivatives support addition and scaling so that stage slopes can be
/// combined into a weighted average before stepping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivative<const D: usize>([f64; D]);

impl<const D: usize> State<D> {
    /// Creates a state from its components.
    #[must_use]
    pub const fn new(components: [f64; D]) -> Self {
        Self(components)
    }

    /// Returns the components in order.
    #[must_use]
    pub const fn components(&self) -> &[f64; D] {
        &self.0
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|value| value.is_finite())
    }

    /// Returns a new state taking each component from `self` or `other`.
    ///
    /// Component `k` comes from `other` when `take_other(k)` is true.
    #[must_use]
    pub fn merge(&self, other: &Self, take_other: impl Fn(usize) -> bool) -> Self {
        Self(array::from_fn(|k| if take_other(k) { other.0[k] } else { self.0[k] }))
    }
}

impl State<1> {
    /// Creates a single-component state.
    #[must_use]
    pub const fn scalar(value: f64) -> Self {
        Self([value])
    }

    /// Returns the only component of a scalar state.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0[0]
    }
}

impl<const D: usize> From<[f64; D]> for State<D> {
    fn from(components: [f64; D]) -> Self {
        Self(components)
    }
}

impl<const D: usize> Index<usize> for State<D> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const D: usize> StepIntegrable<f64> for State<D> {
    type Derivative = Derivative<D>;

    fn step(&self, derivative: Derivative<D>, delta: f64) -> Self {
        Self(array::from_fn(|k| self.0[k] + derivative.0[k] * delta))
    }
}

impl<const D: usize> Derivative<D> {
    /// Creates a derivative from its components.
    #[must_use]
    pub const fn new(components: [f64; D]) -> Self {
        Self(components)
    }

    /// Returns the components in order.
    #[must_use]
    pub const fn components(&self) -> &[f64; D] {
        &self.0
    }
}

impl Derivative<1> {
    /// Creates a single-component derivative.
    #[must_use]
    pub const fn scalar(value: f64) -> Self {
        Self([value])
    }
}

impl<const D: usize> Index<usize> for Derivative<D> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const D: usize> Add for Derivative<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(array::from_fn(|k| self.0[k] + rhs.0[k]))
    }
}

impl<const D: usize> Mul<f64> for Derivative<D> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(array::from_fn(|k| self.0[k] * rhs))
    }
}

impl<const D: usize> Div<f64> for Derivative<D> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(array::from_fn(|k| self.0[k] / rhs))
    }
}
