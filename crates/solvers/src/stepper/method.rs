use std::{fmt, str::FromStr};

use fixstep_core::{Model, State};
use thiserror::Error;

use super::{Euler, Heun, Rk4, Stepper};

/// Selects a stepper at run time.
///
/// `Method` dispatches to the matching unit stepper, so code that picks the
/// scheme from configuration can still be written against [`Stepper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// Forward Euler, first order.
    Euler,

    /// Heun's predictor-corrector, second order.
    Heun,

    /// Classical Runge-Kutta, fourth order.
    Rk4,
}

impl Method {
    /// Every method, from lowest to highest order.
    pub const ALL: [Method; 3] = [Method::Euler, Method::Heun, Method::Rk4];

    /// Returns the lowercase name used by [`Display`](fmt::Display) and
    /// [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::Heun => "heun",
            Self::Rk4 => "rk4",
        }
    }
}

impl Stepper for Method {
    fn order(&self) -> u32 {
        match self {
            Self::Euler => Euler.order(),
            Self::Heun => Heun.order(),
            Self::Rk4 => Rk4.order(),
        }
    }

    fn step<M, const D: usize>(&self, model: &M, state: &State<D>, time: f64, h: f64) -> State<D>
    where
        M: Model<D>,
    {
        match self {
            Self::Euler => Euler.step(model, state, time, h),
            Self::Heun => Heun.step(model, state, time, h),
            Self::Rk4 => Rk4.step(model, state, time, h),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized method name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method `{0}`, expected one of: euler, heun, rk4")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}
