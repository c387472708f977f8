use fixstep_core::{Derivative, Model, ModelError, State};

/// A two-variable linear system with constant coefficients.
///
/// ```text
/// x' = a x + b y
/// y' = c x + d y
/// ```
///
/// The default coefficients `(1, -3, -3, 1)` give `x' = x - 3y`,
/// `y' = -3x + y`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Linear2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Linear2D {
    /// Creates a system from its coefficient matrix, row by row.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
}

impl Default for Linear2D {
    fn default() -> Self {
        Self::new(1.0, -3.0, -3.0, 1.0)
    }
}

impl Model<2> for Linear2D {
    fn derivatives(&self, state: &State<2>, _time: f64) -> Derivative<2> {
        let [x, y] = *state.components();
        Derivative::new([self.a * x + self.b * y, self.c * x + self.d * y])
    }

    fn validate(&self) -> Result<(), ModelError> {
        ModelError::check_finite("a", self.a)?;
        ModelError::check_finite("b", self.b)?;
        ModelError::check_finite("c", self.c)?;
        ModelError::check_finite("d", self.d)
    }
}
