use fixstep_core::{Derivative, Model, ModelError, State};

/// The Lotka-Volterra predator-prey system.
///
/// ```text
/// x' =  α x - β x y     (prey)
/// y' = -γ y + δ x y     (predator)
/// ```
///
/// With the default unit coefficients this is `x' = x - xy`,
/// `y' = -y + xy`. Populations are not clamped at zero, so a step that is
/// too large can drive a component negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct LotkaVolterra {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
}

impl LotkaVolterra {
    #[must_use]
    pub const fn new(alpha: f64, beta: f64, gamma: f64, delta: f64) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            delta,
        }
    }

    /// Returns the quantity conserved along exact trajectories.
    ///
    /// `V = δx - γ ln x + βy - α ln y` is constant for the continuous system,
    /// so its drift along a numerical trajectory measures the scheme's error.
    /// Only defined for positive populations; otherwise the result is NaN.
    #[must_use]
    pub fn invariant(&self, state: &State<2>) -> f64 {
        let [x, y] = *state.components();
        self.delta * x - self.gamma * x.ln() + self.beta * y - self.alpha * y.ln()
    }
}

impl Default for LotkaVolterra {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}

impl Model<2> for LotkaVolterra {
    fn derivatives(&self, state: &State<2>, _time: f64) -> Derivative<2> {
        let [x, y] = *state.components();
        Derivative::new([
            self.alpha * x - self.beta * x * y,
            -self.gamma * y + self.delta * x * y,
        ])
    }

    fn validate(&self) -> Result<(), ModelError> {
        ModelError::check_finite("alpha", self.alpha)?;
        ModelError::check_finite("beta", self.beta)?;
        ModelError::check_finite("gamma", self.gamma)?;
        ModelError::check_finite("delta", self.delta)
    }
}
