use fixstep_core::{Derivative, Model, ModelError, State, UpdatePolicy};

/// The SIR epidemic model over the state `(S, I, R)`.
///
/// ```text
/// S' = -β S I
/// I' =  β S I - γ I
/// R' =  γ I
/// ```
///
/// `β` is the transmission rate and `γ` the recovery rate. The total
/// population `S + I + R` is conserved by the continuous system; a discrete
/// scheme only keeps it up to a drift that depends on the step size and
/// the update policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Sir {
    pub beta: f64,
    pub gamma: f64,
}

impl Sir {
    #[must_use]
    pub const fn new(beta: f64, gamma: f64) -> Self {
        Self { beta, gamma }
    }

    /// Returns the total population `S + I + R`.
    #[must_use]
    pub fn population(state: &State<3>) -> f64 {
        state.components().iter().sum()
    }

    /// Returns the update order of the reference SIR program.
    ///
    /// `S` and `I` advance together from the step-`n` values, then `R`
    /// advances from the already updated `I`.
    #[must_use]
    pub fn reference_policy() -> UpdatePolicy {
        UpdatePolicy::Staged(vec![2, 1])
    }
}

impl Default for Sir {
    fn default() -> Self {
        Self::new(0.1, 0.2)
    }
}

impl Model<3> for Sir {
    fn derivatives(&self, state: &State<3>, _time: f64) -> Derivative<3> {
        let [s, i, _r] = *state.components();
        let infection = self.beta * s * i;
        let recovery = self.gamma * i;

        Derivative::new([-infection, infection - recovery, recovery])
    }

    fn validate(&self) -> Result<(), ModelError> {
        ModelError::check_finite("beta", self.beta)?;
        ModelError::check_finite("gamma", self.gamma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn derivatives_balance() {
        let model = Sir::default();
        let state = State::new([1.0, 0.1, 0.0]);

        let rate = model.derivatives(&state, 0.0);

        assert_relative_eq!(rate[0], -0.01, epsilon = 1e-15);
        assert_relative_eq!(rate[1], -0.01, epsilon = 1e-15);
        assert_relative_eq!(rate[2], 0.02, epsilon = 1e-15);
        assert_relative_eq!(rate[0] + rate[1] + rate[2], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn no_infection_without_infected() {
        let rate = Sir::default().derivatives(&State::new([0.9, 0.0, 0.1]), 4.0);

        assert_eq!(rate, Derivative::new([-0.0, 0.0, 0.0]));
    }

    #[test]
    fn population_sums_compartments() {
        assert_relative_eq!(Sir::population(&State::new([1.0, 0.1, 0.0])), 1.1);
    }

    #[test]
    fn reference_policy_chains_recovered() {
        assert_eq!(
            Sir::reference_policy().stages(3).unwrap(),
            vec![0..2, 2..3]
        );
    }

    #[test]
    fn validate_rejects_non_finite_rate() {
        assert!(matches!(
            Sir::new(f64::INFINITY, 0.2).validate(),
            Err(ModelError::NonFiniteParameter { name: "beta", .. })
        ));
        assert!(Sir::default().validate().is_ok());
    }
}
