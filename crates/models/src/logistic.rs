use fixstep_core::{ClosedForm, Derivative, ExactSolution, Model, ModelError, State};

/// The scalar logistic equation `x' = x - x²`.
///
/// Its initial-value problem through `(t0, x0)` has the closed form
///
/// ```text
/// x(t) = C e^(t - t0) / (1 + C e^(t - t0)),   C = x0 / (1 - x0)
/// ```
///
/// which is undefined for `x0 = 1` and has a pole at `t0 + ln(-1 / C)` when
/// `x0 < 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Logistic;

impl Model<1> for Logistic {
    fn derivatives(&self, state: &State<1>, _time: f64) -> Derivative<1> {
        let x = state.value();
        Derivative::scalar(x - x * x)
    }
}

/// The closed-form solution of [`Logistic`] through a given initial point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticSolution {
    c: f64,
    t0: f64,
}

impl LogisticSolution {
    /// Returns the integration constant `C = x0 / (1 - x0)`.
    #[must_use]
    pub fn constant(&self) -> f64 {
        self.c
    }
}

impl ExactSolution<1> for LogisticSolution {
    fn at(&self, time: f64) -> State<1> {
        let growth = self.c * (time - self.t0).exp();
        State::scalar(growth / (1.0 + growth))
    }
}

impl ClosedForm<1> for Logistic {
    type Solution = LogisticSolution;

    fn solution(
        &self,
        initial: &State<1>,
        t0: f64,
        t1: f64,
    ) -> Result<LogisticSolution, ModelError> {
        let x0 = initial.value();
        ModelError::check_finite("x0", x0)?;

        if x0 == 1.0 {
            return Err(ModelError::UndefinedSolution {
                reason: "x0 = 1 makes C = x0 / (1 - x0) infinite",
            });
        }

        let c = x0 / (1.0 - x0);

        // 1 + C e^s = 0 has a root s = ln(-1 / C) only when C < 0.
        if c < 0.0 {
            let pole = t0 + (-1.0 / c).ln();
            if (t0..=t1).contains(&pole) {
                return Err(ModelError::Singularity { time: pole });
            }
        }

        Ok(LogisticSolution { c, t0 })
    }
}
