use fixstep_core::State;

/// Pointwise comparison of a trajectory against an exact solution.
///
/// `exact` and `errors` run parallel to the trajectory: entry `n` holds the
/// exact state at `t_n` and the error `e_n`, the largest absolute difference
/// over the state's components. For scalar models this is `|x_n - x(t_n)|`.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport<const D: usize> {
    exact: Vec<State<D>>,
    errors: Vec<f64>,
    max_error: f64,
    worst_step: usize,
}

impl<const D: usize> ErrorReport<D> {
    pub(super) fn new(exact: Vec<State<D>>, errors: Vec<f64>) -> Self {
        let mut worst_step = 0;
        let mut max_error = 0.0;
        for (n, &e) in errors.iter().enumerate() {
            if e.is_nan() || e > max_error {
                worst_step = n;
                max_error = e;
            }
            if max_error.is_nan() {
                break;
            }
        }

        Self {
            exact,
            errors,
            max_error,
            worst_step,
        }
    }

    /// Returns the exact state at each trajectory time.
    #[must_use]
    pub fn exact(&self) -> &[State<D>] {
        &self.exact
    }

    /// Returns the error `e_n` at each trajectory time.
    #[must_use]
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Returns `max_n e_n`, or NaN if any error is NaN.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Returns the step index where [`max_error`](Self::max_error) occurs.
    ///
    /// Ties resolve to the earliest step; a NaN error counts as the worst.
    #[must_use]
    pub fn worst_step(&self) -> usize {
        self.worst_step
    }

    /// Returns the running maximum `max_{k <= n} e_k` for each step `n`.
    pub fn running_max(&self) -> impl Iterator<Item = f64> + '_ {
        self.errors.iter().scan(0.0, |max, &e| {
            *max = nan_max(*max, e);
            Some(*max)
        })
    }
}

/// Maximum that propagates NaN, so a diverged run never reports a finite
/// maximum error.
pub(super) fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
