use std::ops::Range;

use crate::ConfigError;

/// How the components of a multi-component state are advanced within a step.
///
/// Under every policy, a step is built from stages. Each stage runs the
/// stepper from the state as it stands after the earlier stages, and keeps
/// only the components that belong to the stage:
///
/// - [`Simultaneous`](Self::Simultaneous): one stage holding every
///   component, so all updates use the step-`n` values.
/// - [`SequentialChained`](Self::SequentialChained): one stage per
///   component in index order, so component `k` sees components `0..k`
///   already advanced.
/// - [`Staged`](Self::Staged): ordered groups of contiguous components,
///   simultaneous within a group and chained across groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum UpdatePolicy {
    #[default]
    Simultaneous,
    SequentialChained,
    /// Stage sizes in component order; they must be non-zero and sum to the
    /// state dimension.
    Staged(Vec<usize>),
}

impl UpdatePolicy {
    /// Resolves the policy into component ranges for a `dim`-component state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPolicy`] if a `Staged` policy has an
    /// empty stage or its sizes do not cover exactly `dim` components.
    pub fn stages(&self, dim: usize) -> Result<Vec<Range<usize>>, ConfigError> {
        match self {
            Self::Simultaneous => Ok(vec![0..dim]),
            Self::SequentialChained => Ok((0..dim).map(|k| k..k + 1).collect()),
            Self::Staged(sizes) => {
                if sizes.contains(&0) {
                    return Err(ConfigError::InvalidPolicy {
                        dim,
                        reason: "stages must not be empty",
                    });
                }
                if sizes.iter().sum::<usize>() != dim {
                    return Err(ConfigError::InvalidPolicy {
                        dim,
                        reason: "stage sizes must sum to the state dimension",
                    });
                }

                let mut start = 0;
                Ok(sizes
                    .iter()
                    .map(|size| {
                        let stage = start..start + size;
                        start += size;
                        stage
                    })
                    .collect())
            }
        }
    }
}
