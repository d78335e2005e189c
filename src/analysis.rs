//! End-to-end conjugate analyses
//!
//! One routine per model family, mirroring the two-stage shape shared by
//! all three: validate the sample, run the closed-form conjugate update
//! once, then derive scalar summaries and density curves from the prior
//! and posterior hyperparameters. Data loading and drawing stay outside;
//! callers pass an in-memory sample and an evaluation grid and receive
//! plain values back.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::curve::DensityCurves;
use crate::data::{Booleable, DataOrSuffStat};
use crate::dist::{Bernoulli, Beta, Gamma, Gaussian, GaussianMean, Poisson};
use crate::summary::{summarize, PosteriorSummary};
use crate::traits::ConjugatePrior;

pub use crate::summary::DEFAULT_LEVEL;

/// Error from an analysis routine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum AnalysisError {
    /// A report parameter (coverage level, threshold) is outside its legal
    /// range
    InvalidParameter { name: &'static str, value: f64 },
    /// An observation lies outside the support of the likelihood family
    InvalidInput { index: usize, value: f64 },
}

impl std::error::Error for AnalysisError {}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name}: {value}")
            }
            Self::InvalidInput { index, value } => {
                write!(
                    f,
                    "observation {value} at index {index} lies outside the \
                     support of the model"
                )
            }
        }
    }
}

/// Everything a renderer or report needs from one conjugate update: the
/// posterior distribution, the scalar summary, and the density curves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct ConjugateReport<D> {
    /// Posterior distribution over the model parameter
    pub posterior: D,
    /// Prior and posterior scalar summaries
    pub summary: PosteriorSummary,
    /// Prior/likelihood/posterior densities over the caller's grid
    pub curves: DensityCurves,
}

fn validate_level(level: f64) -> Result<(), AnalysisError> {
    if 0.0 < level && level < 1.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidParameter {
            name: "level",
            value: level,
        })
    }
}

/// Analyze the mean of a Gaussian with known observation variance.
///
/// Computes the posterior over the mean, a summary with an equal-tailed
/// credible interval at `level` and (if `threshold` is given) the tail
/// probability Pr(mean ≥ threshold | data), and density curves over
/// `grid`. An empty grid yields empty curves.
///
/// # Example
///
/// ```
/// use conjugate::analysis::{gaussian_mean, DEFAULT_LEVEL};
/// use conjugate::curve::linspace;
/// use conjugate::dist::GaussianMean;
///
/// let data = [15.77, 20.5, 8.26, 14.37, 21.09];
/// let prior = GaussianMean::new(20.0, 5.0, 5.0).unwrap();
/// let grid = linspace(0.0, 40.0, 200);
///
/// let report =
///     gaussian_mean(&data, &prior, DEFAULT_LEVEL, Some(20.0), &grid)
///         .unwrap();
///
/// assert!((report.posterior.mu() - 16.665).abs() < 1E-9);
/// assert!(report.summary.tail.unwrap().prob < 0.5);
/// ```
pub fn gaussian_mean(
    data: &[f64],
    prior: &GaussianMean,
    level: f64,
    threshold: Option<f64>,
    grid: &[f64],
) -> Result<ConjugateReport<GaussianMean>, AnalysisError> {
    validate_level(level)?;
    if let Some(t) = threshold {
        if !t.is_finite() {
            return Err(AnalysisError::InvalidParameter {
                name: "threshold",
                value: t,
            });
        }
    }
    for (index, x) in data.iter().enumerate() {
        if !x.is_finite() {
            return Err(AnalysisError::InvalidInput { index, value: *x });
        }
    }

    let obs: DataOrSuffStat<f64, Gaussian> = DataOrSuffStat::Data(data);
    let posterior = prior.posterior(&obs);
    let likelihood = prior.likelihood_density(&obs);

    let mut summary = summarize(prior, &posterior)
        .expect("Gaussian moments are defined")
        .with_interval(&posterior, level);
    if let Some(t) = threshold {
        summary = summary.with_tail(&posterior, t);
    }

    let curves =
        DensityCurves::compute(grid, prior, likelihood.as_ref(), &posterior);

    Ok(ConjugateReport {
        posterior,
        summary,
        curves,
    })
}

/// Analyze a Poisson rate under a Gamma prior.
///
/// Counts are unsigned, so every sample value is in the support. The
/// summary carries an equal-tailed credible interval at `level`.
///
/// # Example
///
/// ```
/// use conjugate::analysis::{poisson_rate, DEFAULT_LEVEL};
/// use conjugate::curve::linspace;
/// use conjugate::dist::Gamma;
///
/// let counts: Vec<u32> = vec![3, 5, 2, 4];
/// let prior = Gamma::new(2.0, 0.5).unwrap();
/// let grid = linspace(0.0, 10.0, 200);
///
/// let report =
///     poisson_rate(&counts, &prior, DEFAULT_LEVEL, &grid).unwrap();
///
/// assert_eq!(report.posterior.shape(), 16.0);
/// assert_eq!(report.posterior.rate(), 4.5);
/// ```
pub fn poisson_rate(
    data: &[u32],
    prior: &Gamma,
    level: f64,
    grid: &[f64],
) -> Result<ConjugateReport<Gamma>, AnalysisError> {
    validate_level(level)?;

    let obs: DataOrSuffStat<u32, Poisson> = DataOrSuffStat::Data(data);
    let posterior = prior.posterior(&obs);
    let likelihood = prior.likelihood_density(&obs);

    let summary = summarize(prior, &posterior)
        .expect("Gamma moments are defined")
        .with_interval(&posterior, level);

    let curves =
        DensityCurves::compute(grid, prior, likelihood.as_ref(), &posterior);

    Ok(ConjugateReport {
        posterior,
        summary,
        curves,
    })
}

/// Analyze a Bernoulli success probability under a Beta prior.
///
/// Observations may be `bool`s or integers; any integer other than 0 or 1
/// fails with [`AnalysisError::InvalidInput`] before the update runs. The
/// summary carries an equal-tailed credible interval at `level`.
///
/// # Example
///
/// ```
/// use conjugate::analysis::{bernoulli_probability, DEFAULT_LEVEL};
/// use conjugate::curve::linspace;
/// use conjugate::dist::Beta;
///
/// let outcomes: Vec<u8> = vec![0, 1, 0, 0, 1, 0, 1, 0, 1, 0];
/// let prior = Beta::new(1.0, 5.0).unwrap();
/// let grid = linspace(0.0, 1.0, 200);
///
/// let report =
///     bernoulli_probability(&outcomes, &prior, DEFAULT_LEVEL, &grid)
///         .unwrap();
///
/// assert_eq!(report.posterior.alpha(), 5.0);
/// assert_eq!(report.posterior.beta(), 11.0);
/// ```
pub fn bernoulli_probability<X: Booleable>(
    data: &[X],
    prior: &Beta,
    level: f64,
    grid: &[f64],
) -> Result<ConjugateReport<Beta>, AnalysisError> {
    validate_level(level)?;
    for (index, x) in data.iter().enumerate() {
        if x.try_into_bool().is_none() {
            return Err(AnalysisError::InvalidInput {
                index,
                value: x.as_f64(),
            });
        }
    }

    let obs: DataOrSuffStat<X, Bernoulli> = DataOrSuffStat::Data(data);
    let posterior = prior.posterior(&obs);
    let likelihood = prior.likelihood_density(&obs);

    let summary = summarize(prior, &posterior)
        .expect("Beta moments are defined")
        .with_interval(&posterior, level);

    let curves =
        DensityCurves::compute(grid, prior, likelihood.as_ref(), &posterior);

    Ok(ConjugateReport {
        posterior,
        summary,
        curves,
    })
}
