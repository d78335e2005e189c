//! Scalar summaries of prior and posterior distributions
//!
//! All summaries come from the closed-form moment and quantile formulas of
//! the distribution families; nothing here integrates numerically over a
//! grid.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::traits::{Cdf, InverseCdf, Mean, Variance};

/// Default coverage level for credible intervals
pub const DEFAULT_LEVEL: f64 = 0.95;

/// An equal-tailed credible interval.
///
/// At level `c` the interval spans the (1-c)/2 and (1+c)/2 quantiles of
/// the posterior, so it always excludes equal probability in both tails.
/// (Highest-density intervals would differ for skewed posteriors; this
/// crate uses equal tails throughout.)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct CredibleInterval {
    /// Lower interval endpoint
    pub lower: f64,
    /// Upper interval endpoint
    pub upper: f64,
    /// Coverage level in (0, 1)
    pub level: f64,
}

/// A one-sided upper tail probability, Pr(θ ≥ threshold)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct TailProbability {
    /// The threshold the parameter is compared against
    pub threshold: f64,
    /// Pr(θ ≥ threshold)
    pub prob: f64,
}

/// Scalar summaries of a conjugate update: prior and posterior moments,
/// plus optional interval and tail-probability annotations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct PosteriorSummary {
    /// Prior mean
    pub prior_mean: f64,
    /// Prior standard deviation
    pub prior_sd: f64,
    /// Posterior mean
    pub posterior_mean: f64,
    /// Posterior standard deviation
    pub posterior_sd: f64,
    /// Equal-tailed credible interval of the posterior
    pub interval: Option<CredibleInterval>,
    /// Upper tail probability of the posterior
    pub tail: Option<TailProbability>,
}

/// Summarize prior and posterior moments using their closed forms
///
/// Returns `None` if either distribution has no defined mean or variance.
pub fn summarize<D>(prior: &D, posterior: &D) -> Option<PosteriorSummary>
where
    D: Mean<f64> + Variance<f64>,
{
    let prior_mean = prior.mean()?;
    let prior_sd = prior.variance()?.sqrt();
    let posterior_mean = posterior.mean()?;
    let posterior_sd = posterior.variance()?.sqrt();

    Some(PosteriorSummary {
        prior_mean,
        prior_sd,
        posterior_mean,
        posterior_sd,
        interval: None,
        tail: None,
    })
}

/// Equal-tailed credible interval of a distribution at coverage `level`
///
/// # Panics
/// If `level` is outside (0, 1).
pub fn equal_tailed_interval<D>(dist: &D, level: f64) -> CredibleInterval
where
    D: InverseCdf<f64>,
{
    assert!(0.0 < level && level < 1.0, "level out of range");
    let (lower, upper) = dist.interval(level);
    CredibleInterval {
        lower,
        upper,
        level,
    }
}

/// Upper tail probability Pr(θ ≥ threshold) of a distribution
pub fn tail_probability<D>(dist: &D, threshold: f64) -> TailProbability
where
    D: Cdf<f64>,
{
    TailProbability {
        threshold,
        prob: dist.sf(&threshold),
    }
}

impl PosteriorSummary {
    /// Attach an equal-tailed credible interval of `posterior` at `level`
    #[must_use]
    pub fn with_interval<D>(mut self, posterior: &D, level: f64) -> Self
    where
        D: InverseCdf<f64>,
    {
        self.interval = Some(equal_tailed_interval(posterior, level));
        self
    }

    /// Attach the upper tail probability of `posterior` at `threshold`
    #[must_use]
    pub fn with_tail<D>(mut self, posterior: &D, threshold: f64) -> Self
    where
        D: Cdf<f64>,
    {
        self.tail = Some(tail_probability(posterior, threshold));
        self
    }
}
