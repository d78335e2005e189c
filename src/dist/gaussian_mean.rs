//! Gaussian prior on the mean of a Gaussian with known observation variance
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

use crate::dist::Gaussian;
use crate::impl_display;
use crate::traits::{
    Cdf, ContinuousDistr, HasDensity, InverseCdf, Mean, Sampleable, Support,
    Variance,
};

mod gaussian_prior;

/// Gaussian distribution over the unknown mean of a Gaussian likelihood
/// whose observation standard deviation, σ, is known.
///
/// This is the conjugate prior (and posterior) of the Normal-Normal model
/// with known variance: a `Gaussian` N(μ₀, τ₀) over the mean, bundled with
/// the fixed observation σ the likelihood uses. As a distribution over the
/// mean it behaves exactly like its inner `Gaussian`.
///
/// # Example
///
/// ```
/// use conjugate::data::DataOrSuffStat;
/// use conjugate::dist::{Gaussian, GaussianMean};
/// use conjugate::traits::ConjugatePrior;
///
/// // Prior N(20, 5²) over the mean; observations have known σ = 5
/// let prior = GaussianMean::new(20.0, 5.0, 5.0).unwrap();
///
/// let data: Vec<f64> = vec![15.77];
/// let obs: DataOrSuffStat<f64, Gaussian> = DataOrSuffStat::Data(&data);
/// let posterior = prior.posterior(&obs);
///
/// // With n = 1 and τ₀ = σ, prior and datum get equal weight
/// assert!((posterior.mu() - 17.885).abs() < 1E-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct GaussianMean {
    /// Distribution over the mean
    mean_dist: Gaussian,
    /// Known observation standard deviation
    obs_sigma: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum GaussianMeanError {
    /// The mu hyperparameter is infinite or NaN
    MuNotFinite { mu: f64 },
    /// The tau hyperparameter is less than or equal to zero
    TauTooLow { tau: f64 },
    /// The tau hyperparameter is infinite or NaN
    TauNotFinite { tau: f64 },
    /// The known observation sigma is less than or equal to zero
    ObsSigmaTooLow { obs_sigma: f64 },
    /// The known observation sigma is infinite or NaN
    ObsSigmaNotFinite { obs_sigma: f64 },
}

impl GaussianMean {
    /// Create a new Gaussian-mean distribution
    ///
    /// # Arguments
    /// - mu: mean of the distribution over the unknown mean
    /// - tau: standard deviation of the distribution over the unknown mean
    /// - obs_sigma: known standard deviation of the observations
    pub fn new(
        mu: f64,
        tau: f64,
        obs_sigma: f64,
    ) -> Result<Self, GaussianMeanError> {
        if !mu.is_finite() {
            Err(GaussianMeanError::MuNotFinite { mu })
        } else if tau <= 0.0 {
            Err(GaussianMeanError::TauTooLow { tau })
        } else if !tau.is_finite() {
            Err(GaussianMeanError::TauNotFinite { tau })
        } else if obs_sigma <= 0.0 {
            Err(GaussianMeanError::ObsSigmaTooLow { obs_sigma })
        } else if !obs_sigma.is_finite() {
            Err(GaussianMeanError::ObsSigmaNotFinite { obs_sigma })
        } else {
            Ok(GaussianMean {
                mean_dist: Gaussian::new_unchecked(mu, tau),
                obs_sigma,
            })
        }
    }

    /// Creates a new GaussianMean without checking whether the parameters
    /// are valid.
    #[inline]
    pub fn new_unchecked(mu: f64, tau: f64, obs_sigma: f64) -> Self {
        GaussianMean {
            mean_dist: Gaussian::new_unchecked(mu, tau),
            obs_sigma,
        }
    }

    /// Mean of the distribution over the unknown mean, μ
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mean_dist.mu()
    }

    /// Standard deviation of the distribution over the unknown mean, τ
    #[inline]
    pub fn tau(&self) -> f64 {
        self.mean_dist.sigma()
    }

    /// Known observation standard deviation, σ
    #[inline]
    pub fn obs_sigma(&self) -> f64 {
        self.obs_sigma
    }

    /// The inner `Gaussian` over the unknown mean
    #[inline]
    pub fn mean_dist(&self) -> &Gaussian {
        &self.mean_dist
    }

    /// Weight the sample mean receives in the posterior mean for a sample
    /// of size `n`:
    ///
    /// ```math
    /// w = (n/σ²) / (n/σ² + 1/τ²)
    /// ```
    ///
    /// Always in [0, 1]; 0 for an empty sample, approaching 1 as n → ∞.
    pub fn weight(&self, n: usize) -> f64 {
        let data_prec = n as f64 / (self.obs_sigma * self.obs_sigma);
        let prior_prec = (self.tau() * self.tau()).recip();
        data_prec / (data_prec + prior_prec)
    }
}

impl From<&GaussianMean> for String {
    fn from(gm: &GaussianMean) -> String {
        format!(
            "GaussianMean(μ: {}, τ: {}, σ: {})",
            gm.mu(),
            gm.tau(),
            gm.obs_sigma
        )
    }
}

impl_display!(GaussianMean);

// As a distribution over the unknown mean, GaussianMean is its inner
// Gaussian.
impl HasDensity<f64> for GaussianMean {
    fn ln_f(&self, x: &f64) -> f64 {
        self.mean_dist.ln_f(x)
    }
}

impl Sampleable<f64> for GaussianMean {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        self.mean_dist.draw(rng)
    }
}

impl ContinuousDistr<f64> for GaussianMean {}

impl Support<f64> for GaussianMean {
    fn supports(&self, x: &f64) -> bool {
        x.is_finite()
    }
}

impl Cdf<f64> for GaussianMean {
    fn cdf(&self, x: &f64) -> f64 {
        self.mean_dist.cdf(x)
    }
}

impl InverseCdf<f64> for GaussianMean {
    fn invcdf(&self, p: f64) -> f64 {
        self.mean_dist.invcdf(p)
    }
}

impl Mean<f64> for GaussianMean {
    fn mean(&self) -> Option<f64> {
        Some(self.mu())
    }
}

impl Variance<f64> for GaussianMean {
    fn variance(&self) -> Option<f64> {
        Some(self.tau() * self.tau())
    }
}

impl std::error::Error for GaussianMeanError {}

impl fmt::Display for GaussianMeanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MuNotFinite { mu } => write!(f, "non-finite mu: {mu}"),
            Self::TauTooLow { tau } => {
                write!(f, "tau ({tau}) must be greater than zero")
            }
            Self::TauNotFinite { tau } => {
                write!(f, "non-finite tau: {tau}")
            }
            Self::ObsSigmaTooLow { obs_sigma } => {
                write!(
                    f,
                    "observation sigma ({obs_sigma}) must be greater than \
                     zero"
                )
            }
            Self::ObsSigmaNotFinite { obs_sigma } => {
                write!(f, "non-finite observation sigma: {obs_sigma}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1E-12;

    #[test]
    fn new() {
        let gm = GaussianMean::new(20.0, 5.0, 5.0).unwrap();
        assert::close(gm.mu(), 20.0, TOL);
        assert::close(gm.tau(), 5.0, TOL);
        assert::close(gm.obs_sigma(), 5.0, TOL);
    }

    #[test]
    fn new_should_reject_tau_lteq_zero() {
        assert!(GaussianMean::new(0.0, 0.0, 1.0).is_err());
        assert!(GaussianMean::new(0.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn new_should_reject_obs_sigma_lteq_zero() {
        assert!(GaussianMean::new(0.0, 1.0, 0.0).is_err());
        assert!(GaussianMean::new(0.0, 1.0, -2.5).is_err());
    }

    #[test]
    fn new_should_reject_non_finite_params() {
        assert!(GaussianMean::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(GaussianMean::new(0.0, f64::INFINITY, 1.0).is_err());
        assert!(GaussianMean::new(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn weight_of_empty_sample_is_zero() {
        let gm = GaussianMean::new(20.0, 5.0, 5.0).unwrap();
        assert::close(gm.weight(0), 0.0, TOL);
    }

    #[test]
    fn weight_with_equal_variances_is_n_over_n_plus_one() {
        let gm = GaussianMean::new(20.0, 5.0, 5.0).unwrap();
        assert::close(gm.weight(1), 0.5, TOL);
        assert::close(gm.weight(5), 5.0 / 6.0, TOL);
    }

    #[test]
    fn density_over_the_mean_matches_inner_gaussian() {
        let gm = GaussianMean::new(1.0, 2.0, 3.0).unwrap();
        let gauss = Gaussian::new(1.0, 2.0).unwrap();

        assert::close(gm.ln_f(&0.5), gauss.ln_f(&0.5_f64), TOL);
        assert::close(gm.cdf(&0.5), gauss.cdf(&0.5_f64), TOL);
    }

    #[test]
    fn moments_come_from_the_mean_distribution() {
        let gm = GaussianMean::new(1.0, 2.0, 3.0).unwrap();
        assert::close(gm.mean().unwrap(), 1.0, TOL);
        assert::close(gm.variance().unwrap(), 4.0, TOL);
    }
}
