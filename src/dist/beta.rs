//! Beta distribution over x in (0, 1)
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use rand_distr::Beta as RBeta;
use special::Beta as SBeta;
use std::fmt;

use crate::impl_display;
use crate::traits::{
    Cdf, ContinuousDistr, HasDensity, InverseCdf, Mean, Sampleable, Support,
    Variance,
};

mod bernoulli_prior;

/// [Beta distribution](https://en.wikipedia.org/wiki/Beta_distribution),
/// Beta(α, β) over x in (0, 1).
///
/// # Example
///
/// ```
/// use conjugate::dist::Beta;
/// use conjugate::traits::*;
///
/// let beta = Beta::new(2.0, 2.0).unwrap();
///
/// // Symmetric around 1/2
/// assert!((beta.cdf(&0.5_f64) - 0.5).abs() < 1E-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum BetaError {
    /// The alpha parameter is less than or equal to zero
    AlphaTooLow { alpha: f64 },
    /// The alpha parameter is infinite or NaN
    AlphaNotFinite { alpha: f64 },
    /// The beta parameter is less than or equal to zero
    BetaTooLow { beta: f64 },
    /// The beta parameter is infinite or NaN
    BetaNotFinite { beta: f64 },
}

impl Beta {
    /// Create a new `Beta` distribution with shape parameters α and β
    pub fn new(alpha: f64, beta: f64) -> Result<Self, BetaError> {
        if alpha <= 0.0 {
            Err(BetaError::AlphaTooLow { alpha })
        } else if !alpha.is_finite() {
            Err(BetaError::AlphaNotFinite { alpha })
        } else if beta <= 0.0 {
            Err(BetaError::BetaTooLow { beta })
        } else if !beta.is_finite() {
            Err(BetaError::BetaNotFinite { beta })
        } else {
            Ok(Beta { alpha, beta })
        }
    }

    /// Creates a new Beta without checking whether the parameters are valid
    #[inline]
    pub fn new_unchecked(alpha: f64, beta: f64) -> Self {
        Beta { alpha, beta }
    }

    /// The flat prior, Beta(1, 1)
    #[inline]
    pub fn uniform() -> Self {
        Beta {
            alpha: 1.0,
            beta: 1.0,
        }
    }

    /// The Jeffreys prior, Beta(1/2, 1/2)
    #[inline]
    pub fn jeffreys() -> Self {
        Beta {
            alpha: 0.5,
            beta: 0.5,
        }
    }

    /// Get the alpha parameter
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the beta parameter
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// ln B(α, β)
    #[inline]
    fn ln_beta_ab(&self) -> f64 {
        self.alpha.ln_beta(self.beta)
    }
}

impl Default for Beta {
    fn default() -> Self {
        Beta::jeffreys()
    }
}

impl From<&Beta> for String {
    fn from(beta: &Beta) -> String {
        format!("Beta(α: {}, β: {})", beta.alpha, beta.beta)
    }
}

impl_display!(Beta);

impl HasDensity<f64> for Beta {
    fn ln_f(&self, x: &f64) -> f64 {
        if *x <= 0.0 || *x >= 1.0 {
            return f64::NEG_INFINITY;
        }
        (self.alpha - 1.0) * x.ln() + (self.beta - 1.0) * (1.0 - x).ln()
            - self.ln_beta_ab()
    }
}

impl Sampleable<f64> for Beta {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        let b = RBeta::new(self.alpha, self.beta).unwrap();
        rng.sample(b)
    }
}

impl ContinuousDistr<f64> for Beta {}

impl Support<f64> for Beta {
    fn supports(&self, x: &f64) -> bool {
        0.0 < *x && *x < 1.0
    }
}

impl Cdf<f64> for Beta {
    fn cdf(&self, x: &f64) -> f64 {
        if *x <= 0.0 {
            0.0
        } else if *x >= 1.0 {
            1.0
        } else {
            x.inc_beta(self.alpha, self.beta, self.ln_beta_ab())
        }
    }
}

impl InverseCdf<f64> for Beta {
    fn invcdf(&self, p: f64) -> f64 {
        assert!((0.0..=1.0).contains(&p), "p out of range");
        if p == 0.0 {
            return 0.0;
        }
        if p == 1.0 {
            return 1.0;
        }
        p.inv_inc_beta(self.alpha, self.beta, self.ln_beta_ab())
    }
}

impl Mean<f64> for Beta {
    fn mean(&self) -> Option<f64> {
        Some(self.alpha / (self.alpha + self.beta))
    }
}

impl Variance<f64> for Beta {
    fn variance(&self) -> Option<f64> {
        let ab = self.alpha + self.beta;
        Some(self.alpha * self.beta / (ab * ab * (ab + 1.0)))
    }
}

impl std::error::Error for BetaError {}

impl fmt::Display for BetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlphaTooLow { alpha } => {
                write!(f, "alpha ({alpha}) must be greater than zero")
            }
            Self::AlphaNotFinite { alpha } => {
                write!(f, "non-finite alpha: {alpha}")
            }
            Self::BetaTooLow { beta } => {
                write!(f, "beta ({beta}) must be greater than zero")
            }
            Self::BetaNotFinite { beta } => {
                write!(f, "non-finite beta: {beta}")
            }
        }
    }
}
