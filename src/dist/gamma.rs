//! Gamma distribution over x in (0, ∞)
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use rand_distr::Gamma as RGamma;
use special::Gamma as SGamma;
use std::fmt;

use crate::impl_display;
use crate::misc::bisect_quantile;
use crate::traits::{
    Cdf, ContinuousDistr, HasDensity, InverseCdf, Mean, Sampleable, Support,
    Variance,
};

mod poisson_prior;

/// [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution)
/// G(α, β) over x in (0, ∞).
///
/// **NOTE**: The gamma distribution is parameterized in terms of shape, α,
/// and rate, β.
///
/// ```math
///             β^α
/// f(x|α, β) = ----  x^(α-1) e^(-βx)
///             Γ(α)
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Gamma {
    shape: f64,
    rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum GammaError {
    /// The shape parameter is less than or equal to zero
    ShapeTooLow { shape: f64 },
    /// The shape parameter is infinite or NaN
    ShapeNotFinite { shape: f64 },
    /// The rate parameter is less than or equal to zero
    RateTooLow { rate: f64 },
    /// The rate parameter is infinite or NaN
    RateNotFinite { rate: f64 },
}

impl Gamma {
    /// Create a new `Gamma` distribution with shape (α) and rate (β)
    pub fn new(shape: f64, rate: f64) -> Result<Self, GammaError> {
        if shape <= 0.0 {
            Err(GammaError::ShapeTooLow { shape })
        } else if rate <= 0.0 {
            Err(GammaError::RateTooLow { rate })
        } else if !shape.is_finite() {
            Err(GammaError::ShapeNotFinite { shape })
        } else if !rate.is_finite() {
            Err(GammaError::RateNotFinite { rate })
        } else {
            Ok(Gamma { shape, rate })
        }
    }

    /// Creates a new Gamma without checking whether the parameters are
    /// valid
    #[inline]
    pub fn new_unchecked(shape: f64, rate: f64) -> Self {
        Gamma { shape, rate }
    }

    /// Get the shape parameter
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Get the rate parameter
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl From<&Gamma> for String {
    fn from(gam: &Gamma) -> String {
        format!("G(α: {}, β: {})", gam.shape, gam.rate)
    }
}

impl_display!(Gamma);

impl HasDensity<f64> for Gamma {
    fn ln_f(&self, x: &f64) -> f64 {
        if *x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        self.shape * self.rate.ln() - self.shape.ln_gamma().0
            + (self.shape - 1.0) * x.ln()
            - self.rate * x
    }
}

impl Sampleable<f64> for Gamma {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        let g = RGamma::new(self.shape, self.rate.recip()).unwrap();
        rng.sample(g)
    }
}

impl ContinuousDistr<f64> for Gamma {}

impl Support<f64> for Gamma {
    fn supports(&self, x: &f64) -> bool {
        x.is_finite() && *x > 0.0
    }
}

impl Cdf<f64> for Gamma {
    fn cdf(&self, x: &f64) -> f64 {
        if *x <= 0.0 {
            0.0
        } else {
            (self.rate * x).inc_gamma(self.shape)
        }
    }
}

impl InverseCdf<f64> for Gamma {
    fn invcdf(&self, p: f64) -> f64 {
        assert!((0.0..=1.0).contains(&p), "p out of range");
        if p == 0.0 {
            return 0.0;
        }
        if p == 1.0 {
            return f64::INFINITY;
        }

        // Bracket the quantile, then bisect the CDF. The gamma quantile
        // has no closed form.
        let mean = self.shape / self.rate;
        let sd = self.shape.sqrt() / self.rate;
        let mut hi = (mean + 10.0 * sd).max(1.0);
        while self.cdf(&hi) < p {
            hi *= 2.0;
        }

        bisect_quantile(|x| self.cdf(&x), p, 0.0, hi)
    }
}

impl Mean<f64> for Gamma {
    fn mean(&self) -> Option<f64> {
        Some(self.shape / self.rate)
    }
}

impl Variance<f64> for Gamma {
    fn variance(&self) -> Option<f64> {
        Some(self.shape / (self.rate * self.rate))
    }
}

impl std::error::Error for GammaError {}

impl fmt::Display for GammaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeTooLow { shape } => {
                write!(f, "shape ({shape}) must be greater than zero")
            }
            Self::ShapeNotFinite { shape } => {
                write!(f, "non-finite shape: {shape}")
            }
            Self::RateTooLow { rate } => {
                write!(f, "rate ({rate}) must be greater than zero")
            }
            Self::RateNotFinite { rate } => {
                write!(f, "non-finite rate: {rate}")
            }
        }
    }
}
