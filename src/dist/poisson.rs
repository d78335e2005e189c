//! Poisson distribution over x in {0, 1, ...}
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use rand_distr::Poisson as RPoisson;
use special::Gamma as _;
use std::fmt;

use crate::data::PoissonSuffStat;
use crate::impl_display;
use crate::traits::{
    Cdf, DiscreteDistr, HasDensity, HasSuffStat, Mean, Sampleable, Support,
    Variance,
};

/// [Poisson distribution](https://en.wikipedia.org/wiki/Poisson_distribution)
/// over x in {0, 1, ... }.
///
/// # Example
///
/// ```
/// use conjugate::dist::Poisson;
/// use conjugate::traits::*;
///
/// let pois = Poisson::new(5.3).unwrap();
///
/// // CDF at 5
/// assert!((pois.cdf(&5_u16) - 0.563_473_392_288_071_69).abs() < 1E-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Poisson {
    rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum PoissonError {
    /// The rate parameter is less than or equal to zero
    RateTooLow { rate: f64 },
    /// The rate parameter is infinite or NaN
    RateNotFinite { rate: f64 },
}

impl Poisson {
    /// Create a new Poisson distribution with given rate
    pub fn new(rate: f64) -> Result<Self, PoissonError> {
        if rate <= 0.0 {
            Err(PoissonError::RateTooLow { rate })
        } else if !rate.is_finite() {
            Err(PoissonError::RateNotFinite { rate })
        } else {
            Ok(Poisson { rate })
        }
    }

    /// Creates a new Poisson without checking whether the parameter is
    /// valid
    #[inline]
    pub fn new_unchecked(rate: f64) -> Self {
        Poisson { rate }
    }

    /// Get the rate parameter
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl From<&Poisson> for String {
    fn from(pois: &Poisson) -> String {
        format!("Poisson(λ: {})", pois.rate)
    }
}

impl_display!(Poisson);

macro_rules! impl_traits {
    ($kind: ty) => {
        impl HasDensity<$kind> for Poisson {
            fn ln_f(&self, x: &$kind) -> f64 {
                let kf = f64::from(*x);
                kf * self.rate.ln() - self.rate - (kf + 1.0).ln_gamma().0
            }
        }

        impl Sampleable<$kind> for Poisson {
            fn draw<R: Rng>(&self, rng: &mut R) -> $kind {
                let pois = RPoisson::new(self.rate).unwrap();
                let x: f64 = rng.sample(pois);
                x as $kind
            }

            fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<$kind> {
                let pois = RPoisson::new(self.rate).unwrap();
                (0..n)
                    .map(|_| {
                        let x: f64 = rng.sample(pois);
                        x as $kind
                    })
                    .collect()
            }
        }

        impl Support<$kind> for Poisson {
            fn supports(&self, _x: &$kind) -> bool {
                true
            }
        }

        impl DiscreteDistr<$kind> for Poisson {}

        impl Cdf<$kind> for Poisson {
            fn cdf(&self, x: &$kind) -> f64 {
                let kf = f64::from(*x);
                1.0 - self.rate.inc_gamma(kf + 1.0)
            }
        }

        impl HasSuffStat<$kind> for Poisson {
            type Stat = PoissonSuffStat;

            fn empty_suffstat(&self) -> Self::Stat {
                PoissonSuffStat::new()
            }

            fn ln_f_stat(&self, stat: &Self::Stat) -> f64 {
                stat.sum() * self.rate.ln()
                    - stat.n() as f64 * self.rate
                    - stat.sum_ln_fact()
            }
        }
    };
}

impl_traits!(u8);
impl_traits!(u16);
impl_traits!(u32);

impl Mean<f64> for Poisson {
    fn mean(&self) -> Option<f64> {
        Some(self.rate)
    }
}

impl Variance<f64> for Poisson {
    fn variance(&self) -> Option<f64> {
        Some(self.rate)
    }
}

impl std::error::Error for PoissonError {}

impl fmt::Display for PoissonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateTooLow { rate } => {
                write!(f, "rate ({rate}) must be greater than zero")
            }
            Self::RateNotFinite { rate } => {
                write!(f, "non-finite rate: {rate}")
            }
        }
    }
}
