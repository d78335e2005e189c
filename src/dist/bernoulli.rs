//! Bernoulli distribution over {0, 1}
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

use crate::data::{BernoulliSuffStat, Booleable};
use crate::impl_display;
use crate::traits::{
    DiscreteDistr, HasDensity, HasSuffStat, Mean, Sampleable, Support,
    Variance,
};

/// [Bernoulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution)
/// with success probability *p*.
///
/// Observations may be `bool`s or any integer type; for integers only 0
/// and 1 are in the support.
///
/// # Example
///
/// ```
/// use conjugate::dist::Bernoulli;
/// use conjugate::traits::*;
///
/// let b = Bernoulli::new(0.75).unwrap();
/// assert!((b.pmf(&true) - 0.75).abs() < 1E-12);
/// assert!((b.pmf(&0_u8) - 0.25).abs() < 1E-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Bernoulli {
    /// Probability of a success
    p: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum BernoulliError {
    /// The p parameter is infinite or NaN
    PNotFinite { p: f64 },
    /// The p parameter is less than zero
    PLessThanZero { p: f64 },
    /// The p parameter is greater than one
    PGreaterThanOne { p: f64 },
}

impl Bernoulli {
    /// Create a new Bernoulli distribution with success probability `p`
    pub fn new(p: f64) -> Result<Self, BernoulliError> {
        if !p.is_finite() {
            Err(BernoulliError::PNotFinite { p })
        } else if p < 0.0 {
            Err(BernoulliError::PLessThanZero { p })
        } else if p > 1.0 {
            Err(BernoulliError::PGreaterThanOne { p })
        } else {
            Ok(Bernoulli { p })
        }
    }

    /// Creates a new Bernoulli without checking whether `p` is valid
    #[inline]
    pub fn new_unchecked(p: f64) -> Self {
        Bernoulli { p }
    }

    /// A Bernoulli distribution with an even chance of success
    #[inline]
    pub fn uniform() -> Self {
        Bernoulli { p: 0.5 }
    }

    /// Get the p parameter
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// The complement of `p`, i.e. `1 - p`
    #[inline]
    pub fn q(&self) -> f64 {
        1.0 - self.p
    }
}

impl Default for Bernoulli {
    fn default() -> Self {
        Bernoulli::uniform()
    }
}

impl From<&Bernoulli> for String {
    fn from(b: &Bernoulli) -> String {
        format!("Bernoulli(p: {})", b.p)
    }
}

impl_display!(Bernoulli);

impl<X: Booleable> HasDensity<X> for Bernoulli {
    fn f(&self, x: &X) -> f64 {
        match x.try_into_bool() {
            Some(true) => self.p,
            Some(false) => self.q(),
            None => 0.0,
        }
    }

    fn ln_f(&self, x: &X) -> f64 {
        self.f(x).ln()
    }
}

impl<X: Booleable> Sampleable<X> for Bernoulli {
    fn draw<R: Rng>(&self, rng: &mut R) -> X {
        X::from_bool(rng.gen::<f64>() < self.p)
    }
}

impl<X: Booleable> Support<X> for Bernoulli {
    fn supports(&self, x: &X) -> bool {
        x.try_into_bool().is_some()
    }
}

impl<X: Booleable> DiscreteDistr<X> for Bernoulli {}

impl<X: Booleable> HasSuffStat<X> for Bernoulli {
    type Stat = BernoulliSuffStat;

    fn empty_suffstat(&self) -> Self::Stat {
        BernoulliSuffStat::new()
    }

    fn ln_f_stat(&self, stat: &Self::Stat) -> f64 {
        stat.k() as f64 * self.p.ln() + stat.f() as f64 * self.q().ln()
    }
}

impl Mean<f64> for Bernoulli {
    fn mean(&self) -> Option<f64> {
        Some(self.p)
    }
}

impl Variance<f64> for Bernoulli {
    fn variance(&self) -> Option<f64> {
        Some(self.p * (1.0 - self.p))
    }
}

impl std::error::Error for BernoulliError {}

impl fmt::Display for BernoulliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PNotFinite { p } => write!(f, "non-finite p: {p}"),
            Self::PLessThanZero { p } => {
                write!(f, "p ({p}) must not be less than zero")
            }
            Self::PGreaterThanOne { p } => {
                write!(f, "p ({p}) must not be greater than one")
            }
        }
    }
}
