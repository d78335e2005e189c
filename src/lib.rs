//! Closed-form conjugate Bayesian analysis for three canonical models:
//! the mean of a Gaussian with known observation variance, a Poisson rate,
//! and a Bernoulli success probability.
//!
//! Each model family is built from the same three pieces:
//!
//! - a **conjugate update** ([`traits::ConjugatePrior`]) mapping prior
//!   hyperparameters and observed data to posterior hyperparameters in a
//!   single closed-form step,
//! - a **summary** ([`summary::PosteriorSummary`]) of prior and posterior
//!   moments, equal-tailed credible intervals, and tail probabilities,
//! - a set of **density curves** ([`curve::DensityCurves`]) evaluating the
//!   prior, normalized likelihood, and posterior over a caller-supplied
//!   grid, ready for an external renderer.
//!
//! The [`analysis`] module ties the pieces together into one routine per
//! family.
//!
//! # Example
//!
//! Conjugate analysis of coin flips with a Beta prior:
//!
//! ```
//! use conjugate::data::DataOrSuffStat;
//! use conjugate::dist::Beta;
//! use conjugate::traits::*;
//!
//! let flips: Vec<bool> = vec![true, false, false, true, false];
//! let prior = Beta::new(1.0, 1.0).unwrap();
//!
//! let obs: DataOrSuffStat<bool, _> = DataOrSuffStat::Data(&flips);
//! let posterior = prior.posterior(&obs);
//!
//! assert_eq!(posterior.alpha(), 3.0);
//! assert_eq!(posterior.beta(), 4.0);
//! ```

pub mod analysis;
pub mod consts;
pub mod curve;
pub mod data;
pub mod dist;
pub mod misc;
pub mod prelude;
pub mod summary;
pub mod traits;

#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
