//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::analysis::{
    bernoulli_probability, gaussian_mean, poisson_rate, AnalysisError,
    ConjugateReport,
};
#[doc(no_inline)]
pub use crate::curve::{linspace, DensityCurves};
#[doc(no_inline)]
pub use crate::data::{
    BernoulliSuffStat, Booleable, DataOrSuffStat, GaussianSuffStat,
    PoissonSuffStat,
};
#[doc(no_inline)]
pub use crate::dist::{
    Bernoulli, Beta, Gamma, Gaussian, GaussianMean, Poisson,
};
#[doc(no_inline)]
pub use crate::summary::{
    CredibleInterval, PosteriorSummary, TailProbability, DEFAULT_LEVEL,
};
#[doc(no_inline)]
pub use crate::traits::*;

/// Bernoulli observations or their sufficient statistic
pub type BernoulliData<'a, X> = DataOrSuffStat<'a, X, Bernoulli>;
/// Gaussian observations or their sufficient statistic
pub type GaussianData<'a> = DataOrSuffStat<'a, f64, Gaussian>;
/// Poisson observations or their sufficient statistic
pub type PoissonData<'a, X> = DataOrSuffStat<'a, X, Poisson>;
