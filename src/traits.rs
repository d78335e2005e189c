//! Distribution and conjugate-analysis traits
use rand::Rng;

use crate::data::DataOrSuffStat;

/// Has a density or mass function
pub trait HasDensity<X> {
    /// Probability function evaluated at `x`
    fn f(&self, x: &X) -> f64 {
        self.ln_f(x).exp()
    }

    /// Log probability function evaluated at `x`
    ///
    /// Returns `f64::NEG_INFINITY` for values outside the support.
    fn ln_f(&self, x: &X) -> f64;
}

/// Can be sampled from
pub trait Sampleable<X> {
    /// Single draw
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws
    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}

/// A random variable: a density that can be sampled from
pub trait Rv<X>: HasDensity<X> + Sampleable<X> {}

impl<X, Fx> Rv<X> for Fx where Fx: HasDensity<X> + Sampleable<X> {}

/// Identifies the support of a distribution
pub trait Support<X> {
    /// Returns `true` if `x` is in the support
    fn supports(&self, x: &X) -> bool;
}

/// A continuous probability distribution
pub trait ContinuousDistr<X>: Rv<X> + Support<X> {
    /// Probability Density Function (PDF) at `x`
    fn pdf(&self, x: &X) -> f64 {
        self.ln_pdf(x).exp()
    }

    /// Log Probability Density Function (PDF) at `x`
    fn ln_pdf(&self, x: &X) -> f64 {
        self.ln_f(x)
    }
}

/// A discrete probability distribution
pub trait DiscreteDistr<X>: Rv<X> + Support<X> {
    /// Probability Mass Function (PMF) at `x`
    fn pmf(&self, x: &X) -> f64 {
        self.ln_pmf(x).exp()
    }

    /// Log Probability Mass Function (PMF) at `x`
    fn ln_pmf(&self, x: &X) -> f64 {
        self.ln_f(x)
    }
}

/// Has a cumulative distribution function
pub trait Cdf<X>: Rv<X> {
    /// Cumulative Distribution Function at `x`, Pr(X ≤ x)
    fn cdf(&self, x: &X) -> f64;

    /// Survival function at `x`, Pr(X > x)
    fn sf(&self, x: &X) -> f64 {
        1.0 - self.cdf(x)
    }
}

/// Has an inverse CDF (quantile function)
pub trait InverseCdf<X>: Rv<X> + Support<X> {
    /// The value of `x` at probability `p` in the CDF
    ///
    /// # Panics
    /// If `p` is outside `[0, 1]`.
    fn invcdf(&self, p: f64) -> X;

    /// Alias for `invcdf`
    fn quantile(&self, p: f64) -> X {
        self.invcdf(p)
    }

    /// Equal-tailed interval containing probability mass `p`
    ///
    /// # Example
    ///
    /// The 95% interval spans the 2.5th to the 97.5th percentile.
    ///
    /// ```
    /// use conjugate::dist::Gaussian;
    /// use conjugate::traits::InverseCdf;
    ///
    /// let g = Gaussian::standard();
    /// let (lo, hi): (f64, f64) = g.interval(0.95);
    ///
    /// assert!((lo + 1.959_963_984_540_054).abs() < 1e-9);
    /// assert!((hi - 1.959_963_984_540_054).abs() < 1e-9);
    /// ```
    fn interval(&self, p: f64) -> (X, X) {
        let pt = (1.0 - p) / 2.0;
        (self.invcdf(pt), self.invcdf(p + pt))
    }
}

/// Has a closed-form mean
pub trait Mean<M> {
    /// The mean, if it is defined
    fn mean(&self) -> Option<M>;
}

/// Has a closed-form variance
pub trait Variance<V> {
    /// The variance, if it is defined
    fn variance(&self) -> Option<V>;
}

/// Is a sufficient statistic for a distribution
///
/// # Example
///
/// ```
/// use conjugate::data::BernoulliSuffStat;
/// use conjugate::traits::SuffStat;
///
/// let mut stat = BernoulliSuffStat::new();
///
/// stat.observe(&true);
/// stat.observe(&false);
/// assert!(stat.n() == 2 && stat.k() == 1);
///
/// stat.forget(&false);
/// assert!(stat.n() == 1 && stat.k() == 1);
/// ```
pub trait SuffStat<X> {
    /// Number of observations assimilated
    fn n(&self) -> usize;

    /// Assimilate the datum `x`
    fn observe(&mut self, x: &X);

    /// Remove the datum `x`
    fn forget(&mut self, x: &X);

    /// Assimilate several observations
    fn observe_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.observe(x));
    }

    /// Forget several observations
    fn forget_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.forget(x));
    }
}

/// The data for this distribution can be summarized by a statistic
pub trait HasSuffStat<X>: HasDensity<X> {
    type Stat: SuffStat<X>;

    /// An empty sufficient statistic for this distribution
    fn empty_suffstat(&self) -> Self::Stat;

    /// Log likelihood of the data summarized by `stat`
    fn ln_f_stat(&self, stat: &Self::Stat) -> f64;
}

/// A prior on the parameter of a likelihood family `Fx` such that the
/// posterior stays in the prior's family, with hyperparameters computed in
/// closed form.
///
/// # Example
///
/// Observing more failures than successes lowers the posterior predictive
/// probability of a success.
///
/// ```
/// use conjugate::data::DataOrSuffStat;
/// use conjugate::dist::{Bernoulli, Beta};
/// use conjugate::traits::ConjugatePrior;
///
/// let flips = vec![true, false, false];
/// let prior = Beta::jeffreys();
///
/// let obs: DataOrSuffStat<bool, Bernoulli> = DataOrSuffStat::Data(&flips);
/// let none: DataOrSuffStat<bool, Bernoulli> = DataOrSuffStat::None;
///
/// assert!(prior.pp(&true, &obs) < prior.pp(&true, &none));
/// ```
pub trait ConjugatePrior<X, Fx>: Rv<Fx>
where
    Fx: HasSuffStat<X>,
{
    /// Type of the posterior distribution
    type Posterior: Rv<Fx>;

    /// Posterior distribution from the prior and observations
    ///
    /// With no observations, the posterior hyperparameters equal the
    /// prior's.
    fn posterior(&self, x: &DataOrSuffStat<X, Fx>) -> Self::Posterior;

    /// Log marginal likelihood of the observations
    fn ln_m(&self, x: &DataOrSuffStat<X, Fx>) -> f64;

    /// Log posterior predictive probability of a new datum `y` given
    /// previous observations
    fn ln_pp(&self, y: &X, x: &DataOrSuffStat<X, Fx>) -> f64;

    /// The likelihood of the observations rendered as a proper density
    /// over the parameter space
    ///
    /// This is the posterior under a flat or minimal-information reference
    /// prior, so the likelihood curve can be drawn on the same axes as the
    /// prior and posterior. The result depends only on the data (and any
    /// fixed model constants such as a known observation variance), never
    /// on the prior hyperparameters. Returns `None` for an empty sample,
    /// where no such density exists.
    fn likelihood_density(
        &self,
        x: &DataOrSuffStat<X, Fx>,
    ) -> Option<Self::Posterior>;

    /// Marginal likelihood of the observations
    fn m(&self, x: &DataOrSuffStat<X, Fx>) -> f64 {
        self.ln_m(x).exp()
    }

    /// Posterior predictive probability of a new datum `y` given previous
    /// observations
    fn pp(&self, y: &X, x: &DataOrSuffStat<X, Fx>) -> f64 {
        self.ln_pp(y, x).exp()
    }
}
