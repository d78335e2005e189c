//! Beta prior on the Bernoulli success probability
use rand::Rng;
use special::Beta as SBeta;

use crate::data::{BernoulliSuffStat, Booleable, DataOrSuffStat};
use crate::dist::{Bernoulli, Beta};
use crate::traits::{
    ConjugatePrior, ContinuousDistr, HasDensity, Mean, Sampleable, SuffStat,
    Support,
};

impl HasDensity<Bernoulli> for Beta {
    fn ln_f(&self, x: &Bernoulli) -> f64 {
        self.ln_f(&x.p())
    }
}

impl Sampleable<Bernoulli> for Beta {
    fn draw<R: Rng>(&self, mut rng: &mut R) -> Bernoulli {
        let p: f64 = self.draw(&mut rng);
        Bernoulli::new(p).expect("Failed to draw valid weight")
    }
}

impl Support<Bernoulli> for Beta {
    fn supports(&self, x: &Bernoulli) -> bool {
        0.0 < x.p() && x.p() < 1.0
    }
}

impl ContinuousDistr<Bernoulli> for Beta {}

fn extract_stat<X: Booleable>(
    x: &DataOrSuffStat<X, Bernoulli>,
) -> BernoulliSuffStat {
    match x {
        DataOrSuffStat::Data(xs) => {
            let mut stat = BernoulliSuffStat::new();
            stat.observe_many(xs);
            stat
        }
        DataOrSuffStat::SuffStat(stat) => (*stat).clone(),
        DataOrSuffStat::None => BernoulliSuffStat::new(),
    }
}

impl<X: Booleable> ConjugatePrior<X, Bernoulli> for Beta {
    type Posterior = Self;

    fn posterior(&self, x: &DataOrSuffStat<X, Bernoulli>) -> Self {
        let stat = extract_stat(x);

        let a = self.alpha() + stat.k() as f64;
        let b = self.beta() + stat.f() as f64;

        Beta::new(a, b).expect("Invalid posterior parameters")
    }

    fn ln_m(&self, x: &DataOrSuffStat<X, Bernoulli>) -> f64 {
        let post = self.posterior(x);

        post.alpha().ln_beta(post.beta())
            - self.alpha().ln_beta(self.beta())
    }

    fn ln_pp(&self, y: &X, x: &DataOrSuffStat<X, Bernoulli>) -> f64 {
        //  Pr(y = 1 | xs) happens to be the posterior mean
        let post = self.posterior(x);
        let p: f64 = post.mean().expect("Mean undefined");

        match y.try_into_bool() {
            Some(true) => p.ln(),
            Some(false) => (1.0 - p).ln(),
            None => f64::NEG_INFINITY,
        }
    }

    fn likelihood_density(
        &self,
        x: &DataOrSuffStat<X, Bernoulli>,
    ) -> Option<Self> {
        let stat = extract_stat(x);
        if stat.n() == 0 {
            None
        } else {
            // Posterior under the flat Beta(1, 1) prior
            Some(Beta::new_unchecked(
                stat.k() as f64 + 1.0,
                stat.f() as f64 + 1.0,
            ))
        }
    }
}
