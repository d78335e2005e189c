//! Gaussian-mean prior on the mean of a Gaussian with known variance
use rand::Rng;

use crate::data::{DataOrSuffStat, GaussianSuffStat};
use crate::dist::{Gaussian, GaussianMean};
use crate::traits::{
    ConjugatePrior, ContinuousDistr, HasDensity, HasSuffStat, Sampleable,
    SuffStat, Support,
};

impl HasDensity<Gaussian> for GaussianMean {
    fn ln_f(&self, x: &Gaussian) -> f64 {
        self.mean_dist().ln_f(&x.mu())
    }
}

impl Sampleable<Gaussian> for GaussianMean {
    fn draw<R: Rng>(&self, rng: &mut R) -> Gaussian {
        let mu: f64 = self.mean_dist().draw(rng);
        Gaussian::new_unchecked(mu, self.obs_sigma())
    }
}

impl Support<Gaussian> for GaussianMean {
    fn supports(&self, x: &Gaussian) -> bool {
        x.mu().is_finite() && x.sigma() == self.obs_sigma()
    }
}

impl ContinuousDistr<Gaussian> for GaussianMean {}

fn extract_stat(x: &DataOrSuffStat<f64, Gaussian>) -> GaussianSuffStat {
    match x {
        DataOrSuffStat::Data(xs) => {
            let mut stat = GaussianSuffStat::new();
            stat.observe_many(xs);
            stat
        }
        DataOrSuffStat::SuffStat(stat) => (*stat).clone(),
        DataOrSuffStat::None => GaussianSuffStat::new(),
    }
}

impl ConjugatePrior<f64, Gaussian> for GaussianMean {
    type Posterior = Self;

    fn posterior(&self, x: &DataOrSuffStat<f64, Gaussian>) -> Self {
        let stat = extract_stat(x);
        let n = stat.n();
        if n == 0 {
            return self.clone();
        }

        let w = self.weight(n);
        let post_mean = w * stat.mean() + (1.0 - w) * self.mu();

        let s2 = self.obs_sigma() * self.obs_sigma();
        let t2 = self.tau() * self.tau();
        let post_prec = n as f64 / s2 + t2.recip();

        Self::new_unchecked(
            post_mean,
            post_prec.sqrt().recip(),
            self.obs_sigma(),
        )
    }

    fn ln_m(&self, x: &DataOrSuffStat<f64, Gaussian>) -> f64 {
        let stat = extract_stat(x);
        if stat.n() == 0 {
            return 0.0;
        }

        // Conjugacy makes m = prior(θ)·likelihood(D|θ) / posterior(θ)
        // exact at every θ; evaluate at the posterior mean.
        let post =
            self.posterior(&DataOrSuffStat::<f64, Gaussian>::SuffStat(&stat));
        let theta = post.mu();
        let lik = Gaussian::new_unchecked(theta, self.obs_sigma());

        <Gaussian as HasSuffStat<f64>>::ln_f_stat(&lik, &stat)
            + self.mean_dist().ln_f(&theta)
            - post.mean_dist().ln_f(&theta)
    }

    fn ln_pp(&self, y: &f64, x: &DataOrSuffStat<f64, Gaussian>) -> f64 {
        // Predictive is Gaussian with the posterior uncertainty about the
        // mean added to the observation noise
        let post = self.posterior(x);
        let pp_sigma =
            (post.tau() * post.tau() + post.obs_sigma() * post.obs_sigma())
                .sqrt();
        Gaussian::new_unchecked(post.mu(), pp_sigma).ln_f(y)
    }

    fn likelihood_density(
        &self,
        x: &DataOrSuffStat<f64, Gaussian>,
    ) -> Option<Self> {
        let stat = extract_stat(x);
        let n = stat.n();
        if n == 0 {
            None
        } else {
            // N(x̄, σ²/n): the likelihood of the mean, normalized
            let sigma_n = self.obs_sigma() / (n as f64).sqrt();
            Some(Self::new_unchecked(
                stat.mean(),
                sigma_n,
                self.obs_sigma(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOL: f64 = 1E-12;

    // Reaction-time-style sample with known σ² = 25 and prior N(20, 25)
    const XS: [f64; 5] = [15.77, 20.5, 8.26, 14.37, 21.09];

    fn reference_prior() -> GaussianMean {
        GaussianMean::new(20.0, 5.0, 5.0).unwrap()
    }

    #[test]
    fn single_observation_splits_the_difference() {
        // τ₀ = σ, so w = 1/2
        let prior = reference_prior();
        let xs = DataOrSuffStat::Data::<f64, Gaussian>(&XS[..1]);

        let posterior = prior.posterior(&xs);

        assert::close(posterior.mu(), 0.5 * 15.77 + 0.5 * 20.0, TOL);
        assert::close(posterior.mu(), 17.885, TOL);
        // posterior precision: 1/25 + 1/25
        assert::close(posterior.tau(), 12.5_f64.sqrt(), TOL);
    }

    #[test]
    fn five_observations_weigh_the_sample_mean() {
        let prior = reference_prior();
        let xs = DataOrSuffStat::Data::<f64, Gaussian>(&XS);

        let posterior = prior.posterior(&xs);

        let w = 5.0 / 6.0;
        assert::close(prior.weight(5), w, TOL);

        let xbar = XS.iter().sum::<f64>() / 5.0;
        assert::close(posterior.mu(), w * xbar + (1.0 - w) * 20.0, 1E-9);
        assert::close(posterior.mu(), 16.665, 1E-9);
        assert::close(posterior.tau(), (25.0 / 6.0_f64).sqrt(), TOL);
    }

    #[test]
    fn posterior_from_suffstat_matches_posterior_from_data() {
        let prior = reference_prior();

        let mut stat = GaussianSuffStat::new();
        stat.observe_many(&XS);

        let from_data =
            prior.posterior(&DataOrSuffStat::Data::<f64, Gaussian>(&XS));
        let xs: DataOrSuffStat<f64, Gaussian> = (&stat).into();
        let from_stat = prior.posterior(&xs);

        assert::close(from_stat.mu(), from_data.mu(), TOL);
        assert::close(from_stat.tau(), from_data.tau(), TOL);
    }

    #[test]
    fn empty_sample_returns_prior_unchanged() {
        let prior = reference_prior();

        let none: DataOrSuffStat<f64, Gaussian> = DataOrSuffStat::None;
        let posterior = prior.posterior(&none);

        assert::close(posterior.mu(), prior.mu(), TOL);
        assert::close(posterior.tau(), prior.tau(), TOL);
        assert::close(posterior.obs_sigma(), prior.obs_sigma(), TOL);
    }

    #[test]
    fn sequential_update_equals_batch_update() {
        let prior = reference_prior();
        let (head, tail) = XS.split_at(2);

        let batch = prior.posterior(&DataOrSuffStat::Data::<f64, Gaussian>(&XS));

        let mid = prior.posterior(&DataOrSuffStat::Data::<f64, Gaussian>(head));
        let seq = mid.posterior(&DataOrSuffStat::Data::<f64, Gaussian>(tail));

        assert::close(seq.mu(), batch.mu(), 1E-9);
        assert::close(seq.tau(), batch.tau(), 1E-9);
    }

    #[test]
    fn posterior_sd_nonincreasing_in_sample_size() {
        let prior = reference_prior();
        let data: Vec<f64> = (0..30).map(|i| 10.0 + (i % 7) as f64).collect();

        let mut last = prior.tau();
        for n in 1..=data.len() {
            let xs = DataOrSuffStat::Data::<f64, Gaussian>(&data[..n]);
            let tau = prior.posterior(&xs).tau();
            assert!(tau <= last);
            last = tau;
        }
    }

    #[test]
    fn likelihood_density_is_sample_mean_with_standard_error() {
        let prior = reference_prior();
        let xs = DataOrSuffStat::Data::<f64, Gaussian>(&XS);

        let like = prior.likelihood_density(&xs).unwrap();

        let xbar = XS.iter().sum::<f64>() / 5.0;
        assert::close(like.mu(), xbar, TOL);
        assert::close(like.tau(), 5.0 / 5.0_f64.sqrt(), TOL);
    }

    #[test]
    fn likelihood_density_of_empty_sample_is_none() {
        let prior = reference_prior();
        let none: DataOrSuffStat<f64, Gaussian> = DataOrSuffStat::None;
        assert!(prior.likelihood_density(&none).is_none());
    }

    #[test]
    fn ln_m_of_empty_sample_is_zero() {
        let prior = reference_prior();
        let none: DataOrSuffStat<f64, Gaussian> = DataOrSuffStat::None;
        assert::close(prior.ln_m(&none), 0.0, TOL);
    }

    #[test]
    fn ln_m_single_datum_equals_ln_pp_with_no_data() {
        let prior = GaussianMean::new(1.5, 2.0, 3.0).unwrap();
        let none: DataOrSuffStat<f64, Gaussian> = DataOrSuffStat::None;

        for y in [-2.3, 0.0, 1.5, 4.4] {
            let data = vec![y];
            let xs = DataOrSuffStat::Data::<f64, Gaussian>(&data);
            assert::close(prior.ln_m(&xs), prior.ln_pp(&y, &none), 1E-10);
        }
    }

    #[test]
    fn ln_m_decomposes_by_chain_rule() {
        let prior = GaussianMean::new(1.5, 2.0, 3.0).unwrap();
        let none: DataOrSuffStat<f64, Gaussian> = DataOrSuffStat::None;

        let data = vec![0.8, -1.1];
        let first = vec![0.8];
        let xs = DataOrSuffStat::Data::<f64, Gaussian>(&data);
        let x1 = DataOrSuffStat::Data::<f64, Gaussian>(&first);

        let lhs = prior.ln_m(&xs);
        let rhs = prior.ln_pp(&0.8, &none) + prior.ln_pp(&-1.1, &x1);
        assert::close(lhs, rhs, 1E-10);
    }

    proptest! {
        #[test]
        fn weight_lies_in_unit_interval(
            n in 0_usize..10_000,
            sigma in 0.01_f64..100.0,
            tau in 0.01_f64..100.0,
        ) {
            let gm = GaussianMean::new(0.0, tau, sigma).unwrap();
            let w = gm.weight(n);
            prop_assert!((0.0..=1.0).contains(&w));
        }
    }
}
