//! Gamma prior on the Poisson rate
use rand::Rng;
use special::Gamma as SGamma;

use crate::data::{DataOrSuffStat, PoissonSuffStat};
use crate::dist::{Gamma, Poisson};
use crate::misc::ln_binom;
use crate::traits::{
    ConjugatePrior, ContinuousDistr, HasDensity, Mean, Sampleable, SuffStat,
    Support,
};

impl HasDensity<Poisson> for Gamma {
    fn ln_f(&self, x: &Poisson) -> f64 {
        self.ln_f(&x.rate())
    }
}

impl Sampleable<Poisson> for Gamma {
    fn draw<R: Rng>(&self, mut rng: &mut R) -> Poisson {
        let rate: f64 = self.draw(&mut rng);
        Poisson::new(rate).expect("Failed to draw a valid rate")
    }
}

impl Support<Poisson> for Gamma {
    fn supports(&self, x: &Poisson) -> bool {
        x.rate() > 0.0 && x.rate().is_finite()
    }
}

impl ContinuousDistr<Poisson> for Gamma {}

macro_rules! impl_traits {
    ($kind: ty) => {
        impl ConjugatePrior<$kind, Poisson> for Gamma {
            type Posterior = Self;

            fn posterior(&self, x: &DataOrSuffStat<$kind, Poisson>) -> Self {
                let (n, sum) = match x {
                    DataOrSuffStat::Data(ref xs) => {
                        let mut stat = PoissonSuffStat::new();
                        xs.iter().for_each(|x| stat.observe(x));
                        (stat.n(), stat.sum())
                    }
                    DataOrSuffStat::SuffStat(ref stat) => {
                        (stat.n(), stat.sum())
                    }
                    DataOrSuffStat::None => (0, 0.0),
                };

                let a = self.shape() + sum;
                let b = self.rate() + (n as f64);

                Self::new(a, b).expect("Invalid posterior parameters")
            }

            fn ln_m(&self, x: &DataOrSuffStat<$kind, Poisson>) -> f64 {
                let stat: PoissonSuffStat = match x {
                    DataOrSuffStat::Data(ref xs) => {
                        let mut stat = PoissonSuffStat::new();
                        xs.iter().for_each(|x| stat.observe(x));
                        stat
                    }
                    DataOrSuffStat::SuffStat(ref stat) => (*stat).clone(),
                    DataOrSuffStat::None => PoissonSuffStat::new(),
                };

                let data_or_suff: DataOrSuffStat<$kind, Poisson> =
                    DataOrSuffStat::SuffStat(&stat);
                let post = self.posterior(&data_or_suff);

                let z0 = self.shape().ln_gamma().0
                    - self.shape() * self.rate().ln();
                let zn = post.shape().ln_gamma().0
                    - post.shape() * post.rate().ln();

                zn - z0 - stat.sum_ln_fact()
            }

            fn ln_pp(
                &self,
                y: &$kind,
                x: &DataOrSuffStat<$kind, Poisson>,
            ) -> f64 {
                // Negative binomial posterior predictive
                let post = self.posterior(x);
                let r = post.shape();
                let p = 1.0 / (1.0 + post.rate());

                let k = f64::from(*y);
                let bnp = ln_binom(k + r - 1.0, k);
                bnp + (1.0 - p).ln() * r + k * p.ln()
            }

            fn likelihood_density(
                &self,
                x: &DataOrSuffStat<$kind, Poisson>,
            ) -> Option<Self> {
                let (n, sum) = match x {
                    DataOrSuffStat::Data(ref xs) => {
                        let mut stat = PoissonSuffStat::new();
                        xs.iter().for_each(|x| stat.observe(x));
                        (stat.n(), stat.sum())
                    }
                    DataOrSuffStat::SuffStat(ref stat) => {
                        (stat.n(), stat.sum())
                    }
                    DataOrSuffStat::None => (0, 0.0),
                };

                if n == 0 {
                    None
                } else {
                    // Posterior under a flat prior on the rate
                    Some(Self::new_unchecked(sum + 1.0, n as f64))
                }
            }
        }
    };
}

impl_traits!(u8);
impl_traits!(u16);
impl_traits!(u32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Variance;

    const TOL: f64 = 1E-12;

    #[test]
    fn posterior_from_data() {
        let data: Vec<u8> = vec![1, 2, 3, 4, 5];
        let xs = DataOrSuffStat::Data::<u8, Poisson>(&data);

        let posterior = Gamma::new(1.0, 1.0).unwrap().posterior(&xs);

        assert::close(posterior.shape(), 16.0, TOL);
        assert::close(posterior.rate(), 6.0, TOL);
    }

    #[test]
    fn posterior_adds_sum_and_count() {
        // G(2, 0.5) with sample [3, 5, 2, 4] => G(16, 4.5)
        let data: Vec<u32> = vec![3, 5, 2, 4];
        let xs = DataOrSuffStat::Data::<u32, Poisson>(&data);

        let posterior = Gamma::new(2.0, 0.5).unwrap().posterior(&xs);

        assert::close(posterior.shape(), 16.0, TOL);
        assert::close(posterior.rate(), 4.5, TOL);
        assert::close(posterior.mean().unwrap(), 3.555_555_555_555_555_6, TOL);
    }

    #[test]
    fn empty_sample_returns_prior_unchanged() {
        let prior = Gamma::new(2.0, 0.5).unwrap();

        let none: DataOrSuffStat<u32, Poisson> = DataOrSuffStat::None;
        let posterior = prior.posterior(&none);

        assert::close(posterior.shape(), 2.0, TOL);
        assert::close(posterior.rate(), 0.5, TOL);
    }

    #[test]
    fn sequential_update_equals_batch_update() {
        let data: Vec<u32> = vec![3, 5, 2, 4, 1, 0, 6];
        let (head, tail) = data.split_at(4);

        let prior = Gamma::new(2.0, 0.5).unwrap();

        let batch =
            prior.posterior(&DataOrSuffStat::Data::<u32, Poisson>(&data));

        let mid =
            prior.posterior(&DataOrSuffStat::Data::<u32, Poisson>(head));
        let seq = mid.posterior(&DataOrSuffStat::Data::<u32, Poisson>(tail));

        assert::close(seq.shape(), batch.shape(), TOL);
        assert::close(seq.rate(), batch.rate(), TOL);
    }

    #[test]
    fn posterior_sd_shrinks_along_sample_prefixes() {
        let data: Vec<u32> = vec![3, 5, 2, 4];
        let prior = Gamma::new(2.0, 0.5).unwrap();

        let mut last_sd = prior.variance().unwrap().sqrt();
        for n in 1..=data.len() {
            let xs = DataOrSuffStat::Data::<u32, Poisson>(&data[..n]);
            let sd = prior.posterior(&xs).variance().unwrap().sqrt();
            assert!(sd <= last_sd);
            last_sd = sd;
        }
    }

    #[test]
    fn likelihood_density_uses_flat_prior_on_rate() {
        let data: Vec<u32> = vec![3, 5, 2, 4];
        let xs = DataOrSuffStat::Data::<u32, Poisson>(&data);

        let prior = Gamma::new(2.0, 0.5).unwrap();
        let like = prior.likelihood_density(&xs).unwrap();

        // G(sum + 1, n), independent of the prior hyperparameters
        assert::close(like.shape(), 15.0, TOL);
        assert::close(like.rate(), 4.0, TOL);
    }

    #[test]
    fn likelihood_density_of_empty_sample_is_none() {
        let prior = Gamma::new(2.0, 0.5).unwrap();
        let none: DataOrSuffStat<u32, Poisson> = DataOrSuffStat::None;
        assert!(prior.likelihood_density(&none).is_none());
    }

    #[test]
    fn ln_m_no_data() {
        let dist = Gamma::new(1.0, 1.0).unwrap();
        let data: DataOrSuffStat<u8, Poisson> = DataOrSuffStat::None;
        assert::close(dist.ln_m(&data), 0.0, TOL);
        assert::close(dist.m(&data), 1.0, TOL);
    }

    #[test]
    fn ln_m_data() {
        let dist = Gamma::new(1.0, 1.0).unwrap();
        let inputs: [u8; 3] = [0, 1, 2];
        let expected: [f64; 3] = [
            -0.693_147_180_559_945_3,
            -2.197_224_577_336_219_6,
            -4.446_565_155_811_452,
        ];

        for (i, ln_m) in expected.iter().enumerate() {
            let xs = DataOrSuffStat::Data::<u8, Poisson>(&inputs[..=i]);
            assert::close(dist.ln_m(&xs), *ln_m, TOL);
        }
    }

    #[test]
    fn ln_m_single_datum_equals_ln_pp_with_no_data() {
        let prior = Gamma::new(1.5, 2.5).unwrap();
        let none: DataOrSuffStat<u32, Poisson> = DataOrSuffStat::None;

        for y in [0_u32, 1, 3, 7] {
            let data = vec![y];
            let xs = DataOrSuffStat::Data::<u32, Poisson>(&data);
            assert::close(prior.ln_m(&xs), prior.ln_pp(&y, &none), 1E-10);
        }
    }
}
