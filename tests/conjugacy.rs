//! Cross-family conjugacy properties exercised through the public API
use conjugate::dist::{Beta, Gamma, GaussianMean};
use conjugate::prelude::{BernoulliData, GaussianData, PoissonData};
use conjugate::traits::{ConjugatePrior, Variance};
use proptest::prelude::*;

proptest! {
    // Splitting a sample and updating sequentially matches one batch
    // update: the posterior of the first part serves as the prior for the
    // second.
    #[test]
    fn beta_bernoulli_sequential_equals_batch(
        data in prop::collection::vec(any::<bool>(), 0..40),
        split in 0_usize..40,
        alpha in 0.1_f64..10.0,
        beta in 0.1_f64..10.0,
    ) {
        let split = split.min(data.len());
        let prior = Beta::new(alpha, beta).unwrap();

        let batch = prior.posterior(&BernoulliData::Data(&data));
        let mid = prior.posterior(&BernoulliData::Data(&data[..split]));
        let seq = mid.posterior(&BernoulliData::Data(&data[split..]));

        prop_assert!((seq.alpha() - batch.alpha()).abs() < 1E-9);
        prop_assert!((seq.beta() - batch.beta()).abs() < 1E-9);
    }

    #[test]
    fn gamma_poisson_sequential_equals_batch(
        data in prop::collection::vec(0_u32..50, 0..40),
        split in 0_usize..40,
        shape in 0.1_f64..10.0,
        rate in 0.1_f64..10.0,
    ) {
        let split = split.min(data.len());
        let prior = Gamma::new(shape, rate).unwrap();

        let batch = prior.posterior(&PoissonData::Data(&data));
        let mid = prior.posterior(&PoissonData::Data(&data[..split]));
        let seq = mid.posterior(&PoissonData::Data(&data[split..]));

        prop_assert!((seq.shape() - batch.shape()).abs() < 1E-9);
        prop_assert!((seq.rate() - batch.rate()).abs() < 1E-9);
    }

    #[test]
    fn gaussian_mean_sequential_equals_batch(
        data in prop::collection::vec(-100.0_f64..100.0, 0..40),
        split in 0_usize..40,
        tau in 0.1_f64..10.0,
        sigma in 0.1_f64..10.0,
    ) {
        let split = split.min(data.len());
        let prior = GaussianMean::new(1.0, tau, sigma).unwrap();

        let batch = prior.posterior(&GaussianData::Data(&data));
        let mid = prior.posterior(&GaussianData::Data(&data[..split]));
        let seq = mid.posterior(&GaussianData::Data(&data[split..]));

        prop_assert!((seq.mu() - batch.mu()).abs() < 1E-7);
        prop_assert!((seq.tau() - batch.tau()).abs() < 1E-9);
    }

    // Gaussian posterior spread depends only on the sample size and always
    // shrinks as observations accumulate.
    #[test]
    fn gaussian_posterior_sd_shrinks_with_more_data(
        data in prop::collection::vec(-100.0_f64..100.0, 1..40),
        tau in 0.1_f64..10.0,
        sigma in 0.1_f64..10.0,
    ) {
        let prior = GaussianMean::new(0.0, tau, sigma).unwrap();

        let mut last = prior.variance().unwrap().sqrt();
        for n in 1..=data.len() {
            let posterior =
                prior.posterior(&GaussianData::Data(&data[..n]));
            let sd = posterior.variance().unwrap().sqrt();
            prop_assert!(sd <= last);
            last = sd;
        }
    }

    // Updating on an empty sample never moves any family's
    // hyperparameters.
    #[test]
    fn empty_sample_is_identity_for_all_families(
        alpha in 0.1_f64..10.0,
        beta in 0.1_f64..10.0,
    ) {
        let b_prior = Beta::new(alpha, beta).unwrap();
        let b_post = b_prior.posterior(&BernoulliData::<bool>::None);
        prop_assert_eq!(b_post.alpha(), b_prior.alpha());
        prop_assert_eq!(b_post.beta(), b_prior.beta());

        let g_prior = Gamma::new(alpha, beta).unwrap();
        let g_post = g_prior.posterior(&PoissonData::<u32>::None);
        prop_assert_eq!(g_post.shape(), g_prior.shape());
        prop_assert_eq!(g_post.rate(), g_prior.rate());

        let n_prior = GaussianMean::new(alpha, beta, 1.0).unwrap();
        let n_post = n_prior.posterior(&GaussianData::None);
        prop_assert_eq!(n_post.mu(), n_prior.mu());
        prop_assert_eq!(n_post.tau(), n_prior.tau());
    }
}
