//! Conjugate analysis of coin flips with a Beta prior on the success
//! probability.
use conjugate::analysis::{bernoulli_probability, DEFAULT_LEVEL};
use conjugate::curve::linspace;
use conjugate::dist::{Bernoulli, Beta};
use conjugate::traits::Sampleable;

fn main() {
    let mut rng = rand::thread_rng();

    // Generate 1000 coin flips from a coin that comes up heads 70% of the
    // time.
    let flips: Vec<bool> = Bernoulli::new(0.7).unwrap().sample(1000, &mut rng);

    // Use the Jeffreys prior of Beta(0.5, 0.5)
    let prior = Beta::jeffreys();
    let grid = linspace(0.0, 1.0, 1001);

    let report = bernoulli_probability(&flips, &prior, DEFAULT_LEVEL, &grid)
        .expect("boolean data is always in the support");

    println!("posterior: {}", report.posterior);
    println!(
        "posterior mean: {:.3} (should be close to 0.7)",
        report.summary.posterior_mean
    );

    let interval = report.summary.interval.as_ref().unwrap();
    println!(
        "{:.0}% credible interval: [{:.3}, {:.3}]",
        100.0 * interval.level,
        interval.lower,
        interval.upper
    );
}
