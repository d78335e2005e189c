//! Conjugate analysis of the mean of noisy reaction-time measurements
//! with a known observation variance.
use conjugate::analysis::{gaussian_mean, DEFAULT_LEVEL};
use conjugate::curve::linspace;
use conjugate::dist::GaussianMean;

fn main() {
    // Five measurements with known observation σ = 5
    let data = [15.77, 20.5, 8.26, 14.37, 21.09];

    // Prior belief: mean near 20, standard deviation 5
    let prior = GaussianMean::new(20.0, 5.0, 5.0).unwrap();
    let grid = linspace(0.0, 40.0, 2001);

    let report = gaussian_mean(&data, &prior, DEFAULT_LEVEL, Some(20.0), &grid)
        .expect("finite data and a valid level");

    println!("prior:     {}", prior);
    println!("posterior: {}", report.posterior);
    println!(
        "posterior mean {:.3} (sd {:.3})",
        report.summary.posterior_mean, report.summary.posterior_sd
    );

    let interval = report.summary.interval.as_ref().unwrap();
    println!(
        "{:.0}% credible interval: [{:.3}, {:.3}]",
        100.0 * interval.level,
        interval.lower,
        interval.upper
    );

    let tail = report.summary.tail.as_ref().unwrap();
    println!(
        "Pr(mean >= {} | data) = {:.4}",
        tail.threshold, tail.prob
    );

    // The curves are ready for any plotting backend
    println!("{} grid points evaluated", report.curves.len());
}
