//! Conjugate analysis of an arrival rate from event counts.
use conjugate::analysis::{poisson_rate, DEFAULT_LEVEL};
use conjugate::curve::linspace;
use conjugate::dist::Gamma;

fn main() {
    // Events observed in four equal windows
    let counts: Vec<u32> = vec![3, 5, 2, 4];

    let prior = Gamma::new(2.0, 0.5).unwrap();
    let grid = linspace(0.0, 12.0, 2001);

    let report = poisson_rate(&counts, &prior, DEFAULT_LEVEL, &grid)
        .expect("valid level");

    println!("prior:     {}", prior);
    println!("posterior: {}", report.posterior);
    println!(
        "posterior rate {:.3} (sd {:.3})",
        report.summary.posterior_mean, report.summary.posterior_sd
    );

    let interval = report.summary.interval.as_ref().unwrap();
    println!(
        "{:.0}% credible interval: [{:.3}, {:.3}]",
        100.0 * interval.level,
        interval.lower,
        interval.upper
    );
}
