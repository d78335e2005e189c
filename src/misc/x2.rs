use special::Gamma as _;

/// Χ<sup>2</sup> (Chi-squared) goodness-of-fit test.
///
/// Returns the Χ<sup>2</sup> statistic and the p-value under the null
/// hypothesis that the observed counts were generated with probabilities
/// `ps`.
///
/// # Example
///
/// ```
/// use conjugate::misc::x2_test;
///
/// let f_obs: Vec<u32> = vec![28, 31, 40, 35];
/// let ps: Vec<f64> = vec![0.25; 4];
///
/// let (_, p) = x2_test(&f_obs, &ps);
/// assert!(p > 0.05);
/// ```
pub fn x2_test(f_obs: &[u32], ps: &[f64]) -> (f64, f64) {
    let k = f_obs.len();
    let nf = f64::from(f_obs.iter().sum::<u32>());
    let x2 = nf
        * f_obs.iter().zip(ps.iter()).fold(0.0, |acc, (&o, &p)| {
            acc + (f64::from(o) / nf - p).powi(2) / p
        });

    let df = (k - 1) as f64;
    let p = 1.0 - (x2 / 2.0).inc_gamma(df / 2.0);
    (x2, p)
}
