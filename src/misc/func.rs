use special::Gamma as _;

/// Natural logarithm of the binomial coefficient, ln nCk
///
/// # Example
///
/// ```rust
/// use conjugate::misc::ln_binom;
///
/// assert!((ln_binom(4.0, 2.0) - 6.0_f64.ln()).abs() < 1E-12);
/// ```
pub fn ln_binom(n: f64, k: f64) -> f64 {
    (n + 1.0).ln_gamma().0
        - (k + 1.0).ln_gamma().0
        - (n - k + 1.0).ln_gamma().0
}

/// Quantile of a continuous distribution by bisection on its CDF.
///
/// Finds x in `[lo, hi]` with `cdf(x) = p`. The bracket must contain the
/// quantile: `cdf(lo) ≤ p ≤ cdf(hi)`. Used for distributions whose
/// quantile function has no closed form (e.g. the Gamma).
pub fn bisect_quantile<F>(cdf: F, p: f64, lo: f64, hi: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    const TOL: f64 = 1E-14;
    const MAX_ITER: usize = 200;

    let mut lo = lo;
    let mut hi = hi;

    for _ in 0..MAX_ITER {
        let mid = 0.5 * (lo + hi);
        let f = cdf(mid);
        if (f - p).abs() < TOL || (hi - lo) < TOL * mid.abs().max(1.0) {
            return mid;
        }
        if f < p {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1E-9;

    #[test]
    fn ln_binom_values() {
        assert::close(ln_binom(4.0, 2.0), 6.0_f64.ln(), TOL);
        assert::close(ln_binom(10.0, 0.0), 0.0, TOL);
        assert::close(ln_binom(10.0, 10.0), 0.0, TOL);
    }

    #[test]
    fn bisect_quantile_recovers_exponential_quantile() {
        // Exponential(1) cdf
        let cdf = |x: f64| 1.0 - (-x).exp();
        let q = bisect_quantile(cdf, 0.5, 0.0, 50.0);
        assert::close(q, 2.0_f64.ln(), 1E-10);
    }

    #[test]
    fn bisect_quantile_tail() {
        let cdf = |x: f64| 1.0 - (-x).exp();
        let q = bisect_quantile(cdf, 0.975, 0.0, 50.0);
        assert::close(q, -(0.025_f64.ln()), 1E-9);
    }
}
