//! Density curves for an external renderer
//!
//! Produces the numeric arrays a plotting layer needs to draw prior,
//! normalized-likelihood, and posterior densities on shared axes. This
//! module computes values only; colors, legends, and axes belong to the
//! renderer.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use itertools::izip;

use crate::traits::ContinuousDistr;

/// Evaluate a density over a grid of points
///
/// Grid points outside the distribution's support map to zero density. An
/// empty grid yields an empty vector.
pub fn pdf_points<D: ContinuousDistr<f64>>(dist: &D, grid: &[f64]) -> Vec<f64> {
    grid.iter()
        .map(|x| if dist.supports(x) { dist.pdf(x) } else { 0.0 })
        .collect()
}

/// Evenly spaced grid of `n` points from `lo` to `hi` inclusive
///
/// # Example
///
/// ```
/// use conjugate::curve::linspace;
///
/// let grid = linspace(0.0, 1.0, 5);
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n).map(|i| lo + step * i as f64).collect()
        }
    }
}

/// Parallel density curves over a shared grid.
///
/// One value sequence per distribution: prior, normalized likelihood (absent
/// for an empty sample), and posterior.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct DensityCurves {
    grid: Vec<f64>,
    prior: Vec<f64>,
    likelihood: Option<Vec<f64>>,
    posterior: Vec<f64>,
}

impl DensityCurves {
    /// Evaluate prior, likelihood, and posterior densities over `grid`
    pub fn compute<D: ContinuousDistr<f64>>(
        grid: &[f64],
        prior: &D,
        likelihood: Option<&D>,
        posterior: &D,
    ) -> Self {
        DensityCurves {
            grid: grid.to_vec(),
            prior: pdf_points(prior, grid),
            likelihood: likelihood.map(|d| pdf_points(d, grid)),
            posterior: pdf_points(posterior, grid),
        }
    }

    /// The evaluation grid
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Prior density values, parallel to the grid
    pub fn prior(&self) -> &[f64] {
        &self.prior
    }

    /// Normalized-likelihood density values, if a sample was observed
    pub fn likelihood(&self) -> Option<&[f64]> {
        self.likelihood.as_deref()
    }

    /// Posterior density values, parallel to the grid
    pub fn posterior(&self) -> &[f64] {
        &self.posterior
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Returns `true` if the grid is empty
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Iterate over (x, prior, posterior) rows in grid order
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        izip!(&self.grid, &self.prior, &self.posterior)
            .map(|(x, pr, po)| (*x, *pr, *po))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::{Beta, Gaussian};

    const TOL: f64 = 1E-12;

    #[test]
    fn linspace_endpoints() {
        let grid = linspace(-2.0, 2.0, 9);
        assert_eq!(grid.len(), 9);
        assert::close(grid[0], -2.0, TOL);
        assert::close(grid[8], 2.0, TOL);
    }

    #[test]
    fn linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
    }

    #[test]
    fn empty_grid_yields_empty_curves() {
        let prior = Gaussian::standard();
        let posterior = Gaussian::new(1.0, 0.5).unwrap();

        let curves =
            DensityCurves::compute(&[], &prior, None, &posterior);

        assert!(curves.is_empty());
        assert!(curves.grid().is_empty());
        assert!(curves.prior().is_empty());
        assert!(curves.posterior().is_empty());
        assert!(curves.likelihood().is_none());
    }

    #[test]
    fn out_of_support_grid_points_have_zero_density() {
        let prior = Beta::uniform();
        let posterior = Beta::new(3.0, 2.0).unwrap();
        let grid = [-0.5, 0.5, 1.5];

        let curves = DensityCurves::compute(&grid, &prior, None, &posterior);

        assert::close(curves.posterior()[0], 0.0, TOL);
        assert!(curves.posterior()[1] > 0.0);
        assert::close(curves.posterior()[2], 0.0, TOL);
    }

    #[test]
    fn posterior_curve_integrates_to_one() {
        let prior = Gaussian::new(20.0, 5.0).unwrap();
        let posterior = Gaussian::new(16.665, 2.0412).unwrap();
        let grid = linspace(0.0, 40.0, 4001);

        let curves =
            DensityCurves::compute(&grid, &prior, None, &posterior);

        // Trapezoid rule over a grid wide enough to hold all the mass
        let dx = grid[1] - grid[0];
        let ys = curves.posterior();
        let total: f64 = ys.iter().sum::<f64>() * dx
            - 0.5 * dx * (ys[0] + ys[ys.len() - 1]);
        assert::close(total, 1.0, 1E-6);
    }

    #[test]
    fn rows_iterates_in_grid_order() {
        let prior = Gaussian::standard();
        let posterior = Gaussian::new(0.5, 0.8).unwrap();
        let grid = linspace(-1.0, 1.0, 11);

        let curves =
            DensityCurves::compute(&grid, &prior, Some(&prior), &posterior);

        assert_eq!(curves.rows().count(), 11);
        let (x0, pr0, po0) = curves.rows().next().unwrap();
        assert::close(x0, -1.0, TOL);
        assert::close(pr0, curves.prior()[0], TOL);
        assert::close(po0, curves.posterior()[0], TOL);
    }
}
