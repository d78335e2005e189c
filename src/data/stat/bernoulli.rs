#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::data::{Booleable, DataOrSuffStat};
use crate::dist::Bernoulli;
use crate::traits::SuffStat;

/// Bernoulli sufficient statistic.
///
/// Holds the number of trials and the number of successes.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct BernoulliSuffStat {
    n: usize,
    k: usize,
}

impl BernoulliSuffStat {
    /// Create an empty statistic
    #[inline]
    pub fn new() -> Self {
        BernoulliSuffStat { n: 0, k: 0 }
    }

    /// Create a statistic from components without checking whether they
    /// are valid
    #[inline]
    pub fn from_parts_unchecked(n: usize, k: usize) -> Self {
        BernoulliSuffStat { n, k }
    }

    /// Total number of trials, n
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of successful trials, k
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of failed trials, n - k
    #[inline]
    pub fn f(&self) -> usize {
        self.n - self.k
    }
}

impl Default for BernoulliSuffStat {
    fn default() -> Self {
        BernoulliSuffStat::new()
    }
}

impl<'a, X> From<&'a BernoulliSuffStat> for DataOrSuffStat<'a, X, Bernoulli>
where
    X: Booleable,
{
    fn from(stat: &'a BernoulliSuffStat) -> Self {
        DataOrSuffStat::SuffStat(stat)
    }
}

impl<'a, X> From<&'a [X]> for DataOrSuffStat<'a, X, Bernoulli>
where
    X: Booleable,
{
    fn from(xs: &'a [X]) -> Self {
        DataOrSuffStat::Data(xs)
    }
}

impl<X: Booleable> SuffStat<X> for BernoulliSuffStat {
    fn n(&self) -> usize {
        self.n
    }

    fn observe(&mut self, x: &X) {
        self.n += 1;
        if x.into_bool() {
            self.k += 1;
        }
    }

    fn forget(&mut self, x: &X) {
        self.n -= 1;
        if x.into_bool() {
            self.k -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_true_and_false() {
        let mut stat = BernoulliSuffStat::new();
        stat.observe(&true);
        stat.observe(&false);
        stat.observe(&true);

        assert_eq!(stat.n(), 3);
        assert_eq!(stat.k(), 2);
        assert_eq!(stat.f(), 1);
    }

    #[test]
    fn observe_integer_encoding() {
        let mut stat = BernoulliSuffStat::new();
        stat.observe_many(&[0_u8, 1, 1, 0, 1]);

        assert_eq!(stat.n(), 5);
        assert_eq!(stat.k(), 3);
    }

    #[test]
    fn forget_undoes_observe() {
        let mut stat = BernoulliSuffStat::new();
        stat.observe_many(&[true, false, true]);
        stat.forget_many(&[true, false, true]);

        assert_eq!(stat, BernoulliSuffStat::new());
    }

    #[test]
    fn from_parts_matches_observed_counts() {
        let mut stat = BernoulliSuffStat::new();
        stat.observe_many(&[true, false, true]);

        assert_eq!(stat, BernoulliSuffStat::from_parts_unchecked(3, 2));
    }
}
