//! Two-sample Kolmogorov–Smirnov test.
//!
//! The statistic is the largest discrepancy between the empirical distribution
//! functions `F` (first sample) and `G` (second sample) over the merged sample:
//!
//! - `Unequal`:      `Dn  = sup |F(y) - G(y)|`
//! - `FirstLarger`:  `Dn+ = sup (F(y) - G(y))`
//! - `FirstSmaller`: `Dn- = sup (G(y) - F(y))`
//!
//! Both step functions only change at sample values, so the supremum is
//! attained on the grid `-∞, y(1) <= ... <= y(n1+n2)` of merged values. Each
//! adjacent pair of grid points is scored with both functions evaluated at the
//! same point, which keeps the statistic exact in the presence of ties.
//!
//! The p-value comes from the null distribution of `Dn` at the effective
//! sample size `round(n1·n2 / (n1+n2))`.

extern crate alloc;

use alloc::vec::Vec;

use super::HypothesisTest;
use crate::distribution::{EmpiricalDistribution, KolmogorovSmirnovDistribution};
use crate::error::{Result, SampleRole, TestError};
use crate::math;
use crate::result::TestSummary;
use crate::types::{Alternative, Tail};

/// A computed two-sample Kolmogorov–Smirnov test.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoSampleKolmogorovSmirnovTest {
    first: EmpiricalDistribution,
    second: EmpiricalDistribution,
    distribution: KolmogorovSmirnovDistribution,
    alternative: Alternative,
    statistic: f64,
    p_value: f64,
}

impl TwoSampleKolmogorovSmirnovTest {
    /// Two-sided test of whether `sample1` and `sample2` come from the same
    /// distribution.
    ///
    /// # Errors
    ///
    /// [`TestError::EmptySample`] or [`TestError::NonFiniteValue`] naming the
    /// offending sample.
    pub fn new(sample1: &[f64], sample2: &[f64]) -> Result<Self> {
        Self::with_alternative(sample1, sample2, Alternative::Unequal)
    }

    /// Test against the given alternative hypothesis.
    pub fn with_alternative(
        sample1: &[f64],
        sample2: &[f64],
        alternative: Alternative,
    ) -> Result<Self> {
        let first = EmpiricalDistribution::for_role(sample1, 0.0, SampleRole::First)?;
        let second = EmpiricalDistribution::for_role(sample2, 0.0, SampleRole::Second)?;

        let n = effective_sample_size(first.len(), second.len())?;
        let distribution = KolmogorovSmirnovDistribution::new(n)?;

        let statistic = merged_statistic(&first, &second, alternative);
        let p_value = match alternative {
            Alternative::Unequal => distribution.complementary_distribution_function(statistic),
            Alternative::FirstLarger | Alternative::FirstSmaller => {
                distribution.one_side_upper_tail(statistic)
            }
        };

        Ok(Self {
            first,
            second,
            distribution,
            alternative,
            statistic,
            p_value,
        })
    }

    /// Empirical distribution of the first sample.
    pub fn first(&self) -> &EmpiricalDistribution {
        &self.first
    }

    /// Empirical distribution of the second sample.
    pub fn second(&self) -> &EmpiricalDistribution {
        &self.second
    }

    /// Alternative hypothesis the statistic was computed for.
    pub fn alternative(&self) -> Alternative {
        self.alternative
    }

    /// `round(n1·n2 / (n1+n2))`, the size the null distribution is built for.
    pub fn effective_sample_size(&self) -> usize {
        self.distribution.sample_size()
    }

    /// Serializable snapshot of the outcome.
    pub fn summary(&self) -> TestSummary {
        TestSummary {
            statistic: self.statistic,
            p_value: self.p_value,
            tail: self.tail(),
            alternative: self.alternative,
            effective_sample_size: self.effective_sample_size(),
            n1: self.first.len(),
            n2: Some(self.second.len()),
        }
    }
}

impl HypothesisTest for TwoSampleKolmogorovSmirnovTest {
    type Distribution = KolmogorovSmirnovDistribution;

    fn statistic(&self) -> f64 {
        self.statistic
    }

    fn p_value(&self) -> f64 {
        self.p_value
    }

    fn tail(&self) -> Tail {
        self.alternative.tail()
    }

    fn statistic_distribution(&self) -> &KolmogorovSmirnovDistribution {
        &self.distribution
    }
}

/// Effective sample size `round(n1·n2 / (n1+n2))`, halves rounded away from
/// zero.
///
/// # Errors
///
/// [`TestError::InvalidSampleSize`] if the result is zero, which happens only
/// when a sample is empty.
pub fn effective_sample_size(n1: usize, n2: usize) -> Result<usize> {
    let total = n1 + n2;
    if total == 0 {
        return Err(TestError::InvalidSampleSize { n1, n2 });
    }
    let n = math::round(n1 as f64 * n2 as f64 / total as f64) as usize;
    if n == 0 {
        return Err(TestError::InvalidSampleSize { n1, n2 });
    }
    Ok(n)
}

/// Largest discrepancy between the two ECDFs over the merged grid.
fn merged_statistic(
    first: &EmpiricalDistribution,
    second: &EmpiricalDistribution,
    alternative: Alternative,
) -> f64 {
    let xs = first.samples();
    let ys = second.samples();
    let n1 = xs.len() as f64;
    let n2 = ys.len() as f64;

    let mut grid = Vec::with_capacity(xs.len() + ys.len());
    grid.extend_from_slice(xs);
    grid.extend_from_slice(ys);
    grid.sort_unstable_by(|a, b| a.total_cmp(b));

    // F - G at -∞ followed by every grid value. Both inputs are sorted, so the
    // counts only move forward.
    let mut diffs = Vec::with_capacity(grid.len() + 1);
    diffs.push(0.0);
    let (mut i, mut j) = (0, 0);
    for &y in &grid {
        while i < xs.len() && xs[i] <= y {
            i += 1;
        }
        while j < ys.len() && ys[j] <= y {
            j += 1;
        }
        diffs.push(i as f64 / n1 - j as f64 / n2);
    }

    let discrepancy = |d: f64| match alternative {
        Alternative::Unequal => math::abs(d),
        Alternative::FirstLarger => d,
        Alternative::FirstSmaller => -d,
    };

    diffs
        .windows(2)
        .map(|pair| discrepancy(pair[0]).max(discrepancy(pair[1])))
        .fold(0.0, f64::max)
}
