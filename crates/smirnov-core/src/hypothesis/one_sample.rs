//! One-sample Kolmogorov–Smirnov test against a fully specified CDF.
//!
//! With the sample sorted as `x(1) <= ... <= x(n)` and reference CDF `R`:
//! ```text
//! D+ = max_i ( i/n - R(x(i)) )
//! D- = max_i ( R(x(i)) - (i-1)/n )
//! ```
//! both floored at zero. The reference must not be fitted to the same data;
//! the null distribution assumes `R` was fixed in advance.

use super::HypothesisTest;
use crate::distribution::{Cdf, EmpiricalDistribution, KolmogorovSmirnovDistribution};
use crate::error::{Result, SampleRole, TestError};
use crate::result::TestSummary;
use crate::types::{Alternative, Tail};

/// A computed one-sample Kolmogorov–Smirnov test.
#[derive(Debug, Clone, PartialEq)]
pub struct OneSampleKolmogorovSmirnovTest {
    sample: EmpiricalDistribution,
    distribution: KolmogorovSmirnovDistribution,
    alternative: Alternative,
    d_plus: f64,
    d_minus: f64,
    statistic: f64,
    p_value: f64,
}

impl OneSampleKolmogorovSmirnovTest {
    /// Two-sided test of whether `sample` was drawn from `reference`.
    ///
    /// # Errors
    ///
    /// [`TestError::EmptySample`] or [`TestError::NonFiniteValue`] for a bad
    /// sample, [`TestError::InvalidParameter`] if `reference` returns a value
    /// outside `[0, 1]` at a sample point.
    pub fn new<C: Cdf + ?Sized>(sample: &[f64], reference: &C) -> Result<Self> {
        Self::with_alternative(sample, reference, Alternative::Unequal)
    }

    /// Test against the given alternative. `FirstLarger` means the sample's
    /// ECDF lies above the reference somewhere.
    pub fn with_alternative<C: Cdf + ?Sized>(
        sample: &[f64],
        reference: &C,
        alternative: Alternative,
    ) -> Result<Self> {
        let sample = EmpiricalDistribution::for_role(sample, 0.0, SampleRole::Single)?;
        let distribution = KolmogorovSmirnovDistribution::new(sample.len())?;

        let n = sample.len() as f64;
        let mut d_plus: f64 = 0.0;
        let mut d_minus: f64 = 0.0;
        for (i, &x) in sample.samples().iter().enumerate() {
            let r = reference.cdf(x);
            if !(0.0..=1.0).contains(&r) {
                return Err(TestError::InvalidParameter {
                    name: "reference_cdf",
                    value: r,
                    constraint: "in [0, 1]",
                });
            }
            d_plus = d_plus.max((i + 1) as f64 / n - r);
            d_minus = d_minus.max(r - i as f64 / n);
        }

        let (statistic, p_value) = match alternative {
            Alternative::Unequal => {
                let d = d_plus.max(d_minus);
                (d, distribution.complementary_distribution_function(d))
            }
            Alternative::FirstLarger => (d_plus, distribution.one_side_upper_tail(d_plus)),
            Alternative::FirstSmaller => (d_minus, distribution.one_side_upper_tail(d_minus)),
        };

        Ok(Self {
            sample,
            distribution,
            alternative,
            d_plus,
            d_minus,
            statistic,
            p_value,
        })
    }

    /// Empirical distribution of the tested sample.
    pub fn sample(&self) -> &EmpiricalDistribution {
        &self.sample
    }

    /// Alternative hypothesis the statistic was computed for.
    pub fn alternative(&self) -> Alternative {
        self.alternative
    }

    /// Largest amount by which the ECDF exceeds the reference.
    pub fn d_plus(&self) -> f64 {
        self.d_plus
    }

    /// Largest amount by which the reference exceeds the ECDF.
    pub fn d_minus(&self) -> f64 {
        self.d_minus
    }

    /// Sample size the null distribution is built for.
    pub fn effective_sample_size(&self) -> usize {
        self.distribution.sample_size()
    }

    /// Serializable snapshot of the outcome; `n2` is `None`.
    pub fn summary(&self) -> TestSummary {
        TestSummary {
            statistic: self.statistic,
            p_value: self.p_value,
            tail: self.tail(),
            alternative: self.alternative,
            effective_sample_size: self.effective_sample_size(),
            n1: self.sample.len(),
            n2: None,
        }
    }
}

impl HypothesisTest for OneSampleKolmogorovSmirnovTest {
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
