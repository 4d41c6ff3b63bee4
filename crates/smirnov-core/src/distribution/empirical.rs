//! Empirical distribution of a finite sample.
//!
//! The distribution function is the right-continuous step function
//! ```text
//! F(x) = |{ s in sample : s <= x }| / n
//! ```
//! with a jump of `multiplicity / n` at every distinct sample value. It is
//! `0` below the minimum and `1` at and above the maximum.
//!
//! The smoothing parameter is the bandwidth of a Gaussian kernel density
//! estimate exposed through [`EmpiricalDistribution::pdf`]. It does not alter
//! the distribution function.
//!
//! # Input Requirements
//!
//! Samples must be non-empty and finite. NaN or infinite values are rejected at
//! construction.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use super::Cdf;
use crate::error::{validate_sample, Result, SampleRole, TestError};
use crate::math;

/// Step-function CDF of a sample, sorted once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalDistribution {
    sorted: Vec<f64>,
    smoothing: f64,
}

impl EmpiricalDistribution {
    /// Build an unsmoothed empirical distribution.
    ///
    /// # Errors
    ///
    /// [`TestError::EmptySample`] or [`TestError::NonFiniteValue`].
    pub fn new(sample: &[f64]) -> Result<Self> {
        Self::with_smoothing(sample, 0.0)
    }

    /// Build an empirical distribution with a kernel bandwidth.
    ///
    /// `smoothing` must be finite and non-negative; `0` disables the kernel
    /// density estimate.
    pub fn with_smoothing(sample: &[f64], smoothing: f64) -> Result<Self> {
        Self::for_role(sample, smoothing, SampleRole::Single)
    }

    /// Build with Silverman's rule-of-thumb bandwidth (see
    /// [`silverman_bandwidth`]).
    pub fn with_silverman_smoothing(sample: &[f64]) -> Result<Self> {
        let mut ecdf = Self::new(sample)?;
        ecdf.smoothing = silverman_bandwidth(&ecdf.sorted);
        Ok(ecdf)
    }

    pub(crate) fn for_role(sample: &[f64], smoothing: f64, which: SampleRole) -> Result<Self> {
        validate_sample(sample, which)?;
        if !smoothing.is_finite() || smoothing < 0.0 {
            return Err(TestError::InvalidParameter {
                name: "smoothing",
                value: smoothing,
                constraint: "finite and >= 0",
            });
        }

        let mut sorted = sample.to_vec();
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));
        Ok(Self { sorted, smoothing })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false; empty samples are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The sample values in ascending order.
    pub fn samples(&self) -> &[f64] {
        &self.sorted
    }

    /// Kernel bandwidth; `0` means no smoothing.
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Smallest observation.
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Largest observation.
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Number of observations `<= x`.
    ///
    /// Binary search over the sorted sample, so O(log n). A NaN `x` counts
    /// nothing.
    pub fn count_le(&self, x: f64) -> usize {
        self.sorted.partition_point(|&s| s <= x)
    }

    /// Distribution function `F(x) = count(s <= x) / n`.
    pub fn distribution_function(&self, x: f64) -> f64 {
        self.count_le(x) as f64 / self.sorted.len() as f64
    }

    /// Complementary distribution function `1 - F(x)`.
    pub fn complementary_distribution_function(&self, x: f64) -> f64 {
        (self.sorted.len() - self.count_le(x)) as f64 / self.sorted.len() as f64
    }

    /// Gaussian kernel density estimate at `x`.
    ///
    /// Returns `None` when smoothing is `0`: the unsmoothed empirical
    /// distribution has no density.
    pub fn pdf(&self, x: f64) -> Option<f64> {
        if self.smoothing == 0.0 {
            return None;
        }
        let h = self.smoothing;
        let sum: f64 = self
            .sorted
            .iter()
            .map(|&s| math::normal_pdf((x - s) / h))
            .sum();
        Some(sum / (self.sorted.len() as f64 * h))
    }

    /// Sample mean.
    pub fn mean(&self) -> f64 {
        self.sorted.iter().sum::<f64>() / self.sorted.len() as f64
    }

    /// Unbiased sample variance (`0` for a single observation).
    pub fn variance(&self) -> f64 {
        let n = self.sorted.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        self.sorted.iter().map(|&x| math::sq(x - mean)).sum::<f64>() / (n - 1) as f64
    }

    /// Inverse of the distribution function.
    ///
    /// Returns the smallest sample value `s` with `F(s) >= p`. `p = 0` gives
    /// the minimum.
    ///
    /// # Errors
    ///
    /// [`TestError::InvalidParameter`] if `p` is outside `[0, 1]` or NaN.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(TestError::InvalidParameter {
                name: "p",
                value: p,
                constraint: "in [0, 1]",
            });
        }
        let n = self.sorted.len();
        // Smallest rank k with k/n >= p; the product can land one ulp off
        // either way.
        let mut rank = math::ceil(p * n as f64) as usize;
        if rank > 0 && (rank - 1) as f64 / n as f64 >= p {
            rank -= 1;
        } else if rank < n && (rank as f64 / n as f64) < p {
            rank += 1;
        }
        Ok(self.sorted[rank.saturating_sub(1).min(n - 1)])
    }
}

impl Cdf for EmpiricalDistribution {
    fn cdf(&self, x: f64) -> f64 {
        self.distribution_function(x)
    }
}

/// Silverman's rule-of-thumb bandwidth `0.9 · min(σ, IQR/1.34) · n^(-1/5)`.
///
/// Falls back to `σ` (or `1` for a constant sample) when the IQR is zero.
/// `sorted` must be non-empty and ascending.
pub fn silverman_bandwidth(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    debug_assert!(n > 0, "sample must be non-empty");
    if n < 2 {
        return 1.0;
    }

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let sd = math::sqrt(sorted.iter().map(|&x| math::sq(x - mean)).sum::<f64>() / (n - 1) as f64);
    let iqr = sorted[(3 * n) / 4] - sorted[n / 4];

    let spread = if iqr > 0.0 { sd.min(iqr / 1.34) } else { sd };
    if spread <= 0.0 {
        return 1.0;
    }
    0.9 * spread * math::pow(n as f64, -0.2)
}
