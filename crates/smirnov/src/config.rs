//! Configuration for Kolmogorov–Smirnov testing.

use smirnov_core::constants::DEFAULT_ALPHA;
use smirnov_core::Alternative;

/// Effective sample size below which reports carry a small-sample caveat.
pub const DEFAULT_MIN_EFFECTIVE_SAMPLE_SIZE: usize = 5;

/// Configuration options for [`SmirnovTest`](crate::SmirnovTest).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Significance level for the reject/retain decision.
    ///
    /// The null hypothesis is rejected when `p_value < alpha`. Default: 0.05.
    pub alpha: f64,

    /// Alternative hypothesis the statistic is computed for.
    ///
    /// Default: [`Alternative::Unequal`] (two-sided).
    pub alternative: Alternative,

    /// Smallest effective sample size considered reliable.
    ///
    /// Tests still run below this size, but the report is flagged and a
    /// warning is logged: with so few observations the two-sample p-value
    /// is coarse. Default: 5.
    pub min_effective_sample_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            alternative: Alternative::Unequal,
            min_effective_sample_size: DEFAULT_MIN_EFFECTIVE_SAMPLE_SIZE,
        }
    }
}
