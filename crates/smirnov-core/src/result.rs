//! Serializable outcome of a computed test.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Alternative, Tail};

/// Snapshot of a finished Kolmogorov–Smirnov test.
///
/// Produced by `summary()` on either test type; carries everything needed to
/// report or re-check the decision without the samples themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    /// Observed statistic (`Dn`, `Dn+` or `Dn-` depending on the alternative).
    pub statistic: f64,

    /// Probability of a statistic at least this extreme under the null.
    pub p_value: f64,

    /// Tail the p-value was read from.
    pub tail: Tail,

    /// Alternative hypothesis the statistic was computed for.
    pub alternative: Alternative,

    /// Sample size of the null distribution.
    pub effective_sample_size: usize,

    /// Size of the first (or only) sample.
    pub n1: usize,

    /// Size of the second sample; `None` for a one-sample test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n2: Option<usize>,
}

impl TestSummary {
    /// `p_value < alpha`.
    pub fn significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }

    /// Whether the summary comes from a two-sample test.
    pub fn is_two_sample(&self) -> bool {
        self.n2.is_some()
    }
}

impl fmt::Display for TestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::formatting::write_summary(f, self)
    }
}
