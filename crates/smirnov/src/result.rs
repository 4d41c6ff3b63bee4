//! Reports produced by [`SmirnovTest`](crate::SmirnovTest).

use std::fmt;

use serde::{Deserialize, Serialize};
use smirnov_core::{Alternative, Tail, TestSummary};

/// Decision at the configured significance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// `p_value < alpha`: the samples differ in the tested direction.
    Reject,
    /// `p_value >= alpha`: no evidence of a difference.
    Retain,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Reject => write!(f, "reject"),
            Verdict::Retain => write!(f, "retain"),
        }
    }
}

/// Outcome of a test together with the decision it led to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Statistic, p-value and sample sizes.
    pub summary: TestSummary,

    /// Significance level the verdict was taken at.
    pub alpha: f64,

    /// Reject or retain the null hypothesis.
    pub verdict: Verdict,

    /// Effective sample size was below the configured minimum.
    pub small_sample: bool,
}

impl Report {
    /// Observed statistic.
    pub fn statistic(&self) -> f64 {
        self.summary.statistic
    }

    /// p-value of the observed statistic.
    pub fn p_value(&self) -> f64 {
        self.summary.p_value
    }

    /// Tail the p-value was read from.
    pub fn tail(&self) -> Tail {
        self.summary.tail
    }

    /// Alternative hypothesis that was tested.
    pub fn alternative(&self) -> Alternative {
        self.summary.alternative
    }

    /// Whether the null hypothesis was rejected.
    pub fn is_significant(&self) -> bool {
        self.verdict == Verdict::Reject
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::output::format_report(self))
    }
}
