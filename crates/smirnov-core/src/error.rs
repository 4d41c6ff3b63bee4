//! Error types for test construction and distribution evaluation.

use core::fmt;

/// Identifies which input sample an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleRole {
    /// The only sample of a one-sample test, or a standalone ECDF.
    Single,
    /// The first sample of a two-sample test.
    First,
    /// The second sample of a two-sample test.
    Second,
}

impl fmt::Display for SampleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleRole::Single => write!(f, "sample"),
            SampleRole::First => write!(f, "first sample"),
            SampleRole::Second => write!(f, "second sample"),
        }
    }
}

/// Errors raised while building a test or a distribution.
///
/// Every variant is raised before any outcome is constructed: a test either
/// fully succeeds or fails with exactly one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum TestError {
    /// A sample had no observations.
    EmptySample {
        /// Which sample was empty.
        which: SampleRole,
    },

    /// A sample contained NaN or an infinity.
    NonFiniteValue {
        /// Which sample held the value.
        which: SampleRole,
        /// Position of the offending value in the caller's slice.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The effective sample size `round(n1·n2 / (n1+n2))` was zero.
    InvalidSampleSize {
        /// Size of the first sample.
        n1: usize,
        /// Size of the second sample.
        n2: usize,
    },

    /// The Kolmogorov–Smirnov distribution was requested for `n = 0`.
    InvalidDistributionSize,

    /// A numeric parameter violated its constraint.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Provided value.
        value: f64,
        /// Constraint description.
        constraint: &'static str,
    },

    /// The operation is declared by the test contract but not available for
    /// this test.
    Unsupported {
        /// Name of the operation.
        operation: &'static str,
    },
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestError::EmptySample { which } => {
                write!(f, "{} is empty; at least one observation is required", which)
            }
            TestError::NonFiniteValue {
                which,
                index,
                value,
            } => write!(
                f,
                "{} contains a non-finite value {} at index {}",
                which, value, index
            ),
            TestError::InvalidSampleSize { n1, n2 } => write!(
                f,
                "effective sample size round({}·{}/({}+{})) is zero",
                n1, n2, n1, n2
            ),
            TestError::InvalidDistributionSize => {
                write!(f, "Kolmogorov-Smirnov distribution requires n > 0")
            }
            TestError::InvalidParameter {
                name,
                value,
                constraint,
            } => write!(
                f,
                "invalid parameter {} = {}: must be {}",
                name, value, constraint
            ),
            TestError::Unsupported { operation } => {
                write!(f, "operation '{}' is not supported by this test", operation)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TestError {}

/// Result alias for fallible core operations.
pub type Result<T> = core::result::Result<T, TestError>;

/// Validate that a sample is non-empty and entirely finite.
pub(crate) fn validate_sample(sample: &[f64], which: SampleRole) -> Result<()> {
    if sample.is_empty() {
        return Err(TestError::EmptySample { which });
    }
    if let Some((index, &value)) = sample.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(TestError::NonFiniteValue {
            which,
            index,
            value,
        });
    }
    Ok(())
}
