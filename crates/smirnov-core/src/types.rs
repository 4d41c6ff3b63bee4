//! Hypothesis selectors and tail labels.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Alternative hypothesis of a Kolmogorov–Smirnov test.
///
/// "First" is the first sample of a two-sample test, or the sample itself in a
/// one-sample test against a reference distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alternative {
    /// The two distribution functions differ somewhere (two-sided, `Dn`).
    #[default]
    Unequal,

    /// The first distribution function lies above the second somewhere
    /// (one-sided, `Dn+`). Equivalently, the first sample tends to be smaller.
    FirstLarger,

    /// The first distribution function lies below the second somewhere
    /// (one-sided, `Dn-`).
    FirstSmaller,
}

impl Alternative {
    /// Tail of the null distribution used for the p-value.
    pub fn tail(&self) -> Tail {
        match self {
            Alternative::Unequal => Tail::TwoTail,
            Alternative::FirstLarger => Tail::OneUpper,
            Alternative::FirstSmaller => Tail::OneLower,
        }
    }

    /// The alternative obtained by exchanging the two samples.
    pub fn swapped(&self) -> Alternative {
        match self {
            Alternative::Unequal => Alternative::Unequal,
            Alternative::FirstLarger => Alternative::FirstSmaller,
            Alternative::FirstSmaller => Alternative::FirstLarger,
        }
    }

    /// Name of the statistic for this alternative.
    pub fn statistic_name(&self) -> &'static str {
        match self {
            Alternative::Unequal => "Dn",
            Alternative::FirstLarger => "Dn+",
            Alternative::FirstSmaller => "Dn-",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alternative::Unequal => write!(f, "distributions are unequal"),
            Alternative::FirstLarger => write!(f, "first distribution function is larger"),
            Alternative::FirstSmaller => write!(f, "first distribution function is smaller"),
        }
    }
}

/// Which side of the null distribution a p-value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tail {
    /// Two-sided: a difference in either direction.
    TwoTail,
    /// One-sided, upper direction.
    OneUpper,
    /// One-sided, lower direction.
    OneLower,
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tail::TwoTail => write!(f, "two-tailed"),
            Tail::OneUpper => write!(f, "one-tailed (upper)"),
            Tail::OneLower => write!(f, "one-tailed (lower)"),
        }
    }
}
