//! Univariate distributions used by the tests.
//!
//! - **Empirical** ([`empirical`]): step-function CDF built from a sample
//! - **Kolmogorov–Smirnov** ([`kolmogorov`]): null distribution of the KS statistic
//! - **Reference** ([`reference`]): fully specified continuous distributions for
//!   one-sample tests

pub mod empirical;
pub mod kolmogorov;
pub mod reference;

pub use empirical::EmpiricalDistribution;
pub use kolmogorov::KolmogorovSmirnovDistribution;
pub use reference::{Normal, Uniform};

/// A cumulative distribution function on the real line.
///
/// Implementations must be non-decreasing with values in `[0, 1]`.
pub trait Cdf {
    /// P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;
}

impl<F> Cdf for F
where
    F: Fn(f64) -> f64,
{
    fn cdf(&self, x: f64) -> f64 {
        self(x)
    }
}
