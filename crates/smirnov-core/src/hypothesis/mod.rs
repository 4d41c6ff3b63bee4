//! Hypothesis tests and their shared contract.
//!
//! A test is computed in full by its constructor: once a value exists its
//! statistic, p-value and tail are fixed. Deciding significance at a given
//! level is the only thing left to do with it.
//!
//! - [`TwoSampleKolmogorovSmirnovTest`]: do two samples share a distribution?
//! - [`OneSampleKolmogorovSmirnovTest`]: does a sample follow a given CDF?

mod one_sample;
mod two_sample;

pub use one_sample::OneSampleKolmogorovSmirnovTest;
pub use two_sample::{effective_sample_size, TwoSampleKolmogorovSmirnovTest};

use crate::error::{Result, TestError};
use crate::types::Tail;

/// Common interface of a computed hypothesis test.
pub trait HypothesisTest: Send + Sync {
    /// Null distribution of the test statistic.
    type Distribution;

    /// Observed value of the test statistic.
    fn statistic(&self) -> f64;

    /// Probability under the null hypothesis of a statistic at least as
    /// extreme as the observed one.
    fn p_value(&self) -> f64;

    /// Which tail of the null distribution [`p_value`](Self::p_value) comes
    /// from.
    fn tail(&self) -> Tail;

    /// The null distribution the p-value was read from.
    fn statistic_distribution(&self) -> &Self::Distribution;

    /// Whether the null hypothesis is rejected at level `alpha`.
    ///
    /// Plain `p_value < alpha`; no multiple-comparison adjustment is applied.
    fn significant(&self, alpha: f64) -> bool {
        self.p_value() < alpha
    }

    /// Critical statistic for a p-value.
    ///
    /// Not every test can invert its null distribution; the default
    /// implementation reports [`TestError::Unsupported`] for every input.
    fn p_value_to_statistic(&self, _p_value: f64) -> Result<f64> {
        Err(TestError::Unsupported {
            operation: "p_value_to_statistic",
        })
    }

    /// p-value of an arbitrary statistic value.
    ///
    /// The default implementation reports [`TestError::Unsupported`] for every
    /// input.
    fn statistic_to_p_value(&self, _statistic: f64) -> Result<f64> {
        Err(TestError::Unsupported {
            operation: "statistic_to_p_value",
        })
    }
}
