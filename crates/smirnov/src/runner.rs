//! The `SmirnovTest` builder: configure once, compare many samples.

use std::env;

use smirnov_core::{
    Alternative, Cdf, HypothesisTest, OneSampleKolmogorovSmirnovTest, TestSummary,
    TwoSampleKolmogorovSmirnovTest,
};

use crate::config::Config;
use crate::data::SamplePair;
use crate::error::Error;
use crate::result::{Report, Verdict};

/// Kolmogorov–Smirnov testing with a fixed configuration.
///
/// # Example
///
/// ```
/// use smirnov::{Alternative, SmirnovTest};
///
/// let before = [12.1, 11.8, 12.4, 12.0, 11.9, 12.2, 12.3, 11.7];
/// let after = [13.0, 13.4, 12.9, 13.3, 13.1, 13.6, 12.8, 13.2];
///
/// let report = SmirnovTest::new()
///     .alpha(0.01)
///     .alternative(Alternative::FirstLarger)
///     .compare(&before, &after)
///     .unwrap();
/// assert!(report.is_significant());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SmirnovTest {
    config: Config,
}

impl SmirnovTest {
    /// Defaults: alpha 0.05, two-sided, minimum effective sample size 5.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset with alpha 0.01, for decisions where false alarms are costly.
    pub fn strict() -> Self {
        Self::new().alpha(0.01)
    }

    /// Preset with alpha 0.10, for screening many comparisons by eye.
    pub fn exploratory() -> Self {
        Self::new().alpha(0.10)
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the significance level.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not in (0, 1).
    pub fn alpha(mut self, alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "alpha must be in (0, 1), got {}",
            alpha
        );
        self.config.alpha = alpha;
        self
    }

    /// Set the alternative hypothesis.
    pub fn alternative(mut self, alternative: Alternative) -> Self {
        self.config.alternative = alternative;
        self
    }

    /// Set the effective sample size below which reports are flagged.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn min_effective_sample_size(mut self, n: usize) -> Self {
        assert!(n > 0, "min_effective_sample_size must be > 0 (got {})", n);
        self.config.min_effective_sample_size = n;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Override settings from environment variables.
    ///
    /// - `SMIRNOV_ALPHA`: significance level (e.g. "0.01")
    /// - `SMIRNOV_ALTERNATIVE`: `unequal`, `first-larger` or `first-smaller`
    ///   (also `two-sided`, `greater`, `less`)
    /// - `SMIRNOV_MIN_EFFECTIVE_SIZE`: minimum effective sample size
    ///
    /// Unparseable or out-of-range values are ignored.
    pub fn from_env(mut self) -> Self {
        if let Some(alpha) = parse_f64_env("SMIRNOV_ALPHA") {
            if alpha > 0.0 && alpha < 1.0 {
                self.config.alpha = alpha;
            }
        }
        if let Some(alternative) = env::var("SMIRNOV_ALTERNATIVE")
            .ok()
            .and_then(|s| parse_alternative(&s))
        {
            self.config.alternative = alternative;
        }
        if let Some(n) = parse_usize_env("SMIRNOV_MIN_EFFECTIVE_SIZE") {
            if n > 0 {
                self.config.min_effective_sample_size = n;
            }
        }
        self
    }

    // =========================================================================
    // Tests
    // =========================================================================

    /// Two-sample test of `first` against `second`.
    ///
    /// # Errors
    ///
    /// [`Error::Test`] if either sample is empty or holds a non-finite value.
    pub fn compare(&self, first: &[f64], second: &[f64]) -> Result<Report, Error> {
        tracing::debug!(
            "Two-sample KS test: n1 = {}, n2 = {}, alternative = {:?}",
            first.len(),
            second.len(),
            self.config.alternative
        );
        let test =
            TwoSampleKolmogorovSmirnovTest::with_alternative(first, second, self.config.alternative)?;
        Ok(self.report(test.summary(), test.significant(self.config.alpha)))
    }

    /// Two-sample test of a loaded [`SamplePair`].
    pub fn compare_pair(&self, pair: &SamplePair) -> Result<Report, Error> {
        self.compare(&pair.first, &pair.second)
    }

    /// One-sample test of `sample` against a fully specified `reference` CDF.
    pub fn goodness_of_fit<C: Cdf + ?Sized>(
        &self,
        sample: &[f64],
        reference: &C,
    ) -> Result<Report, Error> {
        tracing::debug!(
            "One-sample KS test: n = {}, alternative = {:?}",
            sample.len(),
            self.config.alternative
        );
        let test = OneSampleKolmogorovSmirnovTest::with_alternative(
            sample,
            reference,
            self.config.alternative,
        )?;
        Ok(self.report(test.summary(), test.significant(self.config.alpha)))
    }

    fn report(&self, summary: TestSummary, significant: bool) -> Report {
        let small_sample = summary.effective_sample_size < self.config.min_effective_sample_size;
        if small_sample {
            tracing::warn!(
                "Effective sample size {} is below the configured minimum {}; p-value is coarse",
                summary.effective_sample_size,
                self.config.min_effective_sample_size
            );
        }
        tracing::debug!(
            "{} = {:.6}, p = {:.6e}, effective n = {}",
            summary.alternative.statistic_name(),
            summary.statistic,
            summary.p_value,
            summary.effective_sample_size
        );

        Report {
            summary,
            alpha: self.config.alpha,
            verdict: if significant {
                Verdict::Reject
            } else {
                Verdict::Retain
            },
            small_sample,
        }
    }
}

fn parse_alternative(s: &str) -> Option<Alternative> {
    match s.trim().to_ascii_lowercase().as_str() {
        "unequal" | "two-sided" => Some(Alternative::Unequal),
        "first-larger" | "greater" => Some(Alternative::FirstLarger),
        "first-smaller" | "less" => Some(Alternative::FirstSmaller),
        _ => None,
    }
}

fn parse_usize_env(name: &str) -> Option<usize> {
    env::var(name).ok()?.parse().ok()
}

fn parse_f64_env(name: &str) -> Option<f64> {
    env::var(name).ok()?.parse().ok()
}
