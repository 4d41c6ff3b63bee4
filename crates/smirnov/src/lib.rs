//! # smirnov
//!
//! Decide whether two samples come from the same distribution, without
//! assuming a parametric family.
//!
//! This crate wraps the Kolmogorov–Smirnov tests of `smirnov-core` with:
//! - a configurable builder ([`SmirnovTest`]) with presets and environment
//!   overrides
//! - serializable reports with a reject/retain verdict ([`Report`])
//! - CSV loaders ([`data`]) and text/JSON output ([`output`])
//! - parallel evaluation of many comparisons ([`batch`])
//!
//! ## Quick Start
//!
//! ```
//! use smirnov::SmirnovTest;
//!
//! let control = [0.8, 1.1, 0.9, 1.3, 1.0, 0.7, 1.2, 0.95, 1.05, 0.85];
//! let treated = [1.9, 2.3, 2.1, 1.8, 2.4, 2.0, 2.2, 1.95, 2.05, 2.15];
//!
//! let report = SmirnovTest::new().compare(&control, &treated)?;
//! println!("{}", report);
//! assert!(report.is_significant());
//! # Ok::<(), smirnov::Error>(())
//! ```
//!
//! ## Logging
//!
//! Computation details are emitted through `tracing` at `debug` level; small
//! effective sample sizes are reported at `warn`. Install any `tracing`
//! subscriber to see them.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod result;
mod runner;

// Functional modules
pub mod batch;
pub mod data;
pub mod output;

// Re-exports for public API
pub use config::{Config, DEFAULT_MIN_EFFECTIVE_SAMPLE_SIZE};
pub use error::Error;
pub use result::{Report, Verdict};
pub use runner::SmirnovTest;

pub use smirnov_core::{
    effective_sample_size, Alternative, Cdf, EmpiricalDistribution, HypothesisTest,
    KolmogorovSmirnovDistribution, Normal, OneSampleKolmogorovSmirnovTest, SampleRole, Tail,
    TestError, TestSummary, TwoSampleKolmogorovSmirnovTest, Uniform,
};

/// Panic unless two samples are consistent with one distribution.
///
/// Uses [`SmirnovTest::new`] unless a configured tester is passed as the third
/// argument. On failure the panic message contains the formatted report.
///
/// # Example
/// ```
/// use smirnov::{assert_same_distribution, SmirnovTest};
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let b = [1.5, 2.5, 3.5, 4.5, 5.5, 6.5];
/// assert_same_distribution!(a, b);
/// assert_same_distribution!(a, b, SmirnovTest::strict());
/// ```
#[macro_export]
macro_rules! assert_same_distribution {
    ($first:expr, $second:expr) => {
        $crate::assert_same_distribution!($first, $second, $crate::SmirnovTest::new())
    };
    ($first:expr, $second:expr, $tester:expr) => {
        match $tester.compare(&$first[..], &$second[..]) {
            Ok(report) => {
                if report.is_significant() {
                    panic!("samples differ:\n{}", report);
                }
            }
            Err(e) => panic!("comparison failed: {}", e),
        }
    };
}
