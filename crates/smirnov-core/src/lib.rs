//! Core statistics for nonparametric distribution comparison.
//!
//! This crate provides empirical distribution functions, the null
//! distribution of the Kolmogorov–Smirnov statistic and the one- and
//! two-sample Kolmogorov–Smirnov tests. It is designed to work in `no_std`
//! environments with only an allocator.
//!
//! # Features
//!
//! - `std` (default): Enable standard library support (`std::error::Error`,
//!   colored output)
//!
//! # Usage
//!
//! This crate is typically used through the main `smirnov` crate, which adds
//! configuration, logging, data loading and report output. It can also be
//! used directly:
//!
//! ```
//! use smirnov_core::{HypothesisTest, TwoSampleKolmogorovSmirnovTest};
//!
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let b = [6.0, 7.0, 8.0, 9.0, 10.0];
//! let test = TwoSampleKolmogorovSmirnovTest::new(&a, &b).unwrap();
//! assert_eq!(test.statistic(), 1.0);
//! assert!(test.significant(0.05));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod colors;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod formatting;
pub mod hypothesis;
pub mod math;
pub mod result;
pub mod types;

// Re-export commonly used items at crate root
pub use distribution::{
    Cdf, EmpiricalDistribution, KolmogorovSmirnovDistribution, Normal, Uniform,
};
pub use error::{Result, SampleRole, TestError};
pub use hypothesis::{
    effective_sample_size, HypothesisTest, OneSampleKolmogorovSmirnovTest,
    TwoSampleKolmogorovSmirnovTest,
};
pub use result::TestSummary;
pub use types::{Alternative, Tail};
