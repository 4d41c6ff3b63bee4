//! Fully specified continuous distributions for one-sample tests.

use serde::{Deserialize, Serialize};

use super::Cdf;
use crate::error::{Result, TestError};
use crate::math;

/// Normal distribution `N(mean, std_dev²)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// `N(mean, std_dev²)`.
    ///
    /// # Errors
    ///
    /// [`TestError::InvalidParameter`] unless `mean` is finite and `std_dev`
    /// is finite and positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(TestError::InvalidParameter {
                name: "mean",
                value: mean,
                constraint: "finite",
            });
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(TestError::InvalidParameter {
                name: "std_dev",
                value: std_dev,
                constraint: "finite and > 0",
            });
        }
        Ok(Self { mean, std_dev })
    }

    /// The standard normal `N(0, 1)`.
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Location parameter.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Scale parameter, always positive.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Cdf for Normal {
    fn cdf(&self, x: f64) -> f64 {
        math::normal_cdf((x - self.mean) / self.std_dev)
    }
}

/// Continuous uniform distribution on `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Uniform {
    low: f64,
    high: f64,
}

impl Uniform {
    /// Uniform on `[low, high]`.
    ///
    /// # Errors
    ///
    /// [`TestError::InvalidParameter`] unless both bounds are finite and
    /// `low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() {
            return Err(TestError::InvalidParameter {
                name: "low",
                value: low,
                constraint: "finite",
            });
        }
        if !high.is_finite() || high <= low {
            return Err(TestError::InvalidParameter {
                name: "high",
                value: high,
                constraint: "finite and > low",
            });
        }
        Ok(Self { low, high })
    }

    /// The unit interval `[0, 1]`.
    pub fn unit() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }

    /// Lower bound of the support.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound of the support.
    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Cdf for Uniform {
    fn cdf(&self, x: f64) -> f64 {
        if x <= self.low {
            0.0
        } else if x >= self.high {
            1.0
        } else {
            (x - self.low) / (self.high - self.low)
        }
    }
}
