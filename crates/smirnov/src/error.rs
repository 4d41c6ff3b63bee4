//! Top-level error type.

use std::fmt;

use smirnov_core::TestError;

use crate::data::DataError;

/// Errors returned by [`SmirnovTest`](crate::SmirnovTest) and the batch
/// helpers.
#[derive(Debug)]
pub enum Error {
    /// The samples or parameters were rejected by the test itself.
    Test(TestError),

    /// Samples could not be loaded.
    Data(DataError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Test(e) => write!(f, "test error: {}", e),
            Error::Data(e) => write!(f, "data error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Test(e) => Some(e),
            Error::Data(e) => Some(e),
        }
    }
}

impl From<TestError> for Error {
    fn from(e: TestError) -> Self {
        Error::Test(e)
    }
}

impl From<DataError> for Error {
    fn from(e: DataError) -> Self {
        Error::Data(e)
    }
}
