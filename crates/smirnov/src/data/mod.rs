//! Loading sample pairs from files.
//!
//! # Supported Formats
//!
//! - **Labelled two-column CSV**: `label,value` rows; the two labels select the
//!   first and second sample, rows with any other label are ignored
//! - **Separate files**: two files with one value per line
//!
//! Blank lines and lines starting with `#` are skipped in both formats.
//!
//! # Example
//!
//! ```no_run
//! use smirnov::data::load_two_column_csv;
//! use std::path::Path;
//!
//! let pair = load_two_column_csv(Path::new("latencies.csv"), true, "before", "after")?;
//! println!("Loaded {} + {} observations", pair.first.len(), pair.second.len());
//! # Ok::<(), smirnov::data::DataError>(())
//! ```

mod csv;

pub use csv::{load_separate_files, load_two_column_csv};

use std::fmt;

/// Why a pair of samples could not be loaded.
#[derive(Debug)]
pub enum DataError {
    /// Reading the file failed.
    Io(std::io::Error),

    /// A row did not have the `label,value` shape.
    Parse {
        /// 1-indexed line of the row.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// No row carried the requested sample label.
    LabelNotFound {
        /// The label that selects the sample.
        label: String,
        /// Labels that did occur, sorted.
        present: Vec<String>,
    },

    /// A sample is smaller than the caller requires.
    TooFewObservations {
        /// Label of the sample (`first` / `second` when unlabelled).
        label: String,
        /// Observations present.
        count: usize,
        /// Observations required.
        required: usize,
    },

    /// A value field is not a finite number (`NaN` and `inf` included).
    NonFiniteValue {
        /// 1-indexed line of the value.
        line: usize,
        /// The field as written.
        text: String,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "could not read samples: {}", e),
            DataError::Parse { line, message } => write!(f, "line {}: {}", line, message),
            DataError::LabelNotFound { label, present } => write!(
                f,
                "no observations labelled '{}' (labels present: {})",
                label,
                present.join(", ")
            ),
            DataError::TooFewObservations {
                label,
                count,
                required,
            } => write!(
                f,
                "sample '{}' has {} observations, {} required",
                label, count, required
            ),
            DataError::NonFiniteValue { line, text } => {
                write!(f, "line {}: '{}' is not a finite number", line, text)
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let DataError::Io(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

/// Two samples to compare.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePair {
    /// First sample (`F` in the statistic).
    pub first: Vec<f64>,

    /// Second sample (`G` in the statistic).
    pub second: Vec<f64>,

    /// Where the samples came from, when loaded from files.
    pub metadata: Option<DataMetadata>,
}

impl SamplePair {
    /// Pair two in-memory samples.
    pub fn new(first: Vec<f64>, second: Vec<f64>) -> Self {
        Self {
            first,
            second,
            metadata: None,
        }
    }

    /// Pair two samples loaded from `metadata.source`.
    pub fn with_metadata(first: Vec<f64>, second: Vec<f64>, metadata: DataMetadata) -> Self {
        Self {
            first,
            second,
            metadata: Some(metadata),
        }
    }

    /// Length of the shorter sample.
    pub fn min_len(&self) -> usize {
        self.first.len().min(self.second.len())
    }

    /// `n1 + n2`.
    pub fn total_len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Require at least `required` observations in each sample.
    pub fn require_at_least(&self, required: usize) -> Result<(), DataError> {
        let (first_label, second_label) = self.labels();
        for (sample, label) in [(&self.first, first_label), (&self.second, second_label)] {
            if sample.len() < required {
                return Err(DataError::TooFewObservations {
                    label: label.to_string(),
                    count: sample.len(),
                    required,
                });
            }
        }
        Ok(())
    }

    /// Source labels of the two samples, or `first` / `second`.
    pub fn labels(&self) -> (&str, &str) {
        match self.metadata.as_ref().and_then(|m| m.labels.as_ref()) {
            Some((a, b)) => (a.as_str(), b.as_str()),
            None => ("first", "second"),
        }
    }
}

/// Where a [`SamplePair`] was read from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataMetadata {
    /// File path, or both paths joined with ` + `.
    pub source: Option<String>,

    /// Labels of the first and second sample in the source file.
    pub labels: Option<(String, String)>,
}
