//! Plain-text sample files.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{DataError, DataMetadata, SamplePair};

/// Load two samples from a labelled `label,value` file.
///
/// ```csv
/// group,latency_ms
/// before,12.4
/// after,11.9
/// before,13.1
/// ```
///
/// Rows whose label is neither `first_label` nor `second_label` are skipped,
/// so one file can hold several groups. With `has_header` the first data line
/// is dropped unparsed.
///
/// # Errors
///
/// [`DataError::Io`] on read failure, [`DataError::Parse`] for a row without
/// exactly two fields, [`DataError::NonFiniteValue`] for a value that is not a
/// finite number, [`DataError::LabelNotFound`] if either label never occurs.
pub fn load_two_column_csv(
    path: &Path,
    has_header: bool,
    first_label: &str,
    second_label: &str,
) -> Result<SamplePair, DataError> {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let mut present = BTreeSet::new();

    let rows = data_lines(path)?.into_iter().skip(usize::from(has_header));
    for (line, row) in rows {
        let (label, value) = match row.split_once(',') {
            Some((label, value)) if !value.contains(',') => (label.trim(), value.trim()),
            _ => {
                return Err(DataError::Parse {
                    line,
                    message: format!(
                        "expected 'label,value', found {} field(s)",
                        row.split(',').count()
                    ),
                })
            }
        };

        let target = if label == first_label {
            Some(&mut first)
        } else if label == second_label {
            Some(&mut second)
        } else {
            None
        };
        if let Some(sample) = target {
            sample.push(parse_value(value, line)?);
        }
        present.insert(label.to_string());
    }

    for (sample, label) in [(&first, first_label), (&second, second_label)] {
        if sample.is_empty() {
            return Err(DataError::LabelNotFound {
                label: label.to_string(),
                present: present.into_iter().collect(),
            });
        }
    }

    tracing::debug!(
        "Loaded {} '{}' and {} '{}' observations from {}",
        first.len(),
        first_label,
        second.len(),
        second_label,
        path.display()
    );

    let metadata = DataMetadata {
        source: Some(path.display().to_string()),
        labels: Some((first_label.to_string(), second_label.to_string())),
    };
    Ok(SamplePair::with_metadata(first, second, metadata))
}

/// Load each sample from its own file, one value per line.
pub fn load_separate_files(first_path: &Path, second_path: &Path) -> Result<SamplePair, DataError> {
    let first = load_column(first_path)?;
    let second = load_column(second_path)?;

    let metadata = DataMetadata {
        source: Some(format!(
            "{} + {}",
            first_path.display(),
            second_path.display()
        )),
        labels: None,
    };
    Ok(SamplePair::with_metadata(first, second, metadata))
}

fn load_column(path: &Path) -> Result<Vec<f64>, DataError> {
    data_lines(path)?
        .into_iter()
        .map(|(line, text)| parse_value(&text, line))
        .collect()
}

/// Non-blank, non-comment lines with their 1-indexed line numbers.
fn data_lines(path: &Path) -> Result<Vec<(usize, String)>, DataError> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push((index + 1, trimmed.to_string()));
    }
    Ok(lines)
}

fn parse_value(text: &str, line: usize) -> Result<f64, DataError> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DataError::NonFiniteValue {
            line,
            text: text.to_string(),
        }),
    }
}
