//! Loading samples from files and reporting on them.

use std::io::Write;

use smirnov::data::{load_separate_files, load_two_column_csv, DataError};
use smirnov::output::{to_json, to_json_pretty};
use smirnov::{Report, SmirnovTest, Verdict};
use tempfile::NamedTempFile;

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn csv_to_json_report() {
    let mut content = String::from("# build latencies\ngroup,latency_ms\n");
    for i in 0..10 {
        content.push_str(&format!("before,{}\n", 10.0 + i as f64 * 0.1));
        content.push_str(&format!("after,{}\n", 20.0 + i as f64 * 0.1));
        content.push_str(&format!("warmup,{}\n", 99.0));
    }
    let file = write_file(&content);

    let pair = load_two_column_csv(file.path(), true, "before", "after").unwrap();
    assert_eq!(pair.first.len(), 10);
    assert_eq!(pair.second.len(), 10);

    let report = SmirnovTest::new().compare_pair(&pair).unwrap();
    assert_eq!(report.verdict, Verdict::Reject);

    let json = to_json(&report).unwrap();
    let parsed: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);

    let value: serde_json::Value = serde_json::from_str(&to_json_pretty(&report).unwrap()).unwrap();
    assert_eq!(value["summary"]["statistic"], 1.0);
    assert_eq!(value["summary"]["n2"], 10);
    assert_eq!(value["alpha"], 0.05);
}

#[test]
fn separate_files_round_trip() {
    let first = write_file("1.0\n2.0\n3.0\n\n4.0\n");
    let second = write_file("# second run\n1.5\n2.5\n3.5\n4.5\n");

    let pair = load_separate_files(first.path(), second.path()).unwrap();
    assert_eq!(pair.first, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(pair.second, vec![1.5, 2.5, 3.5, 4.5]);

    let report = SmirnovTest::new().compare_pair(&pair).unwrap();
    assert!((report.statistic() - 0.25).abs() < 1e-12);
    assert_eq!(report.verdict, Verdict::Retain);
}

#[test]
fn missing_label_is_reported() {
    let file = write_file("before,1.0\nbefore,2.0\n");
    match load_two_column_csv(file.path(), false, "before", "after") {
        Err(DataError::LabelNotFound { label, present }) => {
            assert_eq!(label, "after");
            assert_eq!(present, vec!["before".to_string()]);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn non_finite_value_is_rejected() {
    let file = write_file("before,1.0\nafter,inf\n");
    match load_two_column_csv(file.path(), false, "before", "after") {
        Err(DataError::NonFiniteValue { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn missing_file_is_io_error() {
    let result = load_separate_files(
        std::path::Path::new("/nonexistent/first.txt"),
        std::path::Path::new("/nonexistent/second.txt"),
    );
    assert!(matches!(result, Err(DataError::Io(_))));
}
