//! Evaluate many independent sample pairs.
//!
//! With the `parallel` feature (default) pairs are tested on the rayon thread
//! pool. Each comparison is independent and produces its own result, so the
//! output is identical to the sequential path and in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::data::SamplePair;
use crate::error::Error;
use crate::result::Report;
use crate::runner::SmirnovTest;

/// Test every pair with the same configuration.
///
/// Failures are reported per pair; one bad pair does not stop the others.
pub fn compare_all(tester: &SmirnovTest, pairs: &[SamplePair]) -> Vec<Result<Report, Error>> {
    tracing::info!("Running {} two-sample comparisons", pairs.len());

    #[cfg(feature = "parallel")]
    let results: Vec<Result<Report, Error>> = pairs
        .par_iter()
        .map(|pair| tester.compare_pair(pair))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<Report, Error>> =
        pairs.iter().map(|pair| tester.compare_pair(pair)).collect();

    log_finished(&results);
    results
}

/// Test `reference` against each of `candidates`.
pub fn compare_each_to(
    tester: &SmirnovTest,
    reference: &[f64],
    candidates: &[Vec<f64>],
) -> Vec<Result<Report, Error>> {
    tracing::info!(
        "Comparing {} candidates against a reference of {} observations",
        candidates.len(),
        reference.len()
    );

    #[cfg(feature = "parallel")]
    let results: Vec<Result<Report, Error>> = candidates
        .par_iter()
        .map(|candidate| tester.compare(reference, candidate))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<Report, Error>> = candidates
        .iter()
        .map(|candidate| tester.compare(reference, candidate))
        .collect();

    log_finished(&results);
    results
}

fn log_finished(results: &[Result<Report, Error>]) {
    let (rejected, retained, failed) = tally(results);
    tracing::info!(
        "Batch finished: {} rejected, {} retained, {} failed",
        rejected,
        retained,
        failed
    );
}

/// `(rejected, retained, failed)` counts of a batch.
fn tally(results: &[Result<Report, Error>]) -> (usize, usize, usize) {
    let rejected = results
        .iter()
        .filter(|r| matches!(r, Ok(report) if report.is_significant()))
        .count();
    let failed = results.iter().filter(|r| r.is_err()).count();
    (rejected, results.len() - rejected - failed, failed)
}
