//! Goodness-of-fit against fully specified reference distributions.

use smirnov::{Alternative, Error, Normal, SampleRole, SmirnovTest, TestError, Uniform, Verdict};

/// Midpoints of `n` equal cells of the unit interval.
fn uniform_grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect()
}

#[test]
fn evenly_spread_sample_fits_uniform() {
    let sample = uniform_grid(20);
    let report = SmirnovTest::new()
        .goodness_of_fit(&sample, &Uniform::unit())
        .unwrap();

    assert!((report.statistic() - 0.025).abs() < 1e-12);
    assert_eq!(report.p_value(), 1.0);
    assert_eq!(report.verdict, Verdict::Retain);
    assert_eq!(report.summary.n1, 20);
    assert_eq!(report.summary.n2, None);
    assert_eq!(report.summary.effective_sample_size, 20);
}

#[test]
fn shifted_sample_rejects_standard_normal() {
    let sample = [2.5, 2.8, 3.0, 3.1, 3.3, 3.6, 3.9, 4.2];
    let report = SmirnovTest::strict()
        .goodness_of_fit(&sample, &Normal::standard())
        .unwrap();

    assert!(report.statistic() > 0.99);
    assert!(report.p_value() < 1e-6);
    assert_eq!(report.verdict, Verdict::Reject);
}

#[test]
fn same_sample_fits_matching_normal() {
    let sample = [2.5, 2.8, 3.0, 3.1, 3.3, 3.6, 3.9, 4.2];
    let reference = Normal::new(3.3, 0.55).unwrap();
    let report = SmirnovTest::new()
        .goodness_of_fit(&sample, &reference)
        .unwrap();

    assert!(report.statistic() < 0.3);
    assert_eq!(report.verdict, Verdict::Retain);
}

#[test]
fn closure_reference_matches_named_distribution() {
    let sample = [0.05, 0.12, 0.31, 0.47, 0.52, 0.66, 0.71, 0.93];
    let tester = SmirnovTest::new();

    let named = tester.goodness_of_fit(&sample, &Uniform::unit()).unwrap();
    let closure = tester
        .goodness_of_fit(&sample, &|x: f64| x.clamp(0.0, 1.0))
        .unwrap();

    assert_eq!(named.statistic(), closure.statistic());
    assert_eq!(named.p_value(), closure.p_value());
}

#[test]
fn one_sided_alternatives_follow_direction() {
    // Everything sits in the lower half, so the ECDF runs above the reference.
    let sample: Vec<f64> = uniform_grid(20).iter().map(|x| x / 2.0).collect();

    let larger = SmirnovTest::new()
        .alternative(Alternative::FirstLarger)
        .goodness_of_fit(&sample, &Uniform::unit())
        .unwrap();
    assert!((larger.statistic() - 0.5125).abs() < 1e-12);
    assert_eq!(larger.verdict, Verdict::Reject);

    let smaller = SmirnovTest::new()
        .alternative(Alternative::FirstSmaller)
        .goodness_of_fit(&sample, &Uniform::unit())
        .unwrap();
    assert!((smaller.statistic() - 0.0125).abs() < 1e-12);
    assert_eq!(smaller.verdict, Verdict::Retain);
}

#[test]
fn invalid_inputs_are_errors() {
    let tester = SmirnovTest::new();

    match tester.goodness_of_fit(&[], &Uniform::unit()) {
        Err(Error::Test(TestError::EmptySample { which })) => {
            assert_eq!(which, SampleRole::Single)
        }
        other => panic!("unexpected {:?}", other),
    }

    match tester.goodness_of_fit(&[0.5], &|_: f64| 2.0) {
        Err(Error::Test(TestError::InvalidParameter { name, .. })) => {
            assert_eq!(name, "reference_cdf")
        }
        other => panic!("unexpected {:?}", other),
    }
}
