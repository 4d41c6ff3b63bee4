//! Two-sample comparisons through the `SmirnovTest` builder.

use smirnov::{
    assert_same_distribution, Alternative, Error, SampleRole, SmirnovTest, Tail, TestError,
    Verdict,
};

const LOW: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const HIGH: [f64; 5] = [6.0, 7.0, 8.0, 9.0, 10.0];

#[test]
fn disjoint_samples_are_rejected() {
    let report = SmirnovTest::new().compare(&LOW, &HIGH).unwrap();

    assert_eq!(report.statistic(), 1.0);
    assert_eq!(report.summary.effective_sample_size, 3);
    assert_eq!(report.summary.n1, 5);
    assert_eq!(report.summary.n2, Some(5));
    assert_eq!(report.tail(), Tail::TwoTail);
    assert!(report.p_value() < 0.05);
    assert_eq!(report.verdict, Verdict::Reject);
    assert!(report.is_significant());
}

#[test]
fn identical_samples_are_retained() {
    let sample = [3.2, 1.5, 4.8, 2.2, 5.1, 3.9, 2.7, 4.1];
    let report = SmirnovTest::new().compare(&sample, &sample).unwrap();

    assert_eq!(report.statistic(), 0.0);
    assert_eq!(report.p_value(), 1.0);
    assert_eq!(report.verdict, Verdict::Retain);
}

#[test]
fn two_sided_statistic_is_symmetric() {
    let a = [0.3, 1.7, 2.2, 0.9, 3.1, 1.4, 2.8];
    let b = [1.1, 2.6, 0.4, 3.5, 1.9, 2.0, 4.2, 0.8, 2.4];

    let tester = SmirnovTest::new();
    let ab = tester.compare(&a, &b).unwrap();
    let ba = tester.compare(&b, &a).unwrap();

    assert_eq!(ab.statistic(), ba.statistic());
    assert_eq!(ab.p_value(), ba.p_value());
}

#[test]
fn one_sided_alternatives_follow_direction() {
    // LOW has the larger distribution function everywhere.
    let larger = SmirnovTest::new()
        .alternative(Alternative::FirstLarger)
        .compare(&LOW, &HIGH)
        .unwrap();
    assert_eq!(larger.statistic(), 1.0);
    assert_eq!(larger.tail(), Tail::OneUpper);

    let smaller = SmirnovTest::new()
        .alternative(Alternative::FirstSmaller)
        .compare(&LOW, &HIGH)
        .unwrap();
    assert_eq!(smaller.statistic(), 0.0);
    assert_eq!(smaller.tail(), Tail::OneLower);
    assert_eq!(smaller.verdict, Verdict::Retain);
}

#[test]
fn two_sided_statistic_is_max_of_one_sided() {
    let a = [0.5, 1.5, 2.5, 3.5, 9.0, 9.5];
    let b = [2.0, 3.0, 4.0, 5.0, 6.0];

    let two = SmirnovTest::new().compare(&a, &b).unwrap();
    let plus = SmirnovTest::new()
        .alternative(Alternative::FirstLarger)
        .compare(&a, &b)
        .unwrap();
    let minus = SmirnovTest::new()
        .alternative(Alternative::FirstSmaller)
        .compare(&a, &b)
        .unwrap();

    assert_eq!(two.statistic(), plus.statistic().max(minus.statistic()));
    assert!(plus.statistic() > 0.0 && minus.statistic() > 0.0);
}

#[test]
fn p_value_does_not_depend_on_alpha() {
    // Dn = 0.35 at effective n = 10, p ≈ 0.134.
    let a: Vec<f64> = (0..20).map(f64::from).collect();
    let b: Vec<f64> = a.iter().map(|x| x + 6.5).collect();

    let exploratory = SmirnovTest::exploratory().compare(&a, &b).unwrap();
    let strict = SmirnovTest::strict().compare(&a, &b).unwrap();

    assert_eq!(exploratory.p_value(), strict.p_value());
    assert_eq!(exploratory.summary.effective_sample_size, 10);
    assert!((exploratory.statistic() - 0.35).abs() < 1e-12);
    assert!((exploratory.p_value() - 0.134).abs() < 1e-3);
    assert_eq!(exploratory.verdict, Verdict::Retain);

    let lenient = SmirnovTest::new().alpha(0.2).compare(&a, &b).unwrap();
    assert_eq!(lenient.verdict, Verdict::Reject);
    assert_eq!(lenient.alpha, 0.2);
}

#[test]
fn empty_and_non_finite_samples_are_errors() {
    let tester = SmirnovTest::new();

    match tester.compare(&[], &LOW) {
        Err(Error::Test(TestError::EmptySample { which })) => {
            assert_eq!(which, SampleRole::First)
        }
        other => panic!("unexpected {:?}", other),
    }

    match tester.compare(&LOW, &[1.0, f64::NAN]) {
        Err(Error::Test(TestError::NonFiniteValue { which, .. })) => {
            assert_eq!(which, SampleRole::Second)
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn assert_macro_accepts_matching_samples() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let b = [1.2, 2.1, 3.3, 3.9, 5.2, 6.1, 6.8, 8.1];
    assert_same_distribution!(a, b);
    assert_same_distribution!(a, b, SmirnovTest::strict());
}

#[test]
#[should_panic(expected = "samples differ")]
fn assert_macro_panics_on_disjoint_samples() {
    assert_same_distribution!(LOW, HIGH);
}

#[test]
#[should_panic(expected = "comparison failed")]
fn assert_macro_panics_on_invalid_samples() {
    let empty: Vec<f64> = Vec::new();
    assert_same_distribution!(empty, LOW);
}
