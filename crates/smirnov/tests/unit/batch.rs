//! Batch evaluation of many pairs.

use smirnov::batch::{compare_all, compare_each_to};
use smirnov::data::SamplePair;
use smirnov::output::format_batch;
use smirnov::{Error, SmirnovTest, TestError};

fn pairs() -> Vec<SamplePair> {
    vec![
        SamplePair::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![6.0, 7.0, 8.0, 9.0, 10.0]),
        SamplePair::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0, 4.0]),
        SamplePair::new(vec![], vec![1.0]),
        SamplePair::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]),
    ]
}

#[test]
fn results_match_individual_comparisons_in_order() {
    let tester = SmirnovTest::new();
    let pairs = pairs();
    let results = compare_all(&tester, &pairs);

    assert_eq!(results.len(), pairs.len());
    for (pair, result) in pairs.iter().zip(&results) {
        match (tester.compare_pair(pair), result) {
            (Ok(expected), Ok(actual)) => assert_eq!(&expected, actual),
            (Err(_), Err(_)) => {}
            (expected, actual) => panic!("{:?} vs {:?}", expected, actual),
        }
    }
}

#[test]
fn bad_pair_fails_alone() {
    let results = compare_all(&SmirnovTest::new(), &pairs());

    assert!(results[0].as_ref().unwrap().is_significant());
    assert_eq!(results[1].as_ref().unwrap().statistic(), 0.0);
    assert!(matches!(
        results[2],
        Err(Error::Test(TestError::EmptySample { .. }))
    ));
    assert!(results[3].is_ok());
}

#[test]
fn each_candidate_against_reference() {
    let reference = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let candidates = [
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        vec![11.0, 12.0, 13.0, 14.0, 15.0, 16.0],
    ];
    let results = compare_each_to(&SmirnovTest::new(), &reference, &candidates);

    assert_eq!(results.len(), 2);
    assert!(!results[0].as_ref().unwrap().is_significant());
    assert!(results[1].as_ref().unwrap().is_significant());
}

#[test]
fn batch_summary_counts_rejections() {
    let results = compare_all(&SmirnovTest::new(), &pairs());
    let text = format_batch(&results);

    assert!(text.contains("1 of 4 comparisons rejected"), "{}", text);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Empty samples are allowed so failures land at random positions.
    fn sample() -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec((-50i32..50).prop_map(f64::from), 0..30)
    }

    fn pair() -> impl Strategy<Value = SamplePair> {
        (sample(), sample()).prop_map(|(a, b)| SamplePair::new(a, b))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn compare_all_matches_sequential_compare_pair(
            pairs in proptest::collection::vec(pair(), 0..12)
        ) {
            let tester = SmirnovTest::new();
            let results = compare_all(&tester, &pairs);
            prop_assert_eq!(results.len(), pairs.len());

            for (pair, result) in pairs.iter().zip(&results) {
                match (tester.compare_pair(pair), result) {
                    (Ok(expected), Ok(actual)) => prop_assert_eq!(&expected, actual),
                    (Err(_), Err(_)) => {}
                    (expected, actual) => {
                        prop_assert!(false, "{:?} vs {:?}", expected, actual)
                    }
                }
            }
        }
    }
}
