//! Rejection rates on simulated data.
//!
//! Thresholds leave a wide margin around the simulated rates (about 0.99
//! power for a 1.5σ shift, about 0.04 false positives at alpha = 0.05).

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;
use smirnov::SmirnovTest;

const SAMPLE_SIZE: usize = 25;

fn draw(rng: &mut Xoshiro256PlusPlus, mean: f64) -> Vec<f64> {
    let normal = Normal::new(mean, 1.0).unwrap();
    (0..SAMPLE_SIZE).map(|_| normal.sample(rng)).collect()
}

fn rejections(shift: f64, trials: u64) -> usize {
    let tester = SmirnovTest::new();
    (0..trials)
        .filter(|&seed| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            let a = draw(&mut rng, 0.0);
            let b = draw(&mut rng, shift);
            tester.compare(&a, &b).unwrap().is_significant()
        })
        .count()
}

#[test]
fn detects_location_shift() {
    let detected = rejections(1.5, 100);
    assert!(
        detected >= 90,
        "only {} of 100 shifted pairs were rejected",
        detected
    );
}

#[test]
fn false_positive_rate_is_controlled() {
    let false_alarms = rejections(0.0, 200);
    assert!(
        false_alarms <= 20,
        "{} of 200 same-distribution pairs were rejected",
        false_alarms
    );
}
