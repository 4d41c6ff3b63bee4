//! Tests for configuration validation.
//!
//! Invalid builder values must be rejected with a panic naming the setting.

use smirnov::{Alternative, SmirnovTest, DEFAULT_MIN_EFFECTIVE_SAMPLE_SIZE};

// =============================================================================
// ALPHA VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "alpha must be in (0, 1)")]
fn alpha_zero_panics() {
    let _ = SmirnovTest::new().alpha(0.0);
}

#[test]
#[should_panic(expected = "alpha must be in (0, 1)")]
fn alpha_one_panics() {
    let _ = SmirnovTest::new().alpha(1.0);
}

#[test]
#[should_panic(expected = "alpha must be in (0, 1)")]
fn alpha_negative_panics() {
    let _ = SmirnovTest::new().alpha(-0.01);
}

#[test]
#[should_panic(expected = "alpha must be in (0, 1)")]
fn alpha_above_one_panics() {
    let _ = SmirnovTest::new().alpha(1.5);
}

#[test]
#[should_panic(expected = "alpha must be in (0, 1)")]
fn alpha_nan_panics() {
    let _ = SmirnovTest::new().alpha(f64::NAN);
}

#[test]
fn alpha_edge_values_valid() {
    let tester = SmirnovTest::new().alpha(1e-9);
    assert_eq!(tester.config().alpha, 1e-9);

    let tester = SmirnovTest::new().alpha(0.999);
    assert_eq!(tester.config().alpha, 0.999);
}

// =============================================================================
// MINIMUM EFFECTIVE SAMPLE SIZE VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "min_effective_sample_size must be > 0")]
fn min_effective_sample_size_zero_panics() {
    let _ = SmirnovTest::new().min_effective_sample_size(0);
}

#[test]
fn min_effective_sample_size_one_valid() {
    let tester = SmirnovTest::new().min_effective_sample_size(1);
    assert_eq!(tester.config().min_effective_sample_size, 1);
}

// =============================================================================
// PRESETS AND CHAINING
// =============================================================================

#[test]
fn defaults() {
    let config = SmirnovTest::new().config().clone();
    assert_eq!(config.alpha, 0.05);
    assert_eq!(config.alternative, Alternative::Unequal);
    assert_eq!(
        config.min_effective_sample_size,
        DEFAULT_MIN_EFFECTIVE_SAMPLE_SIZE
    );
}

#[test]
fn builder_chaining() {
    let tester = SmirnovTest::strict()
        .alternative(Alternative::FirstSmaller)
        .min_effective_sample_size(20);

    assert_eq!(tester.config().alpha, 0.01);
    assert_eq!(tester.config().alternative, Alternative::FirstSmaller);
    assert_eq!(tester.config().min_effective_sample_size, 20);
}

#[test]
fn later_settings_override_presets() {
    let tester = SmirnovTest::exploratory().alpha(0.2);
    assert_eq!(tester.config().alpha, 0.2);
}
