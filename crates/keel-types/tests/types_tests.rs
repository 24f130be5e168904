//! Integration tests for keel-types.

use keel_types::constants::EPSILON;
use keel_types::Scalar;

#[test]
fn epsilon_is_positive_and_small() {
    assert!(EPSILON > 0.0);
    assert!(EPSILON < 1.0e-3);
}

#[test]
fn scalar_matches_gpu_width() {
    assert_eq!(std::mem::size_of::<Scalar>(), 4);
}
