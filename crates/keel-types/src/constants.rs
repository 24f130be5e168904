//! Numerical policy constants.

use crate::scalar::Scalar;

/// Tolerance for singularity checks.
///
/// A matrix counts as invertible iff `|determinant| > EPSILON`. Every
/// invertibility decision in the collection goes through this one
/// constant so the answer is consistent process-wide.
pub const EPSILON: Scalar = 1.0e-6;
