//! Scalar type alias for the math collection.
//!
//! Using `f32` to match GPU vertex/uniform buffer layouts. This alias
//! makes it easy to experiment with `f64` precision if needed.

/// The floating-point type used throughout the keel crates.
///
/// Set to `f32` for GPU compatibility. Change to `f64` for
/// double-precision CPU-only mode (useful for validation).
pub type Scalar = f32;
