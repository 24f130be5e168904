//! # keel-math
//!
//! Affine transform algebra for the keel math utility collection.
//!
//! Provides:
//! - [`Mat4`], a 4×4 row-major affine transform matrix under the
//!   row-vector convention (points multiply on the left, translation
//!   lives in row 3)
//! - Re-exports of `glam` vector types (`Vec3`, `Vec4`)
//! - Angle conversion helpers

pub mod mat4;

pub use mat4::Mat4;

// Re-export glam vector types as the canonical vector types for keel.
pub use glam::{Vec3, Vec4};

/// Converts degrees to radians.
///
/// The input is reduced modulo 360 first, so any finite angle maps into
/// [0, 2π).
pub fn deg_to_rad(degrees: f32) -> f32 {
    (degrees % 360.0) * (std::f32::consts::PI / 180.0)
}

/// Converts radians to degrees.
///
/// The input is reduced modulo 2π first, so any finite angle maps into
/// [0, 360).
pub fn rad_to_deg(radians: f32) -> f32 {
    (radians % (2.0 * std::f32::consts::PI)) * (180.0 / std::f32::consts::PI)
}
