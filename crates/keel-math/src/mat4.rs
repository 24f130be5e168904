//! 4×4 affine transform matrix under the row-vector convention.
//!
//! Vectors are treated as rows: a point transforms as `v' = v * m`, and
//! the translation components occupy row 3:
//!
//! ```text
//! 1   0   0   0
//! 0   1   0   0
//! 0   0   1   0
//! tx  ty  tz  1
//! ```
//!
//! Composition reads left to right in application order: `m1 * m2`
//! applies `m1` first. This is the opposite of `glam::Mat4`, which is
//! column-major with column vectors; the two must not be mixed.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use keel_types::constants::EPSILON;

/// A 4×4 row-major matrix.
///
/// Plain `Copy` value type, laid out as 16 contiguous `f32`s so it can
/// be uploaded to GPU buffers unchanged. Elements are addressed
/// `(row, col)` through the `Index` impls; `IndexMut` exists for
/// in-place construction, after which the matrix should be treated as
/// immutable (copy before sharing).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Mat4 {
    /// Row-major storage: `rows[r][c]` is the element at row r, column c.
    pub rows: [[f32; 4]; 4],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// The zero matrix.
    pub const ZERO: Self = Self {
        rows: [[0.0; 4]; 4],
    };

    /// Creates a matrix from four row vectors.
    ///
    /// Row 0–2 are the x/y/z basis rows, row 3 is the translation row.
    #[inline]
    pub fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()],
        }
    }

    /// Creates a matrix from 16 scalars in row-major order.
    #[inline]
    pub fn from_rows_array(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Creates a diagonal matrix with `scalar` on all four diagonal
    /// entries.
    ///
    /// This is identity only for `scalar == 1.0`; note that the scalar
    /// also lands in the homogeneous `(3, 3)` slot.
    #[inline]
    pub fn from_diagonal(scalar: f32) -> Self {
        Self {
            rows: [
                [scalar, 0.0, 0.0, 0.0],
                [0.0, scalar, 0.0, 0.0],
                [0.0, 0.0, scalar, 0.0],
                [0.0, 0.0, 0.0, scalar],
            ],
        }
    }

    /// Returns a copy of row `index` as a vector.
    #[inline]
    pub fn row(&self, index: usize) -> Vec4 {
        Vec4::from_array(self.rows[index])
    }

    /// Computes the determinant by cofactor expansion.
    ///
    /// The six 2×2 minors of rows 0–1 (`a0..a5`) pair with the six
    /// minors of rows 2–3 (`b0..b5`); `inverse` relies on the same
    /// block structure.
    pub fn determinant(&self) -> f32 {
        let m = &self.rows;

        let a0 = m[0][0] * m[1][1] - m[0][1] * m[1][0];
        let a1 = m[0][0] * m[1][2] - m[0][2] * m[1][0];
        let a2 = m[0][0] * m[1][3] - m[0][3] * m[1][0];
        let a3 = m[0][1] * m[1][2] - m[0][2] * m[1][1];
        let a4 = m[0][1] * m[1][3] - m[0][3] * m[1][1];
        let a5 = m[0][2] * m[1][3] - m[0][3] * m[1][2];
        let b0 = m[2][0] * m[3][1] - m[2][1] * m[3][0];
        let b1 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
        let b2 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
        let b3 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
        let b4 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
        let b5 = m[2][2] * m[3][3] - m[2][3] * m[3][2];

        a0 * b5 - a1 * b4 + a2 * b3 + a3 * b2 - a4 * b1 + a5 * b0
    }

    /// Returns true iff the determinant is far enough from zero for
    /// `inverse` to produce a meaningful result.
    ///
    /// Uses the shared [`EPSILON`] tolerance.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() > EPSILON
    }

    /// Computes the inverse.
    ///
    /// **Singular matrices return the identity matrix.** This is a
    /// deliberate safe default, not an error path: callers that need to
    /// distinguish "was singular" from "inverse happens to be identity"
    /// must check [`is_invertible`](Self::is_invertible) first.
    ///
    /// The invertible case treats the matrix as four 3-vector blocks
    /// (columns a, b, c, d of the top three rows plus the bottom row)
    /// and builds the inverse from cross products, avoiding full
    /// Gaussian elimination. Valid for any invertible affine matrix,
    /// not only orthonormal ones.
    pub fn inverse(&self) -> Mat4 {
        if !self.is_invertible() {
            return Mat4::IDENTITY;
        }

        let m = &self.rows;

        let a = Vec3::new(m[0][0], m[1][0], m[2][0]);
        let b = Vec3::new(m[0][1], m[1][1], m[2][1]);
        let c = Vec3::new(m[0][2], m[1][2], m[2][2]);
        let d = Vec3::new(m[0][3], m[1][3], m[2][3]);

        let x = m[3][0];
        let y = m[3][1];
        let z = m[3][2];
        let w = m[3][3];

        let mut s = a.cross(b);
        let mut t = c.cross(d);
        let mut u = a * y - b * x;
        let mut v = c * w - d * z;

        let inv_det = 1.0 / (s.dot(v) + t.dot(u));
        s *= inv_det;
        t *= inv_det;
        u *= inv_det;
        v *= inv_det;

        let r0 = b.cross(v) + t * y;
        let r1 = v.cross(a) - t * x;
        let r2 = d.cross(u) + s * w;
        let r3 = u.cross(c) - s * z;

        Mat4::from_rows_array([
            [r0.x, r0.y, r0.z, -b.dot(t)],
            [r1.x, r1.y, r1.z, a.dot(t)],
            [r2.x, r2.y, r2.z, -d.dot(s)],
            [r3.x, r3.y, r3.z, c.dot(s)],
        ])
    }

    /// Returns the transpose: row i of the result is column i of self.
    pub fn transpose(&self) -> Mat4 {
        let m = &self.rows;
        Mat4::from_rows_array([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    /// Returns this matrix translated by `translation`.
    ///
    /// Adds the offset to the x/y/z components of row 3; rows 0–2 and
    /// row 3's w component are untouched.
    pub fn translate(&self, translation: Vec3) -> Mat4 {
        let mut result = *self;
        result.rows[3][0] += translation.x;
        result.rows[3][1] += translation.y;
        result.rows[3][2] += translation.z;
        result
    }

    /// Returns this matrix with its upper-left 3×3 block replaced by an
    /// axis-angle rotation.
    ///
    /// `angle` is in radians. `axis` is normalized internally, so any
    /// nonzero axis is accepted. Column 3 of rows 0–2 and all of row 3
    /// carry over from the input unchanged.
    pub fn rotate(&self, angle: f32, axis: Vec3) -> Mat4 {
        let axis = axis.normalize();
        let cos = angle.cos();
        let sin = angle.sin();
        let d = 1.0 - cos;

        let x = axis.x * d;
        let y = axis.y * d;
        let z = axis.z * d;
        let axay = x * axis.y;
        let axaz = x * axis.z;
        let ayaz = y * axis.z;

        let m = &self.rows;
        Mat4::from_rows_array([
            [
                cos + x * axis.x,
                axay - sin * axis.z,
                axaz + sin * axis.y,
                m[0][3],
            ],
            [
                axay + sin * axis.z,
                cos + y * axis.y,
                ayaz - sin * axis.x,
                m[1][3],
            ],
            [
                axaz - sin * axis.y,
                ayaz + sin * axis.x,
                cos + z * axis.z,
                m[2][3],
            ],
            [m[3][0], m[3][1], m[3][2], m[3][3]],
        ])
    }

    /// Returns this matrix scaled per-axis.
    ///
    /// Multiplies the diagonal of the upper-left 3×3 block by
    /// `scale.x/y/z`; every other element is untouched.
    pub fn scale(&self, scale: Vec3) -> Mat4 {
        let mut result = *self;
        result.rows[0][0] *= scale.x;
        result.rows[1][1] *= scale.y;
        result.rows[2][2] *= scale.z;
        result
    }
}

impl Default for Mat4 {
    /// The identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.rows[row][col]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.rows[row][col]
    }
}

impl Mul for Mat4 {
    type Output = Self;

    /// Row-by-column product. `m1 * m2` applies `m1` first under the
    /// row-vector convention.
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for i in 0..4 {
                    sum += self.rows[row][i] * rhs.rows[i][col];
                }
                out.rows[row][col] = sum;
            }
        }
        out
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    /// Each output component is the dot product of the matching matrix
    /// row with `v`.
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}

impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    /// Row-vector application `v' = v * m`.
    ///
    /// Set w = 1 to transform a point (picks up row-3 translation) or
    /// w = 0 for a direction (ignores it).
    fn mul(self, m: Mat4) -> Vec4 {
        let r = &m.rows;
        Vec4::new(
            self.x * r[0][0] + self.y * r[1][0] + self.z * r[2][0] + self.w * r[3][0],
            self.x * r[0][1] + self.y * r[1][1] + self.z * r[2][1] + self.w * r[3][1],
            self.x * r[0][2] + self.y * r[1][2] + self.z * r[2][2] + self.w * r[3][2],
            self.x * r[0][3] + self.y * r[1][3] + self.z * r[2][3] + self.w * r[3][3],
        )
    }
}

impl fmt::Display for Mat4 {
    /// Diagnostic dump: four rows of four space-separated values inside
    /// a labelled brace pair. Not a parsing contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4 {{")?;
        for row in &self.rows {
            writeln!(f, "{} {} {} {}", row[0], row[1], row[2], row[3])?;
        }
        write!(f, "}}")
    }
}
