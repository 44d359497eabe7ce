//! 4x4 matrix type for animation transforms.
//!
//! [`Mat4`] carries layer transforms between the host and the kernel:
//! translation, scale, Z rotation, composition and inversion.
//!
//! # Convention
//!
//! Matrices are stored as 16 contiguous floats in **column-major** order,
//! element `(row, col)` at index `col * 4 + row`:
//!
//! ```text
//! | m0 m4 m8  m12 |
//! | m1 m5 m9  m13 |     translation lives in m12, m13, m14
//! | m2 m6 m10 m14 |
//! | m3 m7 m11 m15 |
//! ```
//!
//! [`Mat4::mul_mat`] multiplies the flat buffers as `out[i*4+j] = sum_k
//! a[i*4+k] * b[k*4+j]`. Read column-major, `a.mul_mat(&b)` is the product
//! `B * A`: the result applies `a` first and `b` second.
//!
//! # Usage
//!
//! ```rust
//! use anim_math::Mat4;
//!
//! let m = Mat4::translation(5.0, 0.0, 0.0);
//! assert_eq!(m.transform_point([0.0, 0.0, 0.0]), [5.0, 0.0, 0.0]);
//!
//! let inv = m.inverse().unwrap();
//! assert_eq!(inv.transform_point([5.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
//! ```

use anim_core::{Error, Result};
use std::ops::Index;

/// A 4x4 homogeneous transform in column-major order.
///
/// # Example
///
/// ```rust
/// use anim_math::Mat4;
///
/// let m = Mat4::scaling(2.0, 3.0, 4.0);
/// assert_eq!(m[0], 2.0);
/// assert_eq!(m[5], 3.0);
/// assert_eq!(m[10], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// Elements in column-major order.
    pub m: [f32; 16],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Wraps a column-major array.
    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Returns the column-major array.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    /// Returns element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[col * 4 + row]
    }

    /// Creates a translation matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Mat4;
    ///
    /// let m = Mat4::translation(10.0, 20.0, 30.0);
    /// assert_eq!(&m.m[12..16], &[10.0, 20.0, 30.0, 1.0]);
    /// ```
    #[inline]
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Self {
            m: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                x, y, z, 1.0,
            ],
        }
    }

    /// Creates a non-uniform scale matrix.
    #[inline]
    pub const fn scaling(x: f32, y: f32, z: f32) -> Self {
        Self {
            m: [
                x, 0.0, 0.0, 0.0, //
                0.0, y, 0.0, 0.0, //
                0.0, 0.0, z, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Creates a rotation about the Z axis. `degrees` is counter-clockwise.
    ///
    /// The trigonometry runs in `f64` before narrowing, so right angles land
    /// within one ulp of the exact 0/1 entries.
    pub fn rotation_z(degrees: f32) -> Self {
        let rad = f64::from(degrees).to_radians();
        let c = rad.cos() as f32;
        let s = rad.sin() as f32;
        Self {
            m: [
                c, s, 0.0, 0.0, //
                -s, c, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Multiplies two matrices as flat buffers.
    ///
    /// `out[i*4+j] = sum_k self[i*4+k] * other[k*4+j]`. The product is built
    /// in a temporary, so callers may overwrite either operand with it.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        let mut out = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a[i * 4 + k] * b[k * 4 + j];
                }
                out[i * 4 + j] = sum;
            }
        }
        Self { m: out }
    }

    /// In-place `self = self.mul_mat(other)`.
    #[inline]
    pub fn mul_assign_mat(&mut self, other: &Self) {
        *self = self.mul_mat(other);
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[row * 4 + col] = self.m[col * 4 + row];
            }
        }
        Self { m: out }
    }

    /// Computes the determinant by cofactor expansion along the first column.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let adj = self.adjugate();
        self.first_column_expansion(&adj)
    }

    /// Computes the inverse as adjugate / determinant.
    ///
    /// Returns `None` only when the determinant is **exactly** zero. There
    /// is no near-singular threshold: a tiny determinant yields very large
    /// entries rather than a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Mat4;
    ///
    /// assert!(Mat4::ZERO.inverse().is_none());
    ///
    /// let inv = Mat4::scaling(2.0, 4.0, 8.0).inverse().unwrap();
    /// assert_eq!(inv.m[0], 0.5);
    /// assert_eq!(inv.m[5], 0.25);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let adj = self.adjugate();
        let det = self.first_column_expansion(&adj);
        if det == 0.0 {
            return None;
        }

        let inv_det = 1.0 / det;
        Some(Self {
            m: adj.map(|v| v * inv_det),
        })
    }

    /// Like [`inverse`](Self::inverse) but reports a singular matrix as an
    /// error.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] if the determinant is exactly zero.
    pub fn try_inverse(&self) -> Result<Self> {
        self.inverse().ok_or(Error::SingularMatrix)
    }

    /// Applies the transform to a 4-vector (`M * v`).
    #[inline]
    pub fn mul_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        crate::simd::mat4_mul_vec4(&self.m, &v)
    }

    /// Transforms a 3D point with implicit `w = 1`.
    ///
    /// Affine use only: the resulting `w` is dropped without a divide.
    #[inline]
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        let [x, y, z, _] = self.mul_vec4([p[0], p[1], p[2], 1.0]);
        [x, y, z]
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|x| x.is_finite())
    }

    /// Converts to glam Mat4 (same column-major layout).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.m)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self {
            m: m.to_cols_array(),
        }
    }

    #[inline]
    fn first_column_expansion(&self, adj: &[f32; 16]) -> f32 {
        let m = &self.m;
        m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
    }

    /// Transposed cofactor matrix.
    fn adjugate(&self) -> [f32; 16] {
        let m = &self.m;
        let mut inv = [0.0f32; 16];

        inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14]
            + m[13] * m[6] * m[11]
            - m[13] * m[7] * m[10];
        inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14]
            - m[12] * m[6] * m[11]
            + m[12] * m[7] * m[10];
        inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13]
            + m[12] * m[5] * m[11]
            - m[12] * m[7] * m[9];
        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13]
            - m[12] * m[5] * m[10]
            + m[12] * m[6] * m[9];

        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14]
            - m[13] * m[2] * m[11]
            + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14]
            + m[12] * m[2] * m[11]
            - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13]
            - m[12] * m[1] * m[11]
            + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13]
            + m[12] * m[1] * m[10]
            - m[12] * m[2] * m[9];

        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14]
            + m[13] * m[2] * m[7]
            - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14]
            - m[12] * m[2] * m[7]
            + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13]
            + m[12] * m[1] * m[7]
            - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13]
            - m[12] * m[1] * m[6]
            + m[12] * m[2] * m[5];

        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10]
            - m[9] * m[2] * m[7]
            + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10]
            + m[8] * m[2] * m[7]
            - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9]
            - m[8] * m[1] * m[7]
            + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9]
            + m[8] * m[1] * m[6]
            - m[8] * m[2] * m[5];

        inv
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(m: [f32; 16]) -> Self {
        Self { m }
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.m
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}
