//! # anim-kernel
//!
//! Host-facing entry points for the animation math kernel.
//!
//! A rendering front end owns the timeline, shape tree and surface; it calls
//! into this crate with flat float buffers and gets numbers back. Every
//! function here is a thin adapter from the host buffer layout to the typed
//! APIs of the workspace crates:
//!
//! | Area | Entry points | Backing crate |
//! |------|--------------|---------------|
//! | Transforms | `matrix4_*` | `anim-math` |
//! | Curves | `bezier2_point`, `bezier3_point`, `bezier3_batch` | `anim-math` |
//! | Paths | `simplify_path` | `anim-path` |
//! | Colour | `rgb_to_hsl`, `hsl_to_rgb`, `color_blend` | `anim-color` |
//! | Easing | `easing_*` | `anim-math` |
//! | Batch | `simd_*` | `anim-math` |
//!
//! # Buffer Layout
//!
//! ```text
//! matrix : [f32; 16] column-major, m[col * 4 + row]
//! point  : [f32; 2]  x, y
//! path   : [f32]     x0, y0, x1, y1, ...
//! colour : [f32; 3]  r, g, b | h, s, l
//! rgba   : [f32; 4]
//! ```
//!
//! Outputs are written into caller buffers. Functions that can fail validate
//! everything first and leave the output untouched on error.
//!
//! # Usage
//!
//! ```rust
//! use anim_kernel::*;
//!
//! let mut t = [0.0; 16];
//! matrix4_translate(&mut t, 5.0, 0.0, 0.0);
//!
//! let mut v = [0.0; 4];
//! simd_matrix4_vec4_mul(&mut v, &t, &[0.0, 0.0, 0.0, 1.0]);
//! assert_eq!(v, [5.0, 0.0, 0.0, 1.0]);
//!
//! let path = [0.0, 0.0, 5.0, 1.0, 10.0, 0.0];
//! let mut out = [0.0; 6];
//! assert_eq!(simplify_path(&mut out, &path, 2.0).unwrap(), 2);
//! assert_eq!(&out[..4], &[0.0, 0.0, 10.0, 0.0]);
//! ```
//!
//! # Logging
//!
//! Batch and path routines emit `tracing` events at `trace`/`debug` level.
//! The kernel never installs a subscriber.
//!
//! # Feature Flags
//!
//! - `serde` - Enables `serde` support on [`Easing`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use tracing::debug;

pub use anim_color::{self as color, Hsl, Rgb, Rgba};
pub use anim_core::{get_version, Error, Point, Result, VERSION};
pub use anim_math::{self as math, Easing, Mat4};
pub use anim_path as path;

// ============================================================================
// Matrix
// ============================================================================

/// Writes the flat product of `a` and `b` into `out`.
///
/// `out[i*4+j] = sum_k a[i*4+k] * b[k*4+j]`. With column-major storage this
/// is the transform that applies `a` first, then `b`.
#[inline]
pub fn matrix4_multiply(out: &mut [f32; 16], a: &[f32; 16], b: &[f32; 16]) {
    *out = Mat4::from_cols_array(*a)
        .mul_mat(&Mat4::from_cols_array(*b))
        .to_cols_array();
}

/// In-place form of [`matrix4_multiply`]: `a = a x b`.
#[inline]
pub fn matrix4_multiply_assign(a: &mut [f32; 16], b: &[f32; 16]) {
    let mut m = Mat4::from_cols_array(*a);
    m.mul_assign_mat(&Mat4::from_cols_array(*b));
    *a = m.to_cols_array();
}

/// In-place form of [`matrix4_multiply`] writing into the right operand:
/// `b = a x b`.
#[inline]
pub fn matrix4_premultiply_assign(a: &[f32; 16], b: &mut [f32; 16]) {
    *b = Mat4::from_cols_array(*a)
        .mul_mat(&Mat4::from_cols_array(*b))
        .to_cols_array();
}

/// Writes a translation matrix.
#[inline]
pub fn matrix4_translate(out: &mut [f32; 16], x: f32, y: f32, z: f32) {
    *out = Mat4::translation(x, y, z).to_cols_array();
}

/// Writes a scale matrix.
#[inline]
pub fn matrix4_scale(out: &mut [f32; 16], x: f32, y: f32, z: f32) {
    *out = Mat4::scaling(x, y, z).to_cols_array();
}

/// Writes a rotation about Z by `degrees`.
#[inline]
pub fn matrix4_rotate_z(out: &mut [f32; 16], degrees: f32) {
    *out = Mat4::rotation_z(degrees).to_cols_array();
}

/// Inverts `m` into `out`.
///
/// Returns `false` and leaves `out` unchanged if the determinant is exactly
/// zero.
pub fn matrix4_inverse(out: &mut [f32; 16], m: &[f32; 16]) -> bool {
    match Mat4::from_cols_array(*m).try_inverse() {
        Ok(inv) => {
            *out = inv.to_cols_array();
            true
        }
        Err(err) => {
            debug!(%err, "matrix4_inverse");
            false
        }
    }
}

// ============================================================================
// Bezier
// ============================================================================

/// Evaluates a quadratic Bezier at `t`.
#[inline]
pub fn bezier2_point(out: &mut [f32; 2], t: f32, p0: [f32; 2], p1: [f32; 2], p2: [f32; 2]) {
    *out = anim_math::bezier::quadratic(t, p0.into(), p1.into(), p2.into()).to_array();
}

/// Evaluates a cubic Bezier at `t`.
#[inline]
pub fn bezier3_point(
    out: &mut [f32; 2],
    t: f32,
    p0: [f32; 2],
    p1: [f32; 2],
    p2: [f32; 2],
    p3: [f32; 2],
) {
    *out = anim_math::bezier::cubic(t, p0.into(), p1.into(), p2.into(), p3.into()).to_array();
}

/// Evaluates one cubic at every parameter in `t_values`.
///
/// Writes interleaved `x, y` pairs in parameter order and returns the number
/// of points written.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `out` holds fewer than `2 * t_values.len()`
/// floats.
pub fn bezier3_batch(
    out: &mut [f32],
    t_values: &[f32],
    p0: [f32; 2],
    p1: [f32; 2],
    p2: [f32; 2],
    p3: [f32; 2],
) -> Result<usize> {
    let needed = t_values.len() * 2;
    anim_core::ensure_len("out", needed, out.len())?;
    let points = anim_core::points_from_flat_mut(&mut out[..needed])?;
    anim_math::bezier::cubic_batch_into(
        points,
        t_values,
        p0.into(),
        p1.into(),
        p2.into(),
        p3.into(),
    )?;
    Ok(t_values.len())
}

// ============================================================================
// Paths
// ============================================================================

/// Simplifies an interleaved `x, y` path into `out`.
///
/// Returns the number of points written. An `out` as long as `points` is
/// always large enough.
///
/// # Errors
///
/// - [`Error::OddCoordinateCount`] if `points` has an odd length
/// - [`Error::BufferTooSmall`] if the simplified path does not fit in `out`
pub fn simplify_path(out: &mut [f32], points: &[f32], tolerance: f32) -> Result<usize> {
    let input = anim_core::points_from_flat(points)?;
    let kept = anim_path::simplify(input, tolerance);
    let flat = anim_core::points_to_flat(&kept);
    anim_core::ensure_len("out", flat.len(), out.len())?;
    out[..flat.len()].copy_from_slice(flat);
    Ok(kept.len())
}

// ============================================================================
// Colour
// ============================================================================

/// Converts RGB in [0, 255] to `[h, s, l]` (degrees, percent, percent).
#[inline]
pub fn rgb_to_hsl(out: &mut [f32; 3], r: f32, g: f32, b: f32) {
    *out = anim_color::rgb_to_hsl(r, g, b).to_array();
}

/// Converts HSL (degrees, percent, percent) to `[r, g, b]` in [0, 255].
#[inline]
pub fn hsl_to_rgb(out: &mut [f32; 3], h: f32, s: f32, l: f32) {
    *out = anim_color::hsl_to_rgb(h, s, l).to_array();
}

/// Blends two RGBA colours, alpha included.
#[inline]
pub fn color_blend(out: &mut [f32; 4], c1: [f32; 4], c2: [f32; 4], factor: f32) {
    *out = anim_color::blend(c1, c2, factor);
}

// ============================================================================
// Easing
// ============================================================================

/// `t^3`
#[inline]
pub fn easing_cubic_in(t: f32) -> f32 {
    anim_math::easing::cubic_in(t)
}

/// `1 - (1 - t)^3`
#[inline]
pub fn easing_cubic_out(t: f32) -> f32 {
    anim_math::easing::cubic_out(t)
}

/// Cubic ease in for the first half, out for the second.
#[inline]
pub fn easing_cubic_in_out(t: f32) -> f32 {
    anim_math::easing::cubic_in_out(t)
}

/// Decaying sinusoid settling at 1.
#[inline]
pub fn easing_elastic_out(t: f32) -> f32 {
    anim_math::easing::elastic_out(t)
}

/// Four-segment bounce settling at 1.
#[inline]
pub fn easing_bounce_out(t: f32) -> f32 {
    anim_math::easing::bounce_out(t)
}

/// Evaluates an easing curve looked up by name.
///
/// Accepts the names [`Easing`] parses, such as `cubic_in` or `easeOutBounce`.
///
/// # Errors
///
/// [`Error::UnknownEasing`] if the name is not recognised.
///
/// # Example
///
/// ```rust
/// use anim_kernel::easing_by_name;
///
/// assert_eq!(easing_by_name("easeInCubic", 0.5).unwrap(), 0.125);
/// assert!(easing_by_name("wobble", 0.5).is_err());
/// ```
pub fn easing_by_name(name: &str, t: f32) -> Result<f32> {
    let easing: Easing = name.parse()?;
    Ok(easing.apply(t))
}

// ============================================================================
// Batch
// ============================================================================

/// Adds `count` floats of `a` and `b` into `out`.
///
/// # Errors
///
/// [`Error::LaneMisaligned`] unless `count` is a multiple of 4;
/// [`Error::BufferTooSmall`] if any buffer is shorter than `count`.
#[inline]
pub fn simd_vec4_add(out: &mut [f32], a: &[f32], b: &[f32], count: usize) -> Result<()> {
    anim_math::simd::vec4_add(out, a, b, count)
}

/// Multiplies `count` floats of `a` and `b` into `out`.
///
/// Errors as [`simd_vec4_add`].
#[inline]
pub fn simd_vec4_mul(out: &mut [f32], a: &[f32], b: &[f32], count: usize) -> Result<()> {
    anim_math::simd::vec4_mul(out, a, b, count)
}

/// Writes `m * v` for a column-major matrix.
#[inline]
pub fn simd_matrix4_vec4_mul(out: &mut [f32; 4], m: &[f32; 16], v: &[f32; 4]) {
    *out = anim_math::simd::mat4_mul_vec4(m, v);
}
