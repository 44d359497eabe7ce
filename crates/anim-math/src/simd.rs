//! 4-lane batch vector operations.
//!
//! Elementwise add/multiply and matrix-vector products over packed float
//! buffers, using the `wide` crate for portable SIMD on stable Rust. Each lane
//! performs exactly the scalar operation, so results match a plain loop.
//!
//! # Lane Contract
//!
//! The batch entry points take an explicit element `count` that must be a
//! multiple of 4, and every buffer must hold at least `count` floats. Both
//! are checked before anything is written:
//!
//! ```rust
//! use anim_core::Error;
//! use anim_math::simd::vec4_add;
//!
//! let a = [1.0; 6];
//! let b = [2.0; 6];
//! let mut out = [0.0; 6];
//! assert_eq!(
//!     vec4_add(&mut out, &a, &b, 6),
//!     Err(Error::LaneMisaligned { count: 6 })
//! );
//! assert!(vec4_add(&mut out, &a, &b, 4).is_ok());
//! assert_eq!(out, [3.0, 3.0, 3.0, 3.0, 0.0, 0.0]);
//! ```

use anim_core::{ensure_lanes, ensure_len, Result};
use tracing::trace;
use wide::f32x4;

/// Returns true when `f32x4` maps onto hardware vector registers.
///
/// On other targets `wide` falls back to scalar arrays with identical results.
#[inline]
pub const fn is_accelerated() -> bool {
    cfg!(any(
        target_feature = "sse2",
        target_feature = "neon",
        target_feature = "simd128"
    ))
}

#[inline]
fn load(chunk: &[f32]) -> f32x4 {
    f32x4::from([chunk[0], chunk[1], chunk[2], chunk[3]])
}

fn check_batch(count: usize, out: &[f32], a: &[f32], b: &[f32]) -> Result<()> {
    ensure_lanes(count)?;
    ensure_len("a", count, a.len())?;
    ensure_len("b", count, b.len())?;
    ensure_len("out", count, out.len())
}

fn zip_lanes(
    out: &mut [f32],
    a: &[f32],
    b: &[f32],
    count: usize,
    op: impl Fn(f32x4, f32x4) -> f32x4,
) {
    let lanes = out[..count]
        .chunks_exact_mut(4)
        .zip(a[..count].chunks_exact(4))
        .zip(b[..count].chunks_exact(4));
    for ((o, a4), b4) in lanes {
        o.copy_from_slice(&op(load(a4), load(b4)).to_array());
    }
}

/// Elementwise `out[i] = a[i] + b[i]` for the first `count` floats.
///
/// # Errors
///
/// [`LaneMisaligned`](anim_core::Error::LaneMisaligned) if `count % 4 != 0`,
/// [`BufferTooSmall`](anim_core::Error::BufferTooSmall) if any buffer is
/// shorter than `count`.
pub fn vec4_add(out: &mut [f32], a: &[f32], b: &[f32], count: usize) -> Result<()> {
    check_batch(count, out, a, b)?;
    trace!(count, accelerated = is_accelerated(), "simd::vec4_add");
    zip_lanes(out, a, b, count, |x, y| x + y);
    Ok(())
}

/// Elementwise `out[i] = a[i] * b[i]` for the first `count` floats.
///
/// Same validation as [`vec4_add`].
pub fn vec4_mul(out: &mut [f32], a: &[f32], b: &[f32], count: usize) -> Result<()> {
    check_batch(count, out, a, b)?;
    trace!(count, accelerated = is_accelerated(), "simd::vec4_mul");
    zip_lanes(out, a, b, count, |x, y| x * y);
    Ok(())
}

/// Column-major 4x4 matrix times 4-vector.
///
/// Sums each column scaled by the matching vector component, which is
/// `M * v` for the column-major layout.
///
/// # Example
///
/// ```rust
/// use anim_math::{Mat4, simd::mat4_mul_vec4};
///
/// let m = Mat4::translation(5.0, 0.0, 0.0);
/// assert_eq!(mat4_mul_vec4(&m.m, &[0.0, 0.0, 0.0, 1.0]), [5.0, 0.0, 0.0, 1.0]);
/// ```
#[inline]
pub fn mat4_mul_vec4(m: &[f32; 16], v: &[f32; 4]) -> [f32; 4] {
    let c0 = load(&m[0..4]);
    let c1 = load(&m[4..8]);
    let c2 = load(&m[8..12]);
    let c3 = load(&m[12..16]);

    let result = c0 * f32x4::splat(v[0])
        + c1 * f32x4::splat(v[1])
        + c2 * f32x4::splat(v[2])
        + c3 * f32x4::splat(v[3]);
    result.to_array()
}

/// Transforms packed 4-vectors in place by the same matrix.
///
/// `values.len()` must be a multiple of 4.
pub fn batch_mat4_mul_vec4(m: &[f32; 16], values: &mut [f32]) -> Result<()> {
    ensure_lanes(values.len())?;
    trace!(vectors = values.len() / 4, "simd::batch_mat4_mul_vec4");
    for v in values.chunks_exact_mut(4) {
        let r = mat4_mul_vec4(m, &[v[0], v[1], v[2], v[3]]);
        v.copy_from_slice(&r);
    }
    Ok(())
}

/// Blends one RGBA quad toward another: `a * (1 - t) + b * t` per lane.
///
/// `t = 0` gives `a` and `t = 1` gives `b` exactly for finite inputs. `t` is
/// not clamped, so overshooting transitions extrapolate.
///
/// # Example
///
/// ```rust
/// use anim_math::simd::lerp_x4;
///
/// let red = [255.0, 0.0, 0.0, 1.0];
/// let clear_blue = [0.0, 0.0, 255.0, 0.0];
/// assert_eq!(lerp_x4(&red, &clear_blue, 0.25), [191.25, 0.0, 63.75, 0.75]);
/// ```
#[inline]
pub fn lerp_x4(a: &[f32; 4], b: &[f32; 4], t: f32) -> [f32; 4] {
    let va = f32x4::from(*a);
    let vb = f32x4::from(*b);
    let vt = f32x4::splat(t);
    let one = f32x4::splat(1.0);
    (va * (one - vt) + vb * vt).to_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anim_core::Error;

    fn ramp(n: usize, scale: f32) -> Vec<f32> {
        (0..n).map(|i| i as f32 * scale).collect()
    }

    #[test]
    fn test_vec4_add_matches_scalar() {
        let a = ramp(16, 0.5);
        let b = ramp(16, -0.25);
        let mut out = vec![0.0; 16];
        vec4_add(&mut out, &a, &b, 16).unwrap();
        for i in 0..16 {
            assert_eq!(out[i], a[i] + b[i]);
        }
    }

    #[test]
    fn test_vec4_mul_matches_scalar() {
        let a = ramp(8, 1.5);
        let b = ramp(8, 0.1);
        let mut out = vec![0.0; 8];
        vec4_mul(&mut out, &a, &b, 8).unwrap();
        for i in 0..8 {
            assert_eq!(out[i], a[i] * b[i]);
        }
    }

    #[test]
    fn test_count_limits_work() {
        let a = [1.0; 12];
        let b = [1.0; 12];
        let mut out = [9.0; 12];
        vec4_add(&mut out, &a, &b, 8).unwrap();
        assert_eq!(&out[..8], &[2.0; 8]);
        assert_eq!(&out[8..], &[9.0; 4]);
    }

    #[test]
    fn test_zero_count_is_noop() {
        let mut out: [f32; 0] = [];
        assert!(vec4_mul(&mut out, &[], &[], 0).is_ok());
    }

    #[test]
    fn test_rejects_misaligned_count() {
        let a = [1.0; 8];
        let mut out = [0.0; 8];
        assert_eq!(
            vec4_add(&mut out, &a, &a, 5),
            Err(Error::LaneMisaligned { count: 5 })
        );
        assert_eq!(out, [0.0; 8]);
    }

    #[test]
    fn test_rejects_short_buffers() {
        let a = [1.0; 8];
        let short = [1.0; 4];
        let mut out = [0.0; 8];
        let err = vec4_mul(&mut out, &a, &short, 8).unwrap_err();
        assert_eq!(err, Error::buffer_too_small("b", 8, 4));

        let mut small_out = [0.0; 4];
        let err = vec4_add(&mut small_out, &a, &a, 8).unwrap_err();
        assert_eq!(err, Error::buffer_too_small("out", 8, 4));
    }

    #[test]
    fn test_mat4_mul_vec4_matches_scalar() {
        let m: [f32; 16] = core::array::from_fn(|i| i as f32 + 1.0);
        let v = [1.0, -2.0, 0.5, 3.0];
        let r = mat4_mul_vec4(&m, &v);
        for row in 0..4 {
            let expected: f32 = (0..4).map(|col| m[col * 4 + row] * v[col]).sum();
            assert!((r[row] - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_batch_mat4_mul_vec4() {
        let scale: [f32; 16] = [
            2.0, 0.0, 0.0, 0.0, //
            0.0, 3.0, 0.0, 0.0, //
            0.0, 0.0, 4.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        let mut values = vec![1.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 1.0];
        batch_mat4_mul_vec4(&scale, &mut values).unwrap();
        assert_eq!(values, vec![2.0, 3.0, 4.0, 1.0, 1.0, 1.5, 2.0, 1.0]);

        let mut bad = vec![1.0; 6];
        assert!(batch_mat4_mul_vec4(&scale, &mut bad).is_err());
    }

    #[test]
    fn test_is_accelerated_matches_target() {
        if cfg!(target_arch = "x86_64") || cfg!(target_arch = "aarch64") {
            assert!(is_accelerated());
        }
        // Both paths must agree with the scalar loop either way.
        let a = ramp(8, 1.0);
        let mut out = vec![0.0; 8];
        vec4_add(&mut out, &a, &a, 8).unwrap();
        assert_eq!(out, ramp(8, 2.0));
    }

    #[test]
    fn test_lerp_x4_endpoints() {
        let a = [255.0, 0.0, 10.0, 1.0];
        let b = [0.0, 128.0, 20.0, 0.5];
        assert_eq!(lerp_x4(&a, &b, 0.0), a);
        assert_eq!(lerp_x4(&a, &b, 1.0), b);
        let mid = lerp_x4(&a, &b, 0.5);
        assert!((mid[0] - 127.5).abs() < 1e-4);
        assert!((mid[3] - 0.75).abs() < 1e-6);
    }
}
