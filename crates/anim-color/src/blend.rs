//! RGBA colour blending.
//!
//! Linear interpolation of all four channels, alpha included:
//!
//! ```text
//! out = c1 * (1 - factor) + c2 * factor
//! ```
//!
//! The factor is not clamped, so values outside [0, 1] extrapolate.
//! Channel ranges are whatever the caller uses; the formula is unit-free.

use anim_core::{ensure_lanes, ensure_len, Error, Result};
use anim_math::simd::lerp_x4;
use tracing::trace;

/// Packed RGBA colour.
pub type Rgba = [f32; 4];

/// Blends two RGBA colours.
///
/// `factor == 0` returns `c1` and `factor == 1` returns `c2` exactly.
///
/// # Example
///
/// ```rust
/// use anim_color::blend;
///
/// let mid = blend([0.0, 0.0, 0.0, 0.0], [255.0, 255.0, 255.0, 1.0], 0.5);
/// assert_eq!(mid, [127.5, 127.5, 127.5, 0.5]);
/// ```
#[inline]
pub fn blend(c1: Rgba, c2: Rgba, factor: f32) -> Rgba {
    let f1 = 1.0 - factor;
    [
        c1[0] * f1 + c2[0] * factor,
        c1[1] * f1 + c2[1] * factor,
        c1[2] * f1 + c2[2] * factor,
        c1[3] * f1 + c2[3] * factor,
    ]
}

/// Blends packed RGBA buffers colour by colour into `out`.
///
/// # Errors
///
/// - [`LengthMismatch`](Error::LengthMismatch) if `a` and `b` differ in length
/// - [`LaneMisaligned`](Error::LaneMisaligned) if they hold a partial colour
/// - [`BufferTooSmall`](Error::BufferTooSmall) if `out` is shorter than `a`
///
/// Nothing is written on error.
pub fn blend_slice(out: &mut [f32], a: &[f32], b: &[f32], factor: f32) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            a: a.len(),
            b: b.len(),
        });
    }
    ensure_lanes(a.len())?;
    ensure_len("out", a.len(), out.len())?;
    trace!(colors = a.len() / 4, factor, "blend_slice");

    for ((o, ca), cb) in out
        .chunks_exact_mut(4)
        .zip(a.chunks_exact(4))
        .zip(b.chunks_exact(4))
    {
        let ca = [ca[0], ca[1], ca[2], ca[3]];
        let cb = [cb[0], cb[1], cb[2], cb[3]];
        o.copy_from_slice(&lerp_x4(&ca, &cb, factor));
    }
    Ok(())
}
