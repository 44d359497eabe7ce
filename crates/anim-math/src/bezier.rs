//! Quadratic and cubic Bezier evaluation.
//!
//! Curves are evaluated in Bernstein form. The parameter `t` is never clamped:
//! values outside [0, 1] extrapolate along the polynomial, which hosts rely on
//! for overshooting motion paths.
//!
//! # Usage
//!
//! ```rust
//! use anim_core::Point;
//! use anim_math::bezier;
//!
//! let p0 = Point::new(0.0, 0.0);
//! let p1 = Point::new(50.0, 100.0);
//! let p2 = Point::new(100.0, 0.0);
//!
//! let mid = bezier::quadratic(0.5, p0, p1, p2);
//! assert_eq!(mid, Point::new(50.0, 50.0));
//! ```

use anim_core::{ensure_len, Point, Result};
use tracing::trace;
use wide::f32x4;

/// Evaluates a quadratic Bezier at `t`.
///
/// `(1-t)^2 p0 + 2(1-t)t p1 + t^2 p2`
#[inline]
pub fn quadratic(t: f32, p0: Point, p1: Point, p2: Point) -> Point {
    let t1 = 1.0 - t;
    let t1_2 = t1 * t1;
    let t_2 = t * t;

    Point::new(
        t1_2 * p0.x + 2.0 * t1 * t * p1.x + t_2 * p2.x,
        t1_2 * p0.y + 2.0 * t1 * t * p1.y + t_2 * p2.y,
    )
}

/// Evaluates a cubic Bezier at `t`.
///
/// `(1-t)^3 p0 + 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3 p3`. At `t = 0` and
/// `t = 1` the result is exactly `p0` and `p3` for finite control points.
///
/// # Example
///
/// ```rust
/// use anim_core::Point;
/// use anim_math::bezier::cubic;
///
/// let (p0, p1, p2, p3) = (
///     Point::new(0.0, 0.0),
///     Point::new(25.0, 100.0),
///     Point::new(75.0, 100.0),
///     Point::new(100.0, 0.0),
/// );
/// assert_eq!(cubic(0.0, p0, p1, p2, p3), p0);
/// assert_eq!(cubic(1.0, p0, p1, p2, p3), p3);
/// ```
#[inline]
pub fn cubic(t: f32, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
    let t1 = 1.0 - t;
    let t1_3 = t1 * t1 * t1;
    let t1_2 = t1 * t1;
    let t_2 = t * t;
    let t_3 = t * t * t;

    Point::new(
        t1_3 * p0.x + 3.0 * t1_2 * t * p1.x + 3.0 * t1 * t_2 * p2.x + t_3 * p3.x,
        t1_3 * p0.y + 3.0 * t1_2 * t * p1.y + 3.0 * t1 * t_2 * p2.y + t_3 * p3.y,
    )
}

/// Evaluates one quadratic curve at many parameters.
pub fn quadratic_batch(t_values: &[f32], p0: Point, p1: Point, p2: Point) -> Vec<Point> {
    trace!(count = t_values.len(), "bezier::quadratic_batch");
    t_values
        .iter()
        .map(|&t| quadratic(t, p0, p1, p2))
        .collect()
}

/// Evaluates one cubic curve at many parameters, in input order.
///
/// # Example
///
/// ```rust
/// use anim_core::Point;
/// use anim_math::bezier::cubic_batch;
///
/// let ts = [0.0, 0.25, 0.5, 0.75, 1.0];
/// let pts = cubic_batch(
///     &ts,
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 100.0),
///     Point::new(100.0, 100.0),
///     Point::new(100.0, 0.0),
/// );
/// assert_eq!(pts.len(), 5);
/// assert_eq!(pts[4], Point::new(100.0, 0.0));
/// ```
pub fn cubic_batch(t_values: &[f32], p0: Point, p1: Point, p2: Point, p3: Point) -> Vec<Point> {
    let mut out = vec![Point::ZERO; t_values.len()];
    fill_cubic(&mut out, t_values, [p0, p1, p2, p3]);
    out
}

/// Like [`cubic_batch`] but writes into a caller buffer.
///
/// `out` must hold at least `t_values.len()` points; extra entries are left
/// untouched.
pub fn cubic_batch_into(
    out: &mut [Point],
    t_values: &[f32],
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
) -> Result<()> {
    ensure_len("out", t_values.len(), out.len())?;
    fill_cubic(&mut out[..t_values.len()], t_values, [p0, p1, p2, p3]);
    Ok(())
}

/// Four parameters per step; the lane math repeats [`cubic`] term for term.
fn fill_cubic(out: &mut [Point], t_values: &[f32], ctrl: [Point; 4]) {
    trace!(count = t_values.len(), "bezier::cubic_batch");
    let [p0, p1, p2, p3] = ctrl;

    let one = f32x4::splat(1.0);
    let three = f32x4::splat(3.0);
    let xs = ctrl.map(|p| f32x4::splat(p.x));
    let ys = ctrl.map(|p| f32x4::splat(p.y));

    let ts = t_values.chunks_exact(4);
    let rem_t = ts.remainder();
    let mut outs = out.chunks_exact_mut(4);

    for (o, t4) in (&mut outs).zip(ts) {
        let t = f32x4::from([t4[0], t4[1], t4[2], t4[3]]);
        let t1 = one - t;
        let t1_3 = t1 * t1 * t1;
        let t1_2 = t1 * t1;
        let t_2 = t * t;
        let t_3 = t * t * t;

        let w1 = three * t1_2 * t;
        let w2 = three * t1 * t_2;
        let x = (t1_3 * xs[0] + w1 * xs[1] + w2 * xs[2] + t_3 * xs[3]).to_array();
        let y = (t1_3 * ys[0] + w1 * ys[1] + w2 * ys[2] + t_3 * ys[3]).to_array();

        for lane in 0..4 {
            o[lane] = Point::new(x[lane], y[lane]);
        }
    }

    for (o, &t) in outs.into_remainder().iter_mut().zip(rem_t) {
        *o = cubic(t, p0, p1, p2, p3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ctrl() -> (Point, Point, Point, Point) {
        (
            Point::new(0.0, 0.0),
            Point::new(25.0, 100.0),
            Point::new(75.0, 100.0),
            Point::new(100.0, 0.0),
        )
    }

    #[test]
    fn test_quadratic_midpoint() {
        let p = quadratic(
            0.5,
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
        );
        assert_relative_eq!(p.x, 50.0);
        assert_relative_eq!(p.y, 50.0);
    }

    #[test]
    fn test_quadratic_endpoints() {
        let (a, b, c) = (Point::new(1.0, 2.0), Point::new(3.0, 9.0), Point::new(-4.0, 5.0));
        assert_eq!(quadratic(0.0, a, b, c), a);
        assert_eq!(quadratic(1.0, a, b, c), c);
    }

    #[test]
    fn test_cubic_endpoints_exact() {
        let (p0, p1, p2, p3) = ctrl();
        assert_eq!(cubic(0.0, p0, p1, p2, p3), p0);
        assert_eq!(cubic(1.0, p0, p1, p2, p3), p3);

        let odd = (
            Point::new(0.1, -7.3),
            Point::new(1e3, 0.3),
            Point::new(-2.5, 4.4),
            Point::new(9.9, 0.7),
        );
        assert_eq!(cubic(0.0, odd.0, odd.1, odd.2, odd.3), odd.0);
        assert_eq!(cubic(1.0, odd.0, odd.1, odd.2, odd.3), odd.3);
    }

    #[test]
    fn test_cubic_symmetric_midpoint() {
        let (p0, p1, p2, p3) = ctrl();
        let p = cubic(0.5, p0, p1, p2, p3);
        assert_relative_eq!(p.x, 50.0);
        assert_relative_eq!(p.y, 75.0);
    }

    #[test]
    fn test_no_clamping() {
        // Straight line p0 -> p1 as a cubic with evenly spaced controls.
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(1.0, 0.0);
        let p2 = Point::new(2.0, 0.0);
        let p3 = Point::new(3.0, 0.0);
        let before = cubic(-0.5, p0, p1, p2, p3);
        let after = cubic(1.5, p0, p1, p2, p3);
        assert_relative_eq!(before.x, -1.5, epsilon = 1e-5);
        assert_relative_eq!(after.x, 4.5, epsilon = 1e-5);
    }

    #[test]
    fn test_batch_matches_scalar() {
        let (p0, p1, p2, p3) = ctrl();
        let ts: Vec<f32> = (0..11).map(|i| i as f32 / 10.0 - 0.05).collect();
        let batch = cubic_batch(&ts, p0, p1, p2, p3);
        assert_eq!(batch.len(), ts.len());
        for (pt, &t) in batch.iter().zip(&ts) {
            let s = cubic(t, p0, p1, p2, p3);
            assert_relative_eq!(pt.x, s.x, epsilon = 1e-4);
            assert_relative_eq!(pt.y, s.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_batch_endpoints_in_lanes() {
        let (p0, p1, p2, p3) = ctrl();
        let ts = [0.0, 0.25, 0.5, 1.0, 1.0];
        let batch = cubic_batch(&ts, p0, p1, p2, p3);
        assert_eq!(batch[0], p0);
        assert_eq!(batch[3], p3);
        assert_eq!(batch[4], p3);
    }

    #[test]
    fn test_batch_empty() {
        let (p0, p1, p2, p3) = ctrl();
        assert!(cubic_batch(&[], p0, p1, p2, p3).is_empty());
    }

    #[test]
    fn test_batch_into() {
        let (p0, p1, p2, p3) = ctrl();
        let mut out = [Point::new(-1.0, -1.0); 3];
        cubic_batch_into(&mut out, &[0.0, 1.0], p0, p1, p2, p3).unwrap();
        assert_eq!(out[0], p0);
        assert_eq!(out[1], p3);
        assert_eq!(out[2], Point::new(-1.0, -1.0));

        let mut short = [Point::ZERO; 1];
        assert!(cubic_batch_into(&mut short, &[0.0, 1.0], p0, p1, p2, p3).is_err());
    }

    #[test]
    fn test_quadratic_batch() {
        let (a, b, c) = (Point::new(0.0, 0.0), Point::new(50.0, 100.0), Point::new(100.0, 0.0));
        let pts = quadratic_batch(&[0.0, 0.5, 1.0], a, b, c);
        assert_eq!(pts[0], a);
        assert_eq!(pts[2], c);
        assert_relative_eq!(pts[1].y, 50.0);
    }
}
