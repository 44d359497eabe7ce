//! Douglas-Peucker path simplification.
//!
//! Reduces a polyline to the subsequence of points that keeps every dropped
//! point within `tolerance` of the chord that replaces it. The first and last
//! points always survive and the survivors keep their drawing order.
//!
//! # Algorithm
//!
//! For an index range `[first, last]`, find the interior point farthest from
//! the segment `first..last`. If that distance exceeds the tolerance the range
//! splits there and both halves are processed; otherwise the range collapses
//! to its two endpoints.
//!
//! Ranges are kept on an explicit work list rather than the call stack, so
//! path length is not limited by thread stack size. The list is processed
//! depth-first, left half before right half. Each range that collapses emits
//! its first point, and the path's last point is appended at the end. That
//! yields the same sequence as concatenating recursive results while dropping
//! each duplicated junction point.
//!
//! # Example
//!
//! ```rust
//! use anim_core::Point;
//! use anim_path::simplify;
//!
//! let path = [Point::new(0.0, 0.0), Point::new(5.0, 1.0), Point::new(10.0, 0.0)];
//!
//! assert_eq!(simplify(&path, 0.5).len(), 3);
//! assert_eq!(simplify(&path, 2.0), vec![path[0], path[2]]);
//! ```

use crate::segment_distance;
use anim_core::{points_from_flat, points_to_flat, Point, Result};
use tracing::{debug, trace};

/// Simplifies `points` with the given distance tolerance.
///
/// Paths with fewer than 3 points are returned unchanged. A negative or NaN
/// tolerance never splits on points lying exactly on the chord.
pub fn simplify(points: &[Point], tolerance: f32) -> Vec<Point> {
    let mut out = Vec::new();
    simplify_into(&mut out, points, tolerance);
    out
}

/// Like [`simplify`] but appends to an existing vector.
///
/// Returns the number of points appended.
pub fn simplify_into(out: &mut Vec<Point>, points: &[Point], tolerance: f32) -> usize {
    trace!(count = points.len(), tolerance, "simplify");
    let start_len = out.len();

    if points.len() < 3 {
        out.extend_from_slice(points);
        return points.len();
    }

    let last = points.len() - 1;
    let mut work: Vec<(usize, usize)> = vec![(0, last)];

    while let Some((first, end)) = work.pop() {
        match farthest_beyond(points, first, end, tolerance) {
            Some(split) => {
                // Right half first so the left half pops next.
                work.push((split, end));
                work.push((first, split));
            }
            None => out.push(points[first]),
        }
    }
    out.push(points[last]);

    let kept = out.len() - start_len;
    debug!(input = points.len(), kept, "simplify done");
    kept
}

/// Simplifies an interleaved `x, y` buffer.
///
/// # Errors
///
/// [`OddCoordinateCount`](anim_core::Error::OddCoordinateCount) if `flat` has
/// an odd length.
///
/// # Example
///
/// ```rust
/// use anim_path::simplify_flat;
///
/// let flat = [0.0, 0.0, 5.0, 1.0, 10.0, 0.0];
/// assert_eq!(simplify_flat(&flat, 2.0).unwrap(), vec![0.0, 0.0, 10.0, 0.0]);
/// assert!(simplify_flat(&flat[..5], 2.0).is_err());
/// ```
pub fn simplify_flat(flat: &[f32], tolerance: f32) -> Result<Vec<f32>> {
    let points = points_from_flat(flat)?;
    let kept = simplify(points, tolerance);
    Ok(points_to_flat(&kept).to_vec())
}

/// Index of the interior point of `[first, end]` that must be kept, if any.
///
/// Picks the first point of maximum distance from the chord, and only when
/// that distance exceeds `tolerance`.
fn farthest_beyond(points: &[Point], first: usize, end: usize, tolerance: f32) -> Option<usize> {
    let a = points[first];
    let b = points[end];

    let mut max_dist = 0.0f32;
    let mut max_index = None;
    for (i, &p) in points.iter().enumerate().take(end).skip(first + 1) {
        let dist = segment_distance(p, a, b);
        if dist > max_dist {
            max_dist = dist;
            max_index = Some(i);
        }
    }

    max_index.filter(|_| max_dist > tolerance)
}
