//! Point-to-segment distance.

use anim_core::Point;

/// Distance from `p` to the segment `a..b`.
///
/// The projection parameter is clamped to [0, 1], so points beyond either end
/// measure to that endpoint. A zero-length segment measures to `a`.
///
/// # Example
///
/// ```rust
/// use anim_core::Point;
/// use anim_path::segment_distance;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(10.0, 0.0);
/// assert_eq!(segment_distance(Point::new(5.0, 1.0), a, b), 1.0);
/// assert_eq!(segment_distance(Point::new(13.0, 4.0), a, b), 5.0);
/// ```
pub fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let ap = p - a;
    let ab = b - a;

    let len_sq = ab.dot(ab);
    let param = if len_sq != 0.0 { ap.dot(ab) / len_sq } else { -1.0 };

    let nearest = if param < 0.0 {
        a
    } else if param > 1.0 {
        b
    } else {
        Point::new(a.x + param * ab.x, a.y + param * ab.y)
    };

    p.distance(nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perpendicular() {
        let d = segment_distance(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert_relative_eq!(d, 3.0);
    }

    #[test]
    fn test_clamped_before_start() {
        let d = segment_distance(
            Point::new(-3.0, 4.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_clamped_after_end() {
        let d = segment_distance(
            Point::new(10.0, -2.0),
            Point::new(0.0, 0.0),
            Point::new(8.0, 0.0),
        );
        assert_relative_eq!(d, (4.0f32 + 4.0).sqrt());
    }

    #[test]
    fn test_zero_length_segment() {
        let a = Point::new(2.0, 2.0);
        let d = segment_distance(Point::new(5.0, 6.0), a, a);
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_on_segment() {
        let d = segment_distance(
            Point::new(2.0, 2.0),
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
        );
        assert!(d < 1e-6);
    }
}
