//! 2D point type and interleaved buffer views.
//!
//! Hosts pass paths as flat `[x0, y0, x1, y1, ...]` float buffers. [`Point`]
//! is `#[repr(C)]` and [`bytemuck::Pod`], so such a buffer can be viewed as
//! `&[Point]` in place with [`points_from_flat`] and turned back with
//! [`points_to_flat`].
//!
//! # Usage
//!
//! ```rust
//! use anim_core::{Point, points_from_flat, points_to_flat};
//!
//! let flat = [0.0, 0.0, 5.0, 1.0, 10.0, 0.0];
//! let points = points_from_flat(&flat).unwrap();
//! assert_eq!(points[1], Point::new(5.0, 1.0));
//! assert_eq!(points_to_flat(points), &flat);
//! ```

use crate::{Error, Result};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Mul, Sub};

/// A 2D point in path coordinate space.
///
/// Layout is exactly two `f32` (x then y), matching one entry of an
/// interleaved host buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// The origin (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates from an `[x, y]` array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an `[x, y]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Dot product, treating both points as vectors.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f32; 2]> for Point {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Point> for [f32; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_array()
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Views an interleaved `x, y` buffer as points without copying.
///
/// Fails with [`Error::OddCoordinateCount`] if `flat` has an odd length.
pub fn points_from_flat(flat: &[f32]) -> Result<&[Point]> {
    bytemuck::try_cast_slice(flat).map_err(|_| Error::OddCoordinateCount { len: flat.len() })
}

/// Mutable variant of [`points_from_flat`].
pub fn points_from_flat_mut(flat: &mut [f32]) -> Result<&mut [Point]> {
    let len = flat.len();
    bytemuck::try_cast_slice_mut(flat).map_err(|_| Error::OddCoordinateCount { len })
}

/// Views points as an interleaved `x, y` buffer.
#[inline]
pub fn points_to_flat(points: &[Point]) -> &[f32] {
    bytemuck::cast_slice(points)
}
