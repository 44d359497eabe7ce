//! # anim-path
//!
//! Path simplification for animation shapes.
//!
//! Motion paths and traced outlines often carry far more points than are
//! visible at render resolution. This crate reduces them with the
//! Douglas-Peucker algorithm:
//!
//! - [`simplify`] / [`simplify_into`] - Over `&[Point]`
//! - [`simplify_flat`] - Over interleaved `x, y` host buffers
//! - [`segment_distance`] - The clamped point-to-segment metric used
//!
//! # Usage
//!
//! ```rust
//! use anim_core::Point;
//! use anim_path::simplify;
//!
//! let line: Vec<Point> = (0..1000).map(|i| Point::new(i as f32, 0.5 * i as f32)).collect();
//! assert_eq!(simplify(&line, 0.1).len(), 2);
//! ```
//!
//! # Resource Use
//!
//! Simplification runs on an explicit work list; scratch memory is bounded by
//! the input length and released before return. Call stack depth does not
//! grow with the path.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod distance;
mod simplify;

pub use distance::segment_distance;
pub use simplify::{simplify, simplify_flat, simplify_into};
