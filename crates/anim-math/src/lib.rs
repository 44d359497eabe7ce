//! # anim-math
//!
//! Math primitives for animation rendering.
//!
//! This crate provides the numeric building blocks a renderer needs between
//! keyframes and pixels:
//!
//! - [`Mat4`] - 4x4 transforms (translate, scale, rotate Z, multiply, inverse)
//! - [`bezier`] - Quadratic and cubic Bezier evaluation, singly and in batch
//! - [`easing`] - Named easing curves and the [`Easing`] enum
//! - [`simd`] - 4-lane batch add/multiply and matrix-vector products
//!
//! # Design
//!
//! All matrix storage is **column-major**, matching the host buffer layout:
//!
//! ```text
//! index = col * 4 + row
//! ```
//!
//! Every function is pure and allocation-free except the `*_batch` helpers
//! that return a `Vec`.
//!
//! # Usage
//!
//! ```rust
//! use anim_math::{Mat4, Easing};
//!
//! let m = Mat4::translation(10.0, 0.0, 0.0).mul_mat(&Mat4::scaling(2.0, 2.0, 1.0));
//! assert_eq!(m.transform_point([1.0, 1.0, 0.0]), [22.0, 2.0, 0.0]);
//!
//! let progress = Easing::CubicOut.apply(0.5);
//! assert!((progress - 0.875).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Reference implementation for matrix interop
//! - [`wide`] - Portable SIMD lanes
//! - `anim-core` - Points and errors
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/deserialize [`Easing`] by snake_case name

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;
pub mod bezier;
pub mod easing;
pub mod simd;

pub use easing::Easing;
pub use mat4::*;
