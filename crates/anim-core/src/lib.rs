//! # anim-core
//!
//! Core types for the animation math kernel.
//!
//! This crate provides the foundational types shared by every other crate in
//! the workspace:
//!
//! - [`Error`], [`Result`] - The kernel's narrow error taxonomy
//! - [`Point`] - 2D point with a `Pod` layout matching interleaved host buffers
//! - [`get_version`] - Integer version check for hosts
//!
//! ## Buffer Convention
//!
//! Hosts exchange flat float buffers with the kernel. The layouts are fixed:
//!
//! ```text
//! matrix  : 16 floats, column-major (m[col * 4 + row])
//! points  : 2 floats per point, interleaved x, y, in drawing order
//! colours : 3 floats (RGB / HSL) or 4 floats (RGBA)
//! ```
//!
//! All buffers stay owned by the caller; nothing in the kernel retains a
//! reference after a call returns.
//!
//! ## Crate Structure
//!
//! ```text
//! anim-core (this crate)
//!    ^
//!    |
//!    +-- anim-math (matrices, Bezier, easing, 4-lane batch ops)
//!    +-- anim-path (Douglas-Peucker simplification)
//!    +-- anim-color (RGB/HSL, blending)
//!    +-- anim-kernel (host entry points)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod point;
pub mod version;

pub use error::*;
pub use point::*;
pub use version::{get_version, VERSION};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use anim_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::point::{points_from_flat, points_to_flat, Point};
    pub use crate::version::get_version;
}
