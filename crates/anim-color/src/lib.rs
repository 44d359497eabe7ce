//! # anim-color
//!
//! Colour helpers for animation property interpolation.
//!
//! - [`rgb_to_hsl`] / [`hsl_to_rgb`] - Conversion between RGB in [0, 255]
//!   and HSL in degrees and percent
//! - [`blend`] / [`blend_slice`] - Linear RGBA interpolation, alpha included
//!
//! # Units
//!
//! | Model | Channel | Range |
//! |-------|---------|-------|
//! | RGB | r, g, b | 0..=255 |
//! | HSL | h | 0..360 degrees |
//! | HSL | s, l | 0..=100 percent |
//!
//! Inputs are not clamped. Out-of-range values pass through the formulas.
//!
//! # Quick Start
//!
//! ```rust
//! use anim_color::{blend, Hsl, Rgb};
//!
//! let red = Rgb::new(255.0, 0.0, 0.0);
//! let hsl = red.to_hsl();
//! assert_eq!(hsl, Hsl::new(0.0, 100.0, 50.0));
//!
//! let faded = blend([255.0, 0.0, 0.0, 1.0], [255.0, 0.0, 0.0, 0.0], 0.5);
//! assert_eq!(faded[3], 0.5);
//! ```
//!
//! # Dependencies
//!
//! - `anim-core` - Error types
//! - `anim-math` - SIMD lerp for packed buffers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod blend;
mod hsl;

pub use blend::{blend, blend_slice, Rgba};
pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl, Rgb};
