//! Error types for anim-core operations.
//!
//! The kernel is almost entirely total: easing, Bezier and colour functions
//! accept any float and extrapolate. The failure modes that remain all come
//! from the buffer boundary with the host.
//!
//! # Overview
//!
//! The [`Error`] enum covers:
//! - Batch lane validation (counts that are not a multiple of 4)
//! - Short or mismatched caller buffers
//! - Interleaved point buffers with an odd number of coordinates
//! - Singular transforms, for callers that prefer a `Result`
//! - Unrecognised easing names
//!
//! # Usage
//!
//! ```rust
//! use anim_core::{Error, Result};
//!
//! fn check_lanes(count: usize) -> Result<()> {
//!     if count % 4 != 0 {
//!         return Err(Error::LaneMisaligned { count });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_lanes(8).is_ok());
//! assert!(check_lanes(6).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `anim-math` - Batch/vector ops, easing name parsing
//! - `anim-path` - Flat point buffers
//! - `anim-color` - Packed RGBA blending
//! - `anim-kernel` - Host entry points

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the kernel's buffer boundary.
///
/// # Categories
///
/// - **Lane errors**: [`LaneMisaligned`](Error::LaneMisaligned)
/// - **Buffer errors**: [`BufferTooSmall`](Error::BufferTooSmall),
///   [`LengthMismatch`](Error::LengthMismatch),
///   [`OddCoordinateCount`](Error::OddCoordinateCount)
/// - **Math errors**: [`SingularMatrix`](Error::SingularMatrix)
/// - **Lookup errors**: [`UnknownEasing`](Error::UnknownEasing)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Batch element count is not a multiple of the 4-lane width.
    ///
    /// The vector entry points process exactly four floats per step; a
    /// trailing partial group would read past the end of the caller's data.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_core::Error;
    ///
    /// let err = Error::LaneMisaligned { count: 6 };
    /// assert!(err.to_string().contains("6"));
    /// ```
    #[error("batch count {count} is not a multiple of 4")]
    LaneMisaligned {
        /// Requested element count
        count: usize,
    },

    /// A caller-supplied buffer is shorter than the operation needs.
    #[error("buffer `{buffer}` too small: need {needed} floats, got {got}")]
    BufferTooSmall {
        /// Which argument was short (`out`, `a`, `points`, ...)
        buffer: &'static str,
        /// Minimum length required
        needed: usize,
        /// Actual length supplied
        got: usize,
    },

    /// Two buffers that must be the same length are not.
    #[error("length mismatch: {a} vs {b}")]
    LengthMismatch {
        /// First buffer length
        a: usize,
        /// Second buffer length
        b: usize,
    },

    /// An interleaved `x, y` buffer has an odd number of floats.
    #[error("point buffer has odd coordinate count {len}")]
    OddCoordinateCount {
        /// Number of floats supplied
        len: usize,
    },

    /// Matrix determinant is exactly zero.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,

    /// Easing curve name is not recognised.
    #[error("unknown easing function: {0}")]
    UnknownEasing(String),
}

impl Error {
    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(buffer: &'static str, needed: usize, got: usize) -> Self {
        Self::BufferTooSmall {
            buffer,
            needed,
            got,
        }
    }

    /// Creates an [`Error::UnknownEasing`] error.
    #[inline]
    pub fn unknown_easing(name: impl Into<String>) -> Self {
        Self::UnknownEasing(name.into())
    }

    /// Returns `true` if the error comes from buffer sizing or layout.
    #[inline]
    pub fn is_buffer_error(&self) -> bool {
        matches!(
            self,
            Self::LaneMisaligned { .. }
                | Self::BufferTooSmall { .. }
                | Self::LengthMismatch { .. }
                | Self::OddCoordinateCount { .. }
        )
    }
}

/// Fails with [`Error::LaneMisaligned`] unless `count` is a multiple of 4.
#[inline]
pub fn ensure_lanes(count: usize) -> Result<()> {
    if count % 4 == 0 {
        Ok(())
    } else {
        Err(Error::LaneMisaligned { count })
    }
}

/// Fails with [`Error::BufferTooSmall`] if `got < needed`.
#[inline]
pub fn ensure_len(buffer: &'static str, needed: usize, got: usize) -> Result<()> {
    if got < needed {
        Err(Error::buffer_too_small(buffer, needed, got))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_misaligned() {
        let err = Error::LaneMisaligned { count: 7 };
        assert!(err.to_string().contains('7'));
        assert!(err.is_buffer_error());
    }

    #[test]
    fn test_buffer_too_small() {
        let err = Error::buffer_too_small("out", 16, 12);
        let msg = err.to_string();
        assert!(msg.contains("out"));
        assert!(msg.contains("16"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn test_singular_is_not_buffer_error() {
        assert!(!Error::SingularMatrix.is_buffer_error());
        assert!(!Error::unknown_easing("wobble").is_buffer_error());
    }

    #[test]
    fn test_ensure_helpers() {
        assert!(ensure_lanes(0).is_ok());
        assert!(ensure_lanes(12).is_ok());
        assert_eq!(ensure_lanes(5), Err(Error::LaneMisaligned { count: 5 }));

        assert!(ensure_len("a", 4, 4).is_ok());
        assert!(ensure_len("a", 4, 8).is_ok());
        assert!(ensure_len("a", 4, 3).is_err());
    }
}
