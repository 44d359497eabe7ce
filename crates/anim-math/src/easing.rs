//! Named easing curves.
//!
//! Each curve maps normalized time `t` to animation progress. The functions
//! are total over all floats and never clamp: overshoot curves (back,
//! elastic) legitimately leave [0, 1], and callers feeding `t` outside
//! [0, 1] get the polynomial or sinusoid extended.
//!
//! The breakpoints and coefficients are the de facto web-animation
//! standard; changing any of them changes the visible feel of a motion.
//!
//! # Usage
//!
//! ```rust
//! use anim_math::easing::{self, Easing};
//!
//! assert_eq!(easing::cubic_in(0.5), 0.125);
//!
//! let curve: Easing = "easeOutBounce".parse().unwrap();
//! assert_eq!(curve, Easing::BounceOut);
//! assert_eq!(curve.apply(1.0), 1.0);
//! ```

use anim_core::Error;
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;
const BOUNCE_N1: f32 = 7.5625;
const BOUNCE_D1: f32 = 2.75;

/// `t`
#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

/// `t^2`
#[inline]
pub fn quad_in(t: f32) -> f32 {
    t * t
}

/// `t(2 - t)`
#[inline]
pub fn quad_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Quadratic ease in, then out, split at `t = 0.5`.
#[inline]
pub fn quad_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// `t^3`
#[inline]
pub fn cubic_in(t: f32) -> f32 {
    t * t * t
}

/// `1 - (1 - t)^3`
#[inline]
pub fn cubic_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// `4t^3` below `t = 0.5`, `1 - (-2t + 2)^3 / 2` from there on.
#[inline]
pub fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Pulls back below zero before accelerating in.
#[inline]
pub fn back_in(t: f32) -> f32 {
    BACK_C3 * t * t * t - BACK_C1 * t * t
}

/// Overshoots past one before settling.
#[inline]
pub fn back_out(t: f32) -> f32 {
    1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
}

/// Back ease in, then out.
#[inline]
pub fn back_in_out(t: f32) -> f32 {
    if t < 0.5 {
        ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
    } else {
        ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2) + 2.0) / 2.0
    }
}

/// Growing oscillation ending at one. Exact 0 and 1 at the ends.
#[inline]
pub fn elastic_in(t: f32) -> f32 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    -(2.0f32).powf(10.0 * t - 10.0) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
}

/// Exponentially decaying sinusoid around one.
///
/// `t = 0` and `t = 1` are explicit fixed points returning exactly 0 and 1.
///
/// # Example
///
/// ```rust
/// use anim_math::easing::elastic_out;
///
/// assert_eq!(elastic_out(0.0), 0.0);
/// assert_eq!(elastic_out(1.0), 1.0);
/// assert!(elastic_out(0.2) > 1.0); // overshoot
/// ```
#[inline]
pub fn elastic_out(t: f32) -> f32 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    (2.0f32).powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
}

/// Four decaying parabolic bounces.
///
/// Segments break at `1/2.75`, `2/2.75` and `2.5/2.75`; each parabola meets
/// its neighbour at height one, so the curve has no jumps.
#[inline]
pub fn bounce_out(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

/// Mirror of [`bounce_out`].
#[inline]
pub fn bounce_in(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}

/// Every easing curve the kernel knows, addressable by name.
///
/// Names parse in `snake_case` (`cubic_in`) and in the host's camelCase
/// forms (`cubicIn`, `easeInCubic`, `easeOutBounce`). The bare `easeIn` /
/// `easeOut` / `easeInOut` names are the quadratic curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Easing {
    /// [`linear`]
    #[default]
    Linear,
    /// [`quad_in`]
    QuadIn,
    /// [`quad_out`]
    QuadOut,
    /// [`quad_in_out`]
    QuadInOut,
    /// [`cubic_in`]
    CubicIn,
    /// [`cubic_out`]
    CubicOut,
    /// [`cubic_in_out`]
    CubicInOut,
    /// [`back_in`]
    BackIn,
    /// [`back_out`]
    BackOut,
    /// [`back_in_out`]
    BackInOut,
    /// [`elastic_in`]
    ElasticIn,
    /// [`elastic_out`]
    ElasticOut,
    /// [`bounce_in`]
    BounceIn,
    /// [`bounce_out`]
    BounceOut,
}

impl Easing {
    /// All curves, in declaration order.
    pub const ALL: [Easing; 14] = [
        Self::Linear,
        Self::QuadIn,
        Self::QuadOut,
        Self::QuadInOut,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
        Self::BackIn,
        Self::BackOut,
        Self::BackInOut,
        Self::ElasticIn,
        Self::ElasticOut,
        Self::BounceIn,
        Self::BounceOut,
    ];

    /// Evaluates the curve at `t`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        self.function()(t)
    }

    /// Returns the curve as a plain function pointer.
    pub fn function(self) -> fn(f32) -> f32 {
        match self {
            Self::Linear => linear,
            Self::QuadIn => quad_in,
            Self::QuadOut => quad_out,
            Self::QuadInOut => quad_in_out,
            Self::CubicIn => cubic_in,
            Self::CubicOut => cubic_out,
            Self::CubicInOut => cubic_in_out,
            Self::BackIn => back_in,
            Self::BackOut => back_out,
            Self::BackInOut => back_in_out,
            Self::ElasticIn => elastic_in,
            Self::ElasticOut => elastic_out,
            Self::BounceIn => bounce_in,
            Self::BounceOut => bounce_out,
        }
    }

    /// Canonical `snake_case` name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadIn => "quad_in",
            Self::QuadOut => "quad_out",
            Self::QuadInOut => "quad_in_out",
            Self::CubicIn => "cubic_in",
            Self::CubicOut => "cubic_out",
            Self::CubicInOut => "cubic_in_out",
            Self::BackIn => "back_in",
            Self::BackOut => "back_out",
            Self::BackInOut => "back_in_out",
            Self::ElasticIn => "elastic_in",
            Self::ElasticOut => "elastic_out",
            Self::BounceIn => "bounce_in",
            Self::BounceOut => "bounce_out",
        }
    }

    /// Returns true for curves whose output leaves [0, 1] for `t` in [0, 1].
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            Self::BackIn | Self::BackOut | Self::BackInOut | Self::ElasticIn | Self::ElasticOut
        )
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let easing = match s {
            "linear" => Self::Linear,
            "quad_in" | "quadIn" | "easeIn" | "easeInQuad" => Self::QuadIn,
            "quad_out" | "quadOut" | "easeOut" | "easeOutQuad" => Self::QuadOut,
            "quad_in_out" | "quadInOut" | "easeInOut" | "easeInOutQuad" => Self::QuadInOut,
            "cubic_in" | "cubicIn" | "easeInCubic" => Self::CubicIn,
            "cubic_out" | "cubicOut" | "easeOutCubic" => Self::CubicOut,
            "cubic_in_out" | "cubicInOut" | "easeInOutCubic" => Self::CubicInOut,
            "back_in" | "backIn" | "easeInBack" => Self::BackIn,
            "back_out" | "backOut" | "easeOutBack" => Self::BackOut,
            "back_in_out" | "backInOut" | "easeInOutBack" => Self::BackInOut,
            "elastic_in" | "elasticIn" | "easeInElastic" => Self::ElasticIn,
            "elastic_out" | "elasticOut" | "easeOutElastic" => Self::ElasticOut,
            "bounce_in" | "bounceIn" | "easeInBounce" => Self::BounceIn,
            "bounce_out" | "bounceOut" | "easeOutBounce" => Self::BounceOut,
            other => return Err(Error::unknown_easing(other)),
        };
        Ok(easing)
    }
}
