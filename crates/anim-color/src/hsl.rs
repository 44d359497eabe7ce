//! RGB <-> HSL conversion.
//!
//! RGB channels are in [0, 255]. HSL uses degrees for hue in [0, 360) and
//! percentages for saturation and lightness in [0, 100], the units animation
//! documents and CSS use.
//!
//! # Example
//!
//! ```rust
//! use anim_color::{rgb_to_hsl, hsl_to_rgb};
//!
//! let hsl = rgb_to_hsl(255.0, 0.0, 0.0);
//! assert_eq!(hsl.to_array(), [0.0, 100.0, 50.0]);
//!
//! let rgb = hsl_to_rgb(120.0, 100.0, 50.0);
//! assert!((rgb.g - 255.0).abs() < 1e-3);
//! ```

/// An RGB colour with channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Rgb {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

/// An HSL colour: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: f32,
    /// Saturation in percent, [0, 100]
    pub s: f32,
    /// Lightness in percent, [0, 100]
    pub l: f32,
}

impl Rgb {
    /// Creates a colour from channels in [0, 255].
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates from an `[r, g, b]` array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an `[r, g, b]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts to HSL.
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl Hsl {
    /// Creates a colour from hue (degrees) and saturation/lightness (percent).
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Creates from an `[h, s, l]` array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an `[h, s, l]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.h, self.s, self.l]
    }

    /// Converts to RGB.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

/// Converts RGB in [0, 255] to HSL.
///
/// Achromatic input (`max == min`) yields hue and saturation of zero. Hue is
/// always in [0, 360).
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> Hsl {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    // `6.0 - tiny` rounds to 6.0 when max == r and b barely exceeds g.
    let mut h = h / 6.0 * 360.0;
    if h >= 360.0 {
        h -= 360.0;
    }

    Hsl::new(h, s * 100.0, l * 100.0)
}

/// Converts HSL to RGB in [0, 255].
///
/// Zero saturation short-circuits to grey at the given lightness.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

/// One channel of HSL -> RGB: `t` is the hue offset for that channel,
/// wrapped once into [0, 1], then read off six 60-degree sectors.
fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb_close(a: Rgb, b: [f32; 3], eps: f32) {
        assert_abs_diff_eq!(a.r, b[0], epsilon = eps);
        assert_abs_diff_eq!(a.g, b[1], epsilon = eps);
        assert_abs_diff_eq!(a.b, b[2], epsilon = eps);
    }

    #[test]
    fn test_primaries_to_hsl() {
        assert_eq!(rgb_to_hsl(255.0, 0.0, 0.0), Hsl::new(0.0, 100.0, 50.0));

        let green = rgb_to_hsl(0.0, 255.0, 0.0);
        assert_abs_diff_eq!(green.h, 120.0, epsilon = 1e-4);
        assert_abs_diff_eq!(green.s, 100.0, epsilon = 1e-4);

        let blue = rgb_to_hsl(0.0, 0.0, 255.0);
        assert_abs_diff_eq!(blue.h, 240.0, epsilon = 1e-4);
    }

    #[test]
    fn test_hue_wraps_for_magenta_side() {
        // max == r with g < b lands in the last sector.
        let c = rgb_to_hsl(255.0, 0.0, 128.0);
        assert!(c.h > 300.0 && c.h < 360.0);
    }

    #[test]
    fn test_hue_stays_below_360() {
        let c = rgb_to_hsl(255.0, 0.0, 1e-5);
        assert!(c.h >= 0.0 && c.h < 360.0, "hue {}", c.h);
        assert_eq!(c.h, 0.0);
        assert_abs_diff_eq!(c.s, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_achromatic() {
        let grey = rgb_to_hsl(128.0, 128.0, 128.0);
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
        assert_abs_diff_eq!(grey.l, 128.0 / 255.0 * 100.0, epsilon = 1e-4);

        assert_eq!(rgb_to_hsl(0.0, 0.0, 0.0), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsl(255.0, 255.0, 255.0), Hsl::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn test_light_saturation_branch() {
        // l > 0.5 uses d / (2 - max - min).
        let c = rgb_to_hsl(255.0, 128.0, 128.0);
        assert!(c.l > 50.0);
        assert_abs_diff_eq!(c.s, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_rgb_close(hsl_to_rgb(0.0, 100.0, 50.0), [255.0, 0.0, 0.0], 1e-3);
        assert_rgb_close(hsl_to_rgb(120.0, 100.0, 50.0), [0.0, 255.0, 0.0], 1e-3);
        assert_rgb_close(hsl_to_rgb(240.0, 100.0, 50.0), [0.0, 0.0, 255.0], 1e-3);
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        let c = hsl_to_rgb(200.0, 0.0, 40.0);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        assert_abs_diff_eq!(c.r, 102.0, epsilon = 1e-3);
    }

    #[test]
    fn test_roundtrip_grid() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(17) {
                    let src = [r as f32, g as f32, b as f32];
                    let back = Rgb::from_array(src).to_hsl().to_rgb();
                    assert_rgb_close(back, src, 1e-2);
                }
            }
        }
    }

    #[test]
    fn test_array_conversions() {
        let c = Hsl::from_array([10.0, 20.0, 30.0]);
        assert_eq!(c.to_array(), [10.0, 20.0, 30.0]);
        assert_eq!(Rgb::new(1.0, 2.0, 3.0).to_array(), [1.0, 2.0, 3.0]);
    }
}
