//! HSL (hue, saturation, lightness)
//!
//! All three axes are normalized to 0.0-1.0; hue 1.0 wraps to 0.0.

use crate::color::Srgb;

/// HSL color, every axis 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue as a fraction of a full turn
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Check if approximately equal to another HSL triplet
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.l - other.l).abs() < epsilon
    }
}

/// Interpolate one channel between `p` and `q` across the six hue sextants
#[inline]
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + ((q - p) * 6.0 * t);
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + ((q - p) * (2.0 / 3.0 - t) * 6.0);
    }
    p
}

/// Convert HSL to gamma-encoded sRGB
pub fn hsl_to_srgb(hsl: Hsl) -> Srgb {
    if hsl.s <= 0.0 {
        return Srgb::new(hsl.l, hsl.l, hsl.l);
    }

    let q = if hsl.l < 0.5 {
        hsl.l * (1.0 + hsl.s)
    } else {
        hsl.l + hsl.s - (hsl.l * hsl.s)
    };
    let p = (2.0 * hsl.l) - q;

    Srgb {
        r: hue_to_rgb(p, q, hsl.h + (1.0 / 3.0)),
        g: hue_to_rgb(p, q, hsl.h),
        b: hue_to_rgb(p, q, hsl.h - (1.0 / 3.0)),
    }
}

/// Convert gamma-encoded sRGB to HSL
///
/// Achromatic input (all channels equal) reports hue and saturation 0.
pub fn srgb_to_hsl(rgb: Srgb) -> Hsl {
    let Srgb { r, g, b } = rgb;
    let vmax = r.max(g).max(b);
    let vmin = r.min(g).min(b);
    let l = (vmax + vmin) / 2.0;

    if vmax == vmin {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = vmax - vmin;
    let s = if l > 0.5 {
        d / (2.0 - vmax - vmin)
    } else {
        d / (vmax + vmin)
    };

    // Ties resolve to the last matching channel
    let mut h = 0.0;
    if vmax == r {
        h = (g - b) / d + if g < b { 6.0 } else { 0.0 };
    }
    if vmax == g {
        h = (b - r) / d + 2.0;
    }
    if vmax == b {
        h = (r - g) / d + 4.0;
    }

    Hsl::new(h / 6.0, s, l)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_primaries() {
        assert!(srgb_to_hsl(Srgb::new(1.0, 0.0, 0.0)).approx_eq(&Hsl::new(0.0, 1.0, 0.5), EPSILON));
        assert!(srgb_to_hsl(Srgb::new(0.0, 1.0, 0.0)).approx_eq(&Hsl::new(1.0 / 3.0, 1.0, 0.5), EPSILON));
        assert!(srgb_to_hsl(Srgb::new(0.0, 0.0, 1.0)).approx_eq(&Hsl::new(2.0 / 3.0, 1.0, 0.5), EPSILON));
    }

    #[test]
    fn test_magenta_hue_is_positive() {
        // Red is max and blue > green
        let hsl = srgb_to_hsl(Srgb::new(1.0, 0.0, 0.5));
        assert!((hsl.h - 11.0 / 12.0).abs() < EPSILON, "{hsl:?}");
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(hsl_to_srgb(Hsl::new(0.7, 0.0, 0.5)), Srgb::new(0.5, 0.5, 0.5));
        assert_eq!(hsl_to_srgb(Hsl::new(0.2, -1.0, 0.25)), Srgb::new(0.25, 0.25, 0.25));
        assert_eq!(srgb_to_hsl(Srgb::new(0.3, 0.3, 0.3)), Hsl::new(0.0, 0.0, 0.3));
    }

    #[test]
    fn test_light_and_dark_saturation() {
        // l > 0.5 branch
        let light = srgb_to_hsl(Srgb::new(1.0, 0.5, 0.5));
        assert!(light.approx_eq(&Hsl::new(0.0, 1.0, 0.75), EPSILON), "{light:?}");

        // l <= 0.5 branch
        let dark = srgb_to_hsl(Srgb::new(0.5, 0.0, 0.0));
        assert!(dark.approx_eq(&Hsl::new(0.0, 1.0, 0.25), EPSILON), "{dark:?}");
    }

    #[test]
    fn test_hue_sextants() {
        let cases = [
            (0.0, [1.0, 0.0, 0.0]),
            (1.0 / 6.0, [1.0, 1.0, 0.0]),
            (2.0 / 6.0, [0.0, 1.0, 0.0]),
            (3.0 / 6.0, [0.0, 1.0, 1.0]),
            (4.0 / 6.0, [0.0, 0.0, 1.0]),
            (5.0 / 6.0, [1.0, 0.0, 1.0]),
        ];
        for (h, expected) in cases {
            let rgb = hsl_to_srgb(Hsl::new(h, 1.0, 0.5));
            assert!(rgb.approx_eq(&Srgb::from_array(expected), EPSILON), "h={h}: {rgb:?}");
        }
    }

    #[test]
    fn test_roundtrip_grid() {
        for hi in 0..24 {
            for si in 1..=10 {
                for li in 1..10 {
                    let hsl = Hsl::new(hi as f64 / 24.0, si as f64 / 10.0, li as f64 / 10.0);
                    let back = srgb_to_hsl(hsl_to_srgb(hsl));
                    assert!(hsl.approx_eq(&back, EPSILON), "{hsl:?} -> {back:?}");
                }
            }
        }
    }
}
