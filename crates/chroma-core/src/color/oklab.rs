//! OkLab color space
//!
//! OkLab is a perceptually uniform space built from linear sRGB through an
//! LMS cone-response matrix and a cube-root nonlinearity.
//!
//! - L: perceived lightness (0 = black, 1 = white)
//! - a: green-red axis
//! - b: blue-yellow axis
//!
//! Reference: https://bottosson.github.io/posts/oklab/

use crate::color::Srgb;
use crate::math::{srgb_gamma_decode, srgb_gamma_encode};

/// OkLab color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OkLab {
    /// Perceived lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl OkLab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma (distance from the neutral axis)
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Euclidean distance, the perceptual difference metric of OkLab
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Check if approximately equal to another OkLab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Convert gamma-encoded sRGB to OkLab
pub fn srgb_to_oklab(rgb: Srgb) -> OkLab {
    let lin_r = srgb_gamma_decode(rgb.r);
    let lin_g = srgb_gamma_decode(rgb.g);
    let lin_b = srgb_gamma_decode(rgb.b);

    // Linear sRGB to LMS, then the cube-root nonlinearity
    let l = ((0.4122214708 * lin_r) + (0.5363325363 * lin_g) + (0.0514459929 * lin_b)).cbrt();
    let m = ((0.2119034982 * lin_r) + (0.6806995451 * lin_g) + (0.1073969566 * lin_b)).cbrt();
    let s = ((0.0883024619 * lin_r) + (0.2817188376 * lin_g) + (0.6299787005 * lin_b)).cbrt();

    OkLab {
        l: (l * 0.2104542553) + (m * 0.7936177850) + (s * -0.0040720468),
        a: (l * 1.9779984951) + (m * -2.4285922050) + (s * 0.4505937099),
        b: (l * 0.0259040371) + (m * 0.7827717662) + (s * -0.8086757660),
    }
}

/// Convert OkLab to gamma-encoded sRGB
///
/// Colors outside the sRGB gamut come back with channels outside [0, 1].
pub fn oklab_to_srgb(lab: OkLab) -> Srgb {
    let l = (lab.l + (lab.a * 0.3963377774) + (lab.b * 0.2158037573)).powi(3);
    let m = (lab.l + (lab.a * -0.1055613458) + (lab.b * -0.0638541728)).powi(3);
    let s = (lab.l + (lab.a * -0.0894841775) + (lab.b * -1.2914855480)).powi(3);

    Srgb {
        r: srgb_gamma_encode((l * 4.0767416621) + (m * -3.3077115913) + (s * 0.2309699292)),
        g: srgb_gamma_encode((l * -1.2684380046) + (m * 2.6097574011) + (s * -0.3413193965)),
        b: srgb_gamma_encode((l * -0.0041960863) + (m * -0.7034186147) + (s * 1.7076147010)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_white_and_black() {
        let white = srgb_to_oklab(Srgb::new(1.0, 1.0, 1.0));
        assert!(white.approx_eq(&OkLab::new(1.0, 0.0, 0.0), 1e-4), "{white:?}");

        let black = srgb_to_oklab(Srgb::default());
        assert_eq!(black, OkLab::default());
    }

    #[test]
    fn test_known_primaries() {
        // Published values for the sRGB primaries
        let red = srgb_to_oklab(Srgb::new(1.0, 0.0, 0.0));
        assert!(red.approx_eq(&OkLab::new(0.627955, 0.224863, 0.125846), 1e-4), "{red:?}");

        let green = srgb_to_oklab(Srgb::new(0.0, 1.0, 0.0));
        assert!(green.approx_eq(&OkLab::new(0.866440, -0.233888, 0.179498), 1e-4), "{green:?}");

        let blue = srgb_to_oklab(Srgb::new(0.0, 0.0, 1.0));
        assert!(blue.approx_eq(&OkLab::new(0.452014, -0.032457, -0.311528), 1e-4), "{blue:?}");
    }

    #[test]
    fn test_gray_is_neutral() {
        let gray = srgb_to_oklab(Srgb::new(0.5, 0.5, 0.5));
        assert!(gray.chroma() < 1e-4, "{gray:?}");
    }

    #[test]
    fn test_white_roundtrip() {
        let back = oklab_to_srgb(srgb_to_oklab(Srgb::new(1.0, 1.0, 1.0)));
        assert!(back.approx_eq(&Srgb::new(1.0, 1.0, 1.0), EPSILON), "{back:?}");
    }

    #[test]
    fn test_roundtrip_grid() {
        for ri in 0..=8 {
            for gi in 0..=8 {
                for bi in 0..=8 {
                    let rgb = Srgb::new(ri as f64 / 8.0, gi as f64 / 8.0, bi as f64 / 8.0);
                    let lab = srgb_to_oklab(rgb);
                    let back = srgb_to_oklab(oklab_to_srgb(lab));
                    assert!(lab.approx_eq(&back, EPSILON), "{rgb:?}: {lab:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn test_distance() {
        let a = OkLab::new(0.5, 0.1, 0.0);
        let b = OkLab::new(0.5, 0.0, 0.0);
        assert!((a.distance(&b) - 0.1).abs() < 1e-12);
        assert_eq!(a.distance(&a), 0.0);
    }
}
