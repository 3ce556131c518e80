//! The stored color value

use crate::color::{Hsl, OkLab, Srgb, hsl_to_srgb, oklab_to_srgb, srgb_to_hsl, srgb_to_oklab};
use crate::math::{srgb_gamma_decode, srgb_gamma_encode};

/// A single color
///
/// Stored as gamma-encoded sRGB; HSL and OkLab are derived on demand. The
/// stored channels are never clamped, so out-of-range intermediates survive
/// a round trip. Two colors are equal when their stored channels are equal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create from gamma-encoded sRGB channels
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn from_srgb(rgb: Srgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_srgb(hsl_to_srgb(hsl))
    }

    pub fn from_oklab(lab: OkLab) -> Self {
        Self::from_srgb(oklab_to_srgb(lab))
    }

    /// Create from linear-light sRGB channels
    pub fn from_linear(linear: [f64; 3]) -> Self {
        Self::new(
            srgb_gamma_encode(linear[0]),
            srgb_gamma_encode(linear[1]),
            srgb_gamma_encode(linear[2]),
        )
    }

    /// The stored gamma-encoded sRGB channels, bit for bit
    #[inline]
    pub const fn as_rgb(&self) -> Srgb {
        Srgb::new(self.r, self.g, self.b)
    }

    pub fn as_hsl(&self) -> Hsl {
        srgb_to_hsl(self.as_rgb())
    }

    pub fn as_oklab(&self) -> OkLab {
        srgb_to_oklab(self.as_rgb())
    }

    /// Linear-light sRGB channels
    pub fn to_linear(&self) -> [f64; 3] {
        [
            srgb_gamma_decode(self.r),
            srgb_gamma_decode(self.g),
            srgb_gamma_decode(self.b),
        ]
    }
}

impl From<Srgb> for Color {
    fn from(rgb: Srgb) -> Self {
        Self::from_srgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}

impl From<OkLab> for Color {
    fn from(lab: OkLab) -> Self {
        Self::from_oklab(lab)
    }
}

impl From<Color> for Srgb {
    fn from(color: Color) -> Self {
        color.as_rgb()
    }
}
