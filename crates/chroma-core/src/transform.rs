//! Gamut transforms
//!
//! Converts sRGB-encoded colors between RGB primaries systems. The transfer
//! function is the sRGB curve on both sides; only the primaries and white
//! point change.

use log::{debug, warn};
use rayon::prelude::*;

use crate::color::{Color, Primaries, Srgb, Xyz};
use crate::image::Surface;
use crate::math::{ChromaticAdaptationMethod, Matrix3};
use crate::simd;

/// Options for transform creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// White point adaptation used when the white points differ
    pub adaptation: ChromaticAdaptationMethod,
    /// Clamp results of [`GamutTransform::apply`] to [0, 1]
    pub clamp: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            adaptation: ChromaticAdaptationMethod::Bradford,
            clamp: true,
        }
    }
}

/// A precomputed conversion between two primaries systems
///
/// Surface conversions always clamp, since 8-bit storage cannot hold
/// out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutTransform {
    matrix: Matrix3,
    options: TransformOptions,
}

impl GamutTransform {
    pub fn new(src: &Primaries, dst: &Primaries, options: TransformOptions) -> Self {
        let matrix = src.convert_matrix_with(dst, options.adaptation);
        debug!(
            "gamut transform {:?} -> {:?} ({:?}): {:?}",
            src.white, dst.white, options.adaptation, matrix
        );
        if !matrix.is_finite() {
            warn!("gamut transform matrix is not finite, primaries are likely degenerate");
        }

        Self { matrix, options }
    }

    /// The linear-light conversion matrix
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    pub fn options(&self) -> TransformOptions {
        self.options
    }

    pub fn apply(&self, color: Color) -> Color {
        let linear = self.matrix * Xyz::from_array(color.to_linear());
        let out = Color::from_linear(linear.to_array());
        if self.options.clamp {
            Color::from(out.as_rgb().clamp())
        } else {
            out
        }
    }

    /// Convert gamma-encoded sRGB channels without going through [`Color`]
    pub fn apply_srgb(&self, rgb: Srgb) -> Srgb {
        self.apply(Color::from(rgb)).as_rgb()
    }

    /// Convert every pixel of a surface in place, alpha untouched
    pub fn apply_surface(&self, surface: &mut Surface) {
        let matrix = self.matrix.mat();
        debug!(
            "transforming {}x{} surface ({} kernels)",
            surface.width(),
            surface.height(),
            simd::active_features()
        );
        surface.par_rows_mut().for_each(|row| {
            let mut rgb = vec![[0.0; 3]; row.len()];
            simd::argb32_to_rgb_batch(row, &mut rgb);
            simd::srgb_decode_batch(&mut rgb);
            simd::matrix_multiply_vec3_batch(matrix, &mut rgb);
            simd::srgb_encode_batch(&mut rgb);
            simd::rgb_to_argb32_batch(&rgb, row);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::pack_argb;

    #[test]
    fn test_default_options() {
        let options = TransformOptions::default();
        assert_eq!(options.adaptation, ChromaticAdaptationMethod::Bradford);
        assert!(options.clamp);
    }

    #[test]
    fn test_same_primaries_is_identity() {
        let t = GamutTransform::new(&Primaries::SRGB, &Primaries::SRGB, TransformOptions::default());
        assert!(t.matrix().is_identity(1e-9));

        let c = Color::new(0.2, 0.6, 0.9);
        assert!(t.apply(c).as_rgb().approx_eq(&c.as_rgb(), 1e-9));
    }

    #[test]
    fn test_srgb_red_in_p3() {
        let t = GamutTransform::new(&Primaries::SRGB, &Primaries::DISPLAY_P3, TransformOptions::default());
        let red = t.apply(Color::new(1.0, 0.0, 0.0)).as_rgb();
        // sRGB red sits inside P3, so it is desaturated there
        assert!((red.r - 0.9175).abs() < 1e-3, "{red:?}");
        assert!((red.g - 0.2003).abs() < 1e-3, "{red:?}");
        assert!((red.b - 0.1386).abs() < 1e-3, "{red:?}");
    }

    #[test]
    fn test_clamp_option() {
        let wide = GamutTransform::new(&Primaries::DISPLAY_P3, &Primaries::SRGB, TransformOptions::default());
        let clamped = wide.apply(Color::new(0.0, 1.0, 0.0)).as_rgb();
        assert!(clamped.is_in_gamut(), "{clamped:?}");

        let options = TransformOptions {
            clamp: false,
            ..Default::default()
        };
        let raw = GamutTransform::new(&Primaries::DISPLAY_P3, &Primaries::SRGB, options)
            .apply(Color::new(0.0, 1.0, 0.0))
            .as_rgb();
        assert!(!raw.is_in_gamut(), "{raw:?}");
        assert!(raw.r < 0.0 && raw.g > 1.0, "{raw:?}");
    }

    #[test]
    fn test_white_stays_white() {
        for dst in [Primaries::DISPLAY_P3, Primaries::BT2020, Primaries::PROPHOTO] {
            let t = GamutTransform::new(&Primaries::SRGB, &dst, TransformOptions::default());
            let white = t.apply(Color::WHITE).as_rgb();
            assert!(white.approx_eq(&Srgb::new(1.0, 1.0, 1.0), 1e-6), "{dst:?}: {white:?}");
        }
    }

    #[test]
    fn test_surface_matches_apply() {
        let t = GamutTransform::new(&Primaries::SRGB, &Primaries::BT2020, TransformOptions::default());
        let mut surface = Surface::new(3, 2);
        surface.set_color(0, 0, Color::new(1.0, 0.0, 0.0), 0xFF);
        surface.set_color(1, 0, Color::new(0.0, 1.0, 0.0), 0x80);
        surface.set_color(2, 1, Color::new(0.3, 0.4, 0.5), 0x10);
        let before = surface.clone();

        t.apply_surface(&mut surface);

        for y in 0..2 {
            for x in 0..3 {
                let src = before.color_at(x, y).unwrap();
                let [r, g, b] = t.apply(src).as_rgb().to_u8();
                let alpha = before.pixel(x, y).unwrap() >> 24;
                assert_eq!(surface.pixel(x, y), Some(pack_argb(alpha as u8, r, g, b)), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_surface_identity_is_lossless() {
        let t = GamutTransform::new(&Primaries::SRGB, &Primaries::SRGB, TransformOptions::default());
        let data: Vec<u32> = (0..256u32).map(|v| pack_argb(v as u8, v as u8, 255 - v as u8, (v * 7) as u8)).collect();
        let mut surface = Surface::from_argb32(16, 16, data.clone()).unwrap();
        t.apply_surface(&mut surface);
        assert_eq!(surface.data(), data.as_slice());
    }

    #[test]
    fn test_degenerate_primaries_fall_through() {
        let flat = Primaries {
            green: Primaries::SRGB.red,
            ..Primaries::SRGB
        };
        let t = GamutTransform::new(&flat, &Primaries::SRGB, TransformOptions::default());
        assert!(!t.matrix().is_finite());
    }
}
