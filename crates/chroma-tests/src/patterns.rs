//! Test pattern generation
//!
//! Provides various test patterns for comprehensive evaluation.

use chroma_core::image::pack_argb;
use chroma_core::{Color, Hsl, Surface};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Gray ramp black to white
    Gradient,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Every 8-bit gray level
    Grayscale,
    /// Uniform random colors with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Saturated colors near gamut boundary
    GamutBoundary,
    /// All black
    Black,
    /// All white
    White,
}

const CORNERS: [[u8; 3]; 8] = [
    [0, 0, 0],
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
];

const SKIN_TONES: [[u8; 3]; 6] = [
    [255, 224, 189],
    [241, 194, 125],
    [224, 172, 105],
    [198, 134, 66],
    [141, 85, 36],
    [89, 47, 42],
];

const BOUNDARY: [[u8; 3]; 8] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
    [255, 128, 0],
    [128, 0, 255],
];

fn from_u8(c: [u8; 3]) -> Color {
    Color::new(c[0] as f64 / 255.0, c[1] as f64 / 255.0, c[2] as f64 / 255.0)
}

/// Generate `count` colors following a pattern
pub fn generate_colors(pattern: TestPattern, count: usize) -> Vec<Color> {
    let t = |i: usize| if count > 1 { i as f64 / (count - 1) as f64 } else { 0.0 };

    match pattern {
        TestPattern::Gradient => (0..count).map(|i| Color::new(t(i), t(i), t(i))).collect(),
        TestPattern::ColorCube => (0..count).map(|i| from_u8(CORNERS[i % 8])).collect(),
        TestPattern::HueRamp => (0..count)
            .map(|i| Color::from(Hsl::new(i as f64 / count as f64, 1.0, 0.5)))
            .collect(),
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = (i % 256) as u8;
                from_u8([v, v, v])
            })
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Color::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
        TestPattern::SkinTones => (0..count).map(|i| from_u8(SKIN_TONES[i % 6])).collect(),
        TestPattern::GamutBoundary => (0..count).map(|i| from_u8(BOUNDARY[i % 8])).collect(),
        TestPattern::Black => vec![Color::BLACK; count],
        TestPattern::White => vec![Color::WHITE; count],
    }
}

/// Generate an opaque ARGB32 surface following a pattern
pub fn generate_surface(pattern: TestPattern, width: u32, height: u32) -> Surface {
    let mut surface = Surface::new(width, height);
    let colors = generate_colors(pattern, (width * height) as usize);
    for (px, color) in surface.data_mut().iter_mut().zip(colors) {
        let [r, g, b] = color.as_rgb().to_u8();
        *px = pack_argb(0xFF, r, g, b);
    }
    surface
}

/// Random HSL triplets, each channel uniform in [0, 1)
pub fn random_hsl(seed: u64, count: usize) -> Vec<Hsl> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Hsl::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
        .collect()
}

/// A uniform grid over the sRGB cube with `steps + 1` levels per channel
pub fn srgb_grid(steps: usize) -> Vec<Color> {
    let n = steps.max(1);
    let level = |i: usize| i as f64 / n as f64;
    let mut out = Vec::with_capacity((n + 1).pow(3));
    for r in 0..=n {
        for g in 0..=n {
            for b in 0..=n {
                out.push(Color::new(level(r), level(g), level(b)));
            }
        }
    }
    out
}

/// Standard test sizes
pub mod sizes {
    pub const TINY: (u32, u32) = (8, 8);
    pub const SMALL: (u32, u32) = (64, 64);
    pub const MEDIUM: (u32, u32) = (256, 256);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_black() {
        let colors = generate_colors(TestPattern::Black, 4);
        assert!(colors.iter().all(|&c| c == Color::BLACK));
    }

    #[test]
    fn test_generate_white_surface() {
        let surface = generate_surface(TestPattern::White, 2, 2);
        assert!(surface.data().iter().all(|&px| px == 0xFFFF_FFFF));
    }

    #[test]
    fn test_random_deterministic() {
        let a = generate_colors(TestPattern::Random(42), 10);
        let b = generate_colors(TestPattern::Random(42), 10);
        assert_eq!(a, b);
        assert_ne!(a, generate_colors(TestPattern::Random(43), 10));
    }

    #[test]
    fn test_gradient_endpoints() {
        let ramp = generate_colors(TestPattern::Gradient, 5);
        assert_eq!(ramp[0], Color::BLACK);
        assert_eq!(ramp[4], Color::WHITE);
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(srgb_grid(4).len(), 125);
    }
}
