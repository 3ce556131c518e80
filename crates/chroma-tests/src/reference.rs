//! Reference implementation wrappers
//!
//! Thin adapters over the `palette` crate that speak chroma's types, so
//! tests can run the same input through both sides.

use chroma_core::{Color, Hsl, Matrix3, OkLab, Srgb, Xyz};
use palette::{FromColor, LinSrgb};

type PaletteSrgb = palette::Srgb<f64>;
type PaletteHsl = palette::Hsl<palette::encoding::Srgb, f64>;
type PaletteXyz = palette::Xyz<palette::white_point::D65, f64>;

fn to_palette(rgb: Srgb) -> PaletteSrgb {
    PaletteSrgb::new(rgb.r, rgb.g, rgb.b)
}

fn from_palette(rgb: PaletteSrgb) -> Srgb {
    Srgb::new(rgb.red, rgb.green, rgb.blue)
}

/// sRGB -> HSL, hue normalized to [0, 1)
pub fn palette_srgb_to_hsl(rgb: Srgb) -> Hsl {
    let hsl = PaletteHsl::from_color(to_palette(rgb));
    Hsl::new(
        hsl.hue.into_positive_degrees() / 360.0,
        hsl.saturation,
        hsl.lightness,
    )
}

/// HSL (hue in [0, 1)) -> sRGB
pub fn palette_hsl_to_srgb(hsl: Hsl) -> Srgb {
    let hsl = PaletteHsl::new(hsl.h * 360.0, hsl.s, hsl.l);
    from_palette(PaletteSrgb::from_color(hsl))
}

/// Gamma-encoded sRGB -> OkLab
pub fn palette_srgb_to_oklab(rgb: Srgb) -> OkLab {
    let linear: LinSrgb<f64> = to_palette(rgb).into_linear();
    let lab = palette::Oklab::<f64>::from_color(linear);
    OkLab::new(lab.l, lab.a, lab.b)
}

/// OkLab -> gamma-encoded sRGB
pub fn palette_oklab_to_srgb(lab: OkLab) -> Srgb {
    let linear = LinSrgb::<f64>::from_color(palette::Oklab::new(lab.l, lab.a, lab.b));
    from_palette(PaletteSrgb::from_linear(linear))
}

/// Gamma-encoded sRGB -> XYZ (D65, Y of white = 1)
pub fn palette_srgb_to_xyz(rgb: Srgb) -> Xyz {
    let xyz = PaletteXyz::from_color(to_palette(rgb).into_linear::<f64>());
    Xyz::new(xyz.x, xyz.y, xyz.z)
}

/// palette's linear sRGB -> XYZ matrix, recovered column by column
pub fn palette_srgb_to_xyz_matrix() -> Matrix3 {
    let column = |r: f64, g: f64, b: f64| {
        let xyz = PaletteXyz::from_color(LinSrgb::new(r, g, b));
        Xyz::new(xyz.x, xyz.y, xyz.z)
    };
    Matrix3::from_columns(
        column(1.0, 0.0, 0.0),
        column(0.0, 1.0, 0.0),
        column(0.0, 0.0, 1.0),
    )
}

/// sRGB -> OkLab -> sRGB entirely through palette
pub fn palette_oklab_roundtrip(colors: &[Color]) -> Vec<Color> {
    colors
        .iter()
        .map(|c| Color::from(palette_oklab_to_srgb(palette_srgb_to_oklab(c.as_rgb()))))
        .collect()
}
