//! Color representations and colorimetry
//!
//! This module provides:
//! - [`Color`], the stored color value (gamma-encoded sRGB)
//! - sRGB, HSL and OkLab triplets and the conversions between them
//! - CIE XYZ tristimulus values and xy chromaticities
//! - RGB primaries systems and standard white points

pub mod hsl;
pub mod oklab;
pub mod primaries;
pub mod rgb;
pub mod value;
pub mod white_point;
pub mod xyz;

pub use hsl::{Hsl, hsl_to_srgb, srgb_to_hsl};
pub use oklab::{OkLab, oklab_to_srgb, srgb_to_oklab};
pub use primaries::Primaries;
pub use rgb::Srgb;
pub use value::Color;
pub use xyz::{Chromaticity, Xyz, xy_to_xyz};
