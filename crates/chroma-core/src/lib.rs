//! # chroma - color spaces for compositors
//!
//! Exact, invertible conversions between the color representations a
//! rendering pipeline deals with: gamma-encoded sRGB, HSL, OkLab, CIE XYZ,
//! chromaticity coordinates and arbitrary RGB primaries.
//!
//! ## Layout
//!
//! - [`color`]: value types and the sRGB / HSL / OkLab conversions
//! - [`math`]: 3x3 matrices, chromatic adaptation and the sRGB transfer curve
//! - [`transform`]: primaries-to-primaries gamut transforms
//! - [`image`]: PNG decoding into ARGB32 surfaces
//! - [`simd`]: runtime-dispatched batch kernels used by surface transforms
//!
//! ## Quick Start
//!
//! ```
//! use chroma_core::{Color, Hsl, Primaries, GamutTransform, TransformOptions};
//!
//! let teal = Color::from(Hsl::new(0.5, 0.6, 0.4));
//! let lab = teal.as_oklab();
//! assert!(lab.l > 0.0 && lab.l < 1.0);
//!
//! let to_p3 = GamutTransform::new(&Primaries::SRGB, &Primaries::DISPLAY_P3, TransformOptions::default());
//! let in_p3 = to_p3.apply(teal);
//! assert!(in_p3.as_rgb().is_in_gamut());
//! ```

pub mod color;
pub mod error;
pub mod image;
pub mod math;
pub mod simd;
pub mod transform;

pub use color::{Chromaticity, Color, Hsl, OkLab, Primaries, Srgb, Xyz, white_point, xy_to_xyz};
pub use error::{Error, Result};
pub use image::{Image, ImageFormat, Surface};
pub use math::{ChromaticAdaptationMethod, Matrix3, adapt_white, adaptation_matrix};
pub use transform::{GamutTransform, TransformOptions};

/// Version of chroma
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
