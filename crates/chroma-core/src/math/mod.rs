//! Mathematical operations for color management
//!
//! - 3x3 matrix operations for RGB↔XYZ transforms
//! - The sRGB transfer function
//! - Chromatic adaptation (Bradford)

pub mod chromatic_adaptation;
pub mod gamma;
pub mod matrix;

pub use chromatic_adaptation::{ChromaticAdaptationMethod, adapt_white, adaptation_matrix};
pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::Matrix3;
