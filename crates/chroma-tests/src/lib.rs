//! # chroma-tests
//!
//! Cross-implementation parity testing for chroma.
//!
//! This crate provides:
//! - Parity tests comparing chroma output against the `palette` crate
//! - Accuracy statistics using OkLab distance
//! - Deterministic test pattern generation
//! - Embedded reference vectors
//!
//! ## Reference Implementations
//!
//! - **palette**: pure Rust color conversions (sRGB, HSL, OkLab, XYZ)
//! - **published**: hand-checked vectors in `data/reference_vectors.json`
//!
//! ## Test Categories
//!
//! 1. **Conversions**: sRGB <-> HSL, sRGB <-> OkLab
//! 2. **Colorimetry**: xy -> XYZ, primaries matrices, white adaptation
//! 3. **Gamut transforms**: single colors and whole surfaces
//! 4. **Image adapter**: PNG decoding into ARGB32 surfaces

pub mod accuracy;
pub mod parity;
pub mod patterns;
pub mod reference;
pub mod vectors;

pub use accuracy::{DistanceStats, compare_colors};
pub use parity::{ParityTest, ReferenceImpl};
