//! Embedded regression snapshots
//!
//! `data/reference_vectors.json` records chroma's own output for HSL and
//! OkLab triplets of named sRGB colors, XYZ for standard white points, and
//! primaries conversion matrices. They catch drift, not formula errors;
//! `tests/published_values.rs` checks against independently published
//! numbers.

use anyhow::{Context, Result, ensure};
use chroma_core::{Chromaticity, Hsl, Matrix3, OkLab, Srgb, Xyz};
use serde::Deserialize;

const VECTORS_JSON: &str = include_str!("../data/reference_vectors.json");

#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceVectors {
    pub description: String,
    pub hsl: Vec<HslVector>,
    pub oklab: Vec<OkLabVector>,
    pub white_points: Vec<WhitePointVector>,
    pub matrices: Vec<MatrixVector>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HslVector {
    pub name: String,
    pub rgb: [f64; 3],
    pub hsl: [f64; 3],
}

impl HslVector {
    pub fn srgb(&self) -> Srgb {
        Srgb::from_array(self.rgb)
    }

    pub fn expected(&self) -> Hsl {
        Hsl::new(self.hsl[0], self.hsl[1], self.hsl[2])
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OkLabVector {
    pub name: String,
    pub rgb: [f64; 3],
    pub oklab: [f64; 3],
}

impl OkLabVector {
    pub fn srgb(&self) -> Srgb {
        Srgb::from_array(self.rgb)
    }

    pub fn expected(&self) -> OkLab {
        OkLab::new(self.oklab[0], self.oklab[1], self.oklab[2])
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhitePointVector {
    pub name: String,
    pub xy: [f64; 2],
    pub xyz: [f64; 3],
}

impl WhitePointVector {
    pub fn chromaticity(&self) -> Chromaticity {
        Chromaticity::new(self.xy[0], self.xy[1])
    }

    pub fn expected(&self) -> Xyz {
        Xyz::from_array(self.xyz)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatrixVector {
    pub name: String,
    pub matrix: [[f64; 3]; 3],
}

impl MatrixVector {
    pub fn expected(&self) -> Matrix3 {
        Matrix3::new(self.matrix)
    }
}

impl ReferenceVectors {
    /// Parse the embedded vectors
    pub fn load() -> Result<Self> {
        Self::parse(VECTORS_JSON)
    }

    pub fn parse(json: &str) -> Result<Self> {
        let vectors: Self = serde_json::from_str(json).context("parsing reference vectors")?;
        ensure!(!vectors.hsl.is_empty(), "no HSL vectors");
        ensure!(!vectors.oklab.is_empty(), "no OkLab vectors");
        Ok(vectors)
    }

    pub fn matrix(&self, name: &str) -> Result<Matrix3> {
        self.matrices
            .iter()
            .find(|m| m.name == name)
            .map(MatrixVector::expected)
            .with_context(|| format!("no reference matrix named {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_vectors_parse() {
        let vectors = ReferenceVectors::load().unwrap();
        assert!(vectors.hsl.len() >= 10);
        assert!(vectors.matrix("srgb_to_xyz").is_ok());
        assert!(vectors.matrix("nope").is_err());
    }

    #[test]
    fn test_rejects_empty() {
        let json = r#"{"description": "", "hsl": [], "oklab": [], "white_points": [], "matrices": []}"#;
        assert!(ReferenceVectors::parse(json).is_err());
    }
}
