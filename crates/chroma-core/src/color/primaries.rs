//! RGB primaries systems
//!
//! An RGB color space's gamut is fixed by the chromaticities of its red,
//! green and blue primaries plus its white point. From those four points
//! we derive the RGB → XYZ matrix and direct RGB → RGB conversions.

use crate::color::{Chromaticity, white_point, xy_to_xyz};
use crate::math::{ChromaticAdaptationMethod, Matrix3, adapt_white, adaptation_matrix};

/// Chromaticities of the three primaries and the white point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Primaries {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
    pub white: Chromaticity,
}

impl Primaries {
    pub const fn new(
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        white: Chromaticity,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Matrix mapping linear RGB in these primaries to absolute XYZ
    ///
    /// Built with the S-matrix method: the primaries' XYZ columns are scaled
    /// so that RGB (1, 1, 1) lands exactly on the white point.
    pub fn to_xyz(&self) -> Matrix3 {
        let r = xy_to_xyz(self.red);
        let g = xy_to_xyz(self.green);
        let b = xy_to_xyz(self.blue);
        let w = xy_to_xyz(self.white);

        let s = Matrix3::from_columns(r, g, b).invert() * w;

        Matrix3::from_columns(r.scale(s.x), g.scale(s.y), b.scale(s.z))
    }

    /// Matrix mapping linear RGB in `self` to linear RGB in `dst`
    ///
    /// source RGB → source XYZ → white-adapted XYZ → destination RGB, with
    /// Bradford adaptation between the two white points.
    pub fn convert_matrix(&self, dst: &Primaries) -> Matrix3 {
        dst.to_xyz().invert() * adapt_white(self.white, dst.white) * self.to_xyz()
    }

    /// Like [`Primaries::convert_matrix`] with a chosen adaptation method
    pub fn convert_matrix_with(
        &self,
        dst: &Primaries,
        method: ChromaticAdaptationMethod,
    ) -> Matrix3 {
        dst.to_xyz().invert() * adaptation_matrix(self.white, dst.white, method) * self.to_xyz()
    }
}

impl Primaries {
    /// sRGB / BT.709
    pub const SRGB: Self = Self::new(
        Chromaticity::new(0.64, 0.33),
        Chromaticity::new(0.30, 0.60),
        Chromaticity::new(0.15, 0.06),
        white_point::D65,
    );

    /// BT.709 shares its primaries and white with sRGB
    pub const BT709: Self = Self::SRGB;

    /// Display P3 (DCI-P3 primaries, D65 white)
    pub const DISPLAY_P3: Self = Self::new(
        Chromaticity::new(0.680, 0.320),
        Chromaticity::new(0.265, 0.690),
        Chromaticity::new(0.150, 0.060),
        white_point::D65,
    );

    /// DCI-P3 with the theatrical white point
    pub const DCI_P3: Self = Self::new(
        Chromaticity::new(0.680, 0.320),
        Chromaticity::new(0.265, 0.690),
        Chromaticity::new(0.150, 0.060),
        white_point::DCI_P3,
    );

    /// Adobe RGB (1998)
    pub const ADOBE_RGB: Self = Self::new(
        Chromaticity::new(0.64, 0.33),
        Chromaticity::new(0.21, 0.71),
        Chromaticity::new(0.15, 0.06),
        white_point::D65,
    );

    /// BT.2020 / BT.2100
    pub const BT2020: Self = Self::new(
        Chromaticity::new(0.708, 0.292),
        Chromaticity::new(0.170, 0.797),
        Chromaticity::new(0.131, 0.046),
        white_point::D65,
    );

    /// ProPhoto RGB (ROMM), D50 white
    pub const PROPHOTO: Self = Self::new(
        Chromaticity::new(0.7347, 0.2653),
        Chromaticity::new(0.1596, 0.8404),
        Chromaticity::new(0.0366, 0.0001),
        white_point::D50,
    );
}
