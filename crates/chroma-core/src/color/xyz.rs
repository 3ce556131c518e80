//! CIE XYZ tristimulus values and xy chromaticity coordinates
//!
//! XYZ is the device-independent space every RGB system is defined against.
//! Chromaticities describe a color's hue and saturation with brightness
//! factored out; primaries and white points are given this way.

use std::ops::{Add, Div, Mul, Sub};

/// CIE 1931 XYZ color coordinates
///
/// Y represents luminance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ value
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Check if approximately equal to another XYZ value
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl Add for Xyz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Xyz {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

/// Per-component division
///
/// A zero divisor component yields an IEEE infinity or NaN in that slot.
impl Div for Xyz {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

/// CIE 1931 xy chromaticity coordinates
///
/// Equality is exact; quantize first if values come from arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromaticity {
    /// x chromaticity coordinate
    pub x: f64,
    /// y chromaticity coordinate
    pub y: f64,
}

impl Chromaticity {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Tristimulus value with Y normalized to 1
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        xy_to_xyz(*self)
    }

    /// Project a tristimulus value onto the chromaticity plane
    ///
    /// A value whose components sum to zero maps to (0, 0).
    pub fn from_xyz(xyz: Xyz) -> Self {
        let sum = xyz.x + xyz.y + xyz.z;
        if sum == 0.0 {
            return Self::default();
        }
        Self::new(xyz.x / sum, xyz.y / sum)
    }
}

impl From<(f64, f64)> for Chromaticity {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Convert a chromaticity to XYZ with Y = 1
///
/// `y == 0` has no defined luminance-normalized value and maps to the zero vector.
pub fn xy_to_xyz(xy: Chromaticity) -> Xyz {
    if xy.y == 0.0 {
        return Xyz::new(0.0, 0.0, 0.0);
    }

    Xyz {
        x: xy.x / xy.y,
        y: 1.0,
        z: (1.0 - xy.x - xy.y) / xy.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_to_xyz() {
        let xyz = xy_to_xyz(Chromaticity::new(0.3127, 0.3290));
        assert!((xyz.x - 0.9505).abs() < 1e-4, "{xyz:?}");
        assert_eq!(xyz.y, 1.0);
        assert!((xyz.z - 1.0890).abs() < 1e-4, "{xyz:?}");
    }

    #[test]
    fn test_zero_y_is_zero_vector() {
        assert_eq!(xy_to_xyz(Chromaticity::new(0.3, 0.0)), Xyz::default());
        assert_eq!(Chromaticity::new(0.0, 0.0).to_xyz(), Xyz::default());
    }

    #[test]
    fn test_chromaticity_projection() {
        let xy = Chromaticity::new(0.64, 0.33);
        let back = Chromaticity::from_xyz(xy.to_xyz().scale(0.25));
        assert!((back.x - xy.x).abs() < 1e-12);
        assert!((back.y - xy.y).abs() < 1e-12);

        assert_eq!(Chromaticity::from_xyz(Xyz::default()), Chromaticity::default());
    }

    #[test]
    fn test_component_division() {
        let q = Xyz::new(1.0, 4.0, 9.0) / Xyz::new(2.0, 2.0, 3.0);
        assert_eq!(q, Xyz::new(0.5, 2.0, 3.0));

        let inf = Xyz::new(1.0, 0.0, -1.0) / Xyz::new(0.0, 0.0, 0.0);
        assert_eq!(inf.x, f64::INFINITY);
        assert!(inf.y.is_nan());
        assert_eq!(inf.z, f64::NEG_INFINITY);
    }

    #[test]
    fn test_arithmetic() {
        let a = Xyz::new(1.0, 2.0, 3.0);
        let b = Xyz::new(0.1, 0.2, 0.3);

        assert!((a + b).approx_eq(&Xyz::new(1.1, 2.2, 3.3), 1e-10));
        assert!((a - b).approx_eq(&Xyz::new(0.9, 1.8, 2.7), 1e-10));
        assert!((a * 2.0).approx_eq(&Xyz::new(2.0, 4.0, 6.0), 1e-10));
    }

    #[test]
    fn test_exact_equality() {
        assert_eq!(Chromaticity::new(0.3127, 0.3290), Chromaticity::new(0.3127, 0.3290));
        assert_ne!(Chromaticity::new(0.3127, 0.3290), Chromaticity::new(0.3127, 0.32900000001));
    }
}
