//! 3x3 Matrix operations for color space transforms
//!
//! These matrices map RGB triplets to CIE XYZ, move XYZ between white points
//! and chain the two into primaries-to-primaries conversions.
//! All operations use f64 and return new matrices; nothing is mutated in place.

use std::ops::{Index, Mul};

use crate::color::Xyz;

/// Process-wide identity, never written
static IDENTITY: Matrix3 = Matrix3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]. The default matrix is all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3 {
    m: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// The shared identity matrix
    #[inline]
    pub fn identity() -> &'static Matrix3 {
        &IDENTITY
    }

    /// Create a diagonal matrix from three values
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self {
            m: [[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]],
        }
    }

    /// Create a matrix whose columns are the three given vectors
    #[inline]
    pub const fn from_columns(c0: Xyz, c1: Xyz, c2: Xyz) -> Self {
        Self {
            m: [[c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z]],
        }
    }

    /// Row-major elements
    #[inline]
    pub const fn mat(&self) -> &[[f64; 3]; 3] {
        &self.m
    }

    /// Calculate the determinant
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Calculate the inverse of this matrix
    ///
    /// The adjugate is scaled by `1 / determinant` without checking it first:
    /// a singular matrix produces infinite or NaN entries. Use
    /// [`Matrix3::checked_invert`] to detect that case.
    pub fn invert(&self) -> Self {
        let inv_det = 1.0 / self.determinant();
        let m = &self.m;

        Self {
            m: [
                [
                    (m[1][1] * m[2][2] - m[2][1] * m[1][2]) * inv_det,
                    (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                    (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
                ],
                [
                    (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                    (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                    (m[1][0] * m[0][2] - m[0][0] * m[1][2]) * inv_det,
                ],
                [
                    (m[1][0] * m[2][1] - m[2][0] * m[1][1]) * inv_det,
                    (m[2][0] * m[0][1] - m[0][0] * m[2][1]) * inv_det,
                    (m[0][0] * m[1][1] - m[1][0] * m[0][1]) * inv_det,
                ],
            ],
        }
    }

    /// Invert, returning None when the result is not finite
    pub fn checked_invert(&self) -> Option<Self> {
        let inv = self.invert();
        inv.is_finite().then_some(inv)
    }

    /// Multiply this matrix by a vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_xyz(&self, v: Xyz) -> Xyz {
        let m = &self.m;
        Xyz {
            x: (m[0][0] * v.x) + (m[0][1] * v.y) + (m[0][2] * v.z),
            y: (m[1][0] * v.x) + (m[1][1] * v.y) + (m[1][2] * v.z),
            z: (m[2][0] * v.x) + (m[2][1] * v.y) + (m[2][2] * v.z),
        }
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other, i.e. `other` is applied first.
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut res = [[0.0; 3]; 3];
        for (i, row) in res.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.m[i][k] * other.m[k][j];
                }
            }
        }
        Self { m: res }
    }

    /// True when every element is finite
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(Self::identity(), epsilon)
    }
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    fn from(m: [[f64; 3]; 3]) -> Self {
        Self::new(m)
    }
}

impl Index<usize> for Matrix3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix3> for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: &Matrix3) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<Xyz> for Matrix3 {
    type Output = Xyz;

    fn mul(self, rhs: Xyz) -> Self::Output {
        self.multiply_xyz(rhs)
    }
}

impl Mul<Xyz> for &Matrix3 {
    type Output = Xyz;

    fn mul(self, rhs: Xyz) -> Self::Output {
        self.multiply_xyz(rhs)
    }
}
