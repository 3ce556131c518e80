//! Chromatic Adaptation Transforms
//!
//! Chromatic adaptation transforms move colors balanced for one white point
//! so that they are balanced for another. Bradford is the method used for
//! primaries conversions.
//!
//! References:
//! - ICC.1:2022 Annex E
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use std::sync::LazyLock;

use crate::color::{Chromaticity, xy_to_xyz};
use crate::math::Matrix3;

/// Chromatic adaptation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChromaticAdaptationMethod {
    /// Bradford adaptation (ICC default, recommended)
    #[default]
    Bradford,
    /// Von Kries adaptation
    VonKries,
    /// XYZ Scaling (simple but less accurate)
    XyzScaling,
    /// No adaptation (identity)
    None,
}

/// Bradford matrix: XYZ → cone response
pub const BRADFORD: Matrix3 = Matrix3::new([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries matrix: XYZ → cone response
pub const VON_KRIES: Matrix3 = Matrix3::new([
    [0.40024, 0.7076, -0.08081],
    [-0.2263, 1.16532, 0.0457],
    [0.0, 0.0, 0.91822],
]);

// Computed from the forward matrices, not rounded literals
static BRADFORD_INV: LazyLock<Matrix3> = LazyLock::new(|| BRADFORD.invert());
static VON_KRIES_INV: LazyLock<Matrix3> = LazyLock::new(|| VON_KRIES.invert());

/// Compute the Bradford adaptation matrix from `src` white to `dst` white
///
/// The returned matrix M is used as `XYZ_dst = M × XYZ_src`. Identical white
/// points return the shared identity exactly, without any arithmetic.
pub fn adapt_white(src: Chromaticity, dst: Chromaticity) -> Matrix3 {
    if src == dst {
        return *Matrix3::identity();
    }

    cone_adaptation(&BRADFORD, &BRADFORD_INV, src, dst)
}

/// Compute the chromatic adaptation matrix for a given method
pub fn adaptation_matrix(
    src: Chromaticity,
    dst: Chromaticity,
    method: ChromaticAdaptationMethod,
) -> Matrix3 {
    if src == dst {
        return *Matrix3::identity();
    }

    match method {
        ChromaticAdaptationMethod::Bradford => adapt_white(src, dst),
        ChromaticAdaptationMethod::VonKries => {
            cone_adaptation(&VON_KRIES, &VON_KRIES_INV, src, dst)
        }
        ChromaticAdaptationMethod::XyzScaling => {
            let factors = xy_to_xyz(dst) / xy_to_xyz(src);
            Matrix3::diagonal(factors.x, factors.y, factors.z)
        }
        ChromaticAdaptationMethod::None => *Matrix3::identity(),
    }
}

// M = M_A^-1 × diag(dst_cone / src_cone) × M_A
fn cone_adaptation(
    forward: &Matrix3,
    inverse: &Matrix3,
    src: Chromaticity,
    dst: Chromaticity,
) -> Matrix3 {
    let factors = (forward * xy_to_xyz(dst)) / (forward * xy_to_xyz(src));

    let scaled = inverse * &Matrix3::diagonal(factors.x, factors.y, factors.z);
    scaled * *forward
}
