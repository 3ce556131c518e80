//! CIE Standard Illuminant White Points
//!
//! White points are given as CIE 1931 2° chromaticities, the form in which
//! primaries systems (and CICP/H.273 tables) specify them.

use crate::color::Chromaticity;

/// CIE Standard Illuminant D50 (Horizon Light), the ICC PCS white
pub const D50: Chromaticity = Chromaticity::new(0.3457, 0.3585);

/// CIE Standard Illuminant D55 (Mid-morning/Mid-afternoon Daylight)
pub const D55: Chromaticity = Chromaticity::new(0.3324, 0.3474);

/// CIE Standard Illuminant D60, used by ACES
pub const D60: Chromaticity = Chromaticity::new(0.32168, 0.33767);

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// White point of sRGB, Display P3, Adobe RGB and BT.2020.
pub const D65: Chromaticity = Chromaticity::new(0.3127, 0.3290);

/// CIE Standard Illuminant D75 (North Sky Daylight)
pub const D75: Chromaticity = Chromaticity::new(0.2990, 0.3149);

/// DCI-P3 theatrical white point
pub const DCI_P3: Chromaticity = Chromaticity::new(0.314, 0.351);

/// CIE Standard Illuminant A (Incandescent)
pub const A: Chromaticity = Chromaticity::new(0.44757, 0.40745);

/// CIE Standard Illuminant E (Equal Energy)
pub const E: Chromaticity = Chromaticity::new(1.0 / 3.0, 1.0 / 3.0);

/// CIE Standard Illuminant F2 (Cool White Fluorescent)
pub const F2: Chromaticity = Chromaticity::new(0.37208, 0.37529);

/// CIE Standard Illuminant F7 (Broadband Daylight Fluorescent)
pub const F7: Chromaticity = Chromaticity::new(0.31292, 0.32933);

/// CIE Standard Illuminant F11 (Narrow Band White Fluorescent)
pub const F11: Chromaticity = Chromaticity::new(0.38052, 0.37713);

/// Get a standard white point by name
pub fn from_name(name: &str) -> Option<Chromaticity> {
    match name.to_uppercase().as_str() {
        "D50" => Some(D50),
        "D55" => Some(D55),
        "D60" => Some(D60),
        "D65" => Some(D65),
        "D75" => Some(D75),
        "DCI-P3" | "DCI" => Some(DCI_P3),
        "A" => Some(A),
        "E" => Some(E),
        "F2" => Some(F2),
        "F7" => Some(F7),
        "F11" => Some(F11),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d50_tristimulus() {
        let xyz = D50.to_xyz();
        assert!((xyz.x - 0.9642).abs() < 0.001);
        assert_eq!(xyz.y, 1.0);
        assert!((xyz.z - 0.8251).abs() < 0.001);
    }

    #[test]
    fn test_d65_tristimulus() {
        let xyz = D65.to_xyz();
        assert!((xyz.x - 0.9505).abs() < 0.001);
        assert!((xyz.z - 1.0890).abs() < 0.001);
    }

    #[test]
    fn test_equal_energy() {
        let xyz = E.to_xyz();
        assert!((xyz.x - 1.0).abs() < 1e-12);
        assert!((xyz.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(from_name("D50"), Some(D50));
        assert_eq!(from_name("d65"), Some(D65));
        assert_eq!(from_name("DCI"), Some(DCI_P3));
        assert!(from_name("unknown").is_none());
    }
}
