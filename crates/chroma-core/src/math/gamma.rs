//! sRGB transfer function
//!
//! Converts between gamma-encoded sRGB channel values and linear light
//! (IEC 61966-2-1). Neither direction clamps: out-of-range input follows
//! the same piecewise formula.

/// Encoded values at or above this use the power segment when decoding
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Linear values at or above this use the power segment when encoding
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// Exponent of the encoding power segment (1 / 2.4 to eleven places)
pub const ENCODE_EXPONENT: f64 = 0.41666666666;

/// sRGB gamma decode (encoded → linear)
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded >= DECODE_THRESHOLD {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}

/// sRGB gamma encode (linear → encoded)
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear >= ENCODE_THRESHOLD {
        (1.055 * linear.powf(ENCODE_EXPONENT)) - 0.055
    } else {
        12.92 * linear
    }
}
