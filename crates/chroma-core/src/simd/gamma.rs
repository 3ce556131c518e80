//! Batch sRGB transfer functions
//!
//! Same piecewise formulas as [`crate::math::gamma`], applied in place to
//! every channel of a pixel run. No clamping.

use multiversion::multiversion;

use crate::math::{srgb_gamma_decode, srgb_gamma_encode};

/// Decode (encoded → linear) a batch of RGB triplets in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_decode_batch(data: &mut [[f64; 3]]) {
    for px in data.iter_mut() {
        px[0] = srgb_gamma_decode(px[0]);
        px[1] = srgb_gamma_decode(px[1]);
        px[2] = srgb_gamma_decode(px[2]);
    }
}

/// Encode (linear → encoded) a batch of RGB triplets in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_encode_batch(data: &mut [[f64; 3]]) {
    for px in data.iter_mut() {
        px[0] = srgb_gamma_encode(px[0]);
        px[1] = srgb_gamma_encode(px[1]);
        px[2] = srgb_gamma_encode(px[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_scalar() {
        let mut data = [[0.0, 0.02, 0.5], [1.0, 0.75, 0.04045]];
        let expected: Vec<[f64; 3]> = data
            .iter()
            .map(|px| px.map(srgb_gamma_decode))
            .collect();

        srgb_decode_batch(&mut data);
        assert_eq!(data.to_vec(), expected);
    }

    #[test]
    fn test_roundtrip() {
        let original: Vec<[f64; 3]> = (0..=255)
            .map(|i| {
                let v = i as f64 / 255.0;
                [v, 1.0 - v, v * 0.5]
            })
            .collect();
        let mut data = original.clone();

        srgb_decode_batch(&mut data);
        srgb_encode_batch(&mut data);

        for (a, b) in original.iter().zip(&data) {
            for c in 0..3 {
                assert!((a[c] - b[c]).abs() < 1e-9, "{a:?} vs {b:?}");
            }
        }
    }
}
