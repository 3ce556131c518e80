//! Batch packing between ARGB32 pixels and f64 RGB triplets

use multiversion::multiversion;

/// Unpack the color channels of ARGB32 pixels into normalized triplets
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn argb32_to_rgb_batch(src: &[u32], dst: &mut [[f64; 3]]) {
    assert!(dst.len() >= src.len());

    for (&px, out) in src.iter().zip(dst.iter_mut()) {
        out[0] = ((px >> 16) & 0xFF) as f64 / 255.0;
        out[1] = ((px >> 8) & 0xFF) as f64 / 255.0;
        out[2] = (px & 0xFF) as f64 / 255.0;
    }
}

/// Pack triplets back into ARGB32 pixels, keeping each pixel's alpha
///
/// Channels are clamped to [0, 1] and rounded to the nearest 8-bit level.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn rgb_to_argb32_batch(src: &[[f64; 3]], dst: &mut [u32]) {
    assert!(dst.len() >= src.len());

    for (inp, px) in src.iter().zip(dst.iter_mut()) {
        let r = (inp[0].clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        let g = (inp[1].clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        let b = (inp[2].clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        *px = (*px & 0xFF00_0000) | (r << 16) | (g << 8) | b;
    }
}
