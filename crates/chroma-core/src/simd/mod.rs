//! SIMD-Optimized Batch Kernels
//!
//! Batch versions of the per-pixel work done by surface transforms, using
//! the `multiversion` crate for automatic CPU dispatch.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! All functions dispatch to the best available implementation at runtime.
//! The scalar fallback is always available.

mod gamma;
mod matrix;
mod pixel;

pub use gamma::{srgb_decode_batch, srgb_encode_batch};
pub use matrix::matrix_multiply_vec3_batch;
pub use pixel::{argb32_to_rgb_batch, rgb_to_argb32_batch};

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}
