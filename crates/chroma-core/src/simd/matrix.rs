//! Batch matrix-vector multiplication

use multiversion::multiversion;

/// Multiply a 3x3 row-major matrix by every triplet of a batch, in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn matrix_multiply_vec3_batch(matrix: &[[f64; 3]; 3], data: &mut [[f64; 3]]) {
    // Extract matrix elements for better register allocation
    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m02 = matrix[0][2];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];
    let m12 = matrix[1][2];
    let m20 = matrix[2][0];
    let m21 = matrix[2][1];
    let m22 = matrix[2][2];

    for px in data.iter_mut() {
        let [r, g, b] = *px;

        px[0] = (m00 * r) + (m01 * g) + (m02 * b);
        px[1] = (m10 * r) + (m11 * g) + (m12 * b);
        px[2] = (m20 * r) + (m21 * g) + (m22 * b);
    }
}
