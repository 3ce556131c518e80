//! Accuracy measurement using perceptual color difference
//!
//! Differences are measured as Euclidean distance in OkLab. A distance of
//! about 0.02 is roughly one just-noticeable difference.

use chroma_core::{Color, OkLab, Srgb};

/// Roughly one just-noticeable difference in OkLab
pub const JND: f64 = 0.02;

/// Statistics from a color comparison
#[derive(Debug, Clone)]
pub struct DistanceStats {
    /// Mean OkLab distance across all samples
    pub mean: f64,
    /// Maximum OkLab distance
    pub max: f64,
    /// 95th percentile OkLab distance
    pub p95: f64,
    /// Largest per-channel sRGB difference
    pub max_channel: f64,
    /// Number of samples
    pub count: usize,
}

impl DistanceStats {
    /// Bit-level agreement, up to float noise
    pub fn is_exact(&self) -> bool {
        self.max_channel < 1e-9
    }

    /// Check if all differences are imperceptible
    pub fn is_excellent(&self) -> bool {
        self.max < JND / 10.0
    }

    /// Check if differences stay under one JND
    pub fn is_acceptable(&self) -> bool {
        self.max < JND
    }

    pub fn from_samples(mut distances: Vec<f64>, max_channel: f64) -> Self {
        distances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = distances.len();
        let mean = if count == 0 {
            0.0
        } else {
            distances.iter().sum::<f64>() / count as f64
        };
        let max = distances.last().copied().unwrap_or(0.0);
        let p95 = distances
            .get((count as f64 * 0.95) as usize)
            .copied()
            .unwrap_or(max);

        Self {
            mean,
            max,
            p95,
            max_channel,
            count,
        }
    }
}

/// Largest absolute channel difference between two triplets
pub fn channel_error(a: Srgb, b: Srgb) -> f64 {
    (a.r - b.r).abs().max((a.g - b.g).abs()).max((a.b - b.b).abs())
}

/// OkLab distance between two colors
pub fn oklab_distance(a: Color, b: Color) -> f64 {
    a.as_oklab().distance(&b.as_oklab())
}

/// OkLab distance between two OkLab triplets, used when comparing against
/// a reference that produced OkLab directly
pub fn lab_distance(a: OkLab, b: OkLab) -> f64 {
    a.distance(&b)
}

/// Compare two color buffers and compute distance statistics
pub fn compare_colors(reference: &[Color], result: &[Color]) -> DistanceStats {
    assert_eq!(reference.len(), result.len());

    let mut distances = Vec::with_capacity(reference.len());
    let mut max_channel: f64 = 0.0;
    for (r, o) in reference.iter().zip(result) {
        distances.push(oklab_distance(*r, *o));
        max_channel = max_channel.max(channel_error(r.as_rgb(), o.as_rgb()));
    }

    DistanceStats::from_samples(distances, max_channel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_colors() {
        let colors = [Color::new(0.1, 0.5, 0.9), Color::WHITE, Color::BLACK];
        let stats = compare_colors(&colors, &colors);
        assert!(stats.is_exact());
        assert!(stats.is_excellent());
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn test_small_difference() {
        let a = [Color::new(0.5, 0.5, 0.5)];
        let b = [Color::new(0.51, 0.5, 0.5)];
        let stats = compare_colors(&a, &b);
        assert!(!stats.is_exact());
        assert!(stats.is_acceptable(), "{stats:?}");
        assert!((stats.max_channel - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_empty() {
        let stats = compare_colors(&[], &[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.max, 0.0);
    }
}
