//! Parity testing framework
//!
//! Compares chroma output against reference implementations.

use std::fmt;

use chroma_core::Color;

use crate::accuracy::{DistanceStats, compare_colors};

/// Reference implementation for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceImpl {
    /// The `palette` crate
    Palette,
    /// Published or hand-checked vectors
    Published,
}

impl fmt::Display for ReferenceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceImpl::Palette => write!(f, "palette"),
            ReferenceImpl::Published => write!(f, "published"),
        }
    }
}

/// Result of a parity test
#[derive(Debug)]
pub struct ParityResult {
    /// Name of the test
    pub test_name: String,
    /// Reference used
    pub reference: ReferenceImpl,
    /// Distance statistics
    pub stats: DistanceStats,
    /// Whether the test passed
    pub passed: bool,
}

impl ParityResult {
    pub fn is_exact(&self) -> bool {
        self.stats.is_exact()
    }
}

impl fmt::Display for ParityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: {} samples, mean {:.2e}, p95 {:.2e}, max {:.2e}, channel {:.2e} [{}]",
            self.test_name,
            self.reference,
            self.stats.count,
            self.stats.mean,
            self.stats.p95,
            self.stats.max,
            self.stats.max_channel,
            if self.passed { "ok" } else { "FAIL" }
        )
    }
}

/// A parity test comparing chroma to a reference implementation
pub struct ParityTest {
    /// Test name
    pub name: String,
    /// Reference implementation
    pub reference: ReferenceImpl,
    /// Largest tolerated per-channel sRGB difference
    pub channel_tolerance: f64,
}

impl ParityTest {
    pub fn new(name: impl Into<String>, reference: ReferenceImpl) -> Self {
        Self {
            name: name.into(),
            reference,
            channel_tolerance: 1e-6,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.channel_tolerance = tolerance;
        self
    }

    /// Run the parity test with provided buffers
    pub fn run(&self, ours: &[Color], reference: &[Color]) -> ParityResult {
        let stats = compare_colors(reference, ours);
        let passed = stats.max_channel <= self.channel_tolerance && stats.is_acceptable();

        ParityResult {
            test_name: self.name.clone(),
            reference: self.reference,
            stats,
            passed,
        }
    }
}
