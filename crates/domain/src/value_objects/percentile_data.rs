use serde::{Deserialize, Serialize};

/// Cross-path percentile bands of cumulative return at each step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileData {
    /// 1-based step indices.
    pub steps: Vec<usize>,
    pub p5: Vec<f64>,
    pub p25: Vec<f64>,
    pub p50: Vec<f64>,
    pub p75: Vec<f64>,
    pub p95: Vec<f64>,
}

impl PercentileData {
    /// Creates empty bands with room for `len` steps.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            steps: Vec::with_capacity(len),
            p5: Vec::with_capacity(len),
            p25: Vec::with_capacity(len),
            p50: Vec::with_capacity(len),
            p75: Vec::with_capacity(len),
            p95: Vec::with_capacity(len),
        }
    }

    /// Number of steps covered.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
