//! Distribution statistics over `f64` samples.
//!
//! Every percentile reported by the engine goes through [`percentile`] so
//! that bands and Value-at-Risk figures agree with each other.

/// Arithmetic mean; zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (N - 1 denominator); zero for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Returns a copy of `values` sorted ascending.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Linearly interpolated percentile of an ascending slice.
///
/// # Arguments
///
/// * `sorted_values` - Samples sorted ascending
/// * `p` - Percentile in `[0, 100]`
///
/// # Returns
///
/// The value at rank `(p / 100) * (n - 1)`, or zero for an empty slice.
pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return 0.0;
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if upper >= n {
        return sorted_values[n - 1];
    }

    let weight = rank - lower as f64;
    let low = sorted_values[lower];
    low + (sorted_values[upper] - low) * weight
}

/// Median via [`percentile`]; sorts a copy of the input.
pub fn median(values: &[f64]) -> f64 {
    percentile(&sorted(values), 50.0)
}
