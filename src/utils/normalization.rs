//! Normalization Utilities
//!
//! Rounding, clamping and rescaling shared by the metric modules.

/// Lower bound of every 0-100 score
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every 0-100 score
pub const SCORE_MAX: f64 = 100.0;

/// Round to `decimals` places, exact ties to even
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Clamp into the 0-100 score range
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(SCORE_MIN, SCORE_MAX)
}

/// Rescale values to [0, 1] using the slice minimum and maximum.
///
/// A constant slice has no spread and maps to all zeros.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    values
        .iter()
        .map(|&v| if range > 0.0 { (v - min) / range } else { 0.0 })
        .collect()
}

/// Percentile using linear interpolation between closest ranks
///
/// Algorithm:
/// 1. Sort values ascending
/// 2. rank = q / 100 × (n - 1)
/// 3. Interpolate between values[floor(rank)] and values[ceil(rank)]
///
/// Returns None for an empty slice. `q` is clamped to [0, 100].
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = q.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}
