//! Trend classification
//!
//! Direction of change between two observations, and slope-based trends
//! over a series of lake water-quality scores.

use serde::{Deserialize, Serialize};

/// Relative change below which two observations count as equal
pub const TREND_DEAD_BAND: f64 = 0.05;

/// Slope magnitude (score units per day) separating a trend from noise
pub const WATER_TREND_SLOPE_THRESHOLD: f64 = 0.1;

/// Direction of change between two observations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    /// Lowercase label used by the dashboard
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

/// Compare `current` against `previous` with a symmetric 5% dead band.
///
/// - current > previous + 5% → Increasing
/// - current < previous - 5% → Decreasing
/// - otherwise → Stable
///
/// The band is measured on |previous|, so a zero baseline reports any
/// positive value as increasing and any negative value as decreasing, and
/// negative baselines keep the same orientation as positive ones.
/// NaN on either side is Stable.
pub fn calculate_trend_direction(current: f64, previous: f64) -> TrendDirection {
    let band = previous.abs() * TREND_DEAD_BAND;

    if current > previous + band {
        TrendDirection::Increasing
    } else if current < previous - band {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

/// Least-squares slope of `values` against their index (0, 1, 2, ...).
///
/// Fewer than two points have no slope and return 0.
pub fn linear_regression_slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let n_f = n as f64;
    let mean_x = (n_f - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n_f;

    let (covariance, variance) = values.iter().enumerate().fold(
        (0.0, 0.0),
        |(cov, var), (i, &y)| {
            let dx = i as f64 - mean_x;
            (cov + dx * (y - mean_y), var + dx * dx)
        },
    );

    covariance / variance
}

/// Qualitative water-quality trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterQualityTrend {
    Improving,
    Deteriorating,
    Stable,
}

impl WaterQualityTrend {
    /// Classify a daily slope
    pub fn from_slope(slope: f64) -> Self {
        if slope > WATER_TREND_SLOPE_THRESHOLD {
            WaterQualityTrend::Improving
        } else if slope < -WATER_TREND_SLOPE_THRESHOLD {
            WaterQualityTrend::Deteriorating
        } else {
            WaterQualityTrend::Stable
        }
    }

    /// Display text
    pub fn display_text(&self) -> &'static str {
        match self {
            WaterQualityTrend::Improving => "Improving",
            WaterQualityTrend::Deteriorating => "Deteriorating",
            WaterQualityTrend::Stable => "Stable",
        }
    }
}

/// Trend summary for one lake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterTrendSummary {
    pub trend: WaterQualityTrend,
    pub slope: f64,
    pub current_quality: f64,
    /// Projected change across the whole window (slope × timeframe)
    pub change_rate: f64,
}

/// Analyze the most recent `timeframe_days` observations of a lake.
///
/// Returns None when there are no observations.
pub fn analyze_water_quality_trend(values: &[f64], timeframe_days: usize) -> Option<WaterTrendSummary> {
    let current_quality = *values.last()?;
    let start = values.len().saturating_sub(timeframe_days);
    let recent = &values[start..];

    let slope = linear_regression_slope(recent);

    Some(WaterTrendSummary {
        trend: WaterQualityTrend::from_slope(slope),
        slope,
        current_quality,
        change_rate: slope * timeframe_days as f64,
    })
}
