//! Utility modules for metric computation
//!
//! Contains shared functionality used across multiple metrics:
//! - Normalization: rounding, clamping, min-max rescaling, percentiles
//! - Trend: direction of change and slope-based trends
//! - Format: unit-aware display strings

pub mod normalization;
pub mod trend;
pub mod format;

// Re-export commonly used items
pub use normalization::{round_to, clamp_score, min_max_normalize, percentile};
pub use trend::{
    calculate_trend_direction, linear_regression_slope, analyze_water_quality_trend,
    TrendDirection, WaterQualityTrend, WaterTrendSummary,
};
pub use format::{format_number_with_units, UnitKind};
