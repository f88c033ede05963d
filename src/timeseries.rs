//! Synthetic daily series for chart placeholders
//!
//! Demo data only: a slow linear drift plus gaussian noise around a base
//! value. Pass a seeded RNG to `generate_time_series_data_with` for
//! reproducible output.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, MetricsError};

/// Drift added per day
pub const DAILY_TREND: f64 = 0.01;

/// One daily observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Series ending today (UTC), using the thread-local RNG.
pub fn generate_time_series_data(
    base_value: f64,
    days: u32,
    variation: f64,
) -> Result<Vec<SeriesPoint>, MetricsError> {
    let today = Utc::now().date_naive();
    generate_time_series_data_with(today, base_value, days, variation, &mut rand::thread_rng())
}

/// Series of `days + 1` points covering `[end - days, end]`.
///
/// value_i = base + i × 0.01 + N(0, |base × variation|), floored at 0.
pub fn generate_time_series_data_with<R: Rng + ?Sized>(
    end: NaiveDate,
    base_value: f64,
    days: u32,
    variation: f64,
    rng: &mut R,
) -> Result<Vec<SeriesPoint>, MetricsError> {
    ensure_finite("base_value", base_value)?;
    ensure_finite("variation", variation)?;

    let std_dev = ensure_finite("noise standard deviation", (base_value * variation).abs())?;
    let noise = Normal::new(0.0, std_dev)
        .map_err(|_| MetricsError::NonFinite { field: "noise standard deviation", value: std_dev })?;

    let start = end
        .checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or(MetricsError::DateRange { end, days })?;

    let series: Vec<SeriesPoint> = (0..=days)
        .map(|i| {
            let value = base_value + f64::from(i) * DAILY_TREND + noise.sample(&mut *rng);
            SeriesPoint {
                date: start + Duration::days(i64::from(i)),
                value: value.max(0.0),
            }
        })
        .collect();

    tracing::debug!("Generated {} synthetic points from {} to {}", series.len(), start, end);

    Ok(series)
}
