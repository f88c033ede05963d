//! Error types for metric inputs.
//!
//! The metric formulas are total over finite numbers. These errors are only
//! raised at the boundary, where readings or generator parameters arrive.

use thiserror::Error;

/// Input rejected before any metric is computed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// NaN or infinite value in a numeric field
    #[error("non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Zone-aligned slices with different lengths
    #[error("length mismatch: expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Series start date falls outside the supported calendar
    #[error("{days} days before {end} is outside the supported date range")]
    DateRange { end: chrono::NaiveDate, days: u32 },
}

/// Reject NaN and infinite values for the named field.
pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64, MetricsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MetricsError::NonFinite { field, value })
    }
}
