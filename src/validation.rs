//! Environment snapshot validation
//!
//! Range checks for the headline figures shown on the overview page.
//! Out-of-range temperatures are plausible but unusual (warning); AQI and
//! lake-health values outside their scales are invalid (error).

use serde::{Deserialize, Serialize};

/// Typical Bengaluru temperature range (°C)
pub const TYPICAL_TEMP_RANGE_C: (f64, f64) = (15.0, 50.0);

/// Valid AQI scale
pub const AQI_RANGE: (f64, f64) = (0.0, 500.0);

/// Valid lake health index scale
pub const LAKE_HEALTH_RANGE: (f64, f64) = (0.0, 10.0);

/// Headline figures for the overview page. Absent figures are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    pub temperature_avg: Option<f64>,
    pub aqi_avg: Option<f64>,
    pub lake_health_index: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

fn outside(value: f64, (low, high): (f64, f64)) -> bool {
    !(low..=high).contains(&value)
}

/// Check a snapshot for consistency and realistic ranges
pub fn validate_environmental_data(snapshot: &EnvironmentSnapshot) -> ValidationReport {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if let Some(temp) = snapshot.temperature_avg {
        if outside(temp, TYPICAL_TEMP_RANGE_C) {
            warnings.push(format!("Temperature {}°C is outside typical range for Bengaluru", temp));
        }
    }

    if let Some(aqi) = snapshot.aqi_avg {
        if outside(aqi, AQI_RANGE) {
            errors.push(format!("AQI value {} is outside valid range (0-500)", aqi));
        }
    }

    if let Some(health) = snapshot.lake_health_index {
        if outside(health, LAKE_HEALTH_RANGE) {
            errors.push(format!("Lake health index {} is outside valid range (0-10)", health));
        }
    }

    for message in warnings.iter().chain(&errors) {
        tracing::warn!("{}", message);
    }

    ValidationReport {
        valid: errors.is_empty(),
        warnings,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_snapshot() {
        let snapshot = EnvironmentSnapshot {
            temperature_avg: Some(32.5),
            aqi_avg: Some(156.0),
            lake_health_index: Some(6.2),
        };
        let report = validate_environmental_data(&snapshot);
        assert!(report.valid);
        assert!(report.warnings.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_temperature_only_warns() {
        let snapshot = EnvironmentSnapshot { temperature_avg: Some(52.0), ..Default::default() };
        let report = validate_environmental_data(&snapshot);
        assert!(report.valid);
        assert_eq!(report.warnings, vec!["Temperature 52°C is outside typical range for Bengaluru"]);
    }

    #[test]
    fn test_out_of_scale_values_invalid() {
        let snapshot = EnvironmentSnapshot {
            temperature_avg: None,
            aqi_avg: Some(612.0),
            lake_health_index: Some(-1.0),
        };
        let report = validate_environmental_data(&snapshot);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].starts_with("AQI value 612"));
    }

    #[test]
    fn test_empty_snapshot_valid() {
        assert!(validate_environmental_data(&EnvironmentSnapshot::default()).valid);
    }
}
