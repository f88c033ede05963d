//! Air-quality metrics
//!
//! Two independent AQI figures are provided:
//! - `calculate_simple_aqi`: the dashboard's simplified linear scale against
//!   reference concentrations. Not a standards-compliant AQI, and kept that way.
//! - `calculate_pm25_aqi`: breakpoint interpolation over PM2.5 only, used for
//!   station readings and category colors.

use serde::{Deserialize, Serialize};

use crate::utils::normalization::round_to;

/// PM2.5 reference concentration (µg/m³)
pub const PM2_5_REFERENCE: f64 = 25.0;

/// PM10 reference concentration (µg/m³)
pub const PM10_REFERENCE: f64 = 50.0;

/// AQI points assigned to a pollutant at its reference concentration
const AQI_AT_REFERENCE: f64 = 50.0;

/// Simplified AQI: each pollutant scaled linearly so that its reference
/// concentration scores 50, then the worse of the two, rounded to 1 decimal.
///
/// Monotonic in both inputs; (0, 0) gives 0.
pub fn calculate_simple_aqi(pm25: f64, pm10: f64) -> f64 {
    let pm25_aqi = pm25 / PM2_5_REFERENCE * AQI_AT_REFERENCE;
    let pm10_aqi = pm10 / PM10_REFERENCE * AQI_AT_REFERENCE;

    round_to(pm25_aqi.max(pm10_aqi), 1)
}

/// Health-risk category derived from particulate load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthRisk {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl HealthRisk {
    /// Display text
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthRisk::Low => "Low",
            HealthRisk::Moderate => "Moderate",
            HealthRisk::High => "High",
            HealthRisk::VeryHigh => "Very High",
        }
    }
}

/// Classify health risk from the worst pollutant-to-reference ratio.
///
/// | max(PM2.5/25, PM10/50) | Risk      |
/// |------------------------|-----------|
/// | ≤ 1                    | Low       |
/// | ≤ 2                    | Moderate  |
/// | ≤ 3                    | High      |
/// | > 3                    | Very High |
///
/// Boundary values belong to the lower band.
pub fn assess_health_risk(pm25: f64, pm10: f64) -> HealthRisk {
    let ratio = (pm25 / PM2_5_REFERENCE).max(pm10 / PM10_REFERENCE);

    if ratio <= 1.0 {
        HealthRisk::Low
    } else if ratio <= 2.0 {
        HealthRisk::Moderate
    } else if ratio <= 3.0 {
        HealthRisk::High
    } else {
        HealthRisk::VeryHigh
    }
}

/// Breakpoint AQI for a PM2.5 concentration.
///
/// Linear interpolation inside the matching band, truncated to an integer:
/// AQI = ((AQIhigh - AQIlow) / (PMhigh - PMlow)) × (PM - PMlow) + AQIlow
///
/// Concentrations above the last band return 301.
pub fn calculate_pm25_aqi(concentration: f64) -> u16 {
    // (upper bound of band, PM low, PM high, AQI low, AQI high)
    const PM25_BANDS: [(f64, f64, f64, f64, f64); 5] = [
        (12.0, 0.0, 12.0, 0.0, 50.0),
        (35.4, 12.1, 35.4, 51.0, 100.0),
        (55.4, 35.5, 55.4, 101.0, 150.0),
        (150.4, 55.5, 150.4, 151.0, 200.0),
        (250.4, 150.5, 250.4, 201.0, 300.0),
    ];

    let concentration = concentration.max(0.0);

    for (upper, pm_low, pm_high, aqi_low, aqi_high) in PM25_BANDS {
        if concentration <= upper {
            let aqi = ((aqi_high - aqi_low) / (pm_high - pm_low)) * (concentration - pm_low) + aqi_low;
            return aqi.max(0.0) as u16;
        }
    }

    301
}

/// AQI severity band with its map color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiBand {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiBand {
    /// Band containing an AQI value
    pub fn from_aqi(aqi: u16) -> Self {
        match aqi {
            0..=50 => AqiBand::Good,
            51..=100 => AqiBand::Moderate,
            101..=150 => AqiBand::UnhealthyForSensitiveGroups,
            151..=200 => AqiBand::Unhealthy,
            201..=300 => AqiBand::VeryUnhealthy,
            _ => AqiBand::Hazardous,
        }
    }

    /// Category label
    pub fn label(&self) -> &'static str {
        match self {
            AqiBand::Good => "Good",
            AqiBand::Moderate => "Moderate",
            AqiBand::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiBand::Unhealthy => "Unhealthy",
            AqiBand::VeryUnhealthy => "Very Unhealthy",
            AqiBand::Hazardous => "Hazardous",
        }
    }

    /// Marker color name
    pub fn color(&self) -> &'static str {
        match self {
            AqiBand::Good => "green",
            AqiBand::Moderate => "yellow",
            AqiBand::UnhealthyForSensitiveGroups => "orange",
            AqiBand::Unhealthy => "red",
            AqiBand::VeryUnhealthy => "purple",
            AqiBand::Hazardous => "maroon",
        }
    }
}
