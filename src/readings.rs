//! Raw environmental readings
//!
//! Readings arrive as already-parsed records from the weather and
//! air-quality feeds (Open-Meteo field names). Every sub-field is optional;
//! `resolve` substitutes the configured defaults so the metric formulas only
//! ever see plain numbers.

use serde::{Deserialize, Serialize};

use crate::config::MetricDefaults;
use crate::error::{ensure_finite, MetricsError};

/// Current weather conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Air temperature at 2 m (°C)
    #[serde(rename = "temperature_2m", default)]
    pub temperature: Option<f64>,

    /// Relative humidity at 2 m (%)
    #[serde(rename = "relative_humidity_2m", default)]
    pub relative_humidity: Option<f64>,
}

/// Weather reading with defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWeather {
    pub temperature: f64,
    pub relative_humidity: f64,
}

impl WeatherReading {
    /// Reading with both fields present
    pub fn new(temperature: f64, relative_humidity: f64) -> Self {
        Self {
            temperature: Some(temperature),
            relative_humidity: Some(relative_humidity),
        }
    }

    /// Fill missing fields from `defaults`
    pub fn resolve(&self, defaults: &MetricDefaults) -> ResolvedWeather {
        ResolvedWeather {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            relative_humidity: self.relative_humidity.unwrap_or(defaults.humidity),
        }
    }

    /// Check that present fields are finite numbers
    pub fn validate(&self) -> Result<(), MetricsError> {
        if let Some(t) = self.temperature {
            ensure_finite("temperature_2m", t)?;
        }
        if let Some(h) = self.relative_humidity {
            ensure_finite("relative_humidity_2m", h)?;
        }
        Ok(())
    }
}

/// Current particulate concentrations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    /// PM2.5 (µg/m³)
    #[serde(default)]
    pub pm2_5: Option<f64>,

    /// PM10 (µg/m³)
    #[serde(default)]
    pub pm10: Option<f64>,
}

/// Air-quality reading with defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAirQuality {
    pub pm2_5: f64,
    pub pm10: f64,
}

impl AirQualityReading {
    /// Reading with both fields present
    pub fn new(pm2_5: f64, pm10: f64) -> Self {
        Self {
            pm2_5: Some(pm2_5),
            pm10: Some(pm10),
        }
    }

    /// Fill missing fields from `defaults`
    pub fn resolve(&self, defaults: &MetricDefaults) -> ResolvedAirQuality {
        ResolvedAirQuality {
            pm2_5: self.pm2_5.unwrap_or(defaults.pm2_5),
            pm10: self.pm10.unwrap_or(defaults.pm10),
        }
    }

    /// Check that present fields are finite numbers
    pub fn validate(&self) -> Result<(), MetricsError> {
        if let Some(pm) = self.pm2_5 {
            ensure_finite("pm2_5", pm)?;
        }
        if let Some(pm) = self.pm10 {
            ensure_finite("pm10", pm)?;
        }
        Ok(())
    }
}
