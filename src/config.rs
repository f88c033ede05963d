//! Default Reading Values
//!
//! Substitutes for sub-fields missing from a weather or air-quality reading.
//! Defaults are applied once, when a reading is resolved, never inside the
//! metric formulas.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Temperature used when a weather reading has none (°C)
pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;

/// Relative humidity used when a weather reading has none (%)
pub const DEFAULT_HUMIDITY_PCT: f64 = 50.0;

/// PM2.5 used when an air-quality reading has none (µg/m³)
pub const DEFAULT_PM2_5: f64 = 25.0;

/// PM10 used when an air-quality reading has none (µg/m³)
pub const DEFAULT_PM10: f64 = 50.0;

/// Defaults for missing reading sub-fields.
///
/// A JSON file only needs the keys it overrides:
///
/// ```json
/// { "temperature": 28.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricDefaults {
    pub temperature: f64,
    pub humidity: f64,
    pub pm2_5: f64,
    pub pm10: f64,
}

impl Default for MetricDefaults {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE_C,
            humidity: DEFAULT_HUMIDITY_PCT,
            pm2_5: DEFAULT_PM2_5,
            pm10: DEFAULT_PM10,
        }
    }
}

impl MetricDefaults {
    /// Load defaults from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read metric defaults file: {:?}", path))?;

        Self::from_json_str(&contents)
    }

    /// Parse defaults from a JSON string
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let defaults: MetricDefaults = serde_json::from_str(contents)
            .with_context(|| "Failed to parse metric defaults JSON")?;

        let fields = [
            ("temperature", defaults.temperature),
            ("humidity", defaults.humidity),
            ("pm2_5", defaults.pm2_5),
            ("pm10", defaults.pm10),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                anyhow::bail!("Default for '{}' must be finite, got {}", name, value);
            }
        }

        Ok(defaults)
    }
}
