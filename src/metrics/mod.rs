//! Metric modules for the climate dashboard
//!
//! Each metric family lives in its own module. `calculate_metrics` derives
//! the headline indices from whichever readings are available.

pub mod thermal;
pub mod air_quality;
pub mod uv;
pub mod water;
pub mod vulnerability;
pub mod hotspots;

// Re-export metric functions
pub use thermal::{calculate_heat_index, calculate_comfort_index, estimate_lake_health};
pub use air_quality::{
    calculate_simple_aqi, assess_health_risk, calculate_pm25_aqi, AqiBand, HealthRisk,
};
pub use uv::{classify_uv_risk, UvRisk};
pub use water::{analyze_lake, assess_algal_bloom_risk, water_quality_index, AlgalBloomRisk, LakeAnalysis};
pub use vulnerability::calculate_heat_vulnerability_index;
pub use hotspots::{detect_pollution_hotspots, HotspotSeverity, PollutionHotspot, ZoneSeries};

use serde::{Deserialize, Serialize};

use crate::config::MetricDefaults;
use crate::readings::{AirQualityReading, WeatherReading};
use crate::stakeholder::{MetricCategory, TaggedMetric};

/// Derived indices for one pair of readings.
///
/// Weather-derived fields are present only when a weather reading was
/// supplied, air-quality fields only when an air-quality reading was.
/// Absent fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_index: Option<f64>,

    /// 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfort_index: Option<f64>,

    /// 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lake_health_estimate: Option<f64>,

    /// ≥ 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aqi_estimate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_risk: Option<HealthRisk>,
}

impl DerivedMetrics {
    /// No reading was supplied
    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Names of the present fields, in declaration order
    pub fn keys(&self) -> Vec<&'static str> {
        let present = [
            ("heat_index", self.heat_index.is_some()),
            ("comfort_index", self.comfort_index.is_some()),
            ("lake_health_estimate", self.lake_health_estimate.is_some()),
            ("aqi_estimate", self.aqi_estimate.is_some()),
            ("health_risk", self.health_risk.is_some()),
        ];

        present
            .into_iter()
            .filter_map(|(key, is_present)| is_present.then_some(key))
            .collect()
    }

    /// Present fields as category-tagged records for stakeholder filtering
    pub fn to_tagged(&self) -> Vec<TaggedMetric> {
        use MetricCategory::*;

        let mut tagged = Vec::new();

        if let Some(v) = self.heat_index {
            tagged.push(TaggedMetric::number("heat_index", v, &[Temperature, HeatIsland, PublicHealth]));
        }
        if let Some(v) = self.comfort_index {
            tagged.push(TaggedMetric::number("comfort_index", v, &[Temperature, PublicHealth]));
        }
        if let Some(v) = self.lake_health_estimate {
            tagged.push(TaggedMetric::number("lake_health_estimate", v, &[WaterQuality]));
        }
        if let Some(v) = self.aqi_estimate {
            tagged.push(TaggedMetric::number("aqi_estimate", v, &[AirQuality]));
        }
        if let Some(risk) = self.health_risk {
            tagged.push(TaggedMetric::label("health_risk", risk.as_str(), &[AirQuality, PublicHealth]));
        }

        tagged
    }
}

/// Derive metrics using the built-in defaults for missing sub-fields
pub fn calculate_metrics(
    weather: Option<&WeatherReading>,
    air_quality: Option<&AirQualityReading>,
) -> DerivedMetrics {
    calculate_metrics_with(weather, air_quality, &MetricDefaults::default())
}

/// Derive metrics using `defaults` for missing sub-fields.
///
/// An absent reading is a normal "no data" state and yields no fields for
/// that source; both absent yields an empty result.
pub fn calculate_metrics_with(
    weather: Option<&WeatherReading>,
    air_quality: Option<&AirQualityReading>,
    defaults: &MetricDefaults,
) -> DerivedMetrics {
    let mut metrics = DerivedMetrics::default();

    if let Some(reading) = weather {
        let w = reading.resolve(defaults);
        metrics.heat_index = Some(calculate_heat_index(w.temperature, w.relative_humidity));
        metrics.comfort_index = Some(calculate_comfort_index(w.temperature, w.relative_humidity));
        metrics.lake_health_estimate = Some(estimate_lake_health(w.temperature, w.relative_humidity));
    }

    if let Some(reading) = air_quality {
        let aq = reading.resolve(defaults);
        metrics.aqi_estimate = Some(calculate_simple_aqi(aq.pm2_5, aq.pm10));
        metrics.health_risk = Some(assess_health_risk(aq.pm2_5, aq.pm10));
    }

    tracing::debug!("Derived metrics: {:?}", metrics.keys());

    metrics
}
