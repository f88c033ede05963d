//! Pollution hotspot detection
//!
//! A zone is a hotspot when its latest observation exceeds a percentile of
//! its own history.

use serde::{Deserialize, Serialize};

use crate::utils::normalization::percentile;

/// Percentile above which a hotspot is rated High
pub const HIGH_SEVERITY_PERCENTILE: f64 = 90.0;

/// Hotspot severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HotspotSeverity {
    Moderate,
    High,
}

/// Zone whose latest level exceeds its threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionHotspot {
    pub zone: String,
    pub current_level: f64,
    pub threshold: f64,
    pub severity: HotspotSeverity,
}

/// Pollution series for one zone, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSeries {
    pub zone: String,
    pub values: Vec<f64>,
}

/// Detect hotspots across zones.
///
/// # Arguments
/// * `zones` - Per-zone series (empty series are skipped)
/// * `threshold_percentile` - Percentile of the zone's history to exceed (e.g. 75)
pub fn detect_pollution_hotspots(zones: &[ZoneSeries], threshold_percentile: f64) -> Vec<PollutionHotspot> {
    zones
        .iter()
        .filter_map(|zone| {
            let current_level = *zone.values.last()?;
            let threshold = percentile(&zone.values, threshold_percentile)?;

            if current_level <= threshold {
                return None;
            }

            let high_cut = percentile(&zone.values, HIGH_SEVERITY_PERCENTILE)?;
            let severity = if current_level > high_cut {
                HotspotSeverity::High
            } else {
                HotspotSeverity::Moderate
            };

            Some(PollutionHotspot {
                zone: zone.zone.clone(),
                current_level,
                threshold,
                severity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn zone(name: &str, values: &[f64]) -> ZoneSeries {
        ZoneSeries { zone: name.to_string(), values: values.to_vec() }
    }

    #[test]
    fn test_detect_hotspots() {
        let zones = vec![
            // Latest is the maximum: above p90 -> High
            zone("Silk Board", &[60.0, 65.0, 70.0, 72.0, 110.0]),
            // Latest is mid-range: not a hotspot
            zone("Hebbal", &[40.0, 55.0, 48.0, 50.0, 45.0]),
            // p75 = 52.25, p90 = 54.0; latest 53 is Moderate
            zone("Whitefield", &[40.0, 44.0, 46.0, 50.0, 55.0, 53.0]),
            zone("Empty", &[]),
        ];

        let hotspots = detect_pollution_hotspots(&zones, 75.0);
        assert_eq!(hotspots.len(), 2);

        assert_eq!(hotspots[0].zone, "Silk Board");
        assert_eq!(hotspots[0].severity, HotspotSeverity::High);

        assert_eq!(hotspots[1].zone, "Whitefield");
        assert_eq!(hotspots[1].severity, HotspotSeverity::Moderate);
        assert_relative_eq!(hotspots[1].threshold, 52.25, epsilon = 1e-12);
    }
}
