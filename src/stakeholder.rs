//! Stakeholder roles and metric priorities
//!
//! Each dashboard audience sees the metrics tagged with the categories it
//! cares about. Matching is an exact intersection of category tags; metric
//! names play no part in it.

use serde::{Deserialize, Serialize};

/// Category tag attached to every metric record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    Temperature,
    AirQuality,
    WaterQuality,
    GreenCover,
    UrbanGrowth,
    HeatIsland,
    PublicHealth,
    Energy,
}

impl MetricCategory {
    /// Snake-case keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricCategory::Temperature => "temperature",
            MetricCategory::AirQuality => "air_quality",
            MetricCategory::WaterQuality => "water_quality",
            MetricCategory::GreenCover => "green_cover",
            MetricCategory::UrbanGrowth => "urban_growth",
            MetricCategory::HeatIsland => "heat_island",
            MetricCategory::PublicHealth => "public_health",
            MetricCategory::Energy => "energy",
        }
    }
}

/// Keyword reported for stakeholders that see every metric
pub const ALL_METRICS_KEYWORD: &str = "all_metrics";

/// Dashboard audience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stakeholder {
    Citizens,
    /// BBMP (City Planning)
    CityPlanning,
    /// BWSSB (Water Board)
    WaterBoard,
    /// BESCOM (Electricity)
    Electricity,
    ParksDepartment,
    Researchers,
    /// Any name not in the role table
    Unrecognized,
}

/// Categories a stakeholder prioritizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priorities {
    AllMetrics,
    Only(&'static [MetricCategory]),
}

impl Priorities {
    /// Does a record with these tags match?
    pub fn matches(&self, categories: &[MetricCategory]) -> bool {
        match self {
            Priorities::AllMetrics => true,
            Priorities::Only(wanted) => categories.iter().any(|c| wanted.contains(c)),
        }
    }

    /// Ordered keyword list, `["all_metrics"]` for unrestricted stakeholders
    pub fn keywords(&self) -> Vec<&'static str> {
        match self {
            Priorities::AllMetrics => vec![ALL_METRICS_KEYWORD],
            Priorities::Only(categories) => categories.iter().map(|c| c.as_str()).collect(),
        }
    }
}

impl Stakeholder {
    /// Resolve a selector name.
    ///
    /// Accepts the display name or the agency code ("BBMP", "BWSSB",
    /// "BESCOM"), ignoring case and surrounding whitespace. Anything else is
    /// `Unrecognized` and logged once here.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();

        let found = Self::all().iter().copied().find(|s| {
            s.display_name().eq_ignore_ascii_case(trimmed)
                || s.agency_code().is_some_and(|code| code.eq_ignore_ascii_case(trimmed))
        });

        found.unwrap_or_else(|| {
            tracing::warn!("Unknown stakeholder '{}', using default priorities", name);
            Stakeholder::Unrecognized
        })
    }

    /// Selector label
    pub fn display_name(&self) -> &'static str {
        match self {
            Stakeholder::Citizens => "Citizens",
            Stakeholder::CityPlanning => "BBMP (City Planning)",
            Stakeholder::WaterBoard => "BWSSB (Water Board)",
            Stakeholder::Electricity => "BESCOM (Electricity)",
            Stakeholder::ParksDepartment => "Parks Department",
            Stakeholder::Researchers => "Researchers",
            Stakeholder::Unrecognized => "Unrecognized",
        }
    }

    /// Short agency code for municipal bodies
    pub fn agency_code(&self) -> Option<&'static str> {
        match self {
            Stakeholder::CityPlanning => Some("BBMP"),
            Stakeholder::WaterBoard => Some("BWSSB"),
            Stakeholder::Electricity => Some("BESCOM"),
            _ => None,
        }
    }

    /// Priority table
    pub fn priorities(&self) -> Priorities {
        use MetricCategory::*;

        match self {
            Stakeholder::Citizens => Priorities::Only(&[AirQuality, Temperature, PublicHealth]),
            Stakeholder::CityPlanning => Priorities::Only(&[UrbanGrowth, HeatIsland, GreenCover]),
            Stakeholder::WaterBoard => Priorities::Only(&[WaterQuality]),
            Stakeholder::Electricity => Priorities::Only(&[Temperature, HeatIsland, Energy]),
            Stakeholder::ParksDepartment => Priorities::Only(&[GreenCover, Temperature, WaterQuality]),
            Stakeholder::Researchers => Priorities::AllMetrics,
            Stakeholder::Unrecognized => Priorities::Only(&[Temperature, AirQuality]),
        }
    }

    /// The six selectable roles
    pub fn all() -> &'static [Stakeholder] {
        &[
            Stakeholder::Citizens,
            Stakeholder::CityPlanning,
            Stakeholder::WaterBoard,
            Stakeholder::Electricity,
            Stakeholder::ParksDepartment,
            Stakeholder::Researchers,
        ]
    }
}

/// Priority keywords for a selector name. Unknown names fall back to
/// `["temperature", "air_quality"]`.
pub fn get_stakeholder_priorities(stakeholder: &str) -> Vec<&'static str> {
    Stakeholder::from_name(stakeholder).priorities().keywords()
}

/// Numeric or categorical metric value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Label(String),
}

/// Metric record with its category tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedMetric {
    pub key: String,
    pub value: MetricValue,
    pub categories: Vec<MetricCategory>,
}

impl TaggedMetric {
    pub fn number(key: &str, value: f64, categories: &[MetricCategory]) -> Self {
        Self {
            key: key.to_string(),
            value: MetricValue::Number(value),
            categories: categories.to_vec(),
        }
    }

    pub fn label(key: &str, value: &str, categories: &[MetricCategory]) -> Self {
        Self {
            key: key.to_string(),
            value: MetricValue::Label(value.to_string()),
            categories: categories.to_vec(),
        }
    }
}

/// Keep the records relevant to `stakeholder`.
///
/// Unrestricted stakeholders get the input unchanged. If nothing matches,
/// the full input is returned rather than an empty view.
pub fn filter_data_by_stakeholder(data: &[TaggedMetric], stakeholder: Stakeholder) -> Vec<TaggedMetric> {
    let priorities = stakeholder.priorities();

    let filtered: Vec<TaggedMetric> = data
        .iter()
        .filter(|metric| priorities.matches(&metric.categories))
        .cloned()
        .collect();

    if filtered.is_empty() && !data.is_empty() {
        tracing::warn!(
            "No metrics match {} priorities, showing all {} records",
            stakeholder.display_name(),
            data.len()
        );
        return data.to_vec();
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use MetricCategory::*;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` and return what it logged at WARN and above
    fn warnings_from(f: impl FnOnce()) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = log.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn sample_data() -> Vec<TaggedMetric> {
        vec![
            TaggedMetric::number("heat_index", 32.8, &[Temperature, HeatIsland, PublicHealth]),
            TaggedMetric::number("lake_health_estimate", 60.0, &[WaterQuality]),
            TaggedMetric::number("aqi_estimate", 136.0, &[AirQuality]),
            TaggedMetric::label("health_risk", "High", &[AirQuality, PublicHealth]),
        ]
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Stakeholder::from_name("Citizens"), Stakeholder::Citizens);
        assert_eq!(Stakeholder::from_name("BBMP (City Planning)"), Stakeholder::CityPlanning);
        assert_eq!(Stakeholder::from_name("  bwssb "), Stakeholder::WaterBoard);
        assert_eq!(Stakeholder::from_name("parks department"), Stakeholder::ParksDepartment);
        assert_eq!(Stakeholder::from_name("unknown_role"), Stakeholder::Unrecognized);
        assert_eq!(Stakeholder::from_name(""), Stakeholder::Unrecognized);
    }

    #[test]
    fn test_priorities() {
        assert_eq!(get_stakeholder_priorities("unknown_role"), vec!["temperature", "air_quality"]);
        assert_eq!(get_stakeholder_priorities("Researchers"), vec!["all_metrics"]);
        assert_eq!(get_stakeholder_priorities("BWSSB (Water Board)"), vec!["water_quality"]);

        // Every selectable role resolves to itself
        for role in Stakeholder::all() {
            assert_eq!(Stakeholder::from_name(role.display_name()), *role);
        }
    }

    #[test]
    fn test_filter_researchers_unchanged() {
        let data = sample_data();
        assert_eq!(filter_data_by_stakeholder(&data, Stakeholder::Researchers), data);
    }

    #[test]
    fn test_filter_by_tag_intersection() {
        let data = sample_data();

        let water = filter_data_by_stakeholder(&data, Stakeholder::WaterBoard);
        assert_eq!(water.len(), 1);
        assert_eq!(water[0].key, "lake_health_estimate");

        let citizens = filter_data_by_stakeholder(&data, Stakeholder::Citizens);
        let keys: Vec<&str> = citizens.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["heat_index", "aqi_estimate", "health_risk"]);
    }

    #[test]
    fn test_filter_empty_result_falls_back() {
        let data = vec![TaggedMetric::number("aqi_estimate", 40.0, &[AirQuality])];
        assert_eq!(filter_data_by_stakeholder(&data, Stakeholder::WaterBoard), data);

        assert!(filter_data_by_stakeholder(&[], Stakeholder::WaterBoard).is_empty());
    }

    #[test]
    fn test_fallbacks_logged_as_warnings() {
        let logs = warnings_from(|| {
            get_stakeholder_priorities("unknown_role");
        });
        assert_eq!(logs.matches("Unknown stakeholder 'unknown_role'").count(), 1);

        let data = vec![TaggedMetric::number("aqi_estimate", 40.0, &[AirQuality])];
        let logs = warnings_from(|| {
            filter_data_by_stakeholder(&data, Stakeholder::WaterBoard);
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("No metrics match BWSSB (Water Board) priorities"));

        // Known roles and matching filters stay quiet
        let logs = warnings_from(|| {
            get_stakeholder_priorities("Citizens");
            filter_data_by_stakeholder(&sample_data(), Stakeholder::Citizens);
        });
        assert!(logs.is_empty());
    }

    #[test]
    fn test_metric_value_serialization() {
        let json = serde_json::to_value(sample_data()[3].clone()).unwrap();
        assert_eq!(json["value"], "High");
        assert_eq!(json["categories"][1], "public_health");
    }
}
