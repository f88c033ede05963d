// Metrics Report Binary
//
// Purpose: Derive dashboard metrics from a readings file and print a JSON report
// Usage: READINGS_PATH=readings.json cargo run --features report --bin metrics_report
//
// Readings file:
//   { "weather": { "temperature_2m": 31.0, "relative_humidity_2m": 62 },
//     "air_quality": { "pm2_5": 68, "pm10": 98 } }
// Either section may be null or omitted.

use anyhow::{Context, Result};
use climate_metrics_rust::{
    calculate_metrics_with, filter_data_by_stakeholder, format_number_with_units,
    AirQualityReading, MetricDefaults, MetricValue, Stakeholder, TaggedMetric, WeatherReading,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Deserialize)]
struct ReadingsFile {
    #[serde(default)]
    weather: Option<WeatherReading>,
    #[serde(default)]
    air_quality: Option<AirQualityReading>,
}

#[derive(Debug, Serialize)]
struct ReportEntry {
    #[serde(flatten)]
    metric: TaggedMetric,
    display: String,
}

#[derive(Debug, Serialize)]
struct Report {
    stakeholder: &'static str,
    priorities: Vec<&'static str>,
    metrics: Vec<ReportEntry>,
}

fn display_unit(key: &str) -> &'static str {
    match key {
        "heat_index" => "temperature",
        _ => "index",
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "climate_metrics_rust=info,metrics_report=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Configuration from environment variables
    let readings_path = std::env::var("READINGS_PATH")
        .context("READINGS_PATH must point to a readings JSON file")?;
    let stakeholder_name = std::env::var("STAKEHOLDER")
        .unwrap_or_else(|_| "Citizens".to_string());
    let defaults = match std::env::var("METRIC_DEFAULTS_PATH") {
        Ok(path) => MetricDefaults::load(Path::new(&path))?,
        Err(_) => MetricDefaults::default(),
    };

    tracing::info!("Configuration:");
    tracing::info!("  READINGS_PATH: {}", readings_path);
    tracing::info!("  STAKEHOLDER: {}", stakeholder_name);
    tracing::info!("  Defaults: {:?}", defaults);

    let contents = fs::read_to_string(&readings_path)
        .with_context(|| format!("Failed to read readings file: {}", readings_path))?;
    let readings: ReadingsFile = serde_json::from_str(&contents)
        .with_context(|| "Failed to parse readings JSON")?;

    if let Some(weather) = &readings.weather {
        weather.validate()?;
    }
    if let Some(air) = &readings.air_quality {
        air.validate()?;
    }

    let metrics = calculate_metrics_with(readings.weather.as_ref(), readings.air_quality.as_ref(), &defaults);
    tracing::info!("Derived {} metrics", metrics.keys().len());

    let stakeholder = Stakeholder::from_name(&stakeholder_name);

    let entries = filter_data_by_stakeholder(&metrics.to_tagged(), stakeholder)
        .into_iter()
        .map(|metric| {
            let display = match &metric.value {
                MetricValue::Number(v) => format_number_with_units(*v, display_unit(&metric.key)),
                MetricValue::Label(label) => label.clone(),
            };
            ReportEntry { metric, display }
        })
        .collect();

    let report = Report {
        stakeholder: stakeholder.display_name(),
        priorities: stakeholder.priorities().keywords(),
        metrics: entries,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
