//! Climate Metrics Rust Implementation
//!
//! Derived environmental indicators for the Bengaluru climate dashboard.
//!
//! Module structure:
//! - `readings/`: Weather and air-quality readings with optional fields
//! - `metrics/`: Heat, comfort, air-quality, water and vulnerability metrics
//! - `stakeholder/`: Audience roles and tag-based metric filtering
//! - `reference/`: Static city, district, lake and station tables
//! - `timeseries/`: Synthetic series for chart placeholders
//! - `utils/`: Rounding, trends and display formatting
//!
//! All metric functions are pure and synchronous.

pub mod config;
pub mod error;
pub mod readings;
pub mod metrics;
pub mod stakeholder;
pub mod reference;
pub mod timeseries;
pub mod validation;
pub mod utils;

// Re-export commonly used types
pub use config::MetricDefaults;
pub use error::MetricsError;
pub use readings::{AirQualityReading, WeatherReading};
pub use metrics::*;
pub use stakeholder::{
    filter_data_by_stakeholder, get_stakeholder_priorities, MetricCategory, MetricValue,
    Priorities, Stakeholder, TaggedMetric,
};
pub use reference::{
    get_air_quality_stations, get_bengaluru_coordinates, get_bengaluru_districts, get_major_lakes,
    AirQualityStation, Coordinates, District, DistrictType, Lake,
};
pub use timeseries::{generate_time_series_data, generate_time_series_data_with, SeriesPoint};
pub use validation::{validate_environmental_data, EnvironmentSnapshot, ValidationReport};
pub use utils::{calculate_trend_direction, format_number_with_units, TrendDirection};
