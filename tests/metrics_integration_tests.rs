//! Metrics Integration Tests
//!
//! Exercises the public API the dashboard views call: readings in, derived
//! metrics, stakeholder views and display strings out.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use climate_metrics_rust::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

#[test]
fn heat_index_passthrough_below_threshold() {
    for t in [-5.0, 10.0, 20.0, 26.99] {
        for h in [0.0, 50.0, 100.0] {
            assert_eq!(calculate_heat_index(t, h), t);
        }
    }
}

#[test]
fn comfort_and_lake_health_always_clamped() {
    let temps = [-60.0, 0.0, 23.0, 30.0, 45.0, 100.0];
    let humidities = [-50.0, 0.0, 50.0, 95.0, 200.0];

    for &t in &temps {
        for &h in &humidities {
            let comfort = calculate_comfort_index(t, h);
            let lake = estimate_lake_health(t, h);
            assert!((0.0..=100.0).contains(&comfort), "comfort({}, {}) = {}", t, h, comfort);
            assert!((0.0..=100.0).contains(&lake), "lake({}, {}) = {}", t, h, lake);
        }
    }

    assert_relative_eq!(calculate_comfort_index(23.0, 50.0), 100.0);
}

#[test]
fn simple_aqi_zero_and_monotonic() {
    assert_relative_eq!(calculate_simple_aqi(0.0, 0.0), 0.0);

    let levels = [0.0, 5.0, 12.5, 25.0, 60.0, 150.0, 400.0];
    for &fixed in &levels {
        for pair in levels.windows(2) {
            assert!(calculate_simple_aqi(pair[1], fixed) >= calculate_simple_aqi(pair[0], fixed));
            assert!(calculate_simple_aqi(fixed, pair[1]) >= calculate_simple_aqi(fixed, pair[0]));
        }
    }
}

#[test]
fn health_risk_boundary_in_lower_band() {
    assert_eq!(assess_health_risk(25.0, 50.0), HealthRisk::Low);
    assert_eq!(assess_health_risk(26.0, 50.0), HealthRisk::Moderate);
    assert_eq!(assess_health_risk(50.0, 100.0), HealthRisk::Moderate);
    assert_eq!(assess_health_risk(75.0, 150.0), HealthRisk::High);
    assert_eq!(assess_health_risk(76.0, 150.0), HealthRisk::VeryHigh);
}

#[test]
fn metrics_keys_follow_supplied_readings() {
    assert_eq!(calculate_metrics(None, None), DerivedMetrics::default());

    let weather: WeatherReading =
        serde_json::from_str(r#"{ "temperature_2m": 30, "relative_humidity_2m": 60 }"#).unwrap();
    let metrics = calculate_metrics(Some(&weather), None);

    let json = serde_json::to_value(&metrics).unwrap();
    let keys: BTreeSet<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, BTreeSet::from(["heat_index", "comfort_index", "lake_health_estimate"]));
}

#[test]
fn trend_direction_labels() {
    assert_eq!(calculate_trend_direction(110.0, 100.0).as_str(), "increasing");
    assert_eq!(calculate_trend_direction(100.0, 100.0).as_str(), "stable");
    assert_eq!(calculate_trend_direction(90.0, 100.0).as_str(), "decreasing");
}

#[test]
fn number_formatting() {
    assert_eq!(format_number_with_units(23.456, "temperature"), "23.5°C");
    assert_eq!(format_number_with_units(41.27, "pm"), "41.3 µg/m³");
}

#[test]
fn stakeholder_priorities_and_filtering() {
    assert_eq!(get_stakeholder_priorities("unknown_role"), vec!["temperature", "air_quality"]);

    let metrics = calculate_metrics(
        Some(&WeatherReading::new(34.0, 70.0)),
        Some(&AirQualityReading::new(112.0, 156.0)),
    );
    let data = metrics.to_tagged();

    let researchers = Stakeholder::from_name("Researchers");
    assert_eq!(filter_data_by_stakeholder(&data, researchers), data);

    let water_board = filter_data_by_stakeholder(&data, Stakeholder::from_name("BWSSB (Water Board)"));
    assert_eq!(water_board.len(), 1);
    assert_eq!(water_board[0].key, "lake_health_estimate");

    // Water board with no water metrics sees everything rather than nothing
    let air_only = calculate_metrics(None, Some(&AirQualityReading::new(30.0, 40.0))).to_tagged();
    assert_eq!(filter_data_by_stakeholder(&air_only, Stakeholder::WaterBoard), air_only);
}

#[test]
fn noise_free_series_rises_daily() {
    let end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let mut rng = StdRng::seed_from_u64(2025);
    let series = generate_time_series_data_with(end, 10.0, 30, 0.0, &mut rng).unwrap();

    assert_eq!(series.len(), 31);
    assert!(series.iter().all(|p| p.value >= 0.0));
    assert!(series.windows(2).all(|w| w[1].value > w[0].value));
    assert_eq!(series.last().unwrap().date, end);
}

#[test]
fn station_readings_agree_with_breakpoint_bands() {
    for station in get_air_quality_stations() {
        let band = AqiBand::from_aqi(calculate_pm25_aqi(station.pm25));
        // Every catalogued station is at least "Unhealthy for Sensitive Groups"
        assert!(
            matches!(
                band,
                AqiBand::UnhealthyForSensitiveGroups | AqiBand::Unhealthy | AqiBand::VeryUnhealthy
            ),
            "{}: {:?}",
            station.name,
            band
        );
    }
}

#[test]
fn lake_catalog_analysis() {
    let analyses: Vec<LakeAnalysis> = get_major_lakes().iter().map(analyze_lake).collect();
    assert_eq!(analyses.len(), 6);
    assert!(analyses.iter().all(|a| (0.0..=100.0).contains(&a.water_quality_index)));

    let largest = analyses
        .iter()
        .max_by(|a, b| a.area_km2.total_cmp(&b.area_km2))
        .unwrap();
    assert_eq!(largest.name, "Bellandur Lake");
    assert_eq!(largest.algal_bloom_risk, AlgalBloomRisk::High);
}
