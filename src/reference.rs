//! Bengaluru reference data
//!
//! Fixed lookup tables consumed by the dashboard views: city center,
//! districts, major lakes and air-quality monitoring stations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Latitude/longitude pair (decimal degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Dominant land use of a district
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistrictType {
    Residential,
    Commercial,
    ItHub,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type")]
    pub district_type: DistrictType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lake {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub area_hectares: f64,
    pub pollution_sources: BTreeSet<String>,
    /// 0-100
    pub health_score: f64,
}

/// Air-quality monitoring station with its latest reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityStation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub aqi: u16,
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
    pub station_type: String,
}

/// City center (Vidhana Soudha area)
pub fn get_bengaluru_coordinates() -> Coordinates {
    Coordinates { lat: 12.9716, lon: 77.5946 }
}

pub fn get_bengaluru_districts() -> Vec<District> {
    use DistrictType::*;

    let table: [(&str, f64, f64, DistrictType); 10] = [
        ("Koramangala", 12.9352, 77.6245, Commercial),
        ("Indiranagar", 12.9784, 77.6408, Commercial),
        ("MG Road", 12.9756, 77.6050, Commercial),
        ("Jayanagar", 12.9250, 77.5938, Residential),
        ("Malleshwaram", 13.0035, 77.5709, Residential),
        ("Hebbal", 13.0358, 77.5970, Residential),
        ("Yelahanka", 13.1007, 77.5963, Residential),
        ("Whitefield", 12.9698, 77.7500, ItHub),
        ("Electronic City", 12.8398, 77.6595, ItHub),
        ("Marathahalli", 12.9591, 77.6974, ItHub),
    ];

    table
        .into_iter()
        .map(|(name, lat, lon, district_type)| District {
            name: name.to_string(),
            lat,
            lon,
            district_type,
        })
        .collect()
}

pub fn get_major_lakes() -> Vec<Lake> {
    let table: [(&str, f64, f64, f64, &[&str], f64); 6] = [
        ("Bellandur Lake", 12.9361, 77.6747, 361.0, &["sewage", "industrial_effluent", "solid_waste", "construction_debris"], 32.0),
        ("Varthur Lake", 12.9467, 77.7411, 220.0, &["sewage", "industrial_effluent", "solid_waste"], 41.0),
        ("Agara Lake", 12.9361, 77.6388, 80.0, &["sewage", "encroachment"], 47.0),
        ("Hebbal Lake", 13.0358, 77.5970, 75.0, &["sewage", "urban_runoff"], 59.0),
        ("Ulsoor Lake", 12.9813, 77.6081, 50.0, &["urban_runoff"], 68.0),
        ("Sankey Tank", 12.9716, 77.5714, 15.0, &["urban_runoff"], 75.0),
    ];

    table
        .into_iter()
        .map(|(name, lat, lon, area_hectares, sources, health_score)| Lake {
            name: name.to_string(),
            lat,
            lon,
            area_hectares,
            pollution_sources: sources.iter().map(|s| s.to_string()).collect(),
            health_score,
        })
        .collect()
}

pub fn get_air_quality_stations() -> Vec<AirQualityStation> {
    let table: [(&str, f64, f64, u16, f64, f64, f64, &str); 6] = [
        ("City Railway Station", 12.9716, 77.5946, 156, 68.0, 98.0, 45.0, "Urban Traffic"),
        ("Hebbal", 13.0358, 77.5970, 132, 52.0, 76.0, 38.0, "Residential"),
        ("BTM Layout", 12.9165, 77.6101, 178, 89.0, 125.0, 52.0, "Commercial"),
        ("Silk Board", 12.9173, 77.6226, 203, 112.0, 156.0, 67.0, "Traffic Junction"),
        ("Whitefield", 12.9698, 77.7500, 145, 58.0, 82.0, 41.0, "IT Hub"),
        ("Electronic City", 12.8398, 77.6595, 189, 94.0, 134.0, 58.0, "Industrial"),
    ];

    table
        .into_iter()
        .map(|(name, lat, lon, aqi, pm25, pm10, no2, station_type)| AirQualityStation {
            name: name.to_string(),
            lat,
            lon,
            aqi,
            pm25,
            pm10,
            no2,
            station_type: station_type.to_string(),
        })
        .collect()
}
