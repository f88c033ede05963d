//! UV index risk levels

use serde::{Deserialize, Serialize};

/// Sun-exposure risk for a daily maximum UV index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UvRisk {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Extreme,
}

impl UvRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            UvRisk::Low => "Low",
            UvRisk::Moderate => "Moderate",
            UvRisk::High => "High",
            UvRisk::VeryHigh => "Very High",
            UvRisk::Extreme => "Extreme",
        }
    }
}

/// Classify a UV index: ≤2 Low, ≤5 Moderate, ≤7 High, ≤10 Very High, else Extreme
pub fn classify_uv_risk(uv_index: f64) -> UvRisk {
    match uv_index {
        uv if uv <= 2.0 => UvRisk::Low,
        uv if uv <= 5.0 => UvRisk::Moderate,
        uv if uv <= 7.0 => UvRisk::High,
        uv if uv <= 10.0 => UvRisk::VeryHigh,
        _ => UvRisk::Extreme,
    }
}
