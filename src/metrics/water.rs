//! Lake water-quality analysis
//!
//! Scores a lake from its catalogued pollution sources and surface area.

use serde::{Deserialize, Serialize};

use crate::reference::Lake;
use crate::utils::normalization::clamp_score;

/// Water-quality score of a lake with no known pollution sources
pub const WATER_QUALITY_BASE_SCORE: f64 = 70.0;

/// Points lost per pollution source
pub const WATER_QUALITY_SOURCE_PENALTY: f64 = 10.0;

const HECTARES_PER_KM2: f64 = 100.0;

/// Algal-bloom susceptibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlgalBloomRisk {
    Low,
    Medium,
    High,
}

impl AlgalBloomRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgalBloomRisk::Low => "Low",
            AlgalBloomRisk::Medium => "Medium",
            AlgalBloomRisk::High => "High",
        }
    }
}

/// Water-quality index: 70 - 10 per pollution source, clamped to [0, 100]
pub fn water_quality_index(pollution_source_count: usize) -> f64 {
    clamp_score(WATER_QUALITY_BASE_SCORE - pollution_source_count as f64 * WATER_QUALITY_SOURCE_PENALTY)
}

/// Larger lakes are more prone to blooms: >200 ha High, >50 ha Medium
pub fn assess_algal_bloom_risk(area_hectares: f64) -> AlgalBloomRisk {
    if area_hectares > 200.0 {
        AlgalBloomRisk::High
    } else if area_hectares > 50.0 {
        AlgalBloomRisk::Medium
    } else {
        AlgalBloomRisk::Low
    }
}

/// Per-lake analysis for the water monitoring view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LakeAnalysis {
    pub name: String,
    pub area_km2: f64,
    pub water_quality_index: f64,
    pub algal_bloom_risk: AlgalBloomRisk,
}

/// Analyze one lake
pub fn analyze_lake(lake: &Lake) -> LakeAnalysis {
    LakeAnalysis {
        name: lake.name.clone(),
        area_km2: lake.area_hectares / HECTARES_PER_KM2,
        water_quality_index: water_quality_index(lake.pollution_sources.len()),
        algal_bloom_risk: assess_algal_bloom_risk(lake.area_hectares),
    }
}
