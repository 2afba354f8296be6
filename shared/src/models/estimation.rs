//! Estimation input and result models

use serde::{Deserialize, Serialize};

use super::{Alert, CropType, RegionCategory, SoilProfile, WeatherSnapshot};

/// The sole argument to the yield estimator and the recommendation and alert
/// generators. Built fresh per request; no hidden global state is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationInput {
    pub crop: CropType,
    /// Cultivated area in acres, validated > 0
    pub area: f64,
    pub region: RegionCategory,
    pub soil: SoilProfile,
    pub weather: WeatherSnapshot,
}

/// A per-acre yield estimate with its confidence score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct YieldEstimate {
    pub yield_per_acre: f64,
    /// Confidence in [0, 100]. The rule-based fallback path always reports
    /// 85; an external model supplies its own value.
    pub confidence: f64,
}

/// Categorical advisories derived from threshold rules
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub irrigation: String,
    pub fertilization: String,
    pub pest_control: String,
    pub harvest_timing: String,
}

/// Composite result returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationResult {
    pub yield_per_acre: f64,
    pub total_yield: f64,
    pub confidence: f64,
    pub recommendations: Recommendations,
    pub alerts: Vec<Alert>,
}
