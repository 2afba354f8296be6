//! Soil profile models

use serde::{Deserialize, Serialize};

/// Broad soil classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Laterite,
    Unknown,
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SoilType::Alluvial => "alluvial",
            SoilType::Black => "black",
            SoilType::Red => "red",
            SoilType::Laterite => "laterite",
            SoilType::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Soil profile for an estimation call. Either supplied directly or resolved
/// from the region lookup table; immutable once resolved.
///
/// Nutrient values (nitrogen, phosphorus, potassium) are fractions, e.g. 0.12.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoilProfile {
    pub soil_type: SoilType,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub organic_matter: f64,
}
