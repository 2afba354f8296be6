//! Rule-based yield estimation
//!
//! This is the fallback path used whenever the external prediction process
//! is unavailable or fails. It is deterministic: a product of a crop base
//! yield, a region factor, and five adjustment terms each linear in the
//! deviation of one input from its reference point.

use crate::models::{CropType, EstimationInput, RegionCategory, YieldEstimate};

/// Confidence reported by the rule-based path. An external model supplies its
/// own confidence instead; the calling service clamps either to [0, 100].
pub const FALLBACK_CONFIDENCE: f64 = 85.0;

/// Base yield in kg/acre for crops without a catalog entry
const DEFAULT_BASE_YIELD: f64 = 1500.0;

/// Base yield in kg/acre per crop. Crops absent from this table (groundnut,
/// jute) fall through to [`DEFAULT_BASE_YIELD`].
pub fn base_yield(crop: CropType) -> f64 {
    match crop {
        CropType::Rice => 2500.0,
        CropType::Wheat => 2000.0,
        CropType::Maize => 2800.0,
        CropType::Sugarcane => 30000.0,
        CropType::Cotton => 1200.0,
        CropType::Pulses => 800.0,
        CropType::Chillies => 1500.0,
        CropType::Turmeric => 2200.0,
        _ => DEFAULT_BASE_YIELD,
    }
}

/// Regional yield multiplier
fn region_factor(region: RegionCategory) -> f64 {
    match region {
        RegionCategory::Coastal => 1.2,
        RegionCategory::Western => 0.9,
        RegionCategory::Northern => 1.1,
        RegionCategory::Southern => 1.0,
        RegionCategory::Unknown => 1.0,
    }
}

/// Compute a per-acre yield estimate from crop, region, soil, and weather.
///
/// Pure and total: no input combination errors. Extreme inputs can drive the
/// raw product negative; the result is clamped to zero, a deliberate
/// correction over the source system.
pub fn estimate_yield(input: &EstimationInput) -> YieldEstimate {
    let base = base_yield(input.crop);
    let region = region_factor(input.region);

    let rainfall_term = 1.0 + (input.weather.rainfall_mm - 1000.0) / 5000.0;
    let temperature_term = 1.0 + (input.weather.temperature_c - 25.0) / 100.0;
    let humidity_term = 1.0 + (input.weather.humidity_pct - 60.0) / 500.0;
    let ph_term = 0.8 + (input.soil.ph - 5.5) / 10.0;
    let nitrogen_term = 0.9 + input.soil.nitrogen * 5.0;

    let raw = base
        * region
        * rainfall_term
        * temperature_term
        * humidity_term
        * ph_term
        * nitrogen_term;

    YieldEstimate {
        yield_per_acre: raw.round().max(0.0),
        confidence: FALLBACK_CONFIDENCE,
    }
}
