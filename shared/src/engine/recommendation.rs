//! Threshold-based agronomic advisories

use crate::models::{CropType, EstimationInput, Recommendations, RegionCategory};

/// Thresholds driving the advisory rules, collected in one table so tests
/// and tuning work against named values rather than scattered literals.
pub struct AdvisoryThresholds {
    /// Below this rainfall (mm), irrigation frequency should increase
    pub rainfall_low_mm: f64,
    /// Above this rainfall (mm), drainage matters more than irrigation
    pub rainfall_high_mm: f64,
    /// Below this pH the soil is acidic enough to need lime
    pub ph_acidic: f64,
    /// Above this pH the soil is alkaline enough to need sulfur
    pub ph_alkaline: f64,
}

pub const ADVISORY_THRESHOLDS: AdvisoryThresholds = AdvisoryThresholds {
    rainfall_low_mm: 800.0,
    rainfall_high_mm: 1500.0,
    ph_acidic: 6.0,
    ph_alkaline: 7.5,
};

/// The three irrigation templates. Exposed for tests: the irrigation field
/// of every result equals exactly one of these.
pub const IRRIGATION_INCREASE: &str =
    "Rainfall is low. Increase irrigation frequency; drip irrigation is recommended to conserve water.";
pub const IRRIGATION_DRAINAGE: &str =
    "Rainfall is high. Ensure field drainage and reduce supplemental irrigation.";
pub const IRRIGATION_MAINTAIN: &str = "Maintain the regular irrigation schedule.";

const FERTILIZATION_ACIDIC: &str =
    "Soil is acidic. Apply lime and a balanced NPK fertilizer with extra phosphorus.";
const FERTILIZATION_ALKALINE: &str =
    "Soil is alkaline. Apply sulfur and prefer ammonium-based nitrogen fertilizer.";
const FERTILIZATION_STANDARD: &str =
    "Apply the standard NPK dose recommended for this crop and region.";

const PEST_BASE: &str =
    "Scout the field weekly and apply integrated pest management before resorting to chemical control.";
const PEST_COASTAL_FUNGAL: &str =
    " Coastal humidity favors fungal disease; monitor closely and use a preventive fungicide if leaf spots appear.";

const HARVEST_RICE: &str =
    "Harvest rice when 80% of grains in the panicle have turned golden yellow, typically 30-35 days after flowering.";
const HARVEST_WHEAT: &str =
    "Harvest wheat at physiological maturity when grains are hard and moisture is near 14%.";
const HARVEST_MAIZE: &str =
    "Harvest maize when husks are dry and kernels show a black layer at the base.";
const HARVEST_GENERIC: &str =
    "Consult your local agricultural extension office for crop-specific harvest timing.";

/// Derive the four categorical advisories.
///
/// Pure, total, first-match-wins within each category; every field is
/// non-empty for every input. The yield estimate is accepted for parity with
/// the estimator call sites but no current rule branches on it.
pub fn generate_recommendations(input: &EstimationInput, _yield_per_acre: f64) -> Recommendations {
    let t = &ADVISORY_THRESHOLDS;

    let irrigation = if input.weather.rainfall_mm < t.rainfall_low_mm {
        IRRIGATION_INCREASE
    } else if input.weather.rainfall_mm > t.rainfall_high_mm {
        IRRIGATION_DRAINAGE
    } else {
        IRRIGATION_MAINTAIN
    };

    let fertilization = if input.soil.ph < t.ph_acidic {
        FERTILIZATION_ACIDIC
    } else if input.soil.ph > t.ph_alkaline {
        FERTILIZATION_ALKALINE
    } else {
        FERTILIZATION_STANDARD
    };

    let mut pest_control = PEST_BASE.to_string();
    if input.region == RegionCategory::Coastal {
        pest_control.push_str(PEST_COASTAL_FUNGAL);
    }

    let harvest_timing = match input.crop {
        CropType::Rice => HARVEST_RICE,
        CropType::Wheat => HARVEST_WHEAT,
        CropType::Maize => HARVEST_MAIZE,
        _ => HARVEST_GENERIC,
    };

    Recommendations {
        irrigation: irrigation.to_string(),
        fertilization: fertilization.to_string(),
        pest_control,
        harvest_timing: harvest_timing.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SoilProfile, SoilType, WeatherSnapshot};

    fn input(
        crop: CropType,
        region: RegionCategory,
        ph: f64,
        rainfall: f64,
    ) -> EstimationInput {
        EstimationInput {
            crop,
            area: 2.0,
            region,
            soil: SoilProfile {
                soil_type: SoilType::Alluvial,
                ph,
                nitrogen: 0.1,
                phosphorus: 0.05,
                potassium: 0.07,
                organic_matter: 1.5,
            },
            weather: WeatherSnapshot {
                temperature_c: 28.0,
                rainfall_mm: rainfall,
                humidity_pct: 65.0,
            },
        }
    }

    #[test]
    fn test_irrigation_is_one_of_three_templates() {
        for rainfall in [0.0, 500.0, 800.0, 1000.0, 1500.0, 2500.0] {
            let r = generate_recommendations(
                &input(CropType::Rice, RegionCategory::Coastal, 6.5, rainfall),
                1000.0,
            );
            assert!(
                [IRRIGATION_INCREASE, IRRIGATION_DRAINAGE, IRRIGATION_MAINTAIN]
                    .contains(&r.irrigation.as_str()),
                "unexpected irrigation advisory: {}",
                r.irrigation
            );
            assert!(!r.irrigation.is_empty());
        }
    }

    #[test]
    fn test_irrigation_thresholds() {
        let low = generate_recommendations(
            &input(CropType::Rice, RegionCategory::Coastal, 6.5, 500.0),
            1000.0,
        );
        assert_eq!(low.irrigation, IRRIGATION_INCREASE);

        let high = generate_recommendations(
            &input(CropType::Rice, RegionCategory::Coastal, 6.5, 1800.0),
            1000.0,
        );
        assert_eq!(high.irrigation, IRRIGATION_DRAINAGE);

        // Boundary values are neither low nor high
        let at_800 = generate_recommendations(
            &input(CropType::Rice, RegionCategory::Coastal, 6.5, 800.0),
            1000.0,
        );
        assert_eq!(at_800.irrigation, IRRIGATION_MAINTAIN);
    }

    #[test]
    fn test_fertilization_by_ph() {
        let acidic = generate_recommendations(
            &input(CropType::Rice, RegionCategory::Western, 5.5, 1000.0),
            1000.0,
        );
        assert!(acidic.fertilization.contains("lime"));

        let alkaline = generate_recommendations(
            &input(CropType::Rice, RegionCategory::Southern, 8.0, 1000.0),
            1000.0,
        );
        assert!(alkaline.fertilization.contains("sulfur"));

        let neutral = generate_recommendations(
            &input(CropType::Rice, RegionCategory::Coastal, 6.8, 1000.0),
            1000.0,
        );
        assert!(neutral.fertilization.contains("standard NPK"));
    }

    #[test]
    fn test_coastal_pest_caveat() {
        let coastal = generate_recommendations(
            &input(CropType::Rice, RegionCategory::Coastal, 6.5, 1000.0),
            1000.0,
        );
        assert!(coastal.pest_control.contains("fungal"));

        let western = generate_recommendations(
            &input(CropType::Rice, RegionCategory::Western, 6.5, 1000.0),
            1000.0,
        );
        assert!(!western.pest_control.contains("fungal"));
        assert!(western.pest_control.starts_with(PEST_BASE));
    }

    #[test]
    fn test_harvest_timing_per_crop() {
        let rice = generate_recommendations(
            &input(CropType::Rice, RegionCategory::Coastal, 6.5, 1000.0),
            1000.0,
        );
        assert!(rice.harvest_timing.contains("rice"));

        let turmeric = generate_recommendations(
            &input(CropType::Turmeric, RegionCategory::Coastal, 6.5, 1000.0),
            1000.0,
        );
        assert_eq!(turmeric.harvest_timing, HARVEST_GENERIC);
    }
}
