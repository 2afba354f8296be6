//! Default soil profiles by region

use crate::models::{RegionCategory, SoilProfile, SoilType};

/// Default row returned for [`RegionCategory::Unknown`]. The `Unknown` soil
/// type is an explicit sentinel; the nutrient values are mid-range.
const DEFAULT_PROFILE: SoilProfile = SoilProfile {
    soil_type: SoilType::Unknown,
    ph: 6.5,
    nitrogen: 0.10,
    phosphorus: 0.05,
    potassium: 0.07,
    organic_matter: 1.5,
};

/// Resolve the default soil profile for a region.
///
/// Pure lookup, returned by value; never fails. Callers that received an
/// explicit soil profile from the client skip this entirely.
pub fn soil_profile_for_region(region: RegionCategory) -> SoilProfile {
    match region {
        RegionCategory::Coastal => SoilProfile {
            soil_type: SoilType::Alluvial,
            ph: 6.5,
            nitrogen: 0.12,
            phosphorus: 0.06,
            potassium: 0.08,
            organic_matter: 1.8,
        },
        RegionCategory::Western => SoilProfile {
            soil_type: SoilType::Red,
            ph: 6.0,
            nitrogen: 0.08,
            phosphorus: 0.04,
            potassium: 0.06,
            organic_matter: 1.2,
        },
        RegionCategory::Northern => SoilProfile {
            soil_type: SoilType::Laterite,
            ph: 5.8,
            nitrogen: 0.09,
            phosphorus: 0.05,
            potassium: 0.07,
            organic_matter: 1.5,
        },
        RegionCategory::Southern => SoilProfile {
            soil_type: SoilType::Black,
            ph: 7.2,
            nitrogen: 0.10,
            phosphorus: 0.07,
            potassium: 0.09,
            organic_matter: 1.6,
        },
        RegionCategory::Unknown => DEFAULT_PROFILE,
    }
}
