//! Region classification from geographic coordinates

use crate::models::RegionCategory;

/// An axis-aligned bounding box paired with its region category
struct RegionBox {
    region: RegionCategory,
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

/// Bounding boxes for Odisha-style regioning, checked in order.
///
/// Boxes overlap (coastal and northern share longitude 84-87, southern
/// overlaps coastal below latitude 20). The first matching box wins; this
/// order is part of the contract and must not be reordered.
const REGION_BOXES: &[RegionBox] = &[
    RegionBox {
        region: RegionCategory::Coastal,
        lat_min: 19.0,
        lat_max: 20.5,
        lon_min: 84.0,
        lon_max: 87.0,
    },
    RegionBox {
        region: RegionCategory::Western,
        lat_min: 20.0,
        lat_max: 22.0,
        lon_min: 82.0,
        lon_max: 84.0,
    },
    RegionBox {
        region: RegionCategory::Northern,
        lat_min: 21.0,
        lat_max: 22.5,
        lon_min: 84.0,
        lon_max: 87.0,
    },
    RegionBox {
        region: RegionCategory::Southern,
        lat_min: 18.5,
        lat_max: 20.0,
        lon_min: 82.0,
        lon_max: 85.0,
    },
];

/// Classify coordinates into a region category.
///
/// Pure and total: coordinates outside every box map to
/// [`RegionCategory::Unknown`].
pub fn classify_region(latitude: f64, longitude: f64) -> RegionCategory {
    REGION_BOXES
        .iter()
        .find(|b| {
            latitude >= b.lat_min
                && latitude <= b.lat_max
                && longitude >= b.lon_min
                && longitude <= b.lon_max
        })
        .map(|b| b.region)
        .unwrap_or(RegionCategory::Unknown)
}
