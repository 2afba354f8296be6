//! Validation utilities for the Crop Yield Advisory Platform
//!
//! Requests are validated here before they reach the estimation engine; the
//! engine itself is total over validated input.

use crate::models::CropType;

// ============================================================================
// Estimation Request Validations
// ============================================================================

/// Validate and parse the crop type submitted by a client
pub fn validate_crop_type(crop: &str) -> Result<CropType, &'static str> {
    if crop.trim().is_empty() {
        return Err("Crop type is required");
    }
    CropType::parse(crop).ok_or("Unsupported crop type")
}

/// Validate cultivated area in acres
pub fn validate_area(area: f64) -> Result<(), &'static str> {
    if !area.is_finite() {
        return Err("Area must be a finite number");
    }
    if area <= 0.0 {
        return Err("Area must be positive");
    }
    Ok(())
}

/// Validate geographic coordinates
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate soil pH when a profile is supplied directly
pub fn validate_ph(ph: f64) -> Result<(), &'static str> {
    if !(0.0..=14.0).contains(&ph) {
        return Err("Soil pH must be between 0 and 14");
    }
    Ok(())
}
