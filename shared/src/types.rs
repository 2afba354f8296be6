//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Default location used when a request omits coordinates
pub const DEFAULT_LATITUDE: f64 = 20.2961;
pub const DEFAULT_LONGITUDE: f64 = 85.8245;
pub const DEFAULT_LOCATION_LABEL: &str = "Bhubaneswar, Odisha";

/// The default coordinates as a value
pub fn default_coordinates() -> GpsCoordinates {
    GpsCoordinates::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
}
