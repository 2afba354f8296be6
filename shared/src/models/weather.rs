//! Weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A weather snapshot at a point in time.
///
/// `rainfall_mm` carries the rainfall figure the source system fed to both
/// the alert thresholds (rate-style) and the yield formula
/// (monthly-equivalent). The conflation is preserved deliberately.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub humidity_pct: f64,
}

/// One day of the short-term forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub humidity_pct: f64,
}

/// Number of days in a forecast. A fresh fetch is required for updated data.
pub const FORECAST_DAYS: usize = 5;
