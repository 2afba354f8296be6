//! Weather-driven agricultural alerts

use serde::{Deserialize, Serialize};

/// Condition that triggered an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    HighTemperature,
    LowTemperature,
    HeavyRain,
    DroughtRisk,
    HighHumidity,
    LowHumidity,
    ExtremeHeatForecast,
    FrostForecast,
    HeavyRainForecast,
}

/// Alert severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Info,
    Warning,
}

/// A weather-driven notice, distinct from the crop advisories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub message: String,
    pub recommendation: String,
}
