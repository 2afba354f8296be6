//! Weather resolution service
//!
//! Resolves current conditions, the short-term forecast, and a display label
//! for a coordinate pair. Live data comes from the weather and geocoding
//! APIs; every external failure degrades to built-in defaults unless
//! fallback is disabled by configuration.

use chrono::{Duration, Utc};
use shared::{
    ForecastDay, RegionCategory, WeatherSnapshot, DEFAULT_LOCATION_LABEL, FORECAST_DAYS,
};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use crate::external::{GeocodingClient, WeatherClient};

/// Default conditions used when live weather is unavailable
const DEFAULT_WEATHER: WeatherSnapshot = WeatherSnapshot {
    temperature_c: 28.0,
    rainfall_mm: 1000.0,
    humidity_pct: 70.0,
};

/// Weather service owning the optional API clients
#[derive(Clone)]
pub struct WeatherService {
    client: Option<WeatherClient>,
    geocoding: Option<GeocodingClient>,
    allow_fallback: bool,
}

impl WeatherService {
    /// Create a service from configuration. An empty API key disables the
    /// live clients entirely.
    pub fn new(config: &WeatherConfig) -> Self {
        let (client, geocoding) = if config.api_key.trim().is_empty() {
            (None, None)
        } else {
            (
                Some(WeatherClient::new(
                    config.api_key.clone(),
                    config.api_endpoint.clone(),
                )),
                Some(GeocodingClient::new(
                    config.api_key.clone(),
                    config.geocoding_endpoint.clone(),
                )),
            )
        };
        Self {
            client,
            geocoding,
            allow_fallback: config.allow_fallback,
        }
    }

    /// Resolve current conditions and the forecast for a coordinate pair.
    ///
    /// On any live-fetch failure: default constants when fallback is
    /// allowed, otherwise a single "environmental data unavailable" error.
    pub async fn resolve_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<(WeatherSnapshot, Vec<ForecastDay>)> {
        if let Some(client) = &self.client {
            let current = client.get_current_weather(latitude, longitude).await;
            let forecast = client.get_forecast(latitude, longitude).await;
            match (current, forecast) {
                (Ok(current), Ok(forecast)) => return Ok((current, forecast)),
                (current, forecast) => {
                    let e = current.err().or(forecast.err()).unwrap_or(
                        AppError::WeatherServiceUnavailable,
                    );
                    tracing::warn!("Live weather fetch failed: {}", e);
                }
            }
        }

        if self.allow_fallback {
            tracing::info!("Using default weather conditions");
            Ok((DEFAULT_WEATHER, default_forecast()))
        } else {
            Err(AppError::EnvironmentalDataUnavailable)
        }
    }

    /// Resolve a display label for the coordinates. Geocoding failures fall
    /// back to a region-derived label; never errors.
    pub async fn location_label(
        &self,
        latitude: f64,
        longitude: f64,
        region: RegionCategory,
    ) -> String {
        if let Some(geocoding) = &self.geocoding {
            match geocoding.reverse(latitude, longitude).await {
                Ok(label) => return label,
                Err(e) => tracing::warn!("Reverse geocoding failed: {}", e),
            }
        }
        region_label(region)
    }
}

/// Region-derived fallback label
fn region_label(region: RegionCategory) -> String {
    match region {
        RegionCategory::Coastal => "Coastal Odisha".to_string(),
        RegionCategory::Western => "Western Odisha".to_string(),
        RegionCategory::Northern => "Northern Odisha".to_string(),
        RegionCategory::Southern => "Southern Odisha".to_string(),
        RegionCategory::Unknown => DEFAULT_LOCATION_LABEL.to_string(),
    }
}

/// Mild five-day default forecast starting today
fn default_forecast() -> Vec<ForecastDay> {
    let today = Utc::now().date_naive();
    (0..FORECAST_DAYS as i64)
        .map(|offset| ForecastDay {
            date: today + Duration::days(offset),
            temperature_c: DEFAULT_WEATHER.temperature_c,
            rainfall_mm: 4.0,
            humidity_pct: DEFAULT_WEATHER.humidity_pct,
        })
        .collect()
}
