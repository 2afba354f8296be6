//! Reverse geocoding client
//!
//! Resolves coordinates to a human-readable place label for responses.
//! Failures are soft: callers fall back to a region-derived or default label.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Client for the OpenWeatherMap reverse geocoding API
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GeoPlace {
    name: String,
    state: Option<String>,
    country: Option<String>,
}

impl GeocodingClient {
    /// Create a new GeocodingClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Resolve coordinates to a place label like "Cuttack, Odisha"
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> AppResult<String> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&limit=1&appid={}",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::GeocodingError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::GeocodingError(format!(
                "API returned {}",
                response.status()
            )));
        }

        let places: Vec<GeoPlace> = response
            .json()
            .await
            .map_err(|e| AppError::GeocodingError(format!("Failed to parse response: {}", e)))?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| AppError::GeocodingError("No place found".to_string()))?;

        let region = place.state.or(place.country);
        Ok(match region {
            Some(region) => format!("{}, {}", place.name, region),
            None => place.name,
        })
    }
}
