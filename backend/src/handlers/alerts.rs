//! HTTP handlers for weather alert endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    classify_region, generate_alerts, validate_coordinates, Alert, GpsCoordinates,
    WeatherSnapshot,
};

use crate::error::{AppError, AppResult};
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for the alerts endpoint
#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    pub latitude: f64,
    pub longitude: f64,
}

/// Alerts response payload
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub location: String,
    pub coordinates: GpsCoordinates,
    pub current_weather: WeatherSnapshot,
    pub alerts: Vec<Alert>,
    pub timestamp: DateTime<Utc>,
}

/// Evaluate weather alerts for a location
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertsQuery>,
) -> AppResult<Json<AlertsResponse>> {
    validate_coordinates(query.latitude, query.longitude)
        .map_err(|msg| AppError::validation("coordinates", msg))?;

    let service = WeatherService::new(&state.config.weather);
    let (current, forecast) = service
        .resolve_conditions(query.latitude, query.longitude)
        .await?;

    let region = classify_region(query.latitude, query.longitude);
    let location = service
        .location_label(query.latitude, query.longitude, region)
        .await;

    let alerts = generate_alerts(&current, &forecast);

    Ok(Json(AlertsResponse {
        location,
        coordinates: GpsCoordinates::new(query.latitude, query.longitude),
        current_weather: current,
        alerts,
        timestamp: Utc::now(),
    }))
}
