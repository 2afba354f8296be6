//! Yield estimation orchestration
//!
//! Resolves region, soil, and weather for a request, runs the external
//! prediction model with rule-based fallback, and derives advisories and
//! alerts from the same resolved inputs.

use std::sync::Arc;

use serde::Deserialize;
use shared::{
    classify_region, default_coordinates, generate_alerts, generate_recommendations,
    soil_profile_for_region, validate_area, validate_coordinates, validate_crop_type,
    validate_ph, EstimationInput, EstimationResult, GpsCoordinates, RegionCategory, SoilProfile,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::ModelRunner;
use crate::services::{HistoryService, WeatherService};

/// Input for a prediction request
#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    pub crop_type: String,
    /// Cultivated area in acres
    pub area: f64,
    /// Defaults to Bhubaneswar when omitted
    pub location: Option<GpsCoordinates>,
    /// Soil profile measured by the farmer; resolved from the region table
    /// when omitted
    pub soil: Option<SoilProfile>,
    /// Predictions are persisted to history when present
    pub farmer_id: Option<Uuid>,
}

/// A completed estimation with its resolved context
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub coordinates: GpsCoordinates,
    pub location: String,
    pub region: RegionCategory,
    pub input: EstimationInput,
    pub result: EstimationResult,
}

/// Estimation service wiring the engine to its collaborators
#[derive(Clone)]
pub struct EstimationService {
    weather: WeatherService,
    model: Arc<ModelRunner>,
    history: HistoryService,
}

impl EstimationService {
    /// Create a new EstimationService instance
    pub fn new(weather: WeatherService, model: Arc<ModelRunner>, history: HistoryService) -> Self {
        Self {
            weather,
            model,
            history,
        }
    }

    /// Run the full estimation flow for a request
    pub async fn predict(&self, request: PredictionRequest) -> AppResult<PredictionOutcome> {
        let crop = validate_crop_type(&request.crop_type)
            .map_err(|msg| AppError::validation("crop_type", msg))?;
        validate_area(request.area).map_err(|msg| AppError::validation("area", msg))?;

        let coordinates = request.location.unwrap_or_else(default_coordinates);
        validate_coordinates(coordinates.latitude, coordinates.longitude)
            .map_err(|msg| AppError::validation("location", msg))?;
        if let Some(soil) = &request.soil {
            validate_ph(soil.ph).map_err(|msg| AppError::validation("soil.ph", msg))?;
        }

        let region = classify_region(coordinates.latitude, coordinates.longitude);
        let soil = request
            .soil
            .unwrap_or_else(|| soil_profile_for_region(region));

        let (current, forecast) = self
            .weather
            .resolve_conditions(coordinates.latitude, coordinates.longitude)
            .await?;

        let input = EstimationInput {
            crop,
            area: request.area,
            region,
            soil,
            weather: current,
        };

        // External model when configured, rule-based fallback otherwise; the
        // model's confidence is clamped here, not in the engine
        let estimate = self.model.estimate(&input).await;
        let yield_per_acre = estimate.yield_per_acre.max(0.0);
        let confidence = estimate.confidence.clamp(0.0, 100.0);

        let recommendations = generate_recommendations(&input, yield_per_acre);
        let alerts = generate_alerts(&current, &forecast);

        let result = EstimationResult {
            yield_per_acre,
            total_yield: yield_per_acre * input.area,
            confidence,
            recommendations,
            alerts,
        };

        let location = self
            .weather
            .location_label(coordinates.latitude, coordinates.longitude, region)
            .await;

        // History is a write sink: a failed write never fails the response
        if let Some(farmer_id) = request.farmer_id {
            if let Err(e) = self
                .history
                .record(
                    farmer_id,
                    coordinates.latitude,
                    coordinates.longitude,
                    &input,
                    &result,
                )
                .await
            {
                tracing::warn!("Failed to record prediction history: {}", e);
            }
        }

        Ok(PredictionOutcome {
            coordinates,
            location,
            region,
            input,
            result,
        })
    }
}
