//! HTTP handlers for yield prediction endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{base_yield, CropType, Recommendations, SoilProfile, WeatherSnapshot, ALL_CROPS};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::history::PredictionRecord;
use crate::services::{EstimationService, HistoryService, WeatherService};
use crate::services::estimation::PredictionRequest;
use crate::AppState;

/// Prediction response payload
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    /// Total expected yield in kg for the whole area
    #[serde(rename = "yield")]
    pub total_yield: i64,
    /// Expected yield in kg per acre
    pub per_acre: i64,
    /// Confidence score in [0, 100]
    pub confidence: i64,
    pub location: String,
    pub weather: WeatherSnapshot,
    pub soil: SoilProfile,
    pub recommendations: Recommendations,
}

/// Run a yield prediction
pub async fn predict_yield(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> AppResult<Json<PredictionResponse>> {
    let service = EstimationService::new(
        WeatherService::new(&state.config.weather),
        state.model.clone(),
        HistoryService::new(state.db.clone()),
    );
    let outcome = service.predict(request).await?;

    Ok(Json(PredictionResponse {
        total_yield: outcome.result.total_yield.round() as i64,
        per_acre: outcome.result.yield_per_acre.round() as i64,
        confidence: outcome.result.confidence.round() as i64,
        location: outcome.location,
        weather: outcome.input.weather,
        soil: outcome.input.soil,
        recommendations: outcome.result.recommendations,
    }))
}

/// Query parameters for prediction history
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub farmer_id: Uuid,
}

/// List a farmer's persisted predictions, newest first
pub async fn get_prediction_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<PredictionRecord>>> {
    let service = HistoryService::new(state.db.clone());
    let records = service.list_for_farmer(query.farmer_id).await?;
    Ok(Json(records))
}

/// One crop catalog entry
#[derive(Debug, Serialize)]
pub struct CropCatalogEntry {
    pub crop: CropType,
    /// Base yield in kg/acre used by the rule-based estimator
    pub base_yield: f64,
    pub varieties: Vec<String>,
}

/// List the crop catalog with base yields and varieties
pub async fn list_crops() -> Json<Vec<CropCatalogEntry>> {
    let catalog = ALL_CROPS
        .iter()
        .map(|crop| CropCatalogEntry {
            crop: *crop,
            base_yield: base_yield(*crop),
            varieties: crop.varieties().iter().map(|v| v.to_string()).collect(),
        })
        .collect();
    Json(catalog)
}
