//! Prediction history store
//!
//! Persists each estimation (inputs plus result) keyed by farmer. The store
//! is a write sink for the estimation flow; writes that fail are logged by
//! the caller and never fail the prediction response.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{EstimationInput, EstimationResult, Recommendations, SoilProfile, WeatherSnapshot};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// History service for persisted predictions
#[derive(Clone)]
pub struct HistoryService {
    db: PgPool,
}

/// Database row for a prediction record
#[derive(Debug, sqlx::FromRow)]
struct PredictionRow {
    id: Uuid,
    farmer_id: Uuid,
    crop_type: String,
    area: f64,
    latitude: f64,
    longitude: f64,
    region: String,
    soil: serde_json::Value,
    weather: serde_json::Value,
    yield_per_acre: f64,
    total_yield: f64,
    confidence: f64,
    recommendations: serde_json::Value,
    created_at: DateTime<Utc>,
}

/// A persisted prediction
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub crop_type: String,
    pub area: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
    pub soil: Option<SoilProfile>,
    pub weather: Option<WeatherSnapshot>,
    pub yield_per_acre: f64,
    pub total_yield: f64,
    pub confidence: f64,
    pub recommendations: Option<Recommendations>,
    pub created_at: DateTime<Utc>,
}

impl From<PredictionRow> for PredictionRecord {
    fn from(row: PredictionRow) -> Self {
        PredictionRecord {
            id: row.id,
            farmer_id: row.farmer_id,
            crop_type: row.crop_type,
            area: row.area,
            latitude: row.latitude,
            longitude: row.longitude,
            region: row.region,
            soil: serde_json::from_value(row.soil).ok(),
            weather: serde_json::from_value(row.weather).ok(),
            yield_per_acre: row.yield_per_acre,
            total_yield: row.total_yield,
            confidence: row.confidence,
            recommendations: serde_json::from_value(row.recommendations).ok(),
            created_at: row.created_at,
        }
    }
}

impl HistoryService {
    /// Create a new HistoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a prediction for a farmer
    pub async fn record(
        &self,
        farmer_id: Uuid,
        latitude: f64,
        longitude: f64,
        input: &EstimationInput,
        result: &EstimationResult,
    ) -> AppResult<PredictionRecord> {
        let soil = serde_json::to_value(input.soil)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let weather = serde_json::to_value(input.weather)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let recommendations = serde_json::to_value(&result.recommendations)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let row = sqlx::query_as::<_, PredictionRow>(
            r#"
            INSERT INTO prediction_history (
                farmer_id, crop_type, area, latitude, longitude, region,
                soil, weather, yield_per_acre, total_yield, confidence,
                recommendations
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, farmer_id, crop_type, area, latitude, longitude, region,
                      soil, weather, yield_per_acre, total_yield, confidence,
                      recommendations, created_at
            "#,
        )
        .bind(farmer_id)
        .bind(input.crop.as_str())
        .bind(input.area)
        .bind(latitude)
        .bind(longitude)
        .bind(input.region.as_str())
        .bind(&soil)
        .bind(&weather)
        .bind(result.yield_per_acre)
        .bind(result.total_yield)
        .bind(result.confidence)
        .bind(&recommendations)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// List a farmer's predictions, newest first
    pub async fn list_for_farmer(&self, farmer_id: Uuid) -> AppResult<Vec<PredictionRecord>> {
        let rows = sqlx::query_as::<_, PredictionRow>(
            r#"
            SELECT id, farmer_id, crop_type, area, latitude, longitude, region,
                   soil, weather, yield_per_acre, total_yield, confidence,
                   recommendations, created_at
            FROM prediction_history
            WHERE farmer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(farmer_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
