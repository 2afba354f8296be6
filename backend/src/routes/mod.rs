//! Route definitions for the Crop Yield Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Yield predictions
        .nest("/predictions", prediction_routes())
        // Weather alerts
        .route("/alerts", get(handlers::get_alerts))
        // Crop catalog
        .route("/crops", get(handlers::list_crops))
}

/// Prediction routes
fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::predict_yield))
        .route("/history", get(handlers::get_prediction_history))
}
