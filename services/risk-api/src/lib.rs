//! Risk dataset API service.
//!
//! Loads the flood and thatch GeoJSON datasets from disk at startup and
//! serves them to the map frontend, alongside a point risk-lookup endpoint
//! and the default map configuration.

pub mod handlers;
pub mod lookup;
pub mod state;

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/map-data/:risk_type", get(handlers::map_data_handler))
        .route("/api/risk", post(handlers::risk_handler))
        .route("/api/config", get(handlers::config_handler))
        .route("/health", get(handlers::health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
