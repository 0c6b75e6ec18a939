//! HTTP request handlers.

use std::sync::Arc;

use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use geo::Point;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use risk_common::{DatasetId, RiskError};

use crate::lookup::risk_at_point;
use crate::state::AppState;

fn error_response(error: &RiskError) -> Response {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

/// GET /api/map-data/:risk_type returns the dataset's full GeoJSON document.
pub async fn map_data_handler(
    Path(risk_type): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match risk_type.parse::<DatasetId>() {
        Ok(id) => Json(state.dataset(id).document.clone()).into_response(),
        Err(error) => {
            warn!(risk_type = %risk_type, "Rejected map-data request");
            error_response(&error)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RiskQuery {
    /// [longitude, latitude]
    pub location: [f64; 2],
    #[serde(rename = "riskType")]
    pub risk_type: String,
}

#[derive(Debug, Serialize)]
pub struct RiskResponse {
    pub risk: String,
    pub location: [f64; 2],
    #[serde(rename = "riskType")]
    pub risk_type: String,
}

/// POST /api/risk classifies risk at a single location.
pub async fn risk_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(query): Json<RiskQuery>,
) -> Response {
    let id = match query.risk_type.parse::<DatasetId>() {
        Ok(id) => id,
        Err(error) => {
            warn!(risk_type = %query.risk_type, "Rejected risk request");
            return error_response(&error);
        }
    };

    let point = Point::new(query.location[0], query.location[1]);
    let risk = risk_at_point(id, &state.dataset(id).lookup, point);
    Json(RiskResponse {
        risk,
        location: query.location,
        risk_type: query.risk_type,
    })
    .into_response()
}

/// GET /api/config returns the default map view settings.
pub async fn config_handler() -> Json<serde_json::Value> {
    Json(json!({
        "defaultLocation": [-29.151591032730604, 26.188980937523347],
        "defaultZoom": 5
    }))
}

/// GET /health
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}
