//! HTTP routes exposed to clients under `/api`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::{ProxyError, Result};
use crate::models::ParameterSet;
use crate::services::StationService;

pub fn router(service: Arc<StationService>) -> Router {
    Router::new()
        .route("/api/stations", get(stations))
        .route("/api/stations/:station_id", get(station))
        .route("/api/stations/:station_id/readings", get(readings))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn stations(
    State(service): State<Arc<StationService>>,
    Query(params): Query<ParameterSet>,
) -> Result<Json<Value>> {
    Ok(Json(service.get_stations(&params).await?))
}

async fn station(
    State(service): State<Arc<StationService>>,
    Path(station_id): Path<String>,
) -> Result<Response> {
    match service.find_station(&station_id).await? {
        Some(station) => Ok(Json(station).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Station not found"})),
        )
            .into_response()),
    }
}

async fn readings(
    State(service): State<Arc<StationService>>,
    Path(station_id): Path<String>,
    Query(params): Query<ParameterSet>,
) -> Result<Json<Value>> {
    Ok(Json(service.get_station_readings(&station_id, &params).await?))
}

/// Bad client input is a 400; every other core failure becomes a 502, with
/// the upstream status in the body when there is one.
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        warn!("Request failed: {}", self);
        if let ProxyError::InvalidInput(_) = self {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": self.to_string()})),
            )
                .into_response();
        }
        let body = match &self {
            ProxyError::Upstream { status, .. } => json!({
                "error": self.to_string(),
                "upstream_status": status,
            }),
            _ => json!({"error": self.to_string()}),
        };
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}
