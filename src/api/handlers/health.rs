use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::api::dto::{HealthResponse, InfoResponse, ProbeResponse};
use crate::api::state::AppState;

const STATUS_UP: &str = "UP";

/// `GET /api/health`
#[allow(clippy::unused_async)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_UP.to_string(),
        timestamp: Utc::now(),
        service: state.config.service_name.clone(),
        version: state.config.version.clone(),
    })
}

/// `GET /api/info`
#[allow(clippy::unused_async)]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        application: state.config.application_name.clone(),
        description: state.config.description.clone(),
        version: state.config.version.clone(),
    })
}

/// `GET /actuator/health`, the container liveness probe.
#[allow(clippy::unused_async)]
pub async fn liveness() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: STATUS_UP.to_string(),
    })
}
