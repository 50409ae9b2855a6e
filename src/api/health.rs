//! Health check endpoints

use std::sync::OnceLock;
use std::time::Instant;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Record process start so `/health` can report uptime
pub fn mark_started() {
    STARTED.get_or_init(Instant::now);
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// "OK" or "ready"
    pub status: String,
    /// Seconds since startup
    pub uptime: f64,
    pub version: String,
}

fn health(status: &str) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        uptime: STARTED.get_or_init(Instant::now).elapsed().as_secs_f64(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(health("OK"))
}

/// Readiness check endpoint (checks database connectivity)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = crate::error::ErrorResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    state.services.ping().await?;
    Ok(Json(health("ready")))
}
