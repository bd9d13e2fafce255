//! Liveness probe.

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Seconds since process start.
    pub uptime: f64,
}

impl HealthResponse {
    pub fn from_uptime(uptime: Duration) -> Self {
        Self {
            status: "healthy",
            uptime: uptime.as_secs_f64(),
        }
    }
}

/// GET /health — reports healthy whenever the process can answer at all.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    metrics::counter!("status_requests_total", "route" => "/health").increment(1);
    Json(HealthResponse::from_uptime(state.uptime()))
}
