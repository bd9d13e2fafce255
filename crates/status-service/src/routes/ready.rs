//! Readiness probe.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
}

/// GET /ready — the service takes traffic as soon as it is listening.
pub async fn check() -> Json<ReadyResponse> {
    metrics::counter!("status_requests_total", "route" => "/ready").increment(1);
    Json(ReadyResponse { status: "ready" })
}
