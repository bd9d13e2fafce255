//! Service identity endpoint.

use axum::Json;
use axum::extract::State;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::config::Config;
use crate::state::AppState;

/// Local time, microsecond precision, no offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
}

impl InfoResponse {
    pub fn new(config: &Config, now: NaiveDateTime) -> Self {
        Self {
            message: config.greeting.clone(),
            version: config.app_version.clone(),
            environment: config.environment.clone(),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// GET / — returns greeting, version, environment and current local time.
pub async fn index(State(state): State<AppState>) -> Json<InfoResponse> {
    metrics::counter!("status_requests_total", "route" => "/").increment(1);
    Json(InfoResponse::new(&state.config, Local::now().naive_local()))
}
