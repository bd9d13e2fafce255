//! Route handlers. Each probe handler is independent of the others; the only
//! thing they share is the immutable [`AppState`](crate::state::AppState).

pub mod health;
pub mod metrics;
pub mod ready;
pub mod root;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no route matched");
    ApiError::NotFound(format!("not found: {}", uri.path()))
}
