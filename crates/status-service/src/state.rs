//! Shared, immutable application state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;

/// State handed to every handler. Cloning is cheap; nothing in here is ever
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    started_at: Instant,
}

impl AppState {
    /// Captures the process start instant now.
    pub fn new(config: Config) -> Self {
        Self::with_start(config, Instant::now())
    }

    /// Builds state with an explicit start instant.
    pub fn with_start(config: Config, started_at: Instant) -> Self {
        Self {
            config: Arc::new(config),
            started_at,
        }
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Time elapsed since the start instant. Never decreases.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
