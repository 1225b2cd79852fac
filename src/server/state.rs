//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::AssessmentService;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup, so handlers never lock.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Analysis pipeline
    pub service: Arc<AssessmentService>,
}

impl AppState {
    pub fn new(config: Config, service: AssessmentService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
