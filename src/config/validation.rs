//! Configuration validation

use super::models::*;

pub use crate::utils::validation::Validate;

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count must be greater than 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.allowed_origins.iter().any(|origin| origin.trim().is_empty()) {
            return Err("CORS origins cannot be blank".to_string());
        }
        Ok(())
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Analysis model cannot be empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err("Analysis max_tokens must be greater than 0".to_string());
        }

        if let Some(path) = &self.catalog_path {
            if path.trim().is_empty() {
                return Err("Catalog path cannot be blank".to_string());
            }
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
