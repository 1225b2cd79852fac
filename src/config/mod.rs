//! Configuration management for the advisor service
//!
//! Settings come from an optional YAML file, then environment overrides, then
//! command-line flags applied by the binary.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::providers::anthropic::AnthropicConfig;
use crate::utils::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/advisor.yaml";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Anthropic connection settings
    pub anthropic: AnthropicConfig,
    /// Analysis generation settings
    pub analysis: AnalysisConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AdvisorError::config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| AdvisorError::config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if there is one, then apply the process environment
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok()).await
    }

    /// Load the file if there is one, then apply overrides from `lookup`.
    ///
    /// An explicitly requested file must exist; the default path is optional.
    /// Validation runs once, after the overrides.
    pub async fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::read_file(path).await?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::read_file(Path::new(DEFAULT_CONFIG_PATH)).await?
            }
            None => {
                info!("No configuration file found, using defaults");
                Self::default()
            }
        };

        config.apply_env(lookup)?;
        config.validate()?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Apply environment overrides using the given variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("ADVISOR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ADVISOR_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| AdvisorError::config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = lookup("ADVISOR_WORKERS") {
            self.server.workers = Some(workers.parse().map_err(|e| {
                AdvisorError::config(format!("Invalid workers count: {}", e))
            })?);
        }
        if let Some(path) = lookup("ADVISOR_CATALOG_PATH") {
            self.analysis.catalog_path = Some(path);
        }
        if let Some(model) = lookup("ANTHROPIC_MODEL") {
            self.analysis.model = model;
        }
        if let Some(max_tokens) = lookup("ANTHROPIC_MAX_TOKENS") {
            self.analysis.max_tokens = max_tokens
                .parse()
                .map_err(|e| AdvisorError::config(format!("Invalid max tokens: {}", e)))?;
        }
        if let Some(json) = lookup("ADVISOR_LOG_JSON") {
            self.logging.json = matches!(json.as_str(), "1" | "true" | "yes");
        }

        self.anthropic.apply_env(&lookup);
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| AdvisorError::config(format!("Server config error: {}", e)))?;
        self.anthropic
            .validate()
            .map_err(|e| AdvisorError::config(format!("Anthropic config error: {}", e)))?;
        self.analysis
            .validate()
            .map_err(|e| AdvisorError::config(format!("Analysis config error: {}", e)))?;
        self.logging
            .validate()
            .map_err(|e| AdvisorError::config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AdvisorError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
