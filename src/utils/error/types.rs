//! Error types for the advisor service

use thiserror::Error;

/// Result type alias for the advisor service
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Main error type for the advisor service
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// One or more required intake sections were absent or null
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// An intake section was present but failed its step-level checks
    #[error("Invalid request: {0}")]
    InvalidIntake(String),

    /// No API credential is configured for the AI service
    #[error("AI service not configured")]
    ServiceNotConfigured,

    /// The AI service rejected the configured credential
    #[error("AI service authentication failed: {0}")]
    UpstreamAuthFailure(String),

    /// The AI service asked us to back off
    #[error("AI service rate limited: {message}")]
    UpstreamRateLimited {
        message: String,
        retry_after: Option<u64>,
    },

    /// The model reply carried no text content block
    #[error("AI service returned no text content")]
    NoTextResponse,

    /// The model reply could not be turned into an analysis
    #[error("Invalid response format: {0}")]
    InvalidResponseFormat(String),

    /// Any other failure along the analysis pipeline
    #[error("{0}")]
    Unclassified(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
