//! Error taxonomy for text generation providers

use thiserror::Error;

/// Errors raised while talking to an external text generation service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("{provider} is not configured: no API key available")]
    NotConfigured { provider: &'static str },

    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("{provider} API error ({status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Request to {provider} timed out: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Failed to decode {provider} response: {message}")]
    Serialization {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn not_configured(provider: &'static str) -> Self {
        Self::NotConfigured { provider }
    }

    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        let message = match retry_after {
            Some(seconds) => format!("retry after {} seconds", seconds),
            None => "too many requests".to_string(),
        };
        Self::RateLimit {
            provider,
            message,
            retry_after,
        }
    }

    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    pub fn serialization(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            provider,
            message: message.into(),
        }
    }

    /// Name of the provider that raised the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::NotConfigured { provider }
            | Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Serialization { provider, .. } => provider,
        }
    }
}
