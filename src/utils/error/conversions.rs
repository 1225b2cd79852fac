//! Type conversions for AdvisorError

use super::types::AdvisorError;
use crate::core::providers::ProviderError;

// Conversion from the text generator's error taxonomy
impl From<ProviderError> for AdvisorError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured { .. } => AdvisorError::ServiceNotConfigured,
            ProviderError::Authentication { message, .. } => {
                AdvisorError::UpstreamAuthFailure(message)
            }
            ProviderError::RateLimit {
                message,
                retry_after,
                ..
            } => AdvisorError::UpstreamRateLimited {
                message,
                retry_after,
            },
            other => AdvisorError::Unclassified(other.to_string()),
        }
    }
}
