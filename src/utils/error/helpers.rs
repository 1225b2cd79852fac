//! Helper functions for creating specific error types

use super::types::AdvisorError;

/// Helper functions for creating specific errors
impl AdvisorError {
    pub fn invalid_intake<S: Into<String>>(message: S) -> Self {
        Self::InvalidIntake(message.into())
    }

    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponseFormat(message.into())
    }

    pub fn unclassified<S: Into<String>>(message: S) -> Self {
        Self::Unclassified(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AdvisorError::MissingFields(_) | AdvisorError::InvalidIntake(_)
        )
    }
}
