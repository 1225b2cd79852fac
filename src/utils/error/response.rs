//! HTTP response handling for errors

use super::types::AdvisorError;
use crate::server::types::AnalyzeResponse;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

const GENERIC_ANALYSIS_FAILURE: &str = "Failed to generate analysis";

impl AdvisorError {
    /// Message that is safe to show to the client.
    ///
    /// Upstream bodies, raw model output and internal paths never leave the
    /// process; they are logged where the error is raised instead.
    pub fn client_message(&self) -> String {
        match self {
            AdvisorError::MissingFields(_)
            | AdvisorError::InvalidIntake(_)
            | AdvisorError::NotFound(_) => self.to_string(),
            AdvisorError::ServiceNotConfigured => "AI service not configured".to_string(),
            AdvisorError::UpstreamAuthFailure(_) => {
                "AI service authentication failed".to_string()
            }
            AdvisorError::UpstreamRateLimited { .. } => {
                "AI service is busy. Please try again later.".to_string()
            }
            AdvisorError::NoTextResponse => GENERIC_ANALYSIS_FAILURE.to_string(),
            AdvisorError::InvalidResponseFormat(_) => {
                "Failed to parse analysis results".to_string()
            }
            AdvisorError::Unclassified(message) if !message.trim().is_empty() => message.clone(),
            AdvisorError::Unclassified(_) => GENERIC_ANALYSIS_FAILURE.to_string(),
            AdvisorError::Config(_)
            | AdvisorError::Serialization(_)
            | AdvisorError::Yaml(_)
            | AdvisorError::Io(_) => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for AdvisorError {
    fn status_code(&self) -> StatusCode {
        match self {
            AdvisorError::MissingFields(_) | AdvisorError::InvalidIntake(_) => {
                StatusCode::BAD_REQUEST
            }
            AdvisorError::UpstreamRateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AdvisorError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        if let AdvisorError::UpstreamRateLimited {
            retry_after: Some(seconds),
            ..
        } = self
        {
            builder.insert_header(("Retry-After", seconds.to_string()));
        }

        builder.json(AnalyzeResponse::failure(self.client_message()))
    }
}
