//! HTTP route handlers

use crate::server::state::AppState;
use crate::server::types::HealthResponse;
use actix_web::{HttpResponse, web};

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: crate::VERSION.to_string(),
        git_hash: crate::BuildInfo::current().git_hash.to_string(),
        ai_configured: state.service.is_configured(),
    })
}
