//! HTTP route modules

pub mod assessment;
pub mod products;

use crate::utils::error::AdvisorError;
use actix_web::web;

/// JSON extractor settings for request bodies.
///
/// Oversized or malformed bodies surface as intake errors in the usual envelope.
pub fn json_config(max_body_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_body_size)
        .error_handler(|err, _req| AdvisorError::invalid_intake(err.to_string()).into())
}

/// Configure all API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(assessment::configure_routes)
            .configure(products::configure_routes),
    );
}
