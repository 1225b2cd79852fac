//! Assessment analysis endpoint

use crate::server::state::AppState;
use crate::server::types::AnalyzeResponse;
use crate::utils::error::AdvisorError;
use crate::utils::generate_request_id;
use actix_web::{HttpResponse, web};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};

/// Configure assessment routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/analyze", web::post().to(analyze));
}

/// Analyse one wizard submission.
///
/// The body is taken untyped so that absent sections can be reported by name
/// before any field-level decoding happens.
pub async fn analyze(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AdvisorError> {
    let request_id = generate_request_id();
    let span = info_span!("analyze", request_id = %request_id);

    async move {
        info!("Assessment analysis requested");

        let analysis = state.service.analyze(&body).await.inspect_err(|e| {
            if e.is_client_error() {
                warn!(error = %e, "Rejected assessment request");
            } else {
                error!(error = %e, "Assessment analysis failed");
            }
        })?;

        Ok(HttpResponse::Ok().json(AnalyzeResponse::success(analysis)))
    }
    .instrument(span)
    .await
}
