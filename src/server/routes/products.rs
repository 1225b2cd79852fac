//! Read-only catalog endpoints

use crate::server::state::AppState;
use crate::server::types::{ProductListResponse, ProductResponse};
use crate::utils::error::AdvisorError;
use actix_web::{HttpResponse, web};
use tracing::debug;

/// Configure product routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/products", web::get().to(list_products))
        .route("/products/{product_id}", web::get().to(get_product));
}

/// List every catalog entry in catalog order
pub async fn list_products(state: web::Data<AppState>) -> HttpResponse {
    let products = state.service.catalog().entries().to_vec();
    HttpResponse::Ok().json(ProductListResponse {
        success: true,
        count: products.len(),
        products,
    })
}

pub async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AdvisorError> {
    let product_id = path.into_inner();
    debug!("Product lookup: {}", product_id);

    let product = state
        .service
        .catalog()
        .get(&product_id)
        .cloned()
        .ok_or_else(|| AdvisorError::not_found(format!("product {}", product_id)))?;

    Ok(HttpResponse::Ok().json(ProductResponse {
        success: true,
        product,
    }))
}
