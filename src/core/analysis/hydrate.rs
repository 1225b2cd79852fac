//! Recommendation hydration against the product catalog

use super::payload::{AnalysisPayload, RecommendationPayload};
use crate::core::catalog::{ProductCatalog, ProductCatalogEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// A recommendation carrying its full product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecommendation {
    /// Catalog entry, or a placeholder when the id was unknown
    pub product: ProductCatalogEntry,
    /// Identifier exactly as the model supplied it
    pub product_id: String,
    pub rank: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_impact: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The per-request report returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub key_findings: Vec<String>,
    /// In the order the model returned them
    pub recommendations: Vec<ProductRecommendation>,
    pub next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_savings: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Attach catalog records to every recommendation.
///
/// Unknown identifiers get [`ProductCatalogEntry::placeholder`] and a warning.
/// Order and length are preserved; a missing rank becomes the 1-based position.
pub fn hydrate(payload: AnalysisPayload, catalog: &ProductCatalog) -> AnalysisResult {
    let recommendations = payload
        .recommendations
        .into_iter()
        .enumerate()
        .map(|(position, recommendation)| hydrate_one(position, recommendation, catalog))
        .collect();

    AnalysisResult {
        summary: payload.summary,
        key_findings: payload.key_findings,
        recommendations,
        next_steps: payload.next_steps,
        estimated_savings: payload.estimated_savings,
        generated_at: Utc::now(),
    }
}

fn hydrate_one(
    position: usize,
    recommendation: RecommendationPayload,
    catalog: &ProductCatalog,
) -> ProductRecommendation {
    let product = match catalog.get(&recommendation.product_id) {
        Some(entry) => entry.clone(),
        None => {
            warn!(
                product_id = %recommendation.product_id,
                position,
                "Model recommended a product that is not in the catalog"
            );
            ProductCatalogEntry::placeholder(&recommendation.product_id)
        }
    };

    // `product` is ours; a model-supplied key of that name would collide on output
    let mut extra = recommendation.extra;
    extra.remove("product");

    ProductRecommendation {
        product,
        rank: recommendation.rank.unwrap_or(position as u32 + 1),
        product_id: recommendation.product_id,
        quantity: recommendation.quantity,
        rationale: recommendation.rationale,
        cost_impact: recommendation.cost_impact,
        extra,
    }
}
