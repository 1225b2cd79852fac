//! Response bodies served by the HTTP layer

use crate::core::analysis::AnalysisResult;
use crate::core::catalog::ProductCatalogEntry;
use serde::{Deserialize, Serialize};

/// Envelope returned by the analysis endpoint and by every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Hydrated analysis (if successful)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
    /// Error message (if failed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    pub fn success(analysis: AnalysisResult) -> Self {
        Self {
            success: true,
            analysis: Some(analysis),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            analysis: None,
            error: Some(message.into()),
        }
    }
}

/// Service liveness report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub git_hash: String,
    /// Whether an AI credential is present
    pub ai_configured: bool,
}

/// Catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub count: usize,
    pub products: Vec<ProductCatalogEntry>,
}

/// Single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: ProductCatalogEntry,
}
