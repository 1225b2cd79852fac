//! Typed shape of the model's analysis reply

use crate::utils::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One recommendation as the model wrote it, referencing a product by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPayload {
    pub product_id: String,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub cost_impact: Option<String>,
    /// Any further keys the model supplied, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The analysis object the system instruction asks for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub summary: String,
    pub recommendations: Vec<RecommendationPayload>,
    #[serde(default)]
    pub key_findings: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub estimated_savings: Option<String>,
}

impl AnalysisPayload {
    /// Structural validation of a parsed reply
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(AdvisorError::invalid_response(
                "analysis must be a JSON object",
            ));
        }

        let payload: Self = serde_json::from_value(value)
            .map_err(|e| AdvisorError::invalid_response(e.to_string()))?;
        payload.check()?;
        Ok(payload)
    }

    fn check(&self) -> Result<()> {
        for (position, recommendation) in self.recommendations.iter().enumerate() {
            if recommendation.product_id.trim().is_empty() {
                return Err(AdvisorError::invalid_response(format!(
                    "recommendations[{}].productId is empty",
                    position
                )));
            }
            if recommendation.rank == Some(0) {
                return Err(AdvisorError::invalid_response(format!(
                    "recommendations[{}].rank must be at least 1",
                    position
                )));
            }
        }
        Ok(())
    }
}
