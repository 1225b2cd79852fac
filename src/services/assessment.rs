//! Assessment analysis service
//!
//! Runs one wizard submission through validation, prompting, generation,
//! parsing and hydration.

use crate::config::AnalysisConfig;
use crate::core::analysis::{AnalysisResult, hydrate, parse_analysis};
use crate::core::catalog::ProductCatalog;
use crate::core::intake::{AnalyzeRequest, validate_intake};
use crate::core::prompt::PromptBuilder;
use crate::core::providers::{GenerationRequest, TextGenerator};
use crate::utils::error::{AdvisorError, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Stateless analysis pipeline over shared read-only collaborators
#[derive(Clone)]
pub struct AssessmentService {
    catalog: Arc<ProductCatalog>,
    generator: Arc<dyn TextGenerator>,
    prompts: PromptBuilder,
    settings: AnalysisConfig,
}

impl AssessmentService {
    pub fn new(
        catalog: Arc<ProductCatalog>,
        generator: Arc<dyn TextGenerator>,
        settings: AnalysisConfig,
    ) -> Self {
        let prompts = PromptBuilder::new(&catalog);
        Self {
            catalog,
            generator,
            prompts,
            settings,
        }
    }

    /// Product catalog used for prompting and hydration
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Whether the text generator has a credential
    pub fn is_configured(&self) -> bool {
        self.generator.is_configured()
    }

    /// Analyse an untyped request body
    pub async fn analyze(&self, payload: &Value) -> Result<AnalysisResult> {
        let request = validate_intake(payload)?;
        self.analyze_request(&request).await
    }

    /// Analyse an already validated intake
    pub async fn analyze_request(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        let prompt = self.prompts.build(request);
        debug!(
            prompt_chars = prompt.user.len(),
            model = %self.settings.model,
            "Built assessment prompt"
        );

        let response = self
            .generator
            .generate(GenerationRequest {
                model: self.settings.model.clone(),
                max_tokens: self.settings.max_tokens,
                system: prompt.system,
                user: prompt.user,
            })
            .await?;

        if let Some(usage) = &response.usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Generation finished"
            );
        }

        let text = response.first_text().ok_or_else(|| {
            warn!(
                provider = self.generator.name(),
                blocks = response.content.len(),
                "Model reply contained no text block"
            );
            AdvisorError::NoTextResponse
        })?;

        let payload = parse_analysis(text)?;
        let result = hydrate(payload, &self.catalog);

        info!(
            recommendations = result.recommendations.len(),
            "Assessment analysis completed"
        );
        Ok(result)
    }
}
