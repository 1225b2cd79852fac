//! Analysis configuration

use crate::core::providers::anthropic::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// Settings for generating assessment analyses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Model identifier sent to the provider
    #[serde(default = "default_model")]
    pub model: String,
    /// Output token budget per analysis
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// JSON product table to load instead of the built-in one
    #[serde(default)]
    pub catalog_path: Option<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            catalog_path: None,
        }
    }
}
